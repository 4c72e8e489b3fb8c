//! # ファイルシステムフェッチャー
//!
//! ローカルディレクトリを静的サーバーのルートに見立てて読み込む。
//! 開発・テスト環境用。

use std::path::{Component, Path, PathBuf};

use super::{FetchResponse, Fetcher, ResourceRequest};
use crate::error::LoadError;

/// ローカルディレクトリからリソースを読み込むフェッチャー。
///
/// ディレクトリ構成: `{root}/{path}`。
/// ファイルが存在しない場合は静的サーバーと同じく404を返す。
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    /// 新しいFileFetcherを作成する。
    ///
    /// # 引数
    /// - `root`: 静的リソースのルートディレクトリ
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, LoadError> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(LoadError::InvalidUrl(format!(
                "ルート外を指すパスは読み込めません: {path}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait::async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, request: ResourceRequest) -> Result<FetchResponse, LoadError> {
        let path = self.resolve(request.path())?;
        let source = format!("file://{}", path.display());
        tracing::debug!(path = %path.display(), "リソースを読み込み中");

        match tokio::fs::read(&path).await {
            Ok(body) => Ok(FetchResponse {
                status: 200,
                body,
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FetchResponse {
                status: 404,
                body: Vec::new(),
                source,
            }),
            Err(e) => Err(LoadError::Transport(format!(
                "リソースの読み込みに失敗 ({source}): {e}"
            ))),
        }
    }
}
