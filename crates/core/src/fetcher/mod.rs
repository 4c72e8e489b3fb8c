//! # リソースフェッチャー
//!
//! 静的リソースの取得を抽象化する。
//!
//! ## フェッチャー実装
//! - `HttpFetcher`: ベースURLからの相対パスでHTTP GETする（本番用）
//! - `FileFetcher`: ローカルディレクトリから読み込む（開発・テスト用）

pub mod file;
pub mod http;

pub use file::FileFetcher;
pub use http::HttpFetcher;

use crate::error::LoadError;

/// 1回分の取得リクエスト。
///
/// `Fetcher::fetch` に値で渡され、消費される。再利用はできない。
/// レスポンスはサーバーのContent-Typeに関わらず常にJSON（`JSON_MIME`）として解釈する。
#[derive(Debug)]
pub struct ResourceRequest {
    path: String,
}

impl ResourceRequest {
    /// 相対パスに対するGETリクエストを作成する。
    pub fn get(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// 取得対象の相対パス
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// 取得結果。ステータスの判定は呼び出し側（`load`）で行う。
#[derive(Debug)]
pub struct FetchResponse {
    /// HTTPステータスコード
    pub status: u16,
    /// レスポンス本文
    pub body: Vec<u8>,
    /// 解決済みの取得元URI（ログ・エラー表示用）
    pub source: String,
}

/// リソースを取得するトレイト。
///
/// 1回の呼び出しにつき外部への読み込みは1回だけ行い、結果は1回だけ返す。
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// リクエストを実行する。200以外のステータスもエラーにせず `FetchResponse` で返す。
    async fn fetch(&self, request: ResourceRequest) -> Result<FetchResponse, LoadError>;
}
