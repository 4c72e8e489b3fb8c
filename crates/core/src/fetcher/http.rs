//! # HTTPフェッチャー
//!
//! ベースURL（ページのURLに相当）に対して相対パスを解決し、HTTP GETで取得する。

use std::time::Duration;

use infoboot_types::JSON_MIME;
use reqwest::Url;

use super::{FetchResponse, Fetcher, ResourceRequest};
use crate::error::LoadError;

/// HTTP GETでリソースを取得するフェッチャー。
///
/// URL形式: `base_url.join(path)`。ブラウザがページURLに対して相対URLを
/// 解決するのと同じ規則になる（`http://host/app/` + `static/info.json`
/// → `http://host/app/static/info.json`）。
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpFetcher {
    /// タイムアウトなしのフェッチャーを作成する。
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// リクエスト全体にタイムアウトを設定したフェッチャーを作成する。
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::Transport(format!("HTTPクライアントの構築に失敗: {e}")))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// 相対パスをベースURLに対して解決する。
    pub fn resolve(&self, path: &str) -> Result<Url, LoadError> {
        self.base_url
            .join(path)
            .map_err(|e| LoadError::InvalidUrl(format!("{} + {path}: {e}", self.base_url)))
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: ResourceRequest) -> Result<FetchResponse, LoadError> {
        let url = self.resolve(request.path())?;
        tracing::debug!(url = %url, "リソースを取得中");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LoadError::Transport(format!("HTTP送信失敗 ({url}): {e}")))?;

        let status = response.status().as_u16();

        // MIMEはリクエスト側で固定しているため、サーバーの宣言は記録のみ
        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !content_type.starts_with(JSON_MIME) {
                tracing::debug!(
                    url = %url,
                    content_type,
                    "Content-Typeを無視して{JSON_MIME}として扱います"
                );
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(format!("レスポンス読み取り失敗 ({url}): {e}")))?
            .to_vec();

        Ok(FetchResponse {
            status,
            body,
            source: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ブラウザと同じ規則で相対パスが解決されることを確認
    #[test]
    fn test_resolve_relative_to_page() {
        let fetcher = HttpFetcher::new(Url::parse("http://example.com/app/index.html").unwrap());
        let url = fetcher.resolve("static/info.json").unwrap();
        assert_eq!(url.as_str(), "http://example.com/app/static/info.json");

        let fetcher = HttpFetcher::new(Url::parse("http://example.com/app/").unwrap());
        let url = fetcher.resolve("static/info.json").unwrap();
        assert_eq!(url.as_str(), "http://example.com/app/static/info.json");

        let fetcher = HttpFetcher::new(Url::parse("http://example.com").unwrap());
        let url = fetcher.resolve("static/info.json").unwrap();
        assert_eq!(url.as_str(), "http://example.com/static/info.json");
    }

    #[test]
    fn test_resolve_absolute_path() {
        let fetcher = HttpFetcher::new(Url::parse("http://example.com/app/").unwrap());
        let url = fetcher.resolve("/static/info.json").unwrap();
        assert_eq!(url.as_str(), "http://example.com/static/info.json");
    }
}
