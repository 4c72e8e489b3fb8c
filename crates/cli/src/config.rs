//! # CLI設定
//!
//! コマンドライン引数と環境変数 `INFOBOOT_*` からの設定読み込み。
//! 引数が指定されていればそちらを優先する。

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use infoboot_core::{BootstrapOptions, Fetcher, FileFetcher, HttpFetcher};
use infoboot_types::{MountId, DEFAULT_MOUNT_ID, DEFAULT_RESOURCE_PATH};

/// `--base-url` / `INFOBOOT_BASE_URL` 未指定時のベースURL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// CLIの設定。
#[derive(Parser, Debug, Clone)]
#[command(name = "infoboot")]
#[command(about = "static/info.json を取得し、UIランタイムの初期化呼び出しを書き出す", long_about = None)]
#[command(version)]
pub struct CliConfig {
    /// 相対パスの解決元となるURL（ページのURLに相当）
    #[arg(long, env = "INFOBOOT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// 指定された場合、HTTPではなくこのディレクトリから読み込む
    #[arg(long, env = "INFOBOOT_STATIC_ROOT")]
    pub static_root: Option<PathBuf>,
    /// 取得対象リソースの相対パス
    #[arg(long = "path", env = "INFOBOOT_RESOURCE_PATH", default_value = DEFAULT_RESOURCE_PATH)]
    pub resource_path: String,
    /// UIランタイムに渡すマウント先のID
    #[arg(long = "mount", env = "INFOBOOT_MOUNT_ID", default_value = DEFAULT_MOUNT_ID)]
    pub mount_id: String,
    /// 初期化呼び出しを標準出力ではなくこのファイルに書き出す（成功時のみ置き換える）
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// リクエスト全体のタイムアウト（秒）。未指定の場合は無制限。
    #[arg(long, env = "INFOBOOT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
    /// 200以外のステータスと通信失敗の場合、何も出力せず正常終了する
    #[arg(long)]
    pub quiet_transport_failures: bool,
}

impl CliConfig {
    pub fn bootstrap_options(&self) -> BootstrapOptions {
        BootstrapOptions {
            resource_path: self.resource_path.clone(),
            mount_id: MountId::new(self.mount_id.as_str()),
        }
    }

    /// 設定に応じたフェッチャーを構築する。
    /// `static_root` が指定されていれば `FileFetcher`、それ以外は `HttpFetcher`。
    pub fn build_fetcher(&self) -> anyhow::Result<Box<dyn Fetcher>> {
        if let Some(root) = &self.static_root {
            tracing::info!(static_root = %root.display(), "ローカルディレクトリから読み込みます");
            return Ok(Box::new(FileFetcher::new(root.clone())));
        }

        let base_url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("ベースURLが不正です ({}): {e}", self.base_url))?;
        tracing::info!(base_url = %base_url, "HTTPで取得します");

        let fetcher = match self.timeout_secs {
            Some(secs) => HttpFetcher::with_timeout(base_url, Duration::from_secs(secs))?,
            None => HttpFetcher::new(base_url),
        };
        Ok(Box::new(fetcher))
    }
}
