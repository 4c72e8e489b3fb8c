//! # infoboot
//!
//! 静的JSONリソース（既定: `static/info.json`）を1回取得し、
//! UIランタイムの初期化呼び出し `{"node": "main", "flags": {"info": ...}}` を書き出す。
//!
//! ## 起動シーケンス
//! 1. 引数と環境変数 `INFOBOOT_*` から設定を読み込む
//! 2. フェッチャー（HTTP / ローカルディレクトリ）を構築する
//! 3. リソースを取得・パースし、初期化呼び出しを組み立てる
//! 4. 成功した場合のみ出力先に書き出す
//!
//! 失敗時はエラーをログに出して非0で終了し、出力先には触れない。
//! `--quiet-transport-failures` 指定時は、200以外のステータスと通信失敗のみ
//! 何もせず正常終了する。

mod config;
mod output;

use clap::Parser;
use infoboot_core::{bootstrap, BootstrapError, WriterMount};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 標準出力は初期化呼び出し専用のため、ログは標準エラーへ
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::parse();
    run(&config).await
}

/// ブートストラップを1回実行し、成功時のみ初期化呼び出しを出力する。
async fn run(config: &CliConfig) -> anyhow::Result<()> {
    let options = config.bootstrap_options();
    let fetcher = config.build_fetcher()?;
    let mount = WriterMount::new(Vec::new());

    tracing::info!(
        path = %options.resource_path,
        mount_id = %options.mount_id,
        "ブートストラップを開始します"
    );

    match bootstrap(fetcher.as_ref(), &mount, &options).await {
        Ok(()) => {}
        Err(e) if exits_quietly(&e, config.quiet_transport_failures) => {
            tracing::debug!(error = %e, "取得に失敗しましたが、指定により何もせず終了します");
            return Ok(());
        }
        Err(e) => {
            tracing::error!(error = %e, "ブートストラップに失敗しました");
            return Err(e.into());
        }
    }

    output::emit(config.out.as_deref(), &mount.into_inner())
}

/// 失敗を黙って正常終了扱いにするかどうか。
/// `quiet` 指定時の、200以外のステータスと通信失敗のみが該当する。
fn exits_quietly(err: &BootstrapError, quiet: bool) -> bool {
    quiet && err.is_silent_in_browser()
}
