//! # infoboot Core
//!
//! 静的JSONリソースを1回だけ取得し、外部UIランタイムの初期化エントリポイントへ
//! `{ info: <JSON> }` として引き渡すブートストラップローダー。
//!
//! ## 処理フロー
//! 1. `Fetcher` 経由でリソース（既定: `static/info.json`）をGETする
//! 2. ステータスが200であることを確認し、本文をテキストとして取り出す
//! 3. 本文をJSONとしてパースする
//! 4. `Mount::initialize(mount_id, InitConfig { info })` を1回呼び出す
//!
//! ネットワークとマウント先はいずれもトレイトとして注入する。
//! 失敗は黙殺せず、呼び出し側に `Result` で返す。

pub mod bootstrap;
pub mod error;
pub mod fetcher;
pub mod mount;

#[cfg(test)]
mod test_helpers;

pub use bootstrap::{bootstrap, load, BootstrapOptions};
pub use error::{BootstrapError, LoadError, MountError};
pub use fetcher::{FetchResponse, Fetcher, FileFetcher, HttpFetcher, ResourceRequest};
pub use mount::{Mount, WriterMount};
