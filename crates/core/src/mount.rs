//! # マウント先（外部UIランタイム）
//!
//! 外部UIランタイムの初期化エントリポイントを `Mount` トレイトとして抽象化する。
//! ランタイム内部の挙動はこのクレートの範囲外。

use std::io::Write;
use std::sync::Mutex;

use infoboot_types::{InitCall, InitConfig, MountId};

use crate::error::MountError;

/// 外部UIランタイムの初期化エントリポイント。
pub trait Mount: Send + Sync {
    /// `mount_id` で示されるマウント先に、`config` でランタイムを初期化する。
    /// 1回のブートストラップにつき1回だけ呼ばれる。
    fn initialize(&self, mount_id: &MountId, config: InitConfig) -> Result<(), MountError>;
}

/// 初期化呼び出しをJSON 1行として書き出すマウント。
///
/// 出力形式: `{"node":"<mount_id>","flags":{"info":...}}`
///
/// ランタイムをプロセス外に置く構成（標準出力をパイプで渡す、
/// フラグファイルを静的ページに埋め込む等）で使用する。
pub struct WriterMount<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterMount<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// 書き出し先を取り出す。
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl WriterMount<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Mount for WriterMount<W> {
    fn initialize(&self, mount_id: &MountId, config: InitConfig) -> Result<(), MountError> {
        if mount_id.as_str().is_empty() {
            return Err(MountError::MissingMount(mount_id.to_string()));
        }

        let call = InitCall {
            node: mount_id.clone(),
            flags: config,
        };
        let line = serde_json::to_string(&call)
            .map_err(|e| MountError::Serialize(e.to_string()))?;

        let mut writer = match self.writer.lock() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        };
        writeln!(writer, "{line}")?;
        writer.flush()?;

        tracing::info!(mount_id = %mount_id, "UIランタイムを初期化しました");
        Ok(())
    }
}
