//! # infoboot 共有型定義
//!
//! ブートストラップローダーと外部UIランタイムの間で受け渡されるデータ構造。
//!
//! ## 受け渡し形式
//! - `InitConfig`: `{"info": <取得したJSON>}`
//! - `MountId`: マウント先要素の識別子（既定値 `"main"`）

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// 定数
// ---------------------------------------------------------------------------

/// 取得対象リソースの既定パス（ページのオリジンからの相対パス）。
pub const DEFAULT_RESOURCE_PATH: &str = "static/info.json";

/// 外部UIランタイムのマウント先の既定ID。
pub const DEFAULT_MOUNT_ID: &str = "main";

/// サーバーの宣言に関わらず、レスポンスをこのMIMEタイプとして解釈する。
pub const JSON_MIME: &str = "application/json";

/// 成功とみなすHTTPステータスコード。2xx全般ではなく200のみ。
pub const STATUS_OK: u16 = 200;

// ---------------------------------------------------------------------------
// 初期化設定
// ---------------------------------------------------------------------------

/// 外部UIランタイムの初期化エントリポイントに渡す設定。
///
/// フィールドは `info` のみ。中身のスキーマはUIランタイム側が所有するため、
/// ここでは任意のJSON値として扱う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitConfig {
    /// 取得・パース済みのJSONペイロード
    pub info: serde_json::Value,
}

impl InitConfig {
    /// パース済みペイロードから初期化設定を構築する。所有権はここで移る。
    pub fn new(info: serde_json::Value) -> Self {
        Self { info }
    }
}

/// UIランタイムの初期化呼び出し1回分。
///
/// `{"node": "<mount_id>", "flags": {"info": ...}}` の形でシリアライズされる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitCall {
    /// マウント先要素のID
    pub node: MountId,
    /// 初期化設定
    pub flags: InitConfig,
}

// ---------------------------------------------------------------------------
// マウントID
// ---------------------------------------------------------------------------

/// マウント先要素の識別子。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MountId(String);

impl MountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MountId {
    fn default() -> Self {
        Self::new(DEFAULT_MOUNT_ID)
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// ---------------------------------------------------------------------------
// テスト
// ---------------------------------------------------------------------------
