//! # infoboot エラー型
//!
//! 取得（`LoadError`）、マウント（`MountError`）、全体（`BootstrapError`）の3層。

/// リソース取得のエラー型。
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// リクエスト先URLの解決に失敗
    #[error("リソースURLが不正です: {0}")]
    InvalidUrl(String),
    /// 通信失敗（接続エラー、中断、I/Oエラー）
    #[error("リソース取得の通信に失敗: {0}")]
    Transport(String),
    /// 200以外のステータスで完了
    #[error("リソース取得でHTTPエラー: ステータス {status} ({uri})")]
    Status {
        /// HTTPステータスコード
        status: u16,
        /// 取得元URI
        uri: String,
    },
}

impl LoadError {
    /// ブラウザ上の読み込みスクリプトであれば何も起きずに終わっていた失敗かどうか。
    ///
    /// 200以外のステータスと通信失敗が該当する。
    pub fn is_silent_in_browser(&self) -> bool {
        matches!(self, LoadError::Transport(_) | LoadError::Status { .. })
    }
}

/// マウント先（外部UIランタイム）のエラー型。
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// 指定されたマウント先が存在しない
    #[error("マウント先が見つかりません: {0:?}")]
    MissingMount(String),
    /// 初期化呼び出しの書き出しに失敗
    #[error("初期化呼び出しの書き出しに失敗: {0}")]
    Io(#[from] std::io::Error),
    /// 初期化設定のシリアライズに失敗
    #[error("初期化設定のシリアライズに失敗: {0}")]
    Serialize(String),
}

/// ブートストラップ全体のエラー型。
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Load(#[from] LoadError),
    /// 本文がJSONとして不正。マウント先には到達しない。
    #[error("JSONのパースに失敗: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Mount(#[from] MountError),
}

impl BootstrapError {
    /// `LoadError::is_silent_in_browser` を参照。
    pub fn is_silent_in_browser(&self) -> bool {
        match self {
            BootstrapError::Load(e) => e.is_silent_in_browser(),
            BootstrapError::Parse(_) | BootstrapError::Mount(_) => false,
        }
    }
}
