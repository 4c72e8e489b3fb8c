//! # ブートストラップローダー
//!
//! `load`: リソースを1回取得し、200の場合のみ本文テキストを返す。
//! `bootstrap`: `load` → JSONパース → `Mount::initialize` を1回だけ行う。

use infoboot_types::{InitConfig, MountId, DEFAULT_RESOURCE_PATH, STATUS_OK};

use crate::error::{BootstrapError, LoadError};
use crate::fetcher::{FetchResponse, Fetcher, ResourceRequest};
use crate::mount::Mount;


/// ブートストラップのオプション。
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// 取得対象リソースの相対パス
    pub resource_path: String,
    /// マウント先のID
    pub mount_id: MountId,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            mount_id: MountId::default(),
        }
    }
}

/// リソースを1回取得し、本文をテキストとして返す。
///
/// ステータスがちょうど200の場合のみ成功とする。本文のデコードは失敗しない。
/// 200以外のステータスと通信失敗はいずれも `Err` で返る。
pub async fn load<F>(fetcher: &F, request: ResourceRequest) -> Result<String, LoadError>
where
    F: Fetcher + ?Sized,
{
    let FetchResponse {
        status,
        body,
        source,
    } = fetcher.fetch(request).await?;

    if status != STATUS_OK {
        tracing::debug!(uri = %source, status, "200以外のステータスで完了");
        return Err(LoadError::Status {
            status,
            uri: source,
        });
    }

    Ok(decode_text(&body))
}

/// UTF-8 BOM
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 本文をUTF-8テキストとして取り出す。
///
/// 先頭のBOMは取り除き、不正なバイト列はU+FFFDに置き換える（ブラウザの
/// `responseText` と同じ扱い）。
fn decode_text(body: &[u8]) -> String {
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    String::from_utf8_lossy(body).into_owned()
}

/// リソースを取得し、外部UIランタイムを初期化する。
///
/// 本文がJSONとして不正な場合、マウント先に到達する前に
/// `BootstrapError::Parse` で終わる。
pub async fn bootstrap<F, M>(
    fetcher: &F,
    mount: &M,
    options: &BootstrapOptions,
) -> Result<(), BootstrapError>
where
    F: Fetcher + ?Sized,
    M: Mount + ?Sized,
{
    let request = ResourceRequest::get(options.resource_path.as_str());
    let text = load(fetcher, request).await?;

    let info: serde_json::Value = serde_json::from_str(&text)?;
    tracing::debug!(path = %options.resource_path, "リソースをパースしました");

    mount.initialize(&options.mount_id, InitConfig::new(info))?;
    Ok(())
}
