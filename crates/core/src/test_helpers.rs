//! # テスト用共通ヘルパー
//!
//! モックHTTPサーバーと、呼び出しを記録するマウント。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header, StatusCode};
use infoboot_types::{InitConfig, MountId};

use crate::error::MountError;
use crate::mount::Mount;

/// テスト用モックHTTPサーバーを起動し、指定パスで指定ステータス・本文を返す。
///
/// 戻り値はポート番号と、受信したリクエスト数のカウンタ。
pub async fn start_mock_server(
    path: &str,
    status: u16,
    content_type: &'static str,
    body: impl Into<Bytes>,
) -> (u16, Arc<AtomicUsize>) {
    let body: Bytes = body.into();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let status = StatusCode::from_u16(status).unwrap();

    let app = axum::Router::new().route(
        path,
        axum::routing::get(move || {
            let counter = counter.clone();
            let body = body.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (status, [(header::CONTENT_TYPE, content_type)], body)
            }
        }),
    );

    (serve(app).await, hits)
}

/// `delay` だけ待ってから200を返すモックHTTPサーバーを起動する。
pub async fn start_slow_server(path: &str, delay: Duration) -> u16 {
    let app = axum::Router::new().route(
        path,
        axum::routing::get(move || async move {
            tokio::time::sleep(delay).await;
            "{}"
        }),
    );
    serve(app).await
}

async fn serve(app: axum::Router) -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    port
}

/// 接続を受け付けないポートを返す（通信失敗のテスト用）。
pub async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// 初期化呼び出しを記録するマウント。
#[derive(Default)]
pub struct RecordingMount {
    pub calls: Mutex<Vec<(MountId, InitConfig)>>,
}

impl RecordingMount {
    pub fn calls(&self) -> Vec<(MountId, InitConfig)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Mount for RecordingMount {
    fn initialize(&self, mount_id: &MountId, config: InitConfig) -> Result<(), MountError> {
        self.calls.lock().unwrap().push((mount_id.clone(), config));
        Ok(())
    }
}

/// 常にMissingMountを返すマウント（マウント先要素が存在しない文書）。
pub struct MissingMount;

impl Mount for MissingMount {
    fn initialize(&self, mount_id: &MountId, _config: InitConfig) -> Result<(), MountError> {
        Err(MountError::MissingMount(mount_id.to_string()))
    }
}
