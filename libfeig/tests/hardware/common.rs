#![cfg(feature = "serial")]

//! 共通: 実機テスト用ヘルパー
//!
//! `FEIG_PORT` (必要なら `FEIG_BAUD`) でリーダーのシリアルポートを指定する。
//! 未設定の環境（CI 等）では `Ok(None)` を返す。

use std::env;

use libfeig::transport::SerialTransport;
use libfeig::{Reader, ReaderSettings, Result, SerialSettings};

pub fn hardware_settings() -> Option<ReaderSettings> {
    let port = env::var("FEIG_PORT").ok()?;
    let baud = env::var("FEIG_BAUD")
        .ok()
        .and_then(|b| b.parse().ok())
        .unwrap_or(38400);
    Some(ReaderSettings::default().with_serial(SerialSettings::new(port, baud)))
}

/// Open the reader named by the environment.
///
/// - Ok(Some(reader)) : ポートを開けた
/// - Ok(None) : `FEIG_PORT` 未設定
/// - Err(e) : ポートを開けなかった
pub async fn open_reader() -> Result<Option<Reader<SerialTransport>>> {
    let Some(settings) = hardware_settings() else {
        return Ok(None);
    };
    let reader = Reader::<SerialTransport>::serial(&settings);
    reader.open().await?;
    Ok(Some(reader))
}
