//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please select an image first")]
    NoFileSelected,

    #[error("Invalid data URL")]
    InvalidDataUrl,

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Request(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
