//! Data URLユーティリティ
//!
//! "data:image/png;base64,...." 形式の組み立てと分解。
//! プレビュー表示とWebhookペイロードの両方がこの形式を使う。

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};

/// バイト列からData URLを組み立てる
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.strip_prefix("data:")?.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
///
/// # Returns
/// MIMEタイプ（例: "image/jpeg"）、抽出失敗時はNone
pub fn extract_mime_type_from_data_url(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:")?;
    let mime = rest.split(';').next()?;
    if mime.is_empty() {
        None
    } else {
        Some(mime)
    }
}

/// Data URLを元のバイト列へ復元する
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let base64_data = extract_base64_from_data_url(data_url).ok_or(Error::InvalidDataUrl)?;
    Ok(STANDARD.decode(base64_data)?)
}
