//! 送信ペイロードと解析結果の型定義
//!
//! Webhookとの境界で使う型:
//! - UploadPayload: POSTするJSONボディ
//! - ErrorPayload: 失敗時に保持するメッセージ
//! - AnalysisOutcome: 成功(不透明なJSON) / 失敗のタグ付き結果

use serde::{Deserialize, Serialize};

/// WebhookへPOSTするJSONボディ
///
/// `image` はbase64 Data URL文字列をそのまま入れる
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPayload {
    pub image: String,
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
}

/// 失敗時のペイロード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 解析結果: 成功時はエンドポイントが返した任意のJSON、失敗時はメッセージ
///
/// レスポンスのスキーマはこのシステムからは不透明で、そのまま表示するだけ
pub type AnalysisOutcome = std::result::Result<serde_json::Value, ErrorPayload>;
