//! Webhook設定
//!
//! 送信先URLはハードコードせず設定として注入する。
//! このビルドでは未設定で、デプロイ時（または設定パネル）に与えられる。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookConfig {
    pub endpoint_url: String,
}

impl WebhookConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.endpoint_url.trim().is_empty()
    }
}
