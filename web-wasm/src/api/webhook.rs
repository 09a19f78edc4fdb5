//! Webhook連携
//!
//! エンコード済みの画像ペイロードを設定されたエンドポイントへPOSTし、
//! レスポンスのJSONボディをそのまま返す。スキーマは解釈しない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use image_analysis_common::UploadPayload;

/// 画像ペイロードをWebhookへPOSTする
///
/// # Arguments
/// * `endpoint_url` - 送信先URL（設定パネルで注入される）
/// * `payload` - `{image, fileName, fileSize, fileType}` のJSONボディ
///
/// # Returns
/// 2xx時はレスポンスボディのJSON値。非2xxと転送エラーは一律に失敗。
pub async fn post_image(
    endpoint_url: &str,
    payload: &UploadPayload,
) -> Result<serde_json::Value, JsValue> {
    if endpoint_url.trim().is_empty() {
        return Err(JsValue::from_str("Webhook URL is not configured"));
    }

    let body = serde_json::to_string(payload)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(endpoint_url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&status_error_message(
            resp.status(),
            &resp.status_text(),
        )));
    }

    let json = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// fetchのエラー値を表示用メッセージへ変換
pub fn error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn status_error_message(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        format!("Request failed with status {} {}", status, status_text)
    }
}
