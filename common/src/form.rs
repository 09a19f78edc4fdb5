//! アップロードフォームの状態管理
//!
//! ファイル選択 → 送信 → 結果表示 のワークフローを純粋な状態遷移として持つ。
//! 非同期の実処理（ファイル読み込み・POST）はweb-wasm側にあり、
//! 結果だけが `settle` で戻ってくる。遷移:
//! - Idle → Loading（ファイルありで送信開始）
//! - Loading → Succeeded（レスポンス受信）
//! - Loading → Failed（エラー）
//! - 任意の状態 → Idle（リセット）

use crate::error::{Error, Result};
use crate::types::{AnalysisOutcome, UploadPayload};

/// 選択中の画像ファイル
///
/// `data_url` は選択時に一度だけ読み込んだbase64 Data URL。
/// プレビューと送信ペイロードの両方がここから導出される。
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub file_name: String,
    pub file_size: u64,
    pub mime_type: String,
    pub data_url: String,
}

/// 送信ステータス
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Loading => "loading",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }
}

/// アップロードフォームの状態
///
/// 不変条件: 保持する結果（成功・失敗）は常に高々1つ。
/// 新しいファイルの選択はエラー表示だけを消し、前回の結果は
/// 次の送信かリセットまで残る。
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    file: Option<SelectedFile>,
    state: SubmissionState,
    outcome: Option<AnalysisOutcome>,
    error: Option<String>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルを選択する
    ///
    /// 既存のエラー表示を消す。送信ステータスと前回の結果は変えない。
    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
        self.error = None;
    }

    /// 送信を開始する
    ///
    /// ファイル未選択ならバリデーションエラーを記録して `Err` を返す
    /// （呼び出し側はネットワーク呼び出しをしてはならない）。
    /// ファイルがあればLoadingへ遷移し、POSTするペイロードを返す。
    pub fn begin_submission(&mut self) -> Result<UploadPayload> {
        let Some(file) = &self.file else {
            let error = Error::NoFileSelected;
            self.error = Some(error.to_string());
            return Err(error);
        };

        self.state = SubmissionState::Loading;
        self.error = None;
        self.outcome = None;

        Ok(UploadPayload {
            image: file.data_url.clone(),
            file_name: file.file_name.clone(),
            file_size: file.file_size,
            file_type: file.mime_type.clone(),
        })
    }

    /// 送信の完了を記録する
    ///
    /// 成功・失敗にかかわらずLoadingはここで必ず解除される。
    /// 失敗時はメッセージをエラー表示にも写す。
    pub fn settle(&mut self, outcome: AnalysisOutcome) {
        match &outcome {
            Ok(_) => self.state = SubmissionState::Succeeded,
            Err(payload) => {
                self.state = SubmissionState::Failed;
                self.error = Some(payload.message.clone());
            }
        }
        self.outcome = Some(outcome);
    }

    /// 全状態を無条件にクリアしてIdleへ戻す
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// プレビュー用Data URL（選択ファイルから導出）
    pub fn preview(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.data_url.as_str())
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SubmissionState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn outcome(&self) -> Option<&AnalysisOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Some(Ok(_)))
    }

    /// 表示用の結果テキスト
    ///
    /// 成功時はレスポンスJSONの整形表示、失敗時はエラーメッセージ。
    pub fn result_text(&self) -> Option<String> {
        match self.outcome.as_ref()? {
            Ok(value) => Some(
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
            ),
            Err(payload) => Some(payload.message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_url::to_data_url;
    use crate::types::ErrorPayload;
    use serde_json::json;

    fn sample_file() -> SelectedFile {
        SelectedFile {
            file_name: "photo.jpg".to_string(),
            file_size: 1024,
            mime_type: "image/jpeg".to_string(),
            data_url: "data:image/jpeg;base64,/9j/4AAQ".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let form = UploadForm::new();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.file().is_none());
        assert!(form.preview().is_none());
        assert!(form.outcome().is_none());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_begin_submission_without_file() {
        let mut form = UploadForm::new();
        let result = form.begin_submission();

        assert!(matches!(result, Err(Error::NoFileSelected)));
        assert_eq!(form.error(), Some("Please select an image first"));
        // ネットワーク呼び出しに進んでいないのでLoadingにはならない
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!form.is_loading());
    }

    #[test]
    fn test_select_file_sets_preview() {
        let mut form = UploadForm::new();
        form.select_file(sample_file());

        assert_eq!(form.file().map(|f| f.file_name.as_str()), Some("photo.jpg"));
        assert_eq!(form.preview(), Some("data:image/jpeg;base64,/9j/4AAQ"));
    }

    #[test]
    fn test_select_file_clears_error_keeps_outcome() {
        let mut form = UploadForm::new();
        form.select_file(sample_file());
        assert!(form.begin_submission().is_ok());
        form.settle(Err(ErrorPayload::new("Network Error")));
        assert!(form.error().is_some());

        form.select_file(sample_file());

        assert!(form.error().is_none());
        // 前回の結果は次の送信かリセットまで残る
        assert!(form.outcome().is_some());
        assert_eq!(form.state(), SubmissionState::Failed);
    }

    #[test]
    fn test_begin_submission_builds_payload() {
        let mut form = UploadForm::new();
        form.select_file(sample_file());

        let payload = form.begin_submission().expect("送信開始失敗");

        assert_eq!(form.state(), SubmissionState::Loading);
        assert_eq!(payload.image, "data:image/jpeg;base64,/9j/4AAQ");
        assert_eq!(payload.file_name, "photo.jpg");
        assert_eq!(payload.file_size, 1024);
        assert_eq!(payload.file_type, "image/jpeg");
    }

    #[test]
    fn test_begin_submission_clears_previous_outcome() {
        let mut form = UploadForm::new();
        form.select_file(sample_file());
        assert!(form.begin_submission().is_ok());
        form.settle(Ok(json!({"status": "ok"})));
        assert!(form.outcome().is_some());

        assert!(form.begin_submission().is_ok());

        assert!(form.outcome().is_none());
        assert!(form.error().is_none());
        assert_eq!(form.state(), SubmissionState::Loading);
    }

    #[test]
    fn test_settle_success() {
        let mut form = UploadForm::new();
        form.select_file(sample_file());
        assert!(form.begin_submission().is_ok());

        let response = json!({"status": "ok", "tags": ["cat"]});
        form.settle(Ok(response.clone()));

        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert!(form.is_success());
        assert!(form.error().is_none());
        assert_eq!(
            form.result_text(),
            Some(serde_json::to_string_pretty(&response).unwrap())
        );
    }

    #[test]
    fn test_settle_failure_mirrors_message() {
        let mut form = UploadForm::new();
        form.select_file(sample_file());
        assert!(form.begin_submission().is_ok());

        form.settle(Err(ErrorPayload::new("Request failed with status 500")));

        assert_eq!(form.state(), SubmissionState::Failed);
        assert!(!form.is_success());
        // エラーバナーと保持される結果の両方に同じメッセージ
        assert_eq!(form.error(), Some("Request failed with status 500"));
        assert_eq!(
            form.result_text(),
            Some("Request failed with status 500".to_string())
        );
    }

    #[test]
    fn test_loading_flag_cycles_exactly_once() {
        let mut form = UploadForm::new();
        form.select_file(sample_file());

        assert!(!form.is_loading());
        assert!(form.begin_submission().is_ok());
        assert!(form.is_loading());

        form.settle(Ok(json!({})));
        assert!(!form.is_loading());

        // 失敗でも同じく必ず解除される
        assert!(form.begin_submission().is_ok());
        assert!(form.is_loading());
        form.settle(Err(ErrorPayload::new("Network Error")));
        assert!(!form.is_loading());
    }

    #[test]
    fn test_reset_from_idle() {
        let mut form = UploadForm::new();
        form.reset();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.file().is_none());
    }

    #[test]
    fn test_reset_from_succeeded() {
        let mut form = UploadForm::new();
        form.select_file(sample_file());
        assert!(form.begin_submission().is_ok());
        form.settle(Ok(json!({"status": "ok"})));

        form.reset();

        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.file().is_none());
        assert!(form.preview().is_none());
        assert!(form.outcome().is_none());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_reset_from_failed() {
        let mut form = UploadForm::new();
        form.select_file(sample_file());
        assert!(form.begin_submission().is_ok());
        form.settle(Err(ErrorPayload::new("boom")));

        form.reset();

        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.outcome().is_none());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_submission_state_as_str() {
        assert_eq!(SubmissionState::Idle.as_str(), "idle");
        assert_eq!(SubmissionState::Loading.as_str(), "loading");
        assert_eq!(SubmissionState::Succeeded.as_str(), "succeeded");
        assert_eq!(SubmissionState::Failed.as_str(), "failed");
    }

    #[test]
    fn test_scenario_cat_png() {
        // 2KBのPNGを選択 → 送信 → モック応答を整形表示
        let mut bytes = vec![0u8; 2048];
        bytes[..8].copy_from_slice(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        let data_url = to_data_url("image/png", &bytes);

        let mut form = UploadForm::new();
        form.select_file(SelectedFile {
            file_name: "cat.png".to_string(),
            file_size: bytes.len() as u64,
            mime_type: "image/png".to_string(),
            data_url,
        });

        let preview = form.preview().expect("プレビューがあるはず");
        assert!(preview.starts_with("data:image/png;base64,"));
        assert_eq!(crate::data_url::decode_data_url(preview).unwrap(), bytes);

        let payload = form.begin_submission().expect("送信開始失敗");
        assert_eq!(payload.file_name, "cat.png");
        assert_eq!(payload.file_size, 2048);

        let response = json!({"status": "ok", "tags": ["cat"]});
        form.settle(Ok(response.clone()));

        assert_eq!(form.state(), SubmissionState::Succeeded);
        let text = form.result_text().expect("結果テキストがあるはず");
        assert_eq!(text, serde_json::to_string_pretty(&response).unwrap());
        assert!(text.contains("\"cat\""));
    }
}
