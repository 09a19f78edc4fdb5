//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use gloo::storage::{LocalStorage, Storage};
use image_analysis_common::{ErrorPayload, SelectedFile, UploadForm, WebhookConfig};

use crate::api::webhook;
use crate::components::{
    file_preview::FilePreview,
    form_buttons::FormButtons,
    header::Header,
    result_panel::ResultPanel,
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
};

/// Webhook設定のlocalStorageキー
const CONFIG_STORAGE_KEY: &str = "image-analysis.webhook-config";

fn load_config() -> WebhookConfig {
    LocalStorage::get(CONFIG_STORAGE_KEY).unwrap_or_default()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (form, set_form) = signal(UploadForm::new());
    let (endpoint_url, set_endpoint_url) = signal(load_config().endpoint_url);
    let (config_status, set_config_status) = signal(String::new());

    // ファイル選択ハンドラ（Data URLへの読み込みはUploadArea側で完了している）
    let on_file_selected = move |file: SelectedFile| {
        set_form.update(|f| f.select_file(file));
    };

    // 送信ハンドラ
    //
    // POSTと結果反映を1本のawaitチェーンにまとめる。settleがチェーンの
    // 末尾で成功・失敗の両経路とも必ず走るので、Loading表示が
    // 出しっぱなしになることはない。
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut payload = None;
        set_form.update(|f| payload = f.begin_submission().ok());
        let Some(payload) = payload else {
            // バリデーションエラー: ネットワーク呼び出しなし
            return;
        };

        let url = endpoint_url.get_untracked();
        spawn_local(async move {
            let outcome = match webhook::post_image(&url, &payload).await {
                Ok(value) => Ok(value),
                Err(err) => {
                    let message = webhook::error_message(&err);
                    gloo::console::error!(format!("webhook request failed: {}", message));
                    Err(ErrorPayload::new(message))
                }
            };
            set_form.update(|f| f.settle(outcome));
        });
    };

    // リセットハンドラ
    let on_reset = move |_: ()| {
        set_form.update(|f| f.reset());
    };

    // Webhook URL保存ハンドラ
    let on_save_config = move |_: ()| {
        let config = WebhookConfig::new(endpoint_url.get_untracked());
        match LocalStorage::set(CONFIG_STORAGE_KEY, &config) {
            Ok(()) => set_config_status.set("Saved".to_string()),
            Err(e) => set_config_status.set(format!("Save failed: {}", e)),
        }
    };

    // Webhook URL削除ハンドラ
    let on_clear_config = move |_: ()| {
        LocalStorage::delete(CONFIG_STORAGE_KEY);
        set_endpoint_url.set(String::new());
        set_config_status.set("Cleared".to_string());
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                endpoint_url=endpoint_url
                set_endpoint_url=set_endpoint_url
                config_status=config_status
                on_save_config=on_save_config
                on_clear_config=on_clear_config
            />

            <form on:submit=on_submit>
                <UploadArea on_file_selected=on_file_selected />
                <FilePreview form=form />
                <ResultPanel form=form endpoint_url=endpoint_url />
                <FormButtons form=form on_reset=on_reset />
            </form>
        </div>
    }
}
