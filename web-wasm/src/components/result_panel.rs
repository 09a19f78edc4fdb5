//! 解析結果表示コンポーネント

use leptos::prelude::*;

use image_analysis_common::UploadForm;

/// エラー表示・結果バナー・Webhook情報フッター
///
/// 失敗時はインラインのエラー表示と結果バナーの両方に
/// 同じメッセージが出る
#[component]
pub fn ResultPanel(
    form: ReadSignal<UploadForm>,
    endpoint_url: ReadSignal<String>,
) -> impl IntoView {
    let is_success = move || form.get().is_success();

    view! {
        <Show when=move || form.get().error().is_some()>
            <div class="form-group">
                <div class="error-message">
                    {move || form.get().error().map(str::to_string).unwrap_or_default()}
                </div>
            </div>
        </Show>

        <Show when=move || form.get().outcome().is_some()>
            <div class="form-group">
                <div class=move || {
                    if is_success() {
                        "success-message"
                    } else {
                        "error-message"
                    }
                }>
                    <h3 class=move || if is_success() { "success-title" } else { "" }>
                        {move || if is_success() { "✓ Analysis Complete" } else { "✗ Error" }}
                    </h3>
                    <pre class="response-code">
                        {move || form.get().result_text().unwrap_or_default()}
                    </pre>
                </div>
            </div>
        </Show>

        <div class="webhook-info">
            <p class="webhook-label"><strong>"Webhook URL:"</strong></p>
            <p class="webhook-url">
                {move || {
                    let url = endpoint_url.get();
                    if url.trim().is_empty() {
                        "(not configured)".to_string()
                    } else {
                        url
                    }
                }}
            </p>
        </div>
    }
}
