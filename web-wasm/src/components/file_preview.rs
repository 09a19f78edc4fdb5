//! 選択ファイル情報とプレビューコンポーネント

use leptos::prelude::*;

use image_analysis_common::UploadForm;

/// 選択中のファイル名とプレビュー画像
///
/// 送信ステータスに関係なく、ファイルが選択されていれば常に表示する
#[component]
pub fn FilePreview(form: ReadSignal<UploadForm>) -> impl IntoView {
    view! {
        <Show when=move || form.get().file().is_some()>
            <div class="form-group">
                <div class="file-info">
                    <p>"Selected file:"</p>
                    <p class="file-info-name">
                        {move || {
                            form.get()
                                .file()
                                .map(|f| f.file_name.clone())
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
            </div>
            <div class="form-group preview-section">
                <p class="preview-label">"Preview:"</p>
                <img
                    src=move || {
                        form.get().preview().map(str::to_string).unwrap_or_default()
                    }
                    alt="Preview"
                    class="preview-image"
                />
            </div>
        </Show>
    }
}
