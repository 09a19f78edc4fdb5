//! アップロードエリアコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use image_analysis_common::SelectedFile;

#[component]
pub fn UploadArea<F>(on_file_selected: F) -> impl IntoView
where
    F: Fn(SelectedFile) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    // 1ファイルだけ受け取り、読み込み完了後にコールバックする
    let handle_file = {
        let on_file_selected = on_file_selected.clone();
        move |file: File| {
            let on_file_selected = on_file_selected.clone();
            spawn_local(async move {
                match read_selected_file(file).await {
                    Ok(selected) => on_file_selected(selected),
                    Err(message) => {
                        gloo::console::error!(format!("file read failed: {}", message));
                    }
                }
            });
        }
    };

    let on_change = {
        let handle_file = handle_file.clone();
        move |ev: Event| {
            let input = event_target::<HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                handle_file(file);
            }
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let dropped = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = dropped {
                handle_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input
                type="file"
                id="file-input"
                accept="image/*"
                on:change=on_change
            />
            <label for="file-input" class="upload-label">
                <div class="upload-icon">"📷"</div>
                <p class="upload-text">"Click to upload or drag and drop"</p>
                <p class="upload-subtext">"PNG, JPG, GIF up to 10MB"</p>
            </label>
        </div>
    }
}

/// ファイルをbase64 Data URLへ読み込み、SelectedFileを組み立てる
///
/// 読み込みは1回のawaitで完結し、プレビューと送信ペイロードの
/// 両方がこのData URLを使う。
async fn read_selected_file(file: File) -> Result<SelectedFile, String> {
    let file_name = file.name();
    let file_size = file.size() as u64;
    let mime_type = file.type_();

    let file = gloo::file::File::from(file);
    let data_url = gloo::file::futures::read_as_data_url(&file)
        .await
        .map_err(|e| e.to_string())?;

    Ok(SelectedFile {
        file_name,
        file_size,
        mime_type,
        data_url,
    })
}
