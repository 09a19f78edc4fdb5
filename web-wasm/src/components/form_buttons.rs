//! 送信・リセットボタンコンポーネント

use leptos::prelude::*;

use image_analysis_common::UploadForm;

#[component]
pub fn FormButtons<FR>(form: ReadSignal<UploadForm>, on_reset: FR) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone,
{
    let is_submit_disabled = move || {
        let f = form.get();
        f.file().is_none() || f.is_loading()
    };

    view! {
        <div class="form-group">
            <div class="button-group">
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=is_submit_disabled
                >
                    {move || {
                        if form.get().is_loading() {
                            "Analyzing..."
                        } else {
                            "Analyze Image"
                        }
                    }}
                </button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Reset"
                </button>
            </div>
        </div>
    }
}
