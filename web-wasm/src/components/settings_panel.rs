//! 設定パネルコンポーネント

use leptos::prelude::*;

#[component]
pub fn SettingsPanel<FS, FC>(
    endpoint_url: ReadSignal<String>,
    set_endpoint_url: WriteSignal<String>,
    config_status: ReadSignal<String>,
    on_save_config: FS,
    on_clear_config: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="webhook-url">"Webhook URL"</label>
                <input
                    type="url"
                    id="webhook-url"
                    placeholder="https://example.com/webhook/image-analysis"
                    prop:value=move || endpoint_url.get()
                    on:input=move |ev| {
                        set_endpoint_url.set(event_target_value(&ev));
                    }
                />
                <div class="config-actions">
                    <button
                        class="btn btn-primary btn-small"
                        on:click={
                            let on_save_config = on_save_config.clone();
                            move |_| on_save_config(())
                        }
                    >
                        "Save"
                    </button>
                    <button
                        class="btn btn-tertiary btn-small"
                        on:click={
                            let on_clear_config = on_clear_config.clone();
                            move |_| on_clear_config(())
                        }
                    >
                        "Clear"
                    </button>
                </div>
                <div class="config-status">
                    {move || config_status.get()}
                </div>
            </div>
        </div>
    }
}
