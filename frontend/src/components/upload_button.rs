use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;
use yew::prelude::*;

use super::icons::icon_upload;
use super::notice::Notice;
use crate::api::ApiClient;
use crate::upload::UploadGuard;

#[derive(Properties, PartialEq)]
pub struct UploadButtonProps {
    pub on_notice: Callback<Notice>,
    /// Fired after the backend accepted the file.
    pub on_uploaded: Callback<()>,
}

#[function_component(UploadButton)]
pub fn upload_button(props: &UploadButtonProps) -> Html {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let guard = use_state(UploadGuard::default);

    let on_change = {
        let guard = guard.clone();
        let on_notice = props.on_notice.clone();
        let on_uploaded = props.on_uploaded.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let file = match input.files().and_then(|files| files.get(0)) {
                Some(file) => file,
                None => return,
            };
            // Clearing lets the same file be picked again after a failure.
            input.set_value("");

            let busy = match guard.begin(&file.name(), &file.type_()) {
                Ok(busy) => busy,
                Err(err) => {
                    warn!("upload refused: {}", err);
                    on_notice.emit(Notice::Error(err.to_string()));
                    return;
                }
            };
            guard.set(busy);

            let guard = guard.clone();
            let client = client.clone();
            let on_notice = on_notice.clone();
            let on_uploaded = on_uploaded.clone();
            spawn_local(async move {
                match client.upload_transactions(&file).await {
                    Ok(reply) => {
                        info!("uploaded {}", file.name());
                        let message = if reply.message.is_empty() {
                            "Transactions uploaded successfully".to_string()
                        } else {
                            reply.message
                        };
                        on_notice.emit(Notice::Success(message));
                        on_uploaded.emit(());
                    }
                    Err(err) => {
                        warn!("upload of {} failed: {}", file.name(), err);
                        on_notice.emit(Notice::Error(format!("Upload failed: {}", err)));
                    }
                }
                guard.set(busy.finish());
            });
        })
    };

    let label_class = classes!(
        "flex", "items-center", "px-4", "py-2", "rounded-lg", "text-sm", "font-semibold", "text-white",
        "bg-red-600", "hover:bg-red-700", "transition-colors",
        if guard.is_busy() { "opacity-60 cursor-wait" } else { "cursor-pointer" }
    );

    html! {
        <label class={label_class}>
            { icon_upload() }
            { if guard.is_busy() { "Uploading..." } else { "Upload CSV" } }
            <input
                type="file"
                accept=".csv,text/csv"
                class="hidden"
                disabled={guard.is_busy()}
                onchange={on_change}
            />
        </label>
    }
}
