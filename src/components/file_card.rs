//! File Card Component

use leptos::prelude::*;

use super::DeleteConfirmButton;
use crate::commands;
use crate::models::FileRecord;

#[component]
pub fn FileCard(
    file: FileRecord,
    #[prop(into)] on_open: Callback<String>,
    #[prop(into)] can_delete: Signal<bool>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let kind = file.kind();
    let uuid = file.uuid.clone();
    let delete_uuid = file.uuid.clone();
    let download = commands::download_url(&file.uuid);

    view! {
        <div class="file-card" on:click=move |_| on_open.run(uuid.clone())>
            <span class=kind.css_class()>{kind.label()}</span>
            <h3 class="file-title" title=file.title.clone()>{file.title.clone()}</h3>
            <p class="file-id">{file.short_id()}</p>
            <div class="file-actions">
                <a
                    class="download-btn"
                    href=download
                    target="_blank"
                    rel="noopener"
                    on:click=|ev| ev.stop_propagation()
                >
                    "Download"
                </a>
                <Show when=move || can_delete.get()>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        label="Delete"
                        on_confirm={
                            let delete_uuid = delete_uuid.clone();
                            Callback::new(move |_| on_delete.run(delete_uuid.clone()))
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
