//! File Viewer Component
//!
//! Full-page preview of one file with download and, for admins, delete.

use leptos::prelude::*;

use super::DeleteConfirmButton;
use crate::commands;
use crate::models::{FileKind, FileRecord};

#[component]
pub fn FileViewer(
    file: FileRecord,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] can_delete: Signal<bool>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let uuid = file.uuid.clone();
    let download = commands::download_url(&file.uuid);

    let preview = match (file.kind(), file.image.clone()) {
        (_, None) => view! { <p class="preview-missing">"Preview unavailable for this file."</p> }
            .into_any(),
        (FileKind::Image, Some(src)) => view! {
            <img class="file-preview" src=src alt=file.title.clone() />
        }
        .into_any(),
        (_, Some(src)) => view! {
            <iframe class="file-preview" src=src title=file.title.clone()></iframe>
        }
        .into_any(),
    };

    view! {
        <div class="file-viewer">
            <div class="viewer-header">
                <button class="back-btn" on:click=move |_| on_back.run(())>"← Back"</button>
                <div class="viewer-title">
                    <h1>{file.title.clone()}</h1>
                    {file.folder.clone().map(|folder| view! { <p class="viewer-folder">"📁 " {folder}</p> })}
                </div>
                <a class="download-btn" href=download target="_blank" rel="noopener">
                    "⬇️ Download"
                </a>
                <Show when=move || can_delete.get()>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        label="🗑️ Delete"
                        on_confirm={
                            let uuid = uuid.clone();
                            Callback::new(move |_| on_delete.run(uuid.clone()))
                        }
                    />
                </Show>
            </div>
            <div class="viewer-body">{preview}</div>
        </div>
    }
}
