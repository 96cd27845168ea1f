//! Upload Form Component
//!
//! Admin form sending one file with a title and an optional folder.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::{flash, Alert};
use super::folder_picker::{FolderFields, FolderPicker};
use crate::commands;
use crate::store::file_folders;

#[component]
pub fn UploadForm() -> impl IntoView {
    let file_input: NodeRef<html::Input> = NodeRef::new();
    let (title, set_title) = signal(String::new());
    let (folders, set_folders) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let fields = FolderFields::new();

    let load_folders = move || {
        spawn_local(async move {
            match commands::list_files().await {
                Ok(files) => set_folders.set(file_folders(&files)),
                Err(e) => log::warn!("[UploadForm] could not load folders: {}", e),
            }
        });
    };

    Effect::new(move |_| load_folders());

    let upload = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|list| list.get(0));
        let title_value = title.get().trim().to_string();
        let (Some(file), false) = (file, title_value.is_empty()) else {
            set_error.set(Some("Please fill in all required fields".to_string()));
            return;
        };
        let folder = fields.choice().resolve();

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match commands::upload_file(&file, &title_value, folder.as_deref()).await {
                Ok(()) => {
                    log::info!("[UploadForm] uploaded '{}'", title_value);
                    set_title.set(String::new());
                    fields.reset();
                    if let Some(input) = file_input.get() {
                        input.set_value("");
                    }
                    flash(set_notice, "File uploaded successfully!");
                    load_folders();
                }
                Err(e) => {
                    log::error!("[UploadForm] upload failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="form-page">
            <h1>"Upload a file"</h1>
            <form class="upload-form" on:submit=upload>
                <label for="fileInput">"File"</label>
                <input type="file" id="fileInput" node_ref=file_input />

                <label for="title">"Title"</label>
                <input
                    type="text"
                    id="title"
                    placeholder="Title shown to students"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <FolderPicker fields=fields folders=folders />

                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>
            <Alert message=error />
            <Alert message=notice success=true />
        </div>
    }
}
