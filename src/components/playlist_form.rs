//! Playlist Form Component

use folder_tree::FolderTree;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::Alert;
use super::folder_picker::{FolderFields, FolderPicker};
use crate::commands::{self, NewPlaylist};
use crate::context::{use_app_context, Page};
use crate::store::{store_add_playlist, use_app_store, AppStateStoreFields};

#[component]
pub fn PlaylistForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let fields = FolderFields::new();

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_playlists().await {
                Ok(playlists) => *store.playlists().write() = playlists,
                Err(e) => log::warn!("[PlaylistForm] could not load folders: {}", e),
            }
        });
    });

    let folders = Signal::derive(move || {
        FolderTree::new(&store.playlists().read())
            .all_folders()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    });

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        if name_value.is_empty() {
            set_error.set(Some("Please enter a playlist name".to_string()));
            return;
        }
        let description_value = description.get().trim().to_string();
        let folder = fields.choice().resolve();

        set_saving.set(true);
        spawn_local(async move {
            let args = NewPlaylist {
                name: &name_value,
                description: &description_value,
                folder: folder.as_deref(),
            };
            match commands::create_playlist(&args).await {
                Ok(playlist) => {
                    log::info!("[PlaylistForm] created playlist {}", playlist.id);
                    store_add_playlist(&store, playlist);
                    ctx.navigate(Page::Playlists { selected: None });
                }
                Err(e) => {
                    log::error!("[PlaylistForm] create failed: {}", e);
                    set_error.set(Some(e.user_message()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="form-page">
            <h1>"New playlist"</h1>
            <form class="playlist-form" on:submit=create>
                <label for="name">"Name"</label>
                <input
                    type="text"
                    id="name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <FolderPicker fields=fields folders=folders />

                <button type="submit" class="primary-btn" disabled=move || saving.get()>
                    {move || if saving.get() { "Creating..." } else { "Create playlist" }}
                </button>
            </form>
            <Alert message=error />
        </div>
    }
}
