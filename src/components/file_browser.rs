//! File Browser Component
//!
//! Files page: folder navigation over the flat file listing, a file viewer,
//! and admin deletes. Emptied folders collapse upward on their own.

use folder_tree::{FolderTree, ItemOrigin, Location, Navigator};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::{flash, Alert};
use super::folder_grid::{folder_cards, items_at, Breadcrumbs, FolderGrid};
use super::{FileCard, FileViewer};
use crate::commands;
use crate::context::{use_app_context, Page};
use crate::models::FileRecord;
use crate::store::{store_remove_file, store_remove_file_folder, use_app_store, AppStateStoreFields};

#[component]
pub fn FileBrowser() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (nav, set_nav) = signal(Navigator::<String>::new());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let can_delete = Signal::derive(move || ctx.is_admin());

    // Load files on mount and on reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match commands::list_files().await {
                Ok(files) => {
                    log::info!("[FileBrowser] loaded {} files", files.len());
                    *store.files().write() = files;
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("[FileBrowser] failed to load files: {}", e);
                    if !ctx.expire_session_on(&e) {
                        set_error.set(Some(e.user_message()));
                    }
                }
            }
            set_loaded.set(true);
        });
    });

    // Keep the location valid after deletions
    Effect::new(move |_| {
        if !loaded.get() {
            return;
        }
        let files = store.files().read();
        let tree = FolderTree::new(&files);
        let mut next = nav.get_untracked();
        if next.settle(&tree) {
            log::debug!("[FileBrowser] settled at {:?}", next.location());
            set_nav.set(next);
        }
    });

    let viewing_file = Memo::new(move |_| {
        let uuid = nav.with(|n| n.viewing().map(|v| v.id.clone()))?;
        store.files().read().iter().find(|f| f.uuid == uuid).cloned()
    });

    let location = Signal::derive(move || nav.with(|n| n.location().clone()));

    let folders = Signal::derive(move || {
        let files = store.files().read();
        let tree = FolderTree::new(&files);
        nav.with(|n| folder_cards(&tree, n.location()))
    });

    let visible_files = Signal::derive(move || {
        let files = store.files().read();
        let tree = FolderTree::new(&files);
        nav.with(|n| {
            items_at(&tree, n.location())
                .into_iter()
                .cloned()
                .collect::<Vec<FileRecord>>()
        })
    });

    let open_folder = Callback::new(move |path: String| set_nav.update(|n| n.open_folder(path)));
    let navigate_to = Callback::new(move |location: Location| {
        set_nav.update(|n| match location.path() {
            Some(path) => n.open_folder(path),
            None => n.go_root(),
        })
    });
    let open_file =
        Callback::new(move |uuid: String| set_nav.update(|n| n.open_item(uuid, ItemOrigin::Browse)));
    let go_back = Callback::new(move |_: ()| {
        set_nav.update(|n| {
            n.back();
        })
    });

    let delete_file = Callback::new(move |uuid: String| {
        spawn_local(async move {
            match commands::delete_file(&uuid).await {
                Ok(()) => {
                    log::info!("[FileBrowser] deleted file {}", uuid);
                    store_remove_file(&store, &uuid);
                    flash(set_notice, "File deleted");
                }
                Err(e) => {
                    log::error!("[FileBrowser] delete {} failed: {}", uuid, e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    });

    let delete_folder = Callback::new(move |path: String| {
        spawn_local(async move {
            match commands::delete_file_folder(&path).await {
                Ok(()) => {
                    let removed = store_remove_file_folder(&store, &path);
                    log::info!("[FileBrowser] deleted folder {} ({} files)", path, removed);
                    flash(set_notice, format!("Folder \"{}\" deleted", path));
                }
                Err(e) => {
                    log::error!("[FileBrowser] delete folder {} failed: {}", path, e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    });

    view! {
        <div class="file-browser">
            <Alert message=error />
            <Alert message=notice success=true />
            {move || match viewing_file.get() {
                Some(file) => view! {
                    <FileViewer
                        file=file
                        on_back=go_back
                        can_delete=can_delete
                        on_delete=delete_file
                    />
                }
                .into_any(),
                None => view! {
                    <div class="browser-header">
                        <h1>"Files"</h1>
                        <button class="secondary-btn" title="Reload from server" on:click=move |_| ctx.reload()>"↻ Refresh"</button>
                        <Show when=move || ctx.is_admin()>
                            <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Upload)>
                                "Upload"
                            </button>
                        </Show>
                    </div>
                    <Breadcrumbs location=location root_label="All files" on_navigate=navigate_to />
                    <Show when=move || location.with(|l| *l != Location::Root)>
                        <button class="back-btn" on:click=move |_| go_back.run(())>"← Back"</button>
                    </Show>
                    <Show
                        when=move || loaded.get()
                        fallback=|| view! { <p class="loading">"Loading files..."</p> }
                    >
                        <FolderGrid
                            folders=folders
                            on_open=open_folder
                            can_delete=can_delete
                            on_delete=delete_folder
                        />
                        <div class="file-grid">
                            <For
                                each=move || visible_files.get()
                                key=|file| file.uuid.clone()
                                children=move |file| view! {
                                    <FileCard
                                        file=file
                                        on_open=open_file
                                        can_delete=can_delete
                                        on_delete=delete_file
                                    />
                                }
                            />
                        </div>
                        <Show when=move || {
                            visible_files.with(Vec::is_empty) && folders.with(Vec::is_empty)
                        }>
                            <p class="empty">"Nothing here yet."</p>
                        </Show>
                    </Show>
                }
                .into_any(),
            }}
        </div>
    }
}
