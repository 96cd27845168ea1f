//! Playlist Browser Component
//!
//! Videos page: playlists arranged in folders, same navigation rules as the
//! file browser. A playlist opened from search returns to search on Back.

use folder_tree::{BackOutcome, FolderTree, ItemOrigin, Location, Navigator};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::{flash, Alert};
use super::folder_grid::{folder_cards, items_at, Breadcrumbs, FolderGrid};
use super::{DeleteConfirmButton, PlaylistViewer};
use crate::commands;
use crate::context::{use_app_context, Page};
use crate::models::Playlist;
use crate::store::{
    store_remove_playlist, store_remove_playlist_folder, store_update_playlist, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn PlaylistBrowser(selected: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let start = match selected {
        Some(id) => Navigator::with_item(id, ItemOrigin::Search),
        None => Navigator::new(),
    };
    let (nav, set_nav) = signal(start);
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let can_edit = Signal::derive(move || ctx.is_admin());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match commands::list_playlists().await {
                Ok(playlists) => {
                    log::info!("[PlaylistBrowser] loaded {} playlists", playlists.len());
                    *store.playlists().write() = playlists;
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("[PlaylistBrowser] failed to load playlists: {}", e);
                    if !ctx.expire_session_on(&e) {
                        set_error.set(Some(e.user_message()));
                    }
                }
            }
            set_loaded.set(true);
        });
    });

    Effect::new(move |_| {
        if !loaded.get() {
            return;
        }
        let playlists = store.playlists().read();
        let tree = FolderTree::new(&playlists);
        let mut next = nav.get_untracked();
        if next.settle(&tree) {
            log::debug!("[PlaylistBrowser] settled at {:?}", next.location());
            set_nav.set(next);
        }
    });

    let viewing = Memo::new(move |_| {
        let id = nav.with(|n| n.viewing().map(|v| v.id.clone()))?;
        store.playlists().read().iter().find(|p| p.id == id).cloned()
    });

    let location = Signal::derive(move || nav.with(|n| n.location().clone()));

    let folders = Signal::derive(move || {
        let playlists = store.playlists().read();
        let tree = FolderTree::new(&playlists);
        nav.with(|n| folder_cards(&tree, n.location()))
    });

    let visible = Signal::derive(move || {
        let playlists = store.playlists().read();
        let tree = FolderTree::new(&playlists);
        nav.with(|n| {
            items_at(&tree, n.location())
                .into_iter()
                .cloned()
                .collect::<Vec<Playlist>>()
        })
    });

    let open_folder = Callback::new(move |path: String| set_nav.update(|n| n.open_folder(path)));
    let navigate_to = Callback::new(move |location: Location| {
        set_nav.update(|n| match location.path() {
            Some(path) => n.open_folder(path),
            None => n.go_root(),
        })
    });
    let open_playlist = move |id: String| set_nav.update(|n| n.open_item(id, ItemOrigin::Browse));

    let go_back = Callback::new(move |_: ()| {
        let mut next = nav.get_untracked();
        let outcome = next.back();
        set_nav.set(next);
        if outcome == BackOutcome::ReturnToSearch {
            ctx.navigate(Page::Search {
                term: ctx.last_search.get_untracked(),
            });
        }
    });

    let on_updated = Callback::new(move |(updated, message): (Playlist, &'static str)| {
        store_update_playlist(&store, updated);
        flash(set_notice, message);
    });

    let delete_playlist = Callback::new(move |id: String| {
        spawn_local(async move {
            match commands::delete_playlist(&id).await {
                Ok(()) => {
                    log::info!("[PlaylistBrowser] deleted playlist {}", id);
                    store_remove_playlist(&store, &id);
                    flash(set_notice, "Playlist deleted");
                }
                Err(e) => {
                    log::error!("[PlaylistBrowser] delete {} failed: {}", id, e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    });

    let delete_folder = Callback::new(move |path: String| {
        spawn_local(async move {
            match commands::delete_playlist_folder(&path).await {
                Ok(()) => {
                    let removed = store_remove_playlist_folder(&store, &path);
                    log::info!("[PlaylistBrowser] deleted folder {} ({} playlists)", path, removed);
                    flash(set_notice, format!("Folder \"{}\" deleted", path));
                }
                Err(e) => {
                    log::error!("[PlaylistBrowser] delete folder {} failed: {}", path, e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    });

    view! {
        <div class="playlist-browser">
            <Alert message=error />
            <Alert message=notice success=true />
            {move || match viewing.get() {
                Some(playlist) => view! {
                    <PlaylistViewer
                        playlist=playlist
                        on_back=go_back
                        can_edit=can_edit
                        on_updated=on_updated
                        on_delete=delete_playlist
                    />
                }
                .into_any(),
                None => view! {
                    <div class="browser-header">
                        <h1>"Videos"</h1>
                        <button class="secondary-btn" title="Reload from server" on:click=move |_| ctx.reload()>"↻ Refresh"</button>
                        <Show when=move || ctx.is_admin()>
                            <button
                                class="primary-btn"
                                on:click=move |_| ctx.navigate(Page::CreatePlaylist)
                            >
                                "New playlist"
                            </button>
                        </Show>
                    </div>
                    <Breadcrumbs location=location root_label="All playlists" on_navigate=navigate_to />
                    <Show when=move || location.with(|l| *l != Location::Root)>
                        <button class="back-btn" on:click=move |_| go_back.run(())>"← Back"</button>
                    </Show>
                    <Show
                        when=move || loaded.get()
                        fallback=|| view! { <p class="loading">"Loading playlists..."</p> }
                    >
                        <FolderGrid
                            folders=folders
                            on_open=open_folder
                            can_delete=can_edit
                            on_delete=delete_folder
                        />
                        <div class="playlist-grid">
                            <For
                                each=move || visible.get()
                                key=|playlist| playlist.id.clone()
                                children=move |playlist| {
                                    let id = playlist.id.clone();
                                    let delete_id = playlist.id.clone();
                                    view! {
                                        <div class="playlist-card" on:click=move |_| open_playlist(id.clone())>
                                            <h3>{playlist.name.clone()}</h3>
                                            {playlist
                                                .description
                                                .clone()
                                                .map(|d| view! { <p class="playlist-description">{d}</p> })}
                                            <p class="playlist-count">
                                                {format!("{} videos", playlist.videos.len())}
                                            </p>
                                            <Show when=move || can_edit.get()>
                                                <DeleteConfirmButton
                                                    button_class="delete-btn"
                                                    label="Delete"
                                                    on_confirm={
                                                        let delete_id = delete_id.clone();
                                                        Callback::new(move |_| delete_playlist.run(delete_id.clone()))
                                                    }
                                                />
                                            </Show>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <Show when=move || visible.with(Vec::is_empty) && folders.with(Vec::is_empty)>
                            <p class="empty">"No playlists here yet."</p>
                        </Show>
                    </Show>
                }
                .into_any(),
            }}
        </div>
    }
}
