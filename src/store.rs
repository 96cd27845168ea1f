//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Deletions are
//! applied here after the backend confirms them; listings are not re-fetched.

use folder_tree::{remove_folder, FolderTree};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{FileRecord, Playlist};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every uploaded file
    pub files: Vec<FileRecord>,
    /// Every playlist
    pub playlists: Vec<Playlist>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Folder paths currently in use by files, for the upload form
pub fn file_folders(files: &[FileRecord]) -> Vec<String> {
    FolderTree::new(files)
        .all_folders()
        .into_iter()
        .map(String::from)
        .collect()
}

// ========================
// Store Helper Functions
// ========================

/// Remove a file from the store by uuid
pub fn store_remove_file(store: &AppStore, uuid: &str) {
    store.files().write().retain(|file| file.uuid != uuid);
}

/// Remove every file at or below `path`
pub fn store_remove_file_folder(store: &AppStore, path: &str) -> usize {
    remove_folder(&mut store.files().write(), path)
}

pub fn store_add_playlist(store: &AppStore, playlist: Playlist) {
    store.playlists().write().push(playlist);
}

/// Replace a playlist in the store by id
pub fn store_update_playlist(store: &AppStore, updated: Playlist) {
    if let Some(playlist) = store
        .playlists()
        .write()
        .iter_mut()
        .find(|p| p.id == updated.id)
    {
        *playlist = updated;
    }
}

pub fn store_remove_playlist(store: &AppStore, id: &str) {
    store.playlists().write().retain(|p| p.id != id);
}

/// Remove every playlist at or below `path`
pub fn store_remove_playlist_folder(store: &AppStore, path: &str) -> usize {
    remove_folder(&mut store.playlists().write(), path)
}
