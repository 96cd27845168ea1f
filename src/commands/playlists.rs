//! Playlist Commands
//!
//! Frontend bindings for video playlists.

use serde::Serialize;

use super::{delete, delete_json, encode_component, get_json, post_json};
use crate::error::ApiResult;
use crate::models::{Playlist, Video};

#[derive(Serialize)]
pub struct NewPlaylist<'a> {
    pub name: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<&'a str>,
}

#[derive(Serialize)]
struct NewVideo<'a> {
    url: &'a str,
    title: &'a str,
}

const UNTITLED_VIDEO: &str = "Untitled Video";

pub async fn list_playlists() -> ApiResult<Vec<Playlist>> {
    get_json("/api/playlists").await
}

pub async fn create_playlist(args: &NewPlaylist<'_>) -> ApiResult<Playlist> {
    post_json("/api/playlists", args).await
}

pub async fn delete_playlist(id: &str) -> ApiResult<()> {
    delete(&format!("/api/playlists/{}", encode_component(id))).await
}

pub async fn delete_playlist_folder(path: &str) -> ApiResult<()> {
    delete(&format!(
        "/api/playlists/delete-folder/{}",
        encode_component(path)
    ))
    .await
}

/// Append a video; the link is stored in its embeddable form.
/// Returns the updated playlist.
pub async fn add_video(playlist_id: &str, video: &Video) -> ApiResult<Playlist> {
    let url = video.embed_url();
    let body = NewVideo {
        url: &url,
        title: video
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED_VIDEO),
    };
    post_json(
        &format!("/api/playlists/{}/videos", encode_component(playlist_id)),
        &body,
    )
    .await
}

/// Remove the video at `index`. Returns the updated playlist.
pub async fn remove_video(playlist_id: &str, index: usize) -> ApiResult<Playlist> {
    delete_json(&format!(
        "/api/playlists/{}/videos/{}",
        encode_component(playlist_id),
        index
    ))
    .await
}
