//! Playlist Viewer Component
//!
//! Embedded players for one playlist. Admins can append and remove videos
//! or delete the playlist.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::Alert;
use super::DeleteConfirmButton;
use crate::commands;
use crate::models::{Playlist, Video};

#[component]
pub fn PlaylistViewer(
    playlist: Playlist,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] can_edit: Signal<bool>,
    /// Called with the playlist as the backend returned it after an edit,
    /// and a notice for the owner to show. The viewer is rebuilt afterwards.
    #[prop(into)]
    on_updated: Callback<(Playlist, &'static str)>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let (new_url, set_new_url) = signal(String::new());
    let (new_title, set_new_title) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let playlist_id = StoredValue::new(playlist.id.clone());

    let add_video = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let url = new_url.get().trim().to_string();
        if url.is_empty() {
            set_error.set(Some("Please enter a video URL".to_string()));
            return;
        }
        let video = Video {
            url,
            title: Some(new_title.get()),
            description: None,
        };
        set_busy.set(true);
        spawn_local(async move {
            let id = playlist_id.get_value();
            match commands::add_video(&id, &video).await {
                Ok(updated) => {
                    log::info!("[PlaylistViewer] added video to {}", id);
                    on_updated.run((updated, "Video added"));
                }
                Err(e) => {
                    log::error!("[PlaylistViewer] add video failed: {}", e);
                    set_error.set(Some(e.user_message()));
                    set_busy.set(false);
                }
            }
        });
    };

    let remove_video = move |index: usize| {
        spawn_local(async move {
            let id = playlist_id.get_value();
            match commands::remove_video(&id, index).await {
                Ok(updated) => {
                    log::info!("[PlaylistViewer] removed video {} from {}", index, id);
                    on_updated.run((updated, "Video removed"));
                }
                Err(e) => {
                    log::error!("[PlaylistViewer] remove video failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    let videos = playlist
        .videos
        .iter()
        .enumerate()
        .map(|(index, video)| {
            let title = video.display_title(index);
            let src = video.embed_url();
            view! {
                <div class="video-card">
                    <div class="video-frame">
                        <iframe
                            src=src
                            title=title.clone()
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                    <div class="video-meta">
                        <h3>{title}</h3>
                        <Show when=move || can_edit.get()>
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                label="Remove"
                                prompt="Remove video?"
                                on_confirm=Callback::new(move |_| remove_video(index))
                            />
                        </Show>
                    </div>
                </div>
            }
        })
        .collect_view();

    let video_count = playlist.videos.len();

    view! {
        <div class="playlist-viewer">
            <div class="viewer-header">
                <button class="back-btn" on:click=move |_| on_back.run(())>"← Back"</button>
                <div class="viewer-title">
                    <h1>{playlist.name.clone()}</h1>
                    {playlist.description.clone().map(|d| view! { <p class="viewer-description">{d}</p> })}
                    {playlist.folder.clone().map(|f| view! { <p class="viewer-folder">"📁 " {f}</p> })}
                </div>
                <Show when=move || can_edit.get()>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        label="Delete playlist"
                        on_confirm=Callback::new(move |_| on_delete.run(playlist_id.get_value()))
                    />
                </Show>
            </div>

            <Alert message=error />

            <Show when=move || can_edit.get()>
                <form class="add-video-form" on:submit=add_video>
                    <input
                        type="url"
                        placeholder="YouTube URL"
                        prop:value=move || new_url.get()
                        on:input=move |ev| set_new_url.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Video title (optional)"
                        prop:value=move || new_title.get()
                        on:input=move |ev| set_new_title.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Adding..." } else { "Add video" }}
                    </button>
                </form>
            </Show>

            {if video_count == 0 {
                view! { <p class="empty">"No videos in this playlist yet."</p> }.into_any()
            } else {
                view! { <div class="video-list">{videos}</div> }.into_any()
            }}
        </div>
    }
}
