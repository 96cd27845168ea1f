//! Home Component

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

const ACTIVITY_LINES: usize = 20;

/// Most recent log lines of this session, newest first
#[component]
fn ActivityLog() -> impl IntoView {
    let (open, set_open) = signal(false);
    let lines = move || {
        rolling_logger::recent_entries()
            .iter()
            .rev()
            .take(ACTIVITY_LINES)
            .map(|entry| view! { <li>{entry.to_string()}</li> })
            .collect_view()
    };

    view! {
        <details class="activity-log">
            <summary on:click=move |_| set_open.update(|o| *o = !*o)>"Activity log"</summary>
            <Show when=move || open.get()>
                <ul>{lines}</ul>
            </Show>
        </details>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app_context();
    let greeting = move || {
        ctx.user
            .with(|u| u.as_ref().map(|u| format!("Welcome back, {}", u.username)))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    let tile = move |title: &'static str, blurb: &'static str, page: Page| {
        view! {
            <div class="home-tile" on:click=move |_| ctx.navigate(page.clone())>
                <h2>{title}</h2>
                <p>{blurb}</p>
            </div>
        }
    };

    view! {
        <div class="home-page">
            <h1>{greeting}</h1>
            <div class="home-grid">
                {tile("Files", "Course documents, organized in folders", Page::Files)}
                {tile("Videos", "Lesson playlists", Page::Playlists { selected: None })}
                {tile("Blog", "News and articles from your teachers", Page::Blog)}
            </div>
            <Show when=move || ctx.is_admin()>
                <div class="admin-actions">
                    <h2>"Teacher tools"</h2>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Upload)>"Upload a file"</button>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(Page::CreatePlaylist)>"New playlist"</button>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(Page::CreatePost)>"Write a post"</button>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Dashboard)>"Dashboard"</button>
                    <ActivityLog />
                </div>
            </Show>
        </div>
    }
}
