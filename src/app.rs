//! NexaHub Frontend App
//!
//! Root component: provides the session context and the store, guards
//! pages by role, and switches between them.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    Blog, CreatePost, Dashboard, FileBrowser, Header, Home, Login, PlaylistBrowser, PlaylistForm, PostView,
    SearchPage, TeacherSignUp, UploadForm,
};
use crate::config::AUTH_REDIRECT_DELAY_MS;
use crate::context::{AppContext, Page};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Guard: after a short grace period, send visitors away from pages they may not see
    Effect::new(move |_| {
        let page = ctx.page.get();
        let allowed = ctx.user.with(|user| page.redirect_for(user.as_ref()).is_none());
        if allowed {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(AUTH_REDIRECT_DELAY_MS).await;
            let current = ctx.page.get_untracked();
            let target = ctx.user.with_untracked(|user| current.redirect_for(user.as_ref()));
            if let Some(target) = target {
                log::info!("[Guard] {:?} not allowed, redirecting to {:?}", current, target);
                ctx.navigate(target);
            }
        });
    });

    Effect::new(move |_| {
        let title = ctx.page.with(|page| format!("{} · NexaHub", page.title()));
        document().set_title(&title);
    });

    let permitted = move || {
        ctx.page
            .with(|page| ctx.user.with(|user| page.redirect_for(user.as_ref()).is_none()))
    };

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || {
                    if !permitted() {
                        return view! { <p class="loading">"Checking your session..."</p> }.into_any();
                    }
                    match ctx.page.get() {
                        Page::Login => view! { <Login /> }.into_any(),
                        Page::TeacherSignUp => view! { <TeacherSignUp /> }.into_any(),
                        Page::Home => view! { <Home /> }.into_any(),
                        Page::Files => view! { <FileBrowser /> }.into_any(),
                        Page::Upload => view! { <UploadForm /> }.into_any(),
                        Page::Playlists { selected } => view! { <PlaylistBrowser selected=selected /> }.into_any(),
                        Page::CreatePlaylist => view! { <PlaylistForm /> }.into_any(),
                        Page::Search { term } => view! { <SearchPage term=term /> }.into_any(),
                        Page::Blog => view! { <Blog /> }.into_any(),
                        Page::Post(slug) => view! { <PostView slug=slug /> }.into_any(),
                        Page::CreatePost => view! { <CreatePost /> }.into_any(),
                        Page::Dashboard => view! { <Dashboard /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
