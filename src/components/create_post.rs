//! Create Post Component
//!
//! Admin form for a new blog post. Content is entered as HTML.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::Alert;
use crate::commands::{self, CATEGORIES};
use crate::context::{use_app_context, Page};
use crate::models::PostDraft;

#[component]
pub fn CreatePost() -> impl IntoView {
    let ctx = use_app_context();
    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal(CATEGORIES[0].to_string());
    let (image, set_image) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (publishing, set_publishing) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let publish = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = PostDraft {
            title: title.get().trim().to_string(),
            content: content.get(),
            category: category.get(),
            image: Some(image.get().trim().to_string()).filter(|url| !url.is_empty()),
        };
        if draft.title.is_empty() || draft.content.trim().is_empty() {
            set_error.set(Some("Please provide a title and some content".to_string()));
            return;
        }

        set_publishing.set(true);
        spawn_local(async move {
            match commands::create_post(&draft).await {
                Ok(post) => {
                    log::info!("[CreatePost] published {}", post.slug);
                    ctx.navigate(Page::Post(post.slug));
                }
                Err(e) => {
                    log::error!("[CreatePost] publish failed: {}", e);
                    set_error.set(Some(e.user_message()));
                    set_publishing.set(false);
                }
            }
        });
    };

    view! {
        <div class="form-page">
            <h1>"Create a post"</h1>
            <form class="post-form" on:submit=publish>
                <div class="post-form-row">
                    <input
                        type="text"
                        id="title"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <select
                        id="category"
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        {CATEGORIES
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
                            .collect_view()}
                    </select>
                </div>
                <input
                    type="url"
                    id="image"
                    placeholder="Cover image URL (optional)"
                    prop:value=move || image.get()
                    on:input=move |ev| set_image.set(event_target_value(&ev))
                />
                <textarea
                    id="content"
                    placeholder="Write something..."
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="primary-btn" disabled=move || publishing.get()>
                    {move || if publishing.get() { "Publishing..." } else { "Publish" }}
                </button>
            </form>
            <Alert message=error />
        </div>
    }
}
