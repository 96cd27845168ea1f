//! Blog Components
//!
//! Post listing with "show more" paging, and the single post page with
//! its comments.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::Alert;
use crate::commands::{self, PostQuery};
use crate::config::POSTS_PAGE_SIZE;
use crate::context::{use_app_context, Page};
use crate::models::{Comment, Post};

/// Another page may exist while the last one came back full.
pub fn has_more(last_page_len: usize) -> bool {
    last_page_len >= POSTS_PAGE_SIZE
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let ctx = use_app_context();
    let slug = post.slug.clone();

    view! {
        <div class="post-card" on:click=move |_| ctx.navigate(Page::Post(slug.clone()))>
            {post.image.clone().map(|src| view! { <img class="post-cover" src=src alt="" /> })}
            <div class="post-card-body">
                <h3 class="post-title">{post.title.clone()}</h3>
                <span class="post-category">{post.category.clone()}</span>
            </div>
        </div>
    }
}

/// List of posts rendered as cards
#[component]
pub fn PostList(#[prop(into)] posts: Signal<Vec<Post>>) -> impl IntoView {
    view! {
        <div class="post-grid">
            <For
                each=move || posts.get()
                key=|post| post.id.clone()
                children=|post| view! { <PostCard post=post /> }
            />
        </div>
    }
}

#[component]
pub fn Blog() -> impl IntoView {
    let ctx = use_app_context();
    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (show_more, set_show_more) = signal(false);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_page = move |start_index: usize| {
        set_loading.set(true);
        spawn_local(async move {
            let query = PostQuery {
                start_index: Some(start_index),
                limit: Some(POSTS_PAGE_SIZE),
                ..PostQuery::default()
            };
            match commands::get_posts(&query).await {
                Ok(page) => {
                    log::info!(
                        "[Blog] loaded {} posts from {} ({} total)",
                        page.posts.len(),
                        start_index,
                        page.total_posts
                    );
                    set_show_more.set(has_more(page.posts.len()));
                    set_posts.update(|all| all.extend(page.posts));
                }
                Err(e) => {
                    log::error!("[Blog] failed to load posts: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_page(0));

    view! {
        <div class="blog-page">
            <div class="browser-header">
                <h1>"Blog"</h1>
                <Show when=move || ctx.is_admin()>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(Page::CreatePost)>
                        "Create post"
                    </button>
                </Show>
            </div>
            <Alert message=error />
            <PostList posts=posts />
            <Show when=move || !loading.get() && posts.with(Vec::is_empty)>
                <p class="empty">"No posts yet."</p>
            </Show>
            <Show when=move || loading.get()>
                <p class="loading">"Loading posts..."</p>
            </Show>
            <Show when=move || show_more.get() && !loading.get()>
                <button class="show-more" on:click=move |_| load_page(posts.with(Vec::len))>
                    "Show more"
                </button>
            </Show>
        </div>
    }
}

/// Comments under a post. Failures only hide the list.
#[component]
fn CommentList(post_id: String) -> impl IntoView {
    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (loaded, set_loaded) = signal(false);

    let post_id = StoredValue::new(post_id);
    Effect::new(move |_| {
        let post_id = post_id.get_value();
        spawn_local(async move {
            match commands::get_post_comments(&post_id).await {
                Ok(found) => {
                    log::debug!("[PostView] {} comments on {}", found.len(), post_id);
                    set_comments.set(found);
                }
                Err(e) => log::warn!("[PostView] comments unavailable for {}: {}", post_id, e),
            }
            set_loaded.set(true);
        });
    });

    view! {
        <section class="comments">
            <h2>{move || format!("Comments ({})", comments.with(Vec::len))}</h2>
            <Show when=move || loaded.get() && comments.with(Vec::is_empty)>
                <p class="empty">"No comments yet."</p>
            </Show>
            <For
                each=move || comments.get()
                key=|comment| comment.id.clone()
                children=|comment| {
                    let date = comment
                        .created_at
                        .map(|d| d.format("%b %-d, %Y").to_string())
                        .unwrap_or_default();
                    view! {
                        <div class="comment">
                            <p class="comment-content">{comment.content.clone()}</p>
                            <div class="comment-meta">
                                <span>{date}</span>
                                <span>{comment.likes_label()}</span>
                            </div>
                        </div>
                    }
                }
            />
        </section>
    }
}

#[component]
pub fn PostView(slug: String) -> impl IntoView {
    let ctx = use_app_context();
    let (post, set_post) = signal::<Option<Post>>(None);
    let (recent, set_recent) = signal(Vec::<Post>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let slug_value = StoredValue::new(slug);
    Effect::new(move |_| {
        let slug = slug_value.get_value();
        spawn_local(async move {
            match commands::get_post_by_slug(&slug).await {
                Ok(Some(found)) => set_post.set(Some(found)),
                Ok(None) => set_error.set(Some("Post not found".to_string())),
                Err(e) => {
                    log::error!("[PostView] failed to load {}: {}", slug, e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
        spawn_local(async move {
            let query = PostQuery {
                limit: Some(3),
                ..PostQuery::default()
            };
            match commands::get_posts(&query).await {
                Ok(page) => set_recent.set(page.posts),
                Err(e) => log::warn!("[PostView] recent posts unavailable: {}", e),
            }
        });
    });

    view! {
        <div class="post-page">
            <button class="back-btn" on:click=move |_| ctx.navigate(Page::Blog)>"← Blog"</button>
            <Alert message=error />
            <Show when=move || loading.get()>
                <p class="loading">"Loading post..."</p>
            </Show>
            {move || {
                post.get().map(|post| {
                    let minutes = post.reading_minutes();
                    view! {
                        <article class="post">
                            <h1 class="post-title">{post.title.clone()}</h1>
                            <span class="post-category">{post.category.clone()}</span>
                            {post.image.clone().map(|src| view! { <img class="post-cover" src=src alt=post.title.clone() /> })}
                            <div class="post-meta">
                                <span>{post.display_date()}</span>
                                <span>{format!("{} mins read", minutes)}</span>
                            </div>
                            <div class="post-content" inner_html=post.content.clone()></div>
                            <CommentList post_id=post.id.clone() />
                        </article>
                    }
                })
            }}
            <Show when=move || !recent.with(Vec::is_empty)>
                <h2 class="recent-heading">"Recent articles"</h2>
                <PostList posts=recent />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more_only_after_full_page() {
        assert!(has_more(POSTS_PAGE_SIZE));
        assert!(!has_more(POSTS_PAGE_SIZE - 1));
        assert!(!has_more(0));
    }
}
