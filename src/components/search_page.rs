//! Search Page Component
//!
//! One search box over posts, files and playlists.

use folder_tree::Foldered;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::Alert;
use super::blog::has_more;
use super::FileViewer;
use crate::commands::{self, category_filter, PostQuery, SortOrder, CATEGORIES};
use crate::context::{use_app_context, Page};
use crate::models::{FileRecord, Playlist, PortalItem, Post};
use crate::search::SearchResults;

/// One search hit of any kind
#[component]
fn SearchHit(item: PortalItem, on_open_file: Callback<FileRecord>) -> impl IntoView {
    let ctx = use_app_context();
    let kind = item.kind_label();
    let title = item.title().to_string();
    let folder = item.folder().map(String::from);
    let detail = match &item {
        PortalItem::Post(post) => post.category.clone(),
        PortalItem::File(file) => file.short_id(),
        PortalItem::Playlist(playlist) => format!("{} videos", playlist.videos.len()),
    };

    let open = move |_| match &item {
        PortalItem::Post(post) => ctx.navigate(Page::Post(post.slug.clone())),
        PortalItem::File(file) => on_open_file.run(file.clone()),
        PortalItem::Playlist(playlist) => ctx.navigate(Page::Playlists {
            selected: Some(playlist.id.clone()),
        }),
    };

    view! {
        <div class=format!("search-hit hit-{}", kind.to_lowercase()) on:click=open>
            <span class="hit-kind">{kind}</span>
            <h3>{title}</h3>
            {folder.map(|f| view! { <p class="viewer-folder">"📁 " {f}</p> })}
            <p class="hit-detail">{detail}</p>
        </div>
    }
}

#[component]
pub fn SearchPage(term: String) -> impl IntoView {
    let ctx = use_app_context();

    let (term_input, set_term_input) = signal(term.clone());
    let (sort, set_sort) = signal::<Option<SortOrder>>(None);
    let (category, set_category) = signal::<Option<String>>(None);
    let (results, set_results) = signal(SearchResults::default());
    let (show_more, set_show_more) = signal(false);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (open_file, set_open_file) = signal::<Option<FileRecord>>(None);
    let (run, set_run) = signal(0u32);

    let active_term = StoredValue::new(term);

    let post_query = move |start_index: usize| {
        PostQuery::search(
            &active_term.get_value(),
            sort.get_untracked(),
            category.get_untracked(),
            start_index,
        )
    };

    // Run the search on mount and whenever the filters are applied
    Effect::new(move |_| {
        let _ = run.get();
        let term = active_term.get_value();
        let query = post_query(0);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let posts: Vec<Post> = match commands::get_posts(&query).await {
                Ok(page) => page.posts,
                Err(e) => {
                    log::error!("[Search] post search failed: {}", e);
                    set_error.set(Some(e.user_message()));
                    Vec::new()
                }
            };
            let files: Vec<FileRecord> = commands::list_files().await.unwrap_or_else(|e| {
                log::error!("[Search] file listing failed: {}", e);
                Vec::new()
            });
            let playlists: Vec<Playlist> = commands::list_playlists().await.unwrap_or_else(|e| {
                log::error!("[Search] playlist listing failed: {}", e);
                Vec::new()
            });

            set_show_more.set(has_more(posts.len()));
            let found = SearchResults::collect(&term, posts, &files, &playlists);
            log::info!("[Search] '{}' matched {} results", term, found.len());
            set_results.set(found);
            set_loading.set(false);
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let term = term_input.get().trim().to_string();
        if term != active_term.get_value() {
            ctx.navigate(Page::Search { term });
        } else {
            set_run.update(|v| *v += 1);
        }
    };

    let more_posts = move |_| {
        let query = post_query(results.with(|r| r.posts.len()));
        spawn_local(async move {
            match commands::get_posts(&query).await {
                Ok(page) => {
                    set_show_more.set(has_more(page.posts.len()));
                    set_results.update(|r| r.posts.extend(page.posts));
                }
                Err(e) => set_error.set(Some(e.user_message())),
            }
        });
    };

    let can_delete = Signal::derive(|| false);
    let on_open_file = Callback::new(move |file: FileRecord| set_open_file.set(Some(file)));

    view! {
        <div class="search-page">
            <form class="search-sidebar" on:submit=submit>
                <input
                    type="text"
                    id="searchTerm"
                    placeholder="Search..."
                    prop:value=move || term_input.get()
                    on:input=move |ev| set_term_input.set(event_target_value(&ev))
                />
                <select
                    id="sort"
                    prop:value=move || sort.get().map_or("", |s| s.as_str())
                    on:change=move |ev| set_sort.set(SortOrder::from_filter(&event_target_value(&ev)))
                >
                    <option value="">"Any order"</option>
                    <option value="desc">"Latest"</option>
                    <option value="asc">"Oldest"</option>
                </select>
                <select
                    id="category"
                    prop:value=move || category.get().unwrap_or_default()
                    on:change=move |ev| set_category.set(category_filter(&event_target_value(&ev)))
                >
                    <option value="">"All categories"</option>
                    {CATEGORIES
                        .iter()
                        .map(|c| view! { <option value=*c>{*c}</option> })
                        .collect_view()}
                </select>
                <button type="submit" class="primary-btn">"Apply filters"</button>
            </form>

            <Alert message=error />

            {move || match open_file.get() {
                Some(file) => view! {
                    <FileViewer
                        file=file
                        on_back=Callback::new(move |_| set_open_file.set(None))
                        can_delete=can_delete
                        on_delete=Callback::new(|_: String| {})
                    />
                }
                .into_any(),
                None => view! {
                    <div class="search-results">
                        <Show when=move || loading.get()>
                            <p class="loading">"Searching..."</p>
                        </Show>
                        <Show when=move || !loading.get() && results.with(SearchResults::is_empty)>
                            <p class="empty">"No results found."</p>
                        </Show>
                        <div class="search-hits">
                            <For
                                each=move || results.with(SearchResults::items)
                                key=PortalItem::key
                                children=move |item| view! { <SearchHit item=item on_open_file=on_open_file /> }
                            />
                        </div>
                        <Show when=move || show_more.get() && !loading.get()>
                            <button class="show-more" on:click=more_posts>"Show more posts"</button>
                        </Show>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
