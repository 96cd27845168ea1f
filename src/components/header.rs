//! Header Component
//!
//! Top navigation bar with the search box and session controls.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

fn nav_links(is_admin: bool) -> Vec<Page> {
    let mut links = vec![
        Page::Home,
        Page::Files,
        Page::Playlists { selected: None },
        Page::Blog,
    ];
    if is_admin {
        links.push(Page::Dashboard);
    }
    links
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let (term, set_term) = signal(String::new());

    let search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.navigate(Page::Search {
            term: term.get().trim().to_string(),
        });
    };

    view! {
        <header class="app-header">
            <span class="brand" on:click=move |_| ctx.navigate(Page::Home)>"NexaHub"</span>
            <Show when=move || ctx.is_signed_in()>
                <nav class="main-nav">
                    {move || nav_links(ctx.is_admin())
                        .into_iter()
                        .map(|target| {
                            let label = target.title();
                            let kind = std::mem::discriminant(&target);
                            let is_active = move || ctx.page.with(|p| std::mem::discriminant(p) == kind);
                            view! {
                                <button
                                    class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                    on:click=move |_| ctx.navigate(target.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <form class="header-search" on:submit=search>
                    <input
                        type="text"
                        placeholder="Search..."
                        prop:value=move || term.get()
                        on:input=move |ev| set_term.set(event_target_value(&ev))
                    />
                </form>
            </Show>
            <div class="session">
                {move || match ctx.user.get() {
                    Some(user) => view! {
                        <span class="username">
                            {user.username.clone()}
                            {user.is_admin.then_some(" (teacher)")}
                        </span>
                        <button class="sign-out-btn" on:click=move |_| ctx.sign_out()>"Sign out"</button>
                    }
                    .into_any(),
                    None => view! {
                        <button class="sign-in-btn" on:click=move |_| ctx.navigate(Page::Login)>
                            "Sign in"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_link_only_for_admins() {
        assert!(!nav_links(false).contains(&Page::Dashboard));
        let admin = nav_links(true);
        assert_eq!(admin.last(), Some(&Page::Dashboard));
        let labels: Vec<_> = admin.iter().map(Page::title).collect();
        assert_eq!(labels, vec!["Home", "Files", "Videos", "Blog", "Dashboard"]);
    }
}
