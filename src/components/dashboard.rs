//! Dashboard Component
//!
//! Admin overview: site totals, the latest users, comments and posts, and
//! the full user list with deletes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::{flash, Alert};
use super::DeleteConfirmButton;
use crate::commands::{self, PostQuery};
use crate::config::{DASHBOARD_RECENT, USERS_PAGE_SIZE};
use crate::context::use_app_context;
use crate::models::{Comment, CommentPage, Post, PostPage, User, UserPage};

/// One summary tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub label: &'static str,
    pub total: u64,
    pub last_month: u64,
}

pub fn totals(users: &UserPage, comments: &CommentPage, posts: &PostPage) -> [Totals; 3] {
    [
        Totals {
            label: "Total users",
            total: users.total_users,
            last_month: users.last_month_users,
        },
        Totals {
            label: "Total comments",
            total: comments.total_comments,
            last_month: comments.last_month_comments,
        },
        Totals {
            label: "Total posts",
            total: posts.total_posts,
            last_month: posts.last_month_posts,
        },
    ]
}

/// Admins may delete any account but their own
fn can_delete_user(current: Option<&User>, user: &User) -> bool {
    current.map_or(false, |me| me.is_admin && me.id != user.id)
}

#[component]
fn Overview() -> impl IntoView {
    let (users, set_users) = signal(UserPage::default());
    let (comments, set_comments) = signal(CommentPage::default());
    let (posts, set_posts) = signal(PostPage::default());

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_users(0, DASHBOARD_RECENT).await {
                Ok(page) => set_users.set(page),
                Err(e) => log::warn!("[Dashboard] users unavailable: {}", e),
            }
        });
        spawn_local(async move {
            match commands::get_comments(DASHBOARD_RECENT).await {
                Ok(page) => set_comments.set(page),
                Err(e) => log::warn!("[Dashboard] comments unavailable: {}", e),
            }
        });
        spawn_local(async move {
            let query = PostQuery {
                limit: Some(DASHBOARD_RECENT),
                ..PostQuery::default()
            };
            match commands::get_posts(&query).await {
                Ok(page) => set_posts.set(page),
                Err(e) => log::warn!("[Dashboard] posts unavailable: {}", e),
            }
        });
    });

    let tiles = move || {
        users.with(|u| comments.with(|c| posts.with(|p| totals(u, c, p))))
            .into_iter()
            .map(|tile| {
                view! {
                    <div class="stat-tile">
                        <h3>{tile.label}</h3>
                        <p class="stat-total">{tile.total}</p>
                        <p class="stat-month">{format!("↑ {} last month", tile.last_month)}</p>
                    </div>
                }
            })
            .collect_view()
    };

    let recent_users = move || users.with(|u| u.users.clone());
    let recent_comments = move || comments.with(|c| c.comments.clone());
    let recent_posts = move || posts.with(|p| p.posts.clone());

    view! {
        <div class="stat-grid">{tiles}</div>
        <div class="recent-grid">
            <table class="recent-table">
                <caption>"Recent users"</caption>
                <For
                    each=recent_users
                    key=|user: &User| user.id.clone()
                    children=|user| view! {
                        <tr>
                            <td>{user.profile_picture.clone().map(|src| view! { <img class="avatar" src=src alt="" /> })}</td>
                            <td>{user.username.clone()}</td>
                        </tr>
                    }
                />
            </table>
            <table class="recent-table">
                <caption>"Recent comments"</caption>
                <For
                    each=recent_comments
                    key=|comment: &Comment| comment.id.clone()
                    children=|comment| view! {
                        <tr>
                            <td class="clamp">{comment.content.clone()}</td>
                            <td>{comment.number_of_likes}</td>
                        </tr>
                    }
                />
            </table>
            <table class="recent-table">
                <caption>"Recent posts"</caption>
                <For
                    each=recent_posts
                    key=|post: &Post| post.id.clone()
                    children=|post| view! {
                        <tr>
                            <td>{post.title.clone()}</td>
                            <td>{post.category.clone()}</td>
                        </tr>
                    }
                />
            </table>
        </div>
    }
}

#[component]
fn UserTable() -> impl IntoView {
    let ctx = use_app_context();
    let (users, set_users) = signal(Vec::<User>::new());
    let (show_more, set_show_more) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let load_page = move |start_index: usize| {
        spawn_local(async move {
            match commands::get_users(start_index, USERS_PAGE_SIZE).await {
                Ok(page) => {
                    set_show_more.set(page.users.len() >= USERS_PAGE_SIZE);
                    set_users.update(|all| all.extend(page.users));
                }
                Err(e) => {
                    log::error!("[Dashboard] failed to load users: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    Effect::new(move |_| load_page(0));

    let delete_user = move |id: String| {
        spawn_local(async move {
            match commands::delete_user(&id).await {
                Ok(()) => {
                    log::info!("[Dashboard] deleted user {}", id);
                    set_users.update(|all| all.retain(|u| u.id != id));
                    flash(set_notice, "User deleted");
                }
                Err(e) => {
                    log::error!("[Dashboard] delete user {} failed: {}", id, e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <section class="user-admin">
            <h2>"Users"</h2>
            <Alert message=error />
            <Alert message=notice success=true />
            <table class="user-table">
                <thead>
                    <tr>
                        <th>"Joined"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Teacher"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|user| user.id.clone()
                        children=move |user| {
                            let deletable = ctx.user.with(|me| can_delete_user(me.as_ref(), &user));
                            let id = user.id.clone();
                            view! {
                                <tr>
                                    <td>{user.joined()}</td>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{if user.is_admin { "✓" } else { "✗" }}</td>
                                    <td>
                                        {deletable.then(|| view! {
                                            <DeleteConfirmButton
                                                button_class="delete-btn"
                                                label="Delete"
                                                prompt="Delete user?"
                                                on_confirm=Callback::new(move |_| delete_user(id.clone()))
                                            />
                                        })}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || show_more.get()>
                <button class="show-more" on:click=move |_| load_page(users.with(Vec::len))>
                    "Show more"
                </button>
            </Show>
        </section>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <Overview />
            <UserTable />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, is_admin: bool) -> User {
        User {
            id: id.into(),
            username: id.into(),
            email: format!("{}@example.com", id),
            profile_picture: None,
            is_admin,
            created_at: None,
        }
    }

    #[test]
    fn test_totals_order_and_values() {
        let users = UserPage {
            total_users: 40,
            last_month_users: 3,
            ..UserPage::default()
        };
        let comments = CommentPage {
            total_comments: 12,
            ..CommentPage::default()
        };
        let posts = PostPage {
            total_posts: 7,
            last_month_posts: 2,
            ..PostPage::default()
        };
        let tiles = totals(&users, &comments, &posts);
        assert_eq!(tiles[0].label, "Total users");
        assert_eq!((tiles[0].total, tiles[0].last_month), (40, 3));
        assert_eq!((tiles[1].total, tiles[1].last_month), (12, 0));
        assert_eq!((tiles[2].total, tiles[2].last_month), (7, 2));
    }

    #[test]
    fn test_admin_cannot_delete_self() {
        let me = user("t1", true);
        assert!(!can_delete_user(Some(&me), &me));
        assert!(can_delete_user(Some(&me), &user("s1", false)));
        assert!(!can_delete_user(Some(&user("s2", false)), &user("s1", false)));
        assert!(!can_delete_user(None, &user("s1", false)));
    }
}
