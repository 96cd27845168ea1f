//! Application Context
//!
//! Session and page selection, provided once at the app root via the
//! Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::error::ApiError;
use crate::models::User;
use crate::session;

/// Which view the app shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Login,
    TeacherSignUp,
    Home,
    Files,
    Upload,
    /// Playlist browser, optionally opening one playlist (from search)
    Playlists { selected: Option<String> },
    CreatePlaylist,
    Search { term: String },
    Blog,
    Post(String),
    CreatePost,
    /// Admin overview and user management
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    SignedIn,
    Admin,
}

impl Page {
    pub fn access(&self) -> Access {
        match self {
            Page::Login | Page::TeacherSignUp | Page::Blog | Page::Post(_) => Access::Public,
            Page::Home | Page::Files | Page::Playlists { .. } | Page::Search { .. } => {
                Access::SignedIn
            }
            Page::Upload | Page::CreatePlaylist | Page::CreatePost | Page::Dashboard => {
                Access::Admin
            }
        }
    }

    /// Where a guard sends a visitor who may not see this page
    pub fn redirect_for(&self, user: Option<&User>) -> Option<Page> {
        match (self.access(), user) {
            (Access::Public, _) => None,
            (_, None) => Some(Page::Login),
            (Access::Admin, Some(user)) if !user.is_admin => Some(Page::Home),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Sign in",
            Page::TeacherSignUp => "Teacher registration",
            Page::Home => "Home",
            Page::Files => "Files",
            Page::Upload => "Upload",
            Page::Playlists { .. } => "Videos",
            Page::CreatePlaylist => "New playlist",
            Page::Search { .. } => "Search",
            Page::Blog => "Blog",
            Page::Post(_) => "Post",
            Page::CreatePost => "Create post",
            Page::Dashboard => "Dashboard",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user - read
    pub user: ReadSignal<Option<User>>,
    /// Signed-in user - write
    set_user: WriteSignal<Option<User>>,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Term of the most recent search, for Back from a search hit
    pub last_search: ReadSignal<String>,
    set_last_search: WriteSignal<String>,
    /// Trigger to reload listings from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload listings from backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    /// Build the context, restoring a saved session if there is one.
    pub fn new() -> Self {
        let restored = session::load_user();
        if let Some(user) = &restored {
            log::info!("[Session] restored session for {}", user.username);
        }
        let start = if restored.is_some() { Page::Home } else { Page::Login };

        let (user, set_user) = signal(restored);
        let (page, set_page) = signal(start);
        let (last_search, set_last_search) = signal(String::new());
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            user,
            set_user,
            page,
            set_page,
            last_search,
            set_last_search,
            reload_trigger,
            set_reload_trigger,
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("[Nav] -> {:?}", page);
        if let Page::Search { term } = &page {
            self.set_last_search.set(term.clone());
        }
        self.set_page.set(page);
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.user.with(|u| u.as_ref().map_or(false, |u| u.is_admin))
    }

    /// Remember the user and go to Home.
    pub fn sign_in(&self, user: User) {
        log::info!("[Session] signed in as {} (admin: {})", user.username, user.is_admin);
        if let Err(e) = session::save_user(&user) {
            log::warn!("[Session] could not persist session: {}", e);
        }
        self.set_user.set(Some(user));
        self.navigate(Page::Home);
    }

    /// Drop the session locally, then tell the backend.
    pub fn sign_out(&self) {
        if let Err(e) = session::clear_user() {
            log::warn!("[Session] could not clear stored session: {}", e);
        }
        self.set_user.set(None);
        self.navigate(Page::Login);
        spawn_local(async move {
            if let Err(e) = commands::sign_out().await {
                log::warn!("[Session] sign-out request failed: {}", e);
            }
        });
    }

    /// Trigger a reload of listings
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Sign out if a signed-in request was refused. Returns whether it was.
    pub fn expire_session_on(&self, err: &ApiError) -> bool {
        if !err.is_auth() || !self.is_signed_in() {
            return false;
        }
        log::warn!("[Session] request refused ({}), signing out", err);
        self.sign_out();
        true
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> User {
        User {
            id: "u1".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            profile_picture: None,
            is_admin,
            created_at: None,
        }
    }

    #[test]
    fn test_public_pages_never_redirect() {
        assert_eq!(Page::Blog.redirect_for(None), None);
        assert_eq!(Page::Post("hello".into()).redirect_for(None), None);
        assert_eq!(Page::Login.redirect_for(Some(&user(false))), None);
    }

    #[test]
    fn test_signed_in_pages_need_session() {
        assert_eq!(Page::Files.redirect_for(None), Some(Page::Login));
        assert_eq!(Page::Files.redirect_for(Some(&user(false))), None);
    }

    #[test]
    fn test_admin_pages() {
        assert_eq!(Page::Upload.redirect_for(None), Some(Page::Login));
        assert_eq!(Page::CreatePost.redirect_for(Some(&user(false))), Some(Page::Home));
        assert_eq!(Page::CreatePlaylist.redirect_for(Some(&user(true))), None);
        assert_eq!(Page::Dashboard.redirect_for(Some(&user(false))), Some(Page::Home));
    }
}
