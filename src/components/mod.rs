//! UI Components
//!
//! Pages and reusable Leptos components.

mod alert;
mod blog;
mod create_post;
mod dashboard;
mod delete_confirm_button;
mod file_browser;
mod file_card;
mod file_viewer;
mod folder_grid;
mod folder_picker;
mod header;
mod home;
mod login;
mod playlist_browser;
mod playlist_form;
mod playlist_viewer;
mod search_page;
mod upload_form;

pub use blog::{Blog, PostView};
pub use create_post::CreatePost;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use file_browser::FileBrowser;
pub use file_card::FileCard;
pub use file_viewer::FileViewer;
pub use header::Header;
pub use home::Home;
pub use login::{Login, TeacherSignUp};
pub use playlist_browser::PlaylistBrowser;
pub use playlist_form::PlaylistForm;
pub use playlist_viewer::PlaylistViewer;
pub use search_page::SearchPage;
pub use upload_form::UploadForm;
