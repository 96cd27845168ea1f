//! Frontend Models
//!
//! Data structures matching the backend's JSON documents.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use folder_tree::{Entity, Foldered};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Signed-in user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn joined(&self) -> String {
        self.created_at
            .map(|date| date.format("%b %-d").to_string())
            .unwrap_or_default()
    }
}

/// One page of `getusers`, with the dashboard totals
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub last_month_users: u64,
}

/// Uploaded document (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub folder: Option<String>,
    /// Storage URL of the uploaded content
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FileRecord {
    pub fn kind(&self) -> FileKind {
        FileKind::classify(&self.title, self.image.as_deref())
    }

    /// Shortened uuid shown under the title
    pub fn short_id(&self) -> String {
        let short: String = self.uuid.chars().take(10).collect();
        format!("{}...", short)
    }
}

impl Foldered for FileRecord {
    fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }
}

impl Entity for FileRecord {
    type Id = String;

    fn id(&self) -> String {
        self.uuid.clone()
    }
}

/// Badge shown on a file card, derived from the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
    Doc,
    Excel,
    Ppt,
    Zip,
    Text,
    Other,
}

impl FileKind {
    /// Classify by extension appearing anywhere in the title; first match wins.
    pub fn classify(title: &str, storage_url: Option<&str>) -> Self {
        fn has(name: &str, exts: &[&str]) -> bool {
            exts.iter().any(|ext| name.contains(ext))
        }

        let name = title.to_lowercase();

        if has(&name, &[".pdf"]) || storage_url.map_or(false, |url| url.contains("pdf")) {
            FileKind::Pdf
        } else if has(&name, &[".jpg", ".jpeg", ".png", ".gif", ".svg"]) {
            FileKind::Image
        } else if has(&name, &[".doc", ".docx"]) {
            FileKind::Doc
        } else if has(&name, &[".xls", ".xlsx"]) {
            FileKind::Excel
        } else if has(&name, &[".ppt", ".pptx"]) {
            FileKind::Ppt
        } else if has(&name, &[".zip", ".rar"]) {
            FileKind::Zip
        } else if has(&name, &[".txt"]) {
            FileKind::Text
        } else {
            FileKind::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Image => "IMAGE",
            FileKind::Doc => "DOC",
            FileKind::Excel => "EXCEL",
            FileKind::Ppt => "PPT",
            FileKind::Zip => "ZIP",
            FileKind::Text => "TEXT",
            FileKind::Other => "FILE",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FileKind::Pdf => "badge badge-pdf",
            FileKind::Image => "badge badge-image",
            FileKind::Doc => "badge badge-doc",
            FileKind::Excel => "badge badge-excel",
            FileKind::Ppt => "badge badge-ppt",
            FileKind::Zip => "badge badge-zip",
            FileKind::Text => "badge badge-text",
            FileKind::Other => "badge badge-file",
        }
    }
}

/// Video playlist (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Foldered for Playlist {
    fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }
}

impl Entity for Playlist {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn youtube_id_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?:v=|youtu\.be/|/embed/)([\w-]+)").ok())
        .as_ref()
}

impl Video {
    /// Embeddable player URL; non-YouTube links are returned unchanged.
    pub fn embed_url(&self) -> String {
        youtube_id_pattern()
            .and_then(|re| re.captures(&self.url))
            .and_then(|caps| caps.get(1))
            .map(|id| format!("https://www.youtube.com/embed/{}", id.as_str()))
            .unwrap_or_else(|| self.url.clone())
    }

    pub fn display_title(&self, index: usize) -> String {
        self.title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("Video {}", index + 1))
    }
}

fn default_category() -> String {
    "uncategorized".to_string()
}

/// Blog post (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    /// Rendered HTML from the editor
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    pub slug: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Rough reading time, one minute per thousand characters of HTML
    pub fn reading_minutes(&self) -> usize {
        (self.content.len() as f64 / 1000.0).round() as usize
    }

    pub fn display_date(&self) -> String {
        self.created_at
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

/// One page of `getposts`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub total_posts: u64,
    #[serde(default)]
    pub last_month_posts: u64,
}

/// Reader comment on a post
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub number_of_likes: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn likes_label(&self) -> String {
        match self.number_of_likes {
            1 => "1 like".to_string(),
            n => format!("{} likes", n),
        }
    }
}

/// One page of `getcomments`, with the dashboard totals
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub total_comments: u64,
    #[serde(default)]
    pub last_month_comments: u64,
}

/// Body of a post creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Anything the portal lists, tagged by kind
#[derive(Debug, Clone, PartialEq)]
pub enum PortalItem {
    File(FileRecord),
    Playlist(Playlist),
    Post(Post),
}

impl PortalItem {
    pub fn kind_label(&self) -> &'static str {
        match self {
            PortalItem::File(_) => "File",
            PortalItem::Playlist(_) => "Playlist",
            PortalItem::Post(_) => "Post",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            PortalItem::File(file) => &file.title,
            PortalItem::Playlist(playlist) => &playlist.name,
            PortalItem::Post(post) => &post.title,
        }
    }

    /// Unique across kinds, for keyed lists
    pub fn key(&self) -> String {
        match self {
            PortalItem::File(file) => format!("file:{}", file.uuid),
            PortalItem::Playlist(playlist) => format!("playlist:{}", playlist.id),
            PortalItem::Post(post) => format!("post:{}", post.id),
        }
    }
}

impl Foldered for PortalItem {
    fn folder(&self) -> Option<&str> {
        match self {
            PortalItem::File(file) => file.folder(),
            PortalItem::Playlist(playlist) => playlist.folder(),
            PortalItem::Post(_) => None,
        }
    }
}
