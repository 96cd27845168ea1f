//! Aggregated Search
//!
//! Posts are searched server-side; files and playlists are filtered here
//! from the full listings.

use crate::models::{FileRecord, Playlist, PortalItem, Post};

fn matches(field: Option<&str>, needle: &str) -> bool {
    field.map_or(false, |value| value.to_lowercase().contains(needle))
}

/// Files whose title or folder contains `term`, ignoring case.
/// A blank term keeps every file.
pub fn filter_files(files: &[FileRecord], term: &str) -> Vec<FileRecord> {
    let needle = term.trim().to_lowercase();
    files
        .iter()
        .filter(|file| {
            needle.is_empty()
                || matches(Some(&file.title), &needle)
                || matches(file.folder.as_deref(), &needle)
        })
        .cloned()
        .collect()
}

/// Playlists whose name, description or folder contains `term`, ignoring case.
pub fn filter_playlists(playlists: &[Playlist], term: &str) -> Vec<Playlist> {
    let needle = term.trim().to_lowercase();
    playlists
        .iter()
        .filter(|playlist| {
            needle.is_empty()
                || matches(Some(&playlist.name), &needle)
                || matches(playlist.description.as_deref(), &needle)
                || matches(playlist.folder.as_deref(), &needle)
        })
        .cloned()
        .collect()
}

/// Everything one search returned
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub posts: Vec<Post>,
    pub files: Vec<FileRecord>,
    pub playlists: Vec<Playlist>,
}

impl SearchResults {
    pub fn collect(term: &str, posts: Vec<Post>, files: &[FileRecord], playlists: &[Playlist]) -> Self {
        Self {
            posts,
            files: filter_files(files, term),
            playlists: filter_playlists(playlists, term),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len() + self.files.len() + self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All hits as tagged items: posts, then files, then playlists
    pub fn items(&self) -> Vec<PortalItem> {
        self.posts
            .iter()
            .cloned()
            .map(PortalItem::Post)
            .chain(self.files.iter().cloned().map(PortalItem::File))
            .chain(self.playlists.iter().cloned().map(PortalItem::Playlist))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(title: &str, folder: Option<&str>) -> FileRecord {
        FileRecord {
            uuid: title.to_string(),
            title: title.to_string(),
            folder: folder.map(String::from),
            image: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn playlist(name: &str, description: Option<&str>, folder: Option<&str>) -> Playlist {
        Playlist {
            id: name.to_string(),
            name: name.to_string(),
            description: description.map(String::from),
            folder: folder.map(String::from),
            videos: Vec::new(),
            created_at: None,
        }
    }

    #[test]
    fn test_filter_files_by_title_or_folder() {
        let files = vec![
            file("Algebra notes.pdf", None),
            file("week1.pdf", Some("Math/Algebra")),
            file("essay.docx", Some("English")),
        ];
        let hits = filter_files(&files, "ALGEBRA");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|f| f.title != "essay.docx"));
    }

    #[test]
    fn test_blank_term_matches_everything() {
        let files = vec![file("a", None), file("b", Some("X"))];
        assert_eq!(filter_files(&files, "   ").len(), 2);
        let playlists = vec![playlist("p", None, None)];
        assert_eq!(filter_playlists(&playlists, "").len(), 1);
    }

    #[test]
    fn test_filter_playlists_checks_description() {
        let playlists = vec![
            playlist("Week 1", Some("Intro to fractions"), None),
            playlist("Week 2", None, Some("Math")),
            playlist("Poems", None, None),
        ];
        assert_eq!(filter_playlists(&playlists, "fraction")[0].name, "Week 1");
        assert_eq!(filter_playlists(&playlists, "math")[0].name, "Week 2");
        assert!(filter_playlists(&playlists, "chemistry").is_empty());
    }

    #[test]
    fn test_results_items_order() {
        let results = SearchResults::collect(
            "",
            Vec::new(),
            &[file("a.pdf", None)],
            &[playlist("p", None, None)],
        );
        let kinds: Vec<_> = results.items().iter().map(|i| i.kind_label()).collect();
        assert_eq!(kinds, vec!["File", "Playlist"]);
        assert_eq!(results.len(), 2);
        assert!(!results.is_empty());
    }
}
