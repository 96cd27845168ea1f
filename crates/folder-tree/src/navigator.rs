//! Browse Navigator
//!
//! Navigation state of one browsing view (files or playlists):
//!
//! ```text
//! Root -> Folder(a) -> Folder(a/b) -> ...
//! Root | Folder(p) -> viewing an item -> Back -> same Root | Folder(p)
//! Folder(a/b) -> Back -> Folder(a) -> Back -> Root
//! ```
//!
//! Only one level of history is kept: the location an item was opened from.

use std::fmt::Debug;

use crate::path::parent_of;
use crate::projector::{FolderTree, Foldered};

/// A record with a stable identifier
pub trait Entity {
    type Id: Clone + Eq + Debug;

    fn id(&self) -> Self::Id;
}

/// Folder currently listed by the view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Root,
    Folder(String),
}

impl Location {
    /// Location for an optional folder path (`None` = root)
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(p) if !p.is_empty() => Location::Folder(p.to_string()),
            _ => Location::Root,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Location::Root => None,
            Location::Folder(path) => Some(path),
        }
    }

    /// One level up; the root stays the root.
    pub fn parent(&self) -> Location {
        Location::from_path(self.path().and_then(parent_of))
    }
}

/// How an item viewer was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOrigin {
    /// Clicked inside the folder browser
    Browse,
    /// Opened from the search page
    Search,
}

/// Item currently open in the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewing<K> {
    pub id: K,
    pub origin: ItemOrigin,
}

/// Result of pressing Back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// Viewer closed, folder listing shown again
    ClosedItem,
    /// Moved up to this location
    Moved(Location),
    /// Viewer closed; the caller should return to the search page
    ReturnToSearch,
    /// Already at the root, nothing changed
    AtRoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator<K> {
    location: Location,
    viewing: Option<Viewing<K>>,
}

impl<K> Default for Navigator<K> {
    fn default() -> Self {
        Self {
            location: Location::Root,
            viewing: None,
        }
    }
}

impl<K: Clone + Eq + Debug> Navigator<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an item open, as when arriving from search.
    pub fn with_item(id: K, origin: ItemOrigin) -> Self {
        Self {
            location: Location::Root,
            viewing: Some(Viewing { id, origin }),
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn current_folder(&self) -> Option<&str> {
        self.location.path()
    }

    pub fn viewing(&self) -> Option<&Viewing<K>> {
        self.viewing.as_ref()
    }

    pub fn is_viewing(&self, id: &K) -> bool {
        self.viewing.as_ref().map_or(false, |v| &v.id == id)
    }

    /// Show the listing of `path`, closing any open item.
    pub fn open_folder(&mut self, path: impl Into<String>) {
        let path = path.into();
        log::debug!("[Navigator] open folder {}", path);
        self.viewing = None;
        self.location = Location::from_path(Some(&path));
    }

    pub fn go_root(&mut self) {
        self.viewing = None;
        self.location = Location::Root;
    }

    /// Open an item; the current location becomes the Back target.
    pub fn open_item(&mut self, id: K, origin: ItemOrigin) {
        log::debug!("[Navigator] open item {:?} ({:?})", id, origin);
        self.viewing = Some(Viewing { id, origin });
    }

    pub fn close_item(&mut self) {
        self.viewing = None;
    }

    pub fn back(&mut self) -> BackOutcome {
        if let Some(viewing) = self.viewing.take() {
            return match viewing.origin {
                ItemOrigin::Browse => BackOutcome::ClosedItem,
                ItemOrigin::Search => BackOutcome::ReturnToSearch,
            };
        }
        match self.location {
            Location::Root => BackOutcome::AtRoot,
            Location::Folder(_) => {
                self.location = self.location.parent();
                BackOutcome::Moved(self.location.clone())
            }
        }
    }

    /// Re-align the state with the current records after they changed.
    ///
    /// Closes the viewer if its item is gone, then walks up while the
    /// current folder has neither subfolders nor items. Returns `true`
    /// when anything changed.
    pub fn settle<T>(&mut self, tree: &FolderTree<'_, T>) -> bool
    where
        T: Foldered + Entity<Id = K>,
    {
        let mut changed = false;

        if let Some(viewing) = &self.viewing {
            if !tree.items().iter().any(|item| item.id() == viewing.id) {
                log::debug!("[Navigator] item {:?} no longer exists", viewing.id);
                self.viewing = None;
                changed = true;
            }
        }

        while let Location::Folder(path) = &self.location {
            if !tree.is_empty(path) {
                break;
            }
            log::debug!("[Navigator] folder {} is empty, moving up", path);
            self.location = self.location.parent();
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Clip {
        id: String,
        folder: Option<String>,
    }

    impl Foldered for Clip {
        fn folder(&self) -> Option<&str> {
            self.folder.as_deref()
        }
    }

    impl Entity for Clip {
        type Id = String;

        fn id(&self) -> String {
            self.id.clone()
        }
    }

    fn clip(id: &str, folder: Option<&str>) -> Clip {
        Clip {
            id: id.to_string(),
            folder: folder.map(String::from),
        }
    }

    #[test]
    fn test_starts_at_root() {
        let mut nav = Navigator::<String>::new();
        assert_eq!(nav.location(), &Location::Root);
        assert_eq!(nav.back(), BackOutcome::AtRoot);
    }

    #[test]
    fn test_back_walks_up_one_level() {
        let mut nav = Navigator::<String>::new();
        nav.open_folder("Math");
        nav.open_folder("Math/Algebra");
        nav.open_folder("Math/Algebra/Chapter1");

        assert_eq!(
            nav.back(),
            BackOutcome::Moved(Location::Folder("Math/Algebra".into()))
        );
        assert_eq!(nav.back(), BackOutcome::Moved(Location::Folder("Math".into())));
        assert_eq!(nav.back(), BackOutcome::Moved(Location::Root));
        assert_eq!(nav.back(), BackOutcome::AtRoot);
    }

    #[test]
    fn test_item_back_returns_to_folder() {
        let mut nav = Navigator::new();
        nav.open_folder("Math/Algebra");
        nav.open_item("p1".to_string(), ItemOrigin::Browse);
        assert!(nav.is_viewing(&"p1".to_string()));

        assert_eq!(nav.back(), BackOutcome::ClosedItem);
        assert_eq!(nav.current_folder(), Some("Math/Algebra"));
        assert!(nav.viewing().is_none());
    }

    #[test]
    fn test_item_from_search_returns_to_search() {
        let mut nav = Navigator::with_item("p1".to_string(), ItemOrigin::Search);
        assert_eq!(nav.back(), BackOutcome::ReturnToSearch);
        assert!(nav.viewing().is_none());
        assert_eq!(nav.location(), &Location::Root);
    }

    #[test]
    fn test_open_folder_closes_item() {
        let mut nav = Navigator::new();
        nav.open_item("p1".to_string(), ItemOrigin::Browse);
        nav.open_folder("Math");
        assert!(nav.viewing().is_none());
        assert_eq!(nav.current_folder(), Some("Math"));
        nav.go_root();
        assert_eq!(nav.location(), &Location::Root);
    }

    #[test]
    fn test_settle_collapses_to_root() {
        let mut clips = vec![clip("a", Some("Math/Algebra")), clip("b", None)];
        let mut nav = Navigator::new();
        nav.open_folder("Math/Algebra");

        assert!(!nav.settle(&FolderTree::new(&clips)));

        clips.retain(|c| c.id != "a");
        assert!(nav.settle(&FolderTree::new(&clips)));
        assert_eq!(nav.location(), &Location::Root);
    }

    #[test]
    fn test_settle_stops_at_non_empty_parent() {
        let mut clips = vec![
            clip("a", Some("Math/Algebra")),
            clip("b", Some("Math")),
        ];
        let mut nav = Navigator::new();
        nav.open_folder("Math/Algebra");

        clips.retain(|c| c.id != "a");
        nav.settle(&FolderTree::new(&clips));
        assert_eq!(nav.location(), &Location::Folder("Math".into()));
    }

    #[test]
    fn test_settle_closes_deleted_item() {
        let mut clips = vec![clip("a", Some("Math")), clip("b", Some("Math"))];
        let mut nav = Navigator::new();
        nav.open_folder("Math");
        nav.open_item("a".to_string(), ItemOrigin::Browse);

        clips.retain(|c| c.id != "a");
        assert!(nav.settle(&FolderTree::new(&clips)));
        assert!(nav.viewing().is_none());
        assert_eq!(nav.current_folder(), Some("Math"));
    }

    #[test]
    fn test_location_parent() {
        assert_eq!(Location::Folder("a/b".into()).parent(), Location::Folder("a".into()));
        assert_eq!(Location::Folder("a".into()).parent(), Location::Root);
        assert_eq!(Location::Root.parent(), Location::Root);
        assert_eq!(Location::from_path(Some("")), Location::Root);
    }
}
