//! Folder Projector
//!
//! Answers folder/item queries over a flat slice of records. Nothing is
//! cached: every query walks the records again, so results always reflect
//! the slice as it is right now.

use std::collections::HashSet;

use crate::path::{is_direct_child, is_root_folder, is_within, lineage, SEPARATOR};

/// Any record that can be filed into a folder
pub trait Foldered {
    /// Slash-delimited folder path, `None` when the record is unfiled
    fn folder(&self) -> Option<&str>;
}

impl<T: Foldered + ?Sized> Foldered for &T {
    fn folder(&self) -> Option<&str> {
        (**self).folder()
    }
}

/// Folder of a record without leading or trailing separators. An empty
/// result (`""`, `"/"`) means unfiled.
pub fn folder_of<T: Foldered + ?Sized>(item: &T) -> Option<&str> {
    item.folder()
        .map(|folder| folder.trim_matches(SEPARATOR))
        .filter(|folder| !folder.is_empty())
}

/// Read-only projection of a folder hierarchy over `items`
#[derive(Debug)]
pub struct FolderTree<'a, T> {
    items: &'a [T],
}

impl<'a, T> Clone for FolderTree<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for FolderTree<'a, T> {}

impl<'a, T: Foldered> FolderTree<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// The records the tree was projected from
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Every folder path, each exactly once, in order of first appearance.
    ///
    /// Ancestors of a referenced path count as folders even when no record
    /// sits in them directly, and are listed before their descendants.
    pub fn all_folders(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        let mut folders = Vec::new();
        for item in self.items {
            let Some(folder) = folder_of(item) else {
                continue;
            };
            for path in lineage(folder) {
                if seen.insert(path) {
                    folders.push(path);
                }
            }
        }
        folders
    }

    /// Folders with no parent (no `/` in the path)
    pub fn root_folders(&self) -> Vec<&'a str> {
        self.all_folders()
            .into_iter()
            .filter(|folder| is_root_folder(folder))
            .collect()
    }

    /// Folders exactly one level below `path`
    pub fn subfolders_of(&self, path: &str) -> Vec<&'a str> {
        self.all_folders()
            .into_iter()
            .filter(|folder| is_direct_child(folder, path))
            .collect()
    }

    /// Records filed directly in `path`; records in subfolders are excluded.
    pub fn items_in(&self, path: &str) -> Vec<&'a T> {
        self.items
            .iter()
            .filter(|item| folder_of(*item) == Some(path))
            .collect()
    }

    /// Records with no folder at all
    pub fn items_without_folder(&self) -> Vec<&'a T> {
        self.items
            .iter()
            .filter(|item| folder_of(*item).is_none())
            .collect()
    }

    /// Records in `path` or anywhere below it
    pub fn item_count_under(&self, path: &str) -> usize {
        self.items
            .iter()
            .filter(|item| folder_of(*item).map_or(false, |folder| is_within(folder, path)))
            .count()
    }

    /// Whether `path` still has something to show (subfolders or records).
    pub fn is_empty(&self, path: &str) -> bool {
        self.subfolders_of(path).is_empty() && self.items_in(path).is_empty()
    }
}

/// Drop every record in `path` or below it. Returns how many were removed.
pub fn remove_folder<T: Foldered>(items: &mut Vec<T>, path: &str) -> usize {
    remove_where(items, |item| {
        folder_of(item).map_or(false, |folder| is_within(folder, path))
    })
}

/// Drop every record matching `pred`. Returns how many were removed.
pub fn remove_where<T>(items: &mut Vec<T>, mut pred: impl FnMut(&T) -> bool) -> usize {
    let before = items.len();
    items.retain(|item| !pred(item));
    before - items.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Doc {
        id: u32,
        title: String,
        folder: Option<String>,
    }

    impl Foldered for Doc {
        fn folder(&self) -> Option<&str> {
            self.folder.as_deref()
        }
    }

    fn doc(id: u32, folder: Option<&str>) -> Doc {
        Doc {
            id,
            title: format!("Doc {}", id),
            folder: folder.map(String::from),
        }
    }

    fn math_fixture() -> Vec<Doc> {
        vec![
            doc(1, Some("Math")),
            doc(2, Some("Math/Algebra")),
            doc(3, Some("Math/Algebra")),
            doc(4, None),
        ]
    }

    #[test]
    fn test_math_scenario() {
        let docs = math_fixture();
        let tree = FolderTree::new(&docs);

        assert_eq!(tree.root_folders(), vec!["Math"]);
        assert_eq!(tree.subfolders_of("Math"), vec!["Math/Algebra"]);
        assert_eq!(tree.items_in("Math/Algebra").len(), 2);
        assert_eq!(tree.items_without_folder().len(), 1);
    }

    #[test]
    fn test_root_folders_are_distinct() {
        let docs = vec![
            doc(1, Some("Physics")),
            doc(2, Some("Math")),
            doc(3, Some("Physics")),
            doc(4, Some("Math/Algebra")),
            doc(5, Some("Chemistry/Organic")),
        ];
        let tree = FolderTree::new(&docs);

        // First-appearance order, no duplicates, nothing with a separator
        assert_eq!(tree.root_folders(), vec!["Physics", "Math", "Chemistry"]);
    }

    #[test]
    fn test_subfolders_only_one_level_down() {
        let docs = vec![
            doc(1, Some("Math/Algebra")),
            doc(2, Some("Math/Algebra/Chapter1")),
            doc(3, Some("Math/Geometry")),
            doc(4, Some("Mathematics/Logic")),
        ];
        let tree = FolderTree::new(&docs);

        let subs = tree.subfolders_of("Math");
        assert_eq!(subs, vec!["Math/Algebra", "Math/Geometry"]);
        for sub in &subs {
            let rest = sub.strip_prefix("Math/").unwrap();
            assert!(!rest.contains('/'));
        }
        assert_eq!(tree.subfolders_of("Math/Algebra"), vec!["Math/Algebra/Chapter1"]);
        assert!(tree.subfolders_of("Math/Geometry").is_empty());
    }

    #[test]
    fn test_items_in_is_exact_match() {
        let docs = vec![
            doc(1, Some("Math")),
            doc(2, Some("Math/Algebra")),
            doc(3, Some("Math/Algebra/Chapter1")),
        ];
        let tree = FolderTree::new(&docs);

        let ids: Vec<u32> = tree.items_in("Math").iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1]);
        let ids: Vec<u32> = tree.items_in("Math/Algebra").iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_implied_ancestors_are_folders() {
        // Nothing is filed in "Math" itself, but its descendant is
        let docs = vec![doc(1, Some("Math/Algebra/Chapter1"))];
        let tree = FolderTree::new(&docs);

        assert_eq!(tree.root_folders(), vec!["Math"]);
        assert_eq!(tree.subfolders_of("Math"), vec!["Math/Algebra"]);
        assert_eq!(tree.subfolders_of("Math/Algebra"), vec!["Math/Algebra/Chapter1"]);
        assert!(tree.items_in("Math").is_empty());
        assert!(!tree.is_empty("Math"));
        assert_eq!(
            tree.all_folders(),
            vec!["Math", "Math/Algebra", "Math/Algebra/Chapter1"]
        );
    }

    #[test]
    fn test_empty_string_folder_is_unfiled() {
        let docs = vec![doc(1, Some("")), doc(2, None), doc(3, Some("Math"))];
        let tree = FolderTree::new(&docs);

        assert_eq!(tree.items_without_folder().len(), 2);
        assert_eq!(tree.all_folders(), vec!["Math"]);
    }

    #[test]
    fn test_slash_in_title_does_not_nest() {
        let mut docs = vec![doc(1, Some("Math"))];
        docs[0].title = "Algebra/Chapter1 notes".to_string();
        let tree = FolderTree::new(&docs);

        assert_eq!(tree.all_folders(), vec!["Math"]);
        assert!(tree.subfolders_of("Math").is_empty());
        assert_eq!(tree.items_in("Math").len(), 1);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let docs = math_fixture();
        let first = FolderTree::new(&docs);
        let second = FolderTree::new(&docs);

        assert_eq!(first.all_folders(), second.all_folders());
        assert_eq!(first.root_folders(), second.root_folders());
        assert_eq!(first.subfolders_of("Math"), second.subfolders_of("Math"));
        assert_eq!(first.all_folders(), first.all_folders());
        assert_eq!(first.items_in("Math/Algebra"), second.items_in("Math/Algebra"));
        assert_eq!(first.items_without_folder(), second.items_without_folder());
    }

    #[test]
    fn test_malformed_paths_stay_reachable() {
        let docs = vec![doc(1, Some("/x")), doc(2, Some("a//b")), doc(3, Some("/"))];
        let tree = FolderTree::new(&docs);

        assert_eq!(tree.all_folders(), vec!["x", "a", "a//b"]);
        assert_eq!(tree.root_folders(), vec!["x", "a"]);
        assert_eq!(tree.items_in("x").len(), 1);
        assert_eq!(tree.subfolders_of("a"), vec!["a//b"]);
        assert_eq!(tree.items_in("a//b").len(), 1);
        assert_eq!(tree.items_without_folder().len(), 1);
        assert_eq!(tree.item_count_under("a"), 1);
    }

    #[test]
    fn test_item_count_under() {
        let docs = vec![
            doc(1, Some("Math")),
            doc(2, Some("Math/Algebra")),
            doc(3, Some("Math/Algebra/Chapter1")),
            doc(4, Some("Mathematics")),
            doc(5, None),
        ];
        let tree = FolderTree::new(&docs);

        assert_eq!(tree.item_count_under("Math"), 3);
        assert_eq!(tree.item_count_under("Math/Algebra"), 2);
        assert_eq!(tree.item_count_under("Mathematics"), 1);
        assert_eq!(tree.item_count_under("History"), 0);
    }

    #[test]
    fn test_deleting_last_item_empties_folder() {
        let mut docs = vec![doc(1, Some("Math/Algebra")), doc(2, None)];
        assert!(!FolderTree::new(&docs).is_empty("Math"));

        let removed = remove_where(&mut docs, |d| d.id == 1);
        assert_eq!(removed, 1);

        let tree = FolderTree::new(&docs);
        assert!(tree.subfolders_of("Math").is_empty());
        assert!(tree.items_in("Math").is_empty());
        assert!(tree.is_empty("Math"));
        assert!(tree.root_folders().is_empty());
    }

    #[test]
    fn test_remove_folder_takes_descendants() {
        let mut docs = vec![
            doc(1, Some("Math")),
            doc(2, Some("Math/Algebra")),
            doc(3, Some("Mathematics")),
            doc(4, None),
        ];
        let removed = remove_folder(&mut docs, "Math");

        assert_eq!(removed, 2);
        let ids: Vec<u32> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_works_over_references() {
        let docs = math_fixture();
        let refs: Vec<&Doc> = docs.iter().collect();
        let tree = FolderTree::new(&refs);
        assert_eq!(tree.root_folders(), vec!["Math"]);
    }
}
