//! Folder Path Helpers
//!
//! Pure string operations on `/`-delimited folder paths.
//!
//! Paths are expected without leading or trailing separators (the projector
//! trims those). A doubled separator inside a path is tolerated: the empty
//! segment is skipped rather than treated as a folder of its own.

/// Hierarchy separator inside a folder path
pub const SEPARATOR: char = '/';

/// One clickable segment of a breadcrumb trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breadcrumb<'a> {
    /// Segment name as displayed
    pub name: &'a str,
    /// Full path up to and including this segment
    pub path: &'a str,
}

/// Path with its final segment removed, `None` for a root folder.
pub fn parent_of(path: &str) -> Option<&str> {
    path.rfind(SEPARATOR)
        .map(|idx| path[..idx].trim_end_matches(SEPARATOR))
        .filter(|parent| !parent.is_empty())
}

/// Last segment of the path.
pub fn leaf_name(path: &str) -> &str {
    path.rsplit_once(SEPARATOR).map_or(path, |(_, leaf)| leaf)
}

/// Number of segments (a root folder has depth 1).
pub fn depth(path: &str) -> usize {
    path.split(SEPARATOR).filter(|segment| !segment.is_empty()).count()
}

pub fn is_root_folder(path: &str) -> bool {
    !path.contains(SEPARATOR)
}

/// `candidate` sits exactly one level below `parent`.
pub fn is_direct_child(candidate: &str, parent: &str) -> bool {
    candidate
        .strip_prefix(parent)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
        .map(|rest| rest.trim_start_matches(SEPARATOR))
        .map_or(false, |rest| !rest.is_empty() && !rest.contains(SEPARATOR))
}

/// `folder` is `path` itself or nested anywhere below it.
pub fn is_within(folder: &str, path: &str) -> bool {
    match folder.strip_prefix(path) {
        Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR),
        None => false,
    }
}

/// Every ancestor of `path` followed by `path` itself, outermost first.
///
/// `lineage("a/b/c")` yields `"a"`, `"a/b"`, `"a/b/c"`. Prefixes cut at an
/// empty segment (`""`, `"a/"`) are skipped.
pub fn lineage(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices(SEPARATOR)
        .map(move |(idx, _)| &path[..idx])
        .filter(|prefix| !prefix.is_empty() && !prefix.ends_with(SEPARATOR))
        .chain(std::iter::once(path))
}

/// Breadcrumb trail for a folder path, outermost first.
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb<'_>> {
    lineage(path)
        .map(|prefix| Breadcrumb {
            name: leaf_name(prefix),
            path: prefix,
        })
        .collect()
}

/// Append a child segment to a parent path.
pub fn join(parent: &str, child: &str) -> String {
    format!("{}{}{}", parent, SEPARATOR, child)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("a/b/c"), Some("a/b"));
        assert_eq!(parent_of("a/b"), Some("a"));
        assert_eq!(parent_of("a"), None);
    }

    #[test]
    fn test_leaf_name_and_depth() {
        assert_eq!(leaf_name("Math/Algebra/Chapter1"), "Chapter1");
        assert_eq!(leaf_name("Math"), "Math");
        assert_eq!(depth("Math"), 1);
        assert_eq!(depth("Math/Algebra/Chapter1"), 3);
    }

    #[test]
    fn test_is_direct_child() {
        assert!(is_direct_child("Math/Algebra", "Math"));
        assert!(!is_direct_child("Math/Algebra/Chapter1", "Math"));
        assert!(!is_direct_child("Math", "Math"));
        // Shared prefix without a separator is a sibling, not a child
        assert!(!is_direct_child("Mathematics/Algebra", "Math"));
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("Math", "Math"));
        assert!(is_within("Math/Algebra/Chapter1", "Math"));
        assert!(!is_within("Mathematics", "Math"));
        assert!(!is_within("Math", "Math/Algebra"));
    }

    #[test]
    fn test_lineage() {
        let all: Vec<&str> = lineage("a/b/c").collect();
        assert_eq!(all, vec!["a", "a/b", "a/b/c"]);
        let single: Vec<&str> = lineage("a").collect();
        assert_eq!(single, vec!["a"]);
    }

    #[test]
    fn test_breadcrumbs() {
        let trail = breadcrumbs("Math/Algebra/Chapter1");
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[0], Breadcrumb { name: "Math", path: "Math" });
        assert_eq!(trail[1], Breadcrumb { name: "Algebra", path: "Math/Algebra" });
        assert_eq!(trail[2].name, "Chapter1");
        assert_eq!(trail[2].path, "Math/Algebra/Chapter1");
    }

    #[test]
    fn test_doubled_separator_skips_empty_segment() {
        let all: Vec<&str> = lineage("a//b").collect();
        assert_eq!(all, vec!["a", "a//b"]);
        assert!(is_direct_child("a//b", "a"));
        assert!(!is_direct_child("a/", "a"));
        assert_eq!(parent_of("a//b"), Some("a"));
        assert_eq!(depth("a//b"), 2);
        assert_eq!(leaf_name("a//b"), "b");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("Math", "Algebra"), "Math/Algebra");
    }
}
