//! Folder Choice
//!
//! Where a new upload or playlist should be filed. Forms offer four options
//! and the chosen one is collapsed into the folder path sent to the backend.

use crate::path::{join, SEPARATOR};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FolderChoice {
    /// Leave the record unfiled
    #[default]
    None,
    /// File into an existing folder
    Existing(String),
    /// Create a new folder nested inside an existing one
    Nested(String, String),
    /// Create a new root-level folder
    New(String),
}

impl FolderChoice {
    /// Form option value, used for `<select>` bindings
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderChoice::None => "none",
            FolderChoice::Existing(_) => "existing",
            FolderChoice::Nested(_, _) => "nested",
            FolderChoice::New(_) => "new",
        }
    }

    /// Build a choice from the form option and its two text inputs.
    ///
    /// Unknown options fall back to `None`.
    pub fn from_form(option: &str, existing: &str, new_folder: &str) -> Self {
        match option {
            "existing" => FolderChoice::Existing(existing.to_string()),
            "nested" => FolderChoice::Nested(existing.to_string(), new_folder.to_string()),
            "new" => FolderChoice::New(new_folder.to_string()),
            _ => FolderChoice::None,
        }
    }

    /// Folder path to send, or `None` when the record stays unfiled.
    ///
    /// Each segment is trimmed and empty segments are dropped, so `"/Math/"`
    /// files into `Math`. Any blank required input resolves to unfiled.
    pub fn resolve(&self) -> Option<String> {
        match self {
            FolderChoice::None => None,
            FolderChoice::Existing(path) => normalize(path),
            FolderChoice::Nested(parent, child) => {
                let parent = normalize(parent)?;
                let child = normalize(child)?;
                Some(join(&parent, &child))
            }
            FolderChoice::New(name) => normalize(name),
        }
    }
}

fn normalize(path: &str) -> Option<String> {
    let segments: Vec<&str> = path
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    (!segments.is_empty()).then(|| segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(FolderChoice::None.resolve(), None);
        assert_eq!(
            FolderChoice::Existing("Math".into()).resolve(),
            Some("Math".to_string())
        );
        assert_eq!(
            FolderChoice::Nested("Math".into(), "Algebra".into()).resolve(),
            Some("Math/Algebra".to_string())
        );
        assert_eq!(
            FolderChoice::New("Physics".into()).resolve(),
            Some("Physics".to_string())
        );
    }

    #[test]
    fn test_blank_inputs_stay_unfiled() {
        assert_eq!(FolderChoice::Existing("".into()).resolve(), None);
        assert_eq!(FolderChoice::New("   ".into()).resolve(), None);
        assert_eq!(FolderChoice::Nested("Math".into(), "".into()).resolve(), None);
        assert_eq!(FolderChoice::Nested("".into(), "Algebra".into()).resolve(), None);
    }

    #[test]
    fn test_inputs_are_trimmed() {
        assert_eq!(
            FolderChoice::Nested(" Math ".into(), " Algebra".into()).resolve(),
            Some("Math/Algebra".to_string())
        );
    }

    #[test]
    fn test_stray_separators_are_dropped() {
        assert_eq!(FolderChoice::New("Math/".into()).resolve(), Some("Math".to_string()));
        assert_eq!(FolderChoice::New("/".into()).resolve(), None);
        assert_eq!(
            FolderChoice::Nested("/Math//".into(), " Algebra / Week 1 ".into()).resolve(),
            Some("Math/Algebra/Week 1".to_string())
        );
    }

    #[test]
    fn test_from_form() {
        assert_eq!(
            FolderChoice::from_form("nested", "Math", "Algebra"),
            FolderChoice::Nested("Math".into(), "Algebra".into())
        );
        assert_eq!(FolderChoice::from_form("bogus", "Math", "x"), FolderChoice::None);
        assert_eq!(FolderChoice::from_form("new", "", "Physics").as_str(), "new");
    }
}
