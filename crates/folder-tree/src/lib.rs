//! Folder Tree
//!
//! Folders are never stored anywhere. They are inferred from the `folder`
//! string carried by each record (`"Math/Algebra/Chapter1"`), so the whole
//! hierarchy is re-derived from the flat record list whenever it is needed.
//!
//! - path: string helpers over slash-delimited folder paths
//! - projector: folder/item queries over a record slice
//! - choice: folder selection on upload/create forms
//! - navigator: per-view browse state (root, folder, item viewer)
//!
//! `/` is the separator and has no escape. A folder *named* `a/b` cannot be
//! told apart from folder `b` nested in `a`; that ambiguity is kept as-is.

mod choice;
mod navigator;
mod path;
mod projector;

pub use choice::FolderChoice;
pub use navigator::{BackOutcome, Entity, ItemOrigin, Location, Navigator, Viewing};
pub use path::{
    breadcrumbs, depth, is_direct_child, is_root_folder, is_within, join, leaf_name, lineage,
    parent_of, Breadcrumb, SEPARATOR,
};
pub use projector::{folder_of, remove_folder, remove_where, FolderTree, Foldered};
