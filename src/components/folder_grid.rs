//! Folder Grid Component
//!
//! Breadcrumb trail and folder cards for the current location of a browser.

use folder_tree::{breadcrumbs, leaf_name, FolderTree, Foldered, Location};
use leptos::prelude::*;

use super::DeleteConfirmButton;

/// One folder card: full path and how many records sit anywhere below it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderCard {
    pub path: String,
    pub count: usize,
}

/// Folders listed at `location`: root folders, or the direct subfolders.
pub fn folder_cards<T: Foldered>(tree: &FolderTree<'_, T>, location: &Location) -> Vec<FolderCard> {
    let paths = match location.path() {
        None => tree.root_folders(),
        Some(path) => tree.subfolders_of(path),
    };
    paths
        .into_iter()
        .map(|path| FolderCard {
            path: path.to_string(),
            count: tree.item_count_under(path),
        })
        .collect()
}

/// Records listed at `location`: unfiled ones at the root, else exact matches.
pub fn items_at<'a, T: Foldered>(tree: &FolderTree<'a, T>, location: &Location) -> Vec<&'a T> {
    match location.path() {
        None => tree.items_without_folder(),
        Some(path) => tree.items_in(path),
    }
}

#[component]
pub fn Breadcrumbs(
    #[prop(into)] location: Signal<Location>,
    root_label: &'static str,
    #[prop(into)] on_navigate: Callback<Location>,
) -> impl IntoView {
    view! {
        <nav class="breadcrumbs">
            <button class="crumb" on:click=move |_| on_navigate.run(Location::Root)>
                {root_label}
            </button>
            {move || {
                location.with(|loc| {
                    loc.path()
                        .map(|path| {
                            breadcrumbs(path)
                                .into_iter()
                                .map(|crumb| {
                                    let target = Location::from_path(Some(crumb.path));
                                    let name = crumb.name.to_string();
                                    view! {
                                        <span class="crumb-separator">"/"</span>
                                        <button
                                            class="crumb"
                                            on:click=move |_| on_navigate.run(target.clone())
                                        >
                                            {name}
                                        </button>
                                    }
                                })
                                .collect_view()
                        })
                })
            }}
        </nav>
    }
}

/// Grid of folder cards; admins get a delete button per folder.
#[component]
pub fn FolderGrid(
    #[prop(into)] folders: Signal<Vec<FolderCard>>,
    #[prop(into)] on_open: Callback<String>,
    #[prop(into)] can_delete: Signal<bool>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="folder-grid">
            <For
                each=move || folders.get()
                key=|card| card.clone()
                children=move |card| {
                    let path = card.path.clone();
                    let delete_path = card.path.clone();
                    let name = leaf_name(&card.path).to_string();
                    view! {
                        <div
                            class="folder-card"
                            on:click=move |_| {
                                log::debug!("[FolderGrid] open {}", path);
                                on_open.run(path.clone());
                            }
                        >
                            <span class="folder-icon">"📁"</span>
                            <span class="folder-name">{name}</span>
                            <span class="folder-count">{format!("{} items", card.count)}</span>
                            <Show when=move || can_delete.get()>
                                <DeleteConfirmButton
                                    button_class="delete-folder-btn"
                                    prompt="Delete folder and contents?"
                                    on_confirm={
                                        let delete_path = delete_path.clone();
                                        Callback::new(move |_| on_delete.run(delete_path.clone()))
                                    }
                                />
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doc(Option<&'static str>);

    impl Foldered for Doc {
        fn folder(&self) -> Option<&str> {
            self.0
        }
    }

    #[test]
    fn test_folder_cards_at_root_and_folder() {
        let docs = vec![
            Doc(Some("Math")),
            Doc(Some("Math/Algebra")),
            Doc(Some("Math/Algebra")),
            Doc(None),
        ];
        let tree = FolderTree::new(&docs);

        let root = folder_cards(&tree, &Location::Root);
        assert_eq!(root, vec![FolderCard { path: "Math".into(), count: 3 }]);

        let math = folder_cards(&tree, &Location::Folder("Math".into()));
        assert_eq!(math, vec![FolderCard { path: "Math/Algebra".into(), count: 2 }]);
    }

    #[test]
    fn test_items_at() {
        let docs = vec![Doc(Some("Math")), Doc(None), Doc(Some("Math/Algebra"))];
        let tree = FolderTree::new(&docs);
        assert_eq!(items_at(&tree, &Location::Root).len(), 1);
        assert_eq!(items_at(&tree, &Location::Folder("Math".into())).len(), 1);
    }
}
