//! Folder Picker Component
//!
//! The "where should this go" part of the upload and playlist forms.

use folder_tree::FolderChoice;
use leptos::prelude::*;

const OPTIONS: &[(&str, &str)] = &[
    ("none", "No folder"),
    ("existing", "Existing folder"),
    ("nested", "New folder inside an existing one"),
    ("new", "New folder"),
];

/// Raw form state of the picker
#[derive(Clone, Copy)]
pub struct FolderFields {
    pub option: RwSignal<String>,
    pub existing: RwSignal<String>,
    pub new_folder: RwSignal<String>,
}

impl FolderFields {
    pub fn new() -> Self {
        Self {
            option: RwSignal::new(FolderChoice::None.as_str().to_string()),
            existing: RwSignal::new(String::new()),
            new_folder: RwSignal::new(String::new()),
        }
    }

    pub fn choice(&self) -> FolderChoice {
        FolderChoice::from_form(
            &self.option.get_untracked(),
            &self.existing.get_untracked(),
            &self.new_folder.get_untracked(),
        )
    }

    pub fn reset(&self) {
        self.option.set(FolderChoice::None.as_str().to_string());
        self.existing.set(String::new());
        self.new_folder.set(String::new());
    }
}

#[component]
pub fn FolderPicker(
    fields: FolderFields,
    /// Folder paths already in use
    #[prop(into)]
    folders: Signal<Vec<String>>,
) -> impl IntoView {
    let option = fields.option;
    let needs_existing = move || matches!(option.get().as_str(), "existing" | "nested");
    let needs_new = move || matches!(option.get().as_str(), "nested" | "new");

    view! {
        <div class="folder-picker">
            <label for="folderOption">"Folder"</label>
            <select
                id="folderOption"
                prop:value=move || option.get()
                on:change=move |ev| option.set(event_target_value(&ev))
            >
                {OPTIONS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>

            <Show when=needs_existing>
                <select
                    id="existingFolder"
                    prop:value=move || fields.existing.get()
                    on:change=move |ev| fields.existing.set(event_target_value(&ev))
                >
                    <option value="">"Choose a folder"</option>
                    <For
                        each=move || folders.get()
                        key=|path| path.clone()
                        children=move |path| {
                            let label = path.clone();
                            view! { <option value=path>{label}</option> }
                        }
                    />
                </select>
            </Show>

            <Show when=needs_new>
                <input
                    type="text"
                    id="newFolder"
                    placeholder="Folder name"
                    prop:value=move || fields.new_folder.get()
                    on:input=move |ev| fields.new_folder.set(event_target_value(&ev))
                />
            </Show>

            {move || {
                let choice = FolderChoice::from_form(
                    &option.get(),
                    &fields.existing.get(),
                    &fields.new_folder.get(),
                );
                choice
                    .resolve()
                    .map(|path| view! { <p class="folder-preview">"Will be saved in " {path}</p> })
            }}
        </div>
    }
}
