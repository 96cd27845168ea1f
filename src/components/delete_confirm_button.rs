//! Delete Confirm Button Component

use leptos::prelude::*;

/// Two-step delete: the first click arms the button, the second runs `on_confirm`.
///
/// Clicks never reach the enclosing card, so arming a delete does not open
/// the file or folder it sits on.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "×".to_string())] label: String,
    #[prop(into, default = "Delete?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let button_class = StoredValue::new(button_class);
    let label = StoredValue::new(label);
    let prompt = StoredValue::new(prompt);

    let choose = move |ev: web_sys::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        armed.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" on:click=|ev| ev.stop_propagation()>
                    <span class="delete-confirm-text">{prompt.get_value()}</span>
                    <button class="confirm-btn" title="Delete" on:click=move |ev| choose(ev, true)>"✓"</button>
                    <button class="cancel-btn" title="Keep" on:click=move |ev| choose(ev, false)>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.get_value()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    {label.get_value()}
                </button>
            }
            .into_any()
        }
    }
}
