//! Inline Alerts
//!
//! Error and success banners shared by every page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::FLASH_MESSAGE_MS;

/// Banner shown while `message` holds text
#[component]
pub fn Alert(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] success: bool,
) -> impl IntoView {
    let class = if success { "alert alert-success" } else { "alert alert-failure" };
    move || {
        message
            .get()
            .map(|text| view! { <div class=class role="alert">{text}</div> })
    }
}

/// Show a success message, then clear it after a few seconds unless a
/// newer message has replaced it.
pub fn flash(set_message: WriteSignal<Option<String>>, message: impl Into<String>) {
    let message = message.into();
    set_message.set(Some(message.clone()));
    spawn_local(async move {
        TimeoutFuture::new(FLASH_MESSAGE_MS).await;
        set_message.try_update(|slot| clear_if_showing(slot, &message));
    });
}

fn clear_if_showing(slot: &mut Option<String>, message: &str) {
    if slot.as_deref() == Some(message) {
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_leaves_newer_message() {
        let mut slot = Some("File deleted".to_string());
        clear_if_showing(&mut slot, "Folder deleted");
        assert_eq!(slot.as_deref(), Some("File deleted"));

        clear_if_showing(&mut slot, "File deleted");
        assert_eq!(slot, None);
    }
}
