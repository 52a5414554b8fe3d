//! Escape-to-dismiss.
//!
//! One window-level listener serves the whole stack and resolves the target
//! at event time, so N nested dialogs never turn one keypress into N closes.

use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

use crate::modal::provider::ModalContext;

/// `Esc` is what older engines report for the Escape key.
const CANCEL_KEYS: [&str; 2] = ["Escape", "Esc"];

pub fn is_cancel_key(key: &str) -> bool {
    CANCEL_KEYS.contains(&key)
}

/// Install the listener for the lifetime of the current reactive owner.
pub(crate) fn install_cancel_listener(modal: ModalContext) {
    let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if !is_cancel_key(&ev.key()) {
            return;
        }
        if let Some(id) = modal.close_top() {
            ev.prevent_default();
            tracing::debug!(modal_id = %id, "dismissed by cancel key");
        }
    });

    on_cleanup(move || handle.remove());
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use leptos::prelude::*;
    use wasm_bindgen_test::*;

    use crate::modal::provider::wasm_support::{mount_provider, settle, surface};

    wasm_bindgen_test_configure!(run_in_browser);

    fn press(key: &str) -> web_sys::KeyboardEvent {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        init.set_cancelable(true);
        let ev = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        window().dispatch_event(&ev).expect("dispatch");
        ev
    }

    #[wasm_bindgen_test]
    async fn test_one_escape_closes_only_the_top_dialog() {
        let (modal, container, handle) = mount_provider();
        let a = modal.open(|| view! { <p>"A"</p> });
        let b = modal.open(|| view! { <p>"B"</p> });
        let c = modal.open(|| view! { <p>"C"</p> });
        settle().await;

        let ev = press("Escape");
        assert!(ev.default_prevented());
        assert_eq!(modal.entries().get_untracked(), vec![a, b]);

        settle().await;
        assert!(surface(&container, a).is_some());
        assert!(surface(&container, b).is_some());
        assert!(surface(&container, c).is_none());

        press("Esc");
        assert_eq!(modal.entries().get_untracked(), vec![a]);

        drop(handle);
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn test_other_keys_and_empty_stack_leave_event_alone() {
        let (modal, container, handle) = mount_provider();
        let a = modal.open(|| view! { <p>"A"</p> });
        settle().await;

        let ev = press("Enter");
        assert!(!ev.default_prevented());
        assert!(modal.is_open(a));

        modal.close_all();
        let ev = press("Escape");
        assert!(!ev.default_prevented());

        drop(handle);
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn test_escape_after_dispose_is_ignored() {
        let (modal, container, handle) = mount_provider();
        modal.open(|| view! { <p>"A"</p> });
        settle().await;

        drop(handle);

        let ev = press("Escape");
        assert!(!ev.default_prevented());
        assert_eq!(modal.close_top(), None);
        container.remove();
    }
}
