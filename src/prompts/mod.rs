//! Ready-made dialogs built on the modal stack.
//!
//! Each dialog learns its own id only after `open` returns, so the id is
//! parked in a shared slot that its buttons read at click time.

use std::sync::{Arc, OnceLock};

use leptos::prelude::*;

use crate::components::ui::{ConfirmModal, ModalActions, ModalVariant};
use crate::modal::{ModalContext, ModalId};
use crate::util::login_url;

type IdSlot = Arc<OnceLock<ModalId>>;

fn close_slot(modal: ModalContext, slot: &IdSlot) {
    if let Some(id) = slot.get() {
        modal.close(*id);
    }
}

/// What the single button of a notice closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismiss {
    /// Just the notice.
    Own,
    /// The notice and every dialog beneath it.
    All,
}

/// Single-button notice.
pub fn open_notice(
    modal: ModalContext,
    title: impl Into<String>,
    description: impl Into<String>,
    dismiss: Dismiss,
) -> ModalId {
    let title = title.into();
    let description = description.into();
    let slot = IdSlot::default();
    let own = slot.clone();

    let id = modal.open(move || {
        let own = own.clone();
        view! {
            <ConfirmModal
                title=title.clone()
                description=description.clone()
                on_confirm=Callback::new(move |_| match dismiss {
                    Dismiss::Own => close_slot(modal, &own),
                    Dismiss::All => {
                        modal.close_all();
                    }
                })
            />
        }
    });
    let _ = slot.set(id);
    id
}

/// "Delete this?" Cancel closes only this dialog; confirm closes it and then
/// runs `on_confirm`.
pub fn open_delete_confirmation(
    modal: ModalContext,
    subject: impl Into<String>,
    on_confirm: Callback<()>,
) -> ModalId {
    let title = format!("Delete \"{}\"?", subject.into());
    let slot = IdSlot::default();
    let own = slot.clone();

    let id = modal.open(move || {
        let cancel_slot = own.clone();
        let confirm_slot = own.clone();
        view! {
            <ConfirmModal
                title=title.clone()
                description="This cannot be undone."
                variant=ModalVariant::Danger
                actions=ModalActions::Dual
                confirm_text="Delete"
                cancel_text="Cancel"
                on_cancel=Callback::new(move |_| close_slot(modal, &cancel_slot))
                on_confirm=Callback::new(move |_| {
                    close_slot(modal, &confirm_slot);
                    on_confirm.run(());
                })
            />
        }
    });
    let _ = slot.set(id);
    id
}

/// Stacked on top of the diary composer. "Keep writing" closes only this
/// dialog; "Discard" closes everything.
pub fn open_discard_confirmation(modal: ModalContext) -> ModalId {
    let slot = IdSlot::default();
    let own = slot.clone();

    let id = modal.open(move || {
        let own = own.clone();
        view! {
            <ConfirmModal
                title="Discard this entry?"
                description="What you have written will not be saved."
                variant=ModalVariant::Danger
                actions=ModalActions::Dual
                on_cancel=Callback::new(move |_| close_slot(modal, &own))
                on_confirm=Callback::new(move |_| {
                    modal.close_all();
                })
            />
        }
    });
    let _ = slot.set(id);
    id
}

/// Members-only prompt. Either answer clears the whole stack; confirming
/// also leaves for the login page.
pub fn open_login_required(
    modal: ModalContext,
    login_path: String,
    on_close: impl FnOnce() + 'static,
) -> ModalId {
    modal.open_with_close(
        move || {
            let login_path = login_path.clone();
            view! {
                <ConfirmModal
                    title="Sign in required"
                    description="This is for members only. Sign in now?"
                    actions=ModalActions::Dual
                    confirm_text="Go to sign in"
                    on_cancel=Callback::new(move |_| {
                        modal.close_all();
                    })
                    on_confirm=Callback::new(move |_| {
                        modal.close_all();
                        go_to_login(&login_path);
                    })
                />
            }
        },
        on_close,
    )
}

fn go_to_login(login_path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let here = format!(
        "{}{}",
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default()
    );
    if let Err(e) = location.set_href(&login_url(login_path, &here)) {
        tracing::warn!(error = ?e, "navigation to login failed");
    }
}
