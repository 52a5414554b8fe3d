use leptos::prelude::*;

use crate::modal::layer::layer_of;
use crate::modal::provider::use_modal;
use crate::modal::store::ModalId;

/// One backdrop + content pair per open dialog, keyed by id.
#[component]
pub fn ModalOverlay() -> impl IntoView {
    let modal = use_modal();
    let entries = modal.entries();

    view! {
        <For
            each=move || entries.get()
            key=|id| *id
            children=move |id| view! { <ModalLayer id=id /> }
        />
    }
}

#[component]
fn ModalLayer(id: ModalId) -> impl IntoView {
    let modal = use_modal();
    let entries = modal.entries();

    // Re-derived whenever an earlier dialog closes and this one moves down.
    let layers = Memo::new(move |_| {
        entries
            .with(|ids| ids.iter().position(|x| *x == id))
            .map(layer_of)
    });

    let backdrop_style = move || {
        layers
            .get()
            .map(|l| format!("z-index: {};", l.backdrop))
            .unwrap_or_default()
    };
    let content_style = move || {
        layers
            .get()
            .map(|l| format!("z-index: {};", l.content))
            .unwrap_or_default()
    };

    let on_backdrop_click = move |_: web_sys::MouseEvent| {
        modal.close(id);
    };
    // A click inside the dialog must never reach the backdrop.
    let on_content_click = |ev: web_sys::MouseEvent| ev.stop_propagation();

    let content = modal.content(id);

    view! {
        <div
            data-name="ModalBackdrop"
            class="fixed inset-0 bg-black/50 transition-opacity duration-200"
            style=backdrop_style
            on:click=on_backdrop_click
        />
        <div
            data-name="ModalSurface"
            data-modal-id=id.to_string()
            role="dialog"
            aria-modal="true"
            class="fixed inset-0 flex items-center justify-center pointer-events-none"
            style=content_style
        >
            <div class="pointer-events-auto" on:click=on_content_click>
                {content.map(|c| c.run())}
            </div>
        </div>
    }
}
