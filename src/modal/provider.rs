use leptos::prelude::*;

use crate::modal::cancel::install_cancel_listener;
use crate::modal::overlay::ModalOverlay;
use crate::modal::scroll_lock::BodyScrollTarget;
use crate::modal::store::{ModalId, ModalStore};

/// Boundary API for opening and closing dialogs from anywhere under
/// [`ModalProvider`].
///
/// `Copy` and thread-safe as a handle; the stack itself lives in local
/// storage because entries carry non-`Send` close callbacks.
#[derive(Clone, Copy)]
pub struct ModalContext {
    store: StoredValue<ModalStore<ViewFn>, LocalStorage>,
    entries: RwSignal<Vec<ModalId>>,
}

impl ModalContext {
    pub(crate) fn new(store: ModalStore<ViewFn>) -> Self {
        let entries = RwSignal::new(store.ids());
        store.set_observer(move |ids| {
            // The signal is gone once the provider has been torn down.
            let _ = entries.try_set(ids);
        });

        Self {
            store: StoredValue::new_local(store),
            entries,
        }
    }

    fn store(&self) -> Option<ModalStore<ViewFn>> {
        let store = self.store.try_get_value();
        if store.is_none() {
            tracing::warn!("modal provider disposed");
        }
        store
    }

    pub fn open(&self, content: impl Into<ViewFn>) -> ModalId {
        match self.store() {
            Some(store) => store.open(content.into()),
            None => ModalId::next(),
        }
    }

    /// Once the provider is gone this still returns a fresh id, but nothing
    /// is shown and `on_close` is dropped without running.
    pub fn open_with_close(
        &self,
        content: impl Into<ViewFn>,
        on_close: impl FnOnce() + 'static,
    ) -> ModalId {
        match self.store() {
            Some(store) => store.open_with_close(content.into(), on_close),
            None => {
                tracing::warn!("close callback discarded");
                drop(on_close);
                ModalId::next()
            }
        }
    }

    pub fn close(&self, id: ModalId) -> bool {
        self.store().is_some_and(|store| store.close(id))
    }

    pub fn close_top(&self) -> Option<ModalId> {
        self.store()?.close_top()
    }

    pub fn close_all(&self) -> usize {
        self.store().map_or(0, |store| store.close_all())
    }

    /// Open dialog ids in stack order (tracked).
    pub fn entries(&self) -> ReadSignal<Vec<ModalId>> {
        self.entries.read_only()
    }

    /// Untracked membership check.
    pub fn is_open(&self, id: ModalId) -> bool {
        self.store().is_some_and(|store| store.contains(id))
    }

    pub(crate) fn content(&self, id: ModalId) -> Option<ViewFn> {
        self.store()?.content(id)
    }
}

pub fn use_modal() -> ModalContext {
    expect_context::<ModalContext>()
}

/// Owns the dialog stack for everything rendered inside it.
#[component]
pub fn ModalProvider(children: Children) -> impl IntoView {
    let modal = ModalContext::new(ModalStore::new(BodyScrollTarget));
    provide_context(modal);
    install_cancel_listener(modal);

    // Fires outstanding callbacks and hands page scrolling back.
    on_cleanup(move || {
        modal.close_all();
    });

    view! {
        {children()}
        <ModalOverlay />
    }
}


/// Mounts a bare provider into its own container on the page.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod wasm_support {
    use std::sync::{Arc, OnceLock};

    use leptos::mount::mount_to;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{use_modal, ModalContext, ModalProvider};

    #[component]
    fn CaptureModal(slot: Arc<OnceLock<ModalContext>>) -> impl IntoView {
        let _ = slot.set(use_modal());
    }

    /// Returns the provider's context, its container and the mount handle;
    /// dropping the handle disposes the provider.
    pub(crate) fn mount_provider() -> (ModalContext, web_sys::HtmlElement, impl Sized) {
        let document = document();
        let container = document
            .create_element("div")
            .expect("create container")
            .dyn_into::<web_sys::HtmlElement>()
            .expect("html element");
        document
            .body()
            .expect("body")
            .append_child(&container)
            .expect("append container");

        let slot: Arc<OnceLock<ModalContext>> = Arc::default();
        let grab = slot.clone();
        let handle = mount_to(container.clone(), move || {
            view! {
                <ModalProvider>
                    <CaptureModal slot=grab />
                </ModalProvider>
            }
        });

        let modal = *slot.get().expect("provider context");
        (modal, container, handle)
    }

    /// Lets pending render effects run.
    pub(crate) async fn settle() {
        leptos::task::tick().await;
        leptos::task::tick().await;
    }

    pub(crate) fn surface(
        container: &web_sys::HtmlElement,
        id: impl std::fmt::Display,
    ) -> Option<web_sys::Element> {
        container
            .query_selector(&format!("[data-modal-id=\"{id}\"]"))
            .expect("selector")
    }
}
