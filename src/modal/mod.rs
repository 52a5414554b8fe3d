//! Stacked dialogs: any number open at once, a dialog may open another on top
//! of itself, and every dialog's close callback fires exactly once.

pub mod cancel;
pub mod layer;
pub mod overlay;
pub mod provider;
pub mod scroll_lock;
pub mod store;

pub use layer::{layer_of, Layers};
pub use provider::{use_modal, ModalContext, ModalProvider};
pub use scroll_lock::{BodyScrollTarget, ScrollLock, ScrollTarget};
pub use store::{ModalEntry, ModalId, ModalStore, OnClose};
