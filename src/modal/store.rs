//! Ordered stack of open dialogs.
//!
//! # Invariants
//!
//! - Order is insertion order; closing an entry never reorders the rest.
//! - Ids are unique and never reused for the lifetime of the process.
//! - An entry's `on_close` fires at most once, whichever way it leaves.
//! - The page scroll lock is held iff the stack is non-empty.
//!
//! # Re-entrancy
//!
//! `on_close` callbacks run with no internal borrow held and may freely call
//! back into the store. Every public mutation runs inside a batch; nested
//! mutations join the outermost one, which re-syncs the scroll lock and
//! notifies the observer exactly once when it ends.
//!
//! # Failure Modes
//!
//! - `close` / `close_top` on an unknown id or an empty stack is a no-op.
//! - A panicking `on_close` is logged and does not stop the remaining
//!   callbacks of a `close_all`.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::modal::scroll_lock::{ScrollLock, ScrollTarget};

/// Global counter for unique modal IDs.
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque handle for an open dialog. Displays as `modal-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalId(u64);

impl ModalId {
    pub(crate) fn next() -> Self {
        Self(MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modal-{}", self.0)
    }
}

pub type OnClose = Box<dyn FnOnce()>;

/// An open dialog. Immutable once created apart from its spent callback.
pub struct ModalEntry<C> {
    id: ModalId,
    content: C,
    on_close: Option<OnClose>,
}

impl<C> ModalEntry<C> {
    pub fn id(&self) -> ModalId {
        self.id
    }

    pub fn content(&self) -> &C {
        &self.content
    }
}

type Observer = Rc<dyn Fn(Vec<ModalId>)>;

struct Shared<C> {
    entries: RefCell<Vec<ModalEntry<C>>>,
    scroll: RefCell<ScrollLock>,
    observer: RefCell<Option<Observer>>,
    batch_depth: Cell<usize>,
}

/// Shared handle to the dialog stack. Clones refer to the same stack.
pub struct ModalStore<C> {
    shared: Rc<Shared<C>>,
}

impl<C> Clone for ModalStore<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<C> ModalStore<C> {
    pub fn new(scroll_target: impl ScrollTarget + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                entries: RefCell::new(Vec::new()),
                scroll: RefCell::new(ScrollLock::new(scroll_target)),
                observer: RefCell::new(None),
                batch_depth: Cell::new(0),
            }),
        }
    }

    /// Called with the current id order after every completed mutation.
    pub fn set_observer(&self, observer: impl Fn(Vec<ModalId>) + 'static) {
        *self.shared.observer.borrow_mut() = Some(Rc::new(observer));
    }

    // --- Stack Operations ---

    pub fn open(&self, content: C) -> ModalId {
        self.push(content, None)
    }

    pub fn open_with_close(&self, content: C, on_close: impl FnOnce() + 'static) -> ModalId {
        self.push(content, Some(Box::new(on_close)))
    }

    fn push(&self, content: C, on_close: Option<OnClose>) -> ModalId {
        let _batch = self.batch();
        let id = ModalId::next();
        let depth = {
            let mut entries = self.shared.entries.borrow_mut();
            entries.push(ModalEntry {
                id,
                content,
                on_close,
            });
            entries.len()
        };
        tracing::debug!(modal_id = %id, depth, "modal opened");
        id
    }

    /// Close one dialog. Returns `false` if `id` is not open.
    ///
    /// The callback runs while the entry is still on the stack; anything it
    /// opens is appended before the entry is removed.
    pub fn close(&self, id: ModalId) -> bool {
        let on_close = {
            let mut entries = self.shared.entries.borrow_mut();
            match entries.iter_mut().find(|e| e.id == id) {
                Some(entry) => entry.on_close.take(),
                None => {
                    tracing::debug!(modal_id = %id, "close ignored, not open");
                    return false;
                }
            }
        };

        let _batch = self.batch();
        if let Some(on_close) = on_close {
            run_on_close(id, on_close);
        }
        self.remove(&[id]);
        true
    }

    /// Close whichever dialog is currently last.
    pub fn close_top(&self) -> Option<ModalId> {
        let top = self.top_id()?;
        self.close(top);
        Some(top)
    }

    /// Close every open dialog, oldest first. Returns how many were closed.
    ///
    /// Callbacks fire against a snapshot taken on entry; dialogs they open
    /// survive the call.
    pub fn close_all(&self) -> usize {
        let pending: Vec<(ModalId, Option<OnClose>)> = self
            .shared
            .entries
            .borrow_mut()
            .iter_mut()
            .map(|e| (e.id, e.on_close.take()))
            .collect();
        if pending.is_empty() {
            return 0;
        }

        let _batch = self.batch();
        let ids: Vec<ModalId> = pending.iter().map(|(id, _)| *id).collect();
        for (id, on_close) in pending {
            if let Some(on_close) = on_close {
                run_on_close(id, on_close);
            }
        }
        self.remove(&ids);
        ids.len()
    }

    fn remove(&self, ids: &[ModalId]) {
        let depth = {
            let mut entries = self.shared.entries.borrow_mut();
            entries.retain(|e| !ids.contains(&e.id));
            entries.len()
        };
        tracing::debug!(closed = ids.len(), depth, "modals closed");
    }

    // --- State Queries ---

    pub fn ids(&self) -> Vec<ModalId> {
        self.shared.entries.borrow().iter().map(|e| e.id).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shared.entries.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: ModalId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: ModalId) -> Option<usize> {
        self.shared.entries.borrow().iter().position(|e| e.id == id)
    }

    pub fn top_id(&self) -> Option<ModalId> {
        self.shared.entries.borrow().last().map(|e| e.id)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.shared.scroll.borrow().is_locked()
    }

    // --- Batching ---

    fn batch(&self) -> Batch<'_, C> {
        let depth = &self.shared.batch_depth;
        depth.set(depth.get() + 1);
        Batch { store: self }
    }

    fn flush(&self) {
        let ids = self.ids();
        self.shared.scroll.borrow_mut().sync(ids.len());
        let observer = self.shared.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(ids);
        }
    }
}

impl<C: Clone> ModalStore<C> {
    pub fn content(&self, id: ModalId) -> Option<C> {
        self.shared
            .entries
            .borrow()
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.content.clone())
    }
}

struct Batch<'a, C> {
    store: &'a ModalStore<C>,
}

impl<C> Drop for Batch<'_, C> {
    fn drop(&mut self) {
        let depth = &self.store.shared.batch_depth;
        let remaining = depth.get().saturating_sub(1);
        depth.set(remaining);
        if remaining == 0 {
            self.store.flush();
        }
    }
}

fn run_on_close(id: ModalId, on_close: OnClose) {
    if panic::catch_unwind(AssertUnwindSafe(on_close)).is_err() {
        tracing::error!(modal_id = %id, "on_close callback panicked");
    }
}
