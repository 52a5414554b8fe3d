//! Page scroll lock shared by every open dialog.
//!
//! The lock is owned by the stack as a whole: it is taken on the 0 → N
//! transition and released on N → 0, no matter which entries come and go in
//! between. The value found on the page before locking is restored verbatim,
//! including "no inline value".

use crate::error::DomError;

const LOCKED_OVERFLOW: &str = "hidden";

/// The page-level element whose scrolling is switched off while dialogs are open.
///
/// `None` means the element carries no inline `overflow` value.
pub trait ScrollTarget {
    fn overflow(&self) -> Result<Option<String>, DomError>;
    fn set_overflow(&self, value: Option<&str>) -> Result<(), DomError>;
}

/// `document.body.style.overflow`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollTarget;

impl BodyScrollTarget {
    fn body() -> Result<web_sys::HtmlElement, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        document.body().ok_or(DomError::NoBody)
    }
}

impl ScrollTarget for BodyScrollTarget {
    fn overflow(&self) -> Result<Option<String>, DomError> {
        let value = Self::body()?
            .style()
            .get_property_value("overflow")
            .map_err(DomError::from)?;
        Ok(if value.is_empty() { None } else { Some(value) })
    }

    fn set_overflow(&self, value: Option<&str>) -> Result<(), DomError> {
        let style = Self::body()?.style();
        match value {
            Some(v) => style.set_property("overflow", v).map_err(DomError::from),
            None => style
                .remove_property("overflow")
                .map(|_| ())
                .map_err(DomError::from),
        }
    }
}

/// Reference counting by stack length over a single [`ScrollTarget`].
pub struct ScrollLock {
    target: Box<dyn ScrollTarget>,
    /// `Some(previous)` while locked.
    saved: Option<Option<String>>,
}

impl ScrollLock {
    pub fn new(target: impl ScrollTarget + 'static) -> Self {
        Self {
            target: Box::new(target),
            saved: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.saved.is_some()
    }

    /// Bring the target in line with `open_count` open dialogs.
    pub fn sync(&mut self, open_count: usize) {
        match (open_count > 0, self.is_locked()) {
            (true, false) => self.lock(),
            (false, true) => self.unlock(),
            _ => {}
        }
    }

    fn lock(&mut self) {
        let previous = match self.target.overflow() {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "could not read page overflow; assuming none");
                None
            }
        };
        if let Err(e) = self.target.set_overflow(Some(LOCKED_OVERFLOW)) {
            tracing::warn!(error = %e, "could not lock page scroll");
        }
        tracing::debug!(previous = ?previous, "page scroll locked");
        self.saved = Some(previous);
    }

    fn unlock(&mut self) {
        let previous = self.saved.take().flatten();
        if let Err(e) = self.target.set_overflow(previous.as_deref()) {
            tracing::warn!(error = %e, "could not restore page scroll");
        }
        tracing::debug!(restored = ?previous, "page scroll unlocked");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Host stand-in for the page body that records every write.
    #[derive(Clone, Default)]
    pub(crate) struct MemoryTarget {
        pub value: Rc<RefCell<Option<String>>>,
        pub writes: Rc<RefCell<Vec<Option<String>>>>,
    }

    impl MemoryTarget {
        pub(crate) fn with_value(value: Option<&str>) -> Self {
            let t = Self::default();
            *t.value.borrow_mut() = value.map(str::to_string);
            t
        }

        pub(crate) fn current(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        pub(crate) fn write_count(&self) -> usize {
            self.writes.borrow().len()
        }
    }

    impl ScrollTarget for MemoryTarget {
        fn overflow(&self) -> Result<Option<String>, DomError> {
            Ok(self.current())
        }

        fn set_overflow(&self, value: Option<&str>) -> Result<(), DomError> {
            let value = value.map(str::to_string);
            self.writes.borrow_mut().push(value.clone());
            *self.value.borrow_mut() = value;
            Ok(())
        }
    }

    struct BrokenTarget;

    impl ScrollTarget for BrokenTarget {
        fn overflow(&self) -> Result<Option<String>, DomError> {
            Err(DomError::NoBody)
        }

        fn set_overflow(&self, _value: Option<&str>) -> Result<(), DomError> {
            Err(DomError::NoBody)
        }
    }

    #[test]
    fn test_lock_and_restore_no_inline_value() {
        let target = MemoryTarget::default();
        let mut lock = ScrollLock::new(target.clone());

        lock.sync(1);
        assert!(lock.is_locked());
        assert_eq!(target.current().as_deref(), Some("hidden"));

        lock.sync(0);
        assert!(!lock.is_locked());
        assert_eq!(target.current(), None);
    }

    #[test]
    fn test_restores_pre_lock_value_not_default() {
        let target = MemoryTarget::with_value(Some("clip"));
        let mut lock = ScrollLock::new(target.clone());

        lock.sync(2);
        lock.sync(0);
        assert_eq!(target.current().as_deref(), Some("clip"));
    }

    #[test]
    fn test_already_hidden_page_stays_hidden() {
        let target = MemoryTarget::with_value(Some("hidden"));
        let mut lock = ScrollLock::new(target.clone());

        lock.sync(1);
        lock.sync(0);
        assert_eq!(target.current().as_deref(), Some("hidden"));
    }

    #[test]
    fn test_count_changes_without_transition_do_not_write() {
        let target = MemoryTarget::default();
        let mut lock = ScrollLock::new(target.clone());

        lock.sync(1);
        lock.sync(2);
        lock.sync(3);
        lock.sync(1);
        assert_eq!(target.write_count(), 1);

        lock.sync(0);
        lock.sync(0);
        assert_eq!(target.write_count(), 2);
    }

    #[test]
    fn test_broken_target_keeps_bookkeeping() {
        let mut lock = ScrollLock::new(BrokenTarget);
        lock.sync(1);
        assert!(lock.is_locked());
        lock.sync(0);
        assert!(!lock.is_locked());
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::modal::store::ModalStore;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_body_overflow_roundtrip() {
        let target = BodyScrollTarget;
        target.set_overflow(None).expect("clear");
        assert_eq!(target.overflow().expect("read"), None);

        target.set_overflow(Some("auto")).expect("write");
        assert_eq!(target.overflow().expect("read").as_deref(), Some("auto"));
        target.set_overflow(None).expect("clear");
    }

    #[wasm_bindgen_test]
    fn test_stack_restores_body_overflow() {
        let target = BodyScrollTarget;
        target.set_overflow(Some("scroll")).expect("write");

        let store: ModalStore<&str> = ModalStore::new(BodyScrollTarget);
        let a = store.open("A");
        let b = store.open("B");
        assert_eq!(target.overflow().expect("read").as_deref(), Some("hidden"));

        store.close(a);
        assert_eq!(target.overflow().expect("read").as_deref(), Some("hidden"));
        store.close(b);
        assert_eq!(target.overflow().expect("read").as_deref(), Some("scroll"));

        target.set_overflow(None).expect("clear");
    }
}
