//! The shared/private state machine behind every wrapper kind

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::value::DeepClone;

/// A container behind a single-threaded shared handle.
pub(crate) type SharedCell<T> = Rc<RefCell<T>>;

/// Copy-on-write state for one wrapped container.
///
/// Two states: shared (no private copy yet) and private (copy made).
/// The transition fires on the first write and never reverses; repeated
/// writes keep using the same private copy.
pub(crate) struct CowCore<T> {
    /// Aliased, externally-owned data. Never written through.
    shared: SharedCell<T>,

    /// Exclusively-owned deep copy, born lazily on the first write.
    /// Once set, never re-derived from `shared`.
    private: Option<SharedCell<T>>,
}

impl<T: DeepClone> CowCore<T> {
    /// Adopt a shared handle without copying it.
    pub(crate) fn new(shared: SharedCell<T>) -> Self {
        CowCore {
            shared,
            private: None,
        }
    }

    /// Trigger the copy transition if it has not fired yet.
    ///
    /// Idempotent: once the private copy exists it is returned as-is.
    /// Returns the cell every write must go through.
    pub(crate) fn copy_on_write(&mut self) -> &SharedCell<T> {
        let shared = &self.shared;
        self.private
            .get_or_insert_with(|| Rc::new(RefCell::new(shared.borrow().deep_clone())))
    }

    /// The cell reads observe: private if present, shared otherwise.
    pub(crate) fn effective(&self) -> &SharedCell<T> {
        self.private.as_ref().unwrap_or(&self.shared)
    }

    /// Borrow the effective data for reading. Never copies.
    pub(crate) fn read(&self) -> Ref<'_, T> {
        self.effective().borrow()
    }

    /// Borrow the private data for writing, creating it first if needed.
    pub(crate) fn write(&mut self) -> RefMut<'_, T> {
        self.copy_on_write().borrow_mut()
    }

    /// True while no write has occurred and reads still alias the
    /// original data.
    pub(crate) fn is_shared(&self) -> bool {
        self.private.is_none()
    }
}
