//! The owning atomic reference slot.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::value::AtomicValue;

/// A lock-free container owning (or explicitly lacking) one heap-allocated
/// immutable value.
///
/// The slot holds an `Option<Arc<T>>` and mutation swaps the whole pointer.
/// `load` hands out a clone of the current `Arc`, so a superseded pointee
/// stays alive until its last reader drops it: reclamation is plain
/// reference counting, and a concurrent `load` can never observe a freed
/// value. The slot machinery comes from [`arc_swap`], which keeps the
/// read path lock-free.
///
/// `compare_and_swap` compares **slot identity** — the exact allocation the
/// caller expects — never pointee content. Two `Arc`s holding equal values
/// in different allocations do not match; two empty slots do.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use quark::AtomicArc;
///
/// let slot: AtomicArc<u32> = AtomicArc::empty();
/// assert!(slot.load().is_none());
///
/// slot.store(Some(Arc::new(7)));
/// assert_eq!(*slot.load().unwrap(), 7);
/// ```
pub struct AtomicArc<T> {
    slot: ArcSwapOption<T>,
}

impl<T> AtomicArc<T> {
    /// Creates a container holding `value` (`None` for the empty slot).
    #[inline]
    pub fn new(value: Option<Arc<T>>) -> Self {
        Self {
            slot: ArcSwapOption::new(value),
        }
    }

    /// Creates a container with an empty slot.
    #[inline]
    pub fn empty() -> Self {
        Self::new(None)
    }

    /// Atomically stores `value`, dropping this slot's claim on the previous
    /// pointee.
    #[inline]
    pub fn store(&self, value: Option<Arc<T>>) {
        self.slot.store(value);
    }

    /// Atomically loads the current slot contents.
    #[inline]
    pub fn load(&self) -> Option<Arc<T>> {
        self.slot.load_full()
    }

    /// Atomically replaces the slot contents, transferring ownership of the
    /// previous pointee to the caller.
    #[inline]
    pub fn swap(&self, new: Option<Arc<T>>) -> Option<Arc<T>> {
        self.slot.swap(new)
    }

    /// Stores `new` only if the slot currently holds exactly `current`: the
    /// same allocation, or both empty.
    pub fn compare_and_swap(&self, current: Option<Arc<T>>, new: Option<Arc<T>>) -> bool {
        let previous = self.slot.compare_and_swap(&current, new);
        ptr_eq(previous.as_ref(), current.as_ref())
    }
}

/// Identity comparison on optional slots: both empty, or the same
/// allocation.
fn ptr_eq<T>(a: Option<&Arc<T>>, b: Option<&Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

impl<T> Default for AtomicArc<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Arc<T>> for AtomicArc<T> {
    fn from(value: Arc<T>) -> Self {
        Self::new(Some(value))
    }
}

impl<T> From<Option<Arc<T>>> for AtomicArc<T> {
    fn from(value: Option<Arc<T>>) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicArc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicArc").field(&self.load()).finish()
    }
}

impl<T> AtomicValue for AtomicArc<T> {
    type Value = Option<Arc<T>>;

    #[inline]
    fn store(&self, value: Option<Arc<T>>) {
        AtomicArc::store(self, value);
    }

    #[inline]
    fn load(&self) -> Option<Arc<T>> {
        AtomicArc::load(self)
    }

    #[inline]
    fn swap(&self, new: Option<Arc<T>>) -> Option<Arc<T>> {
        AtomicArc::swap(self, new)
    }

    #[inline]
    fn compare_and_swap(&self, current: Option<Arc<T>>, new: Option<Arc<T>>) -> bool {
        AtomicArc::compare_and_swap(self, current, new)
    }
}
