//! The atomic string container.

use std::fmt;
use std::sync::Arc;

use crate::arc::AtomicArc;
use crate::value::AtomicValue;

/// A lock-free container for one immutable text value.
///
/// Layered on [`AtomicArc<String>`]: every mutation swaps an owning pointer
/// to an immutable snapshot, and an empty slot reads as `""`. Storing an
/// explicitly empty string and never having stored anything are therefore
/// indistinguishable through `load` — deliberately so.
///
/// Unlike the numeric containers, [`compare_and_swap`] here is
/// **content-based**: it succeeds exactly when the currently visible text
/// equals `current`, whether that text lives in a snapshot or is the `""`
/// of an empty slot. Content CAS cannot be expressed as a single pointer
/// exchange, so it runs a retry loop over the identity CAS of the
/// underlying slot: lock-free, not wait-free.
///
/// [`compare_and_swap`]: AtomicString::compare_and_swap
///
/// # Example
///
/// ```
/// use quark::AtomicString;
///
/// let s = AtomicString::empty();
/// assert_eq!(s.load(), "");
///
/// assert!(s.compare_and_swap("", "hello"));
/// assert!(!s.compare_and_swap("", "world"));
/// assert_eq!(s.load(), "hello");
/// ```
pub struct AtomicString {
    snapshot: AtomicArc<String>,
}

impl AtomicString {
    /// Creates a container holding `value`.
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            snapshot: AtomicArc::new(Some(Arc::new(value.into()))),
        }
    }

    /// Creates a container reading as `""`.
    #[inline]
    pub fn empty() -> Self {
        Self {
            snapshot: AtomicArc::empty(),
        }
    }

    /// Atomically stores `value`.
    pub fn store(&self, value: impl Into<String>) {
        self.snapshot.store(Some(Arc::new(value.into())));
    }

    /// Atomically loads the current text.
    pub fn load(&self) -> String {
        match self.snapshot.load() {
            Some(snapshot) => snapshot.as_str().to_owned(),
            None => String::new(),
        }
    }

    /// Atomically replaces the text, returning the previous value.
    pub fn swap(&self, new: impl Into<String>) -> String {
        match self.snapshot.swap(Some(Arc::new(new.into()))) {
            // Reuse the snapshot's buffer when we held the last reference.
            Some(previous) => match Arc::try_unwrap(previous) {
                Ok(owned) => owned,
                Err(shared) => shared.as_str().to_owned(),
            },
            None => String::new(),
        }
    }

    /// Stores `new` only if the currently visible text equals `current`.
    ///
    /// A fresh container matches `current == ""`, and so does a slot holding
    /// an explicitly stored empty string. On failure nothing changes and the
    /// caller re-loads to decide whether to retry.
    pub fn compare_and_swap(&self, current: &str, new: impl Into<String>) -> bool {
        let new = Arc::new(new.into());
        self.snapshot
            .try_update(|slot| {
                let visible = slot.as_deref().map_or("", String::as_str);
                (visible == current).then(|| Some(Arc::clone(&new)))
            })
            .is_some()
    }
}

impl Default for AtomicString {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for AtomicString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AtomicString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicString").field(&self.load()).finish()
    }
}

impl AtomicValue for AtomicString {
    type Value = String;

    fn store(&self, value: String) {
        AtomicString::store(self, value);
    }

    fn load(&self) -> String {
        AtomicString::load(self)
    }

    fn swap(&self, new: String) -> String {
        AtomicString::swap(self, new)
    }

    fn compare_and_swap(&self, current: String, new: String) -> bool {
        AtomicString::compare_and_swap(self, &current, new)
    }
}
