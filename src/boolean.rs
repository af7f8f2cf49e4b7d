//! The atomic boolean container.

use core::fmt;

use crate::num::Atomic;
use crate::value::{AtomicBoolean, AtomicValue};

/// A lock-free container for one boolean, stored as `{0, 1}` in a 32-bit
/// cell.
///
/// Writes canonicalize at the boundary (`false` → `0`, `true` → `1`), so the
/// cell only ever holds the two canonical patterns and `compare_and_swap`
/// on booleans is exact.
///
/// [`toggle`](AtomicBool::toggle) is a CAS retry loop, the same building
/// block as [`AtomicF64::add`](crate::AtomicF64::add).
pub struct AtomicBool {
    bits: Atomic<u32>,
}

impl AtomicBool {
    /// Creates a container holding `value`.
    #[inline]
    pub fn new(value: bool) -> Self {
        Self {
            bits: Atomic::new(u32::from(value)),
        }
    }

    /// Atomically stores `value`.
    #[inline(always)]
    pub fn store(&self, value: bool) {
        self.bits.store(u32::from(value));
    }

    /// Atomically loads the current value.
    #[inline(always)]
    pub fn load(&self) -> bool {
        self.bits.load() != 0
    }

    /// Atomically replaces the value, returning the previous one.
    #[inline(always)]
    pub fn swap(&self, new: bool) -> bool {
        self.bits.swap(u32::from(new)) != 0
    }

    /// Stores `new` only if the current value equals `current`.
    #[inline(always)]
    pub fn compare_and_swap(&self, current: bool, new: bool) -> bool {
        self.bits
            .compare_and_swap(u32::from(current), u32::from(new))
    }

    /// Atomically flips the value, returning the new one.
    ///
    /// A CAS retry loop (lock-free, not wait-free), and linearizable: each
    /// successful call is exactly one flip in the total order of operations
    /// on the cell, so N concurrent toggles leave the container at its
    /// initial value XOR `N mod 2`.
    pub fn toggle(&self) -> bool {
        self.bits.update(|current| current ^ 1) != 0
    }
}

impl Default for AtomicBool {
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicBool {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicBool").field(&self.load()).finish()
    }
}

impl AtomicValue for AtomicBool {
    type Value = bool;

    #[inline(always)]
    fn store(&self, value: bool) {
        AtomicBool::store(self, value);
    }

    #[inline(always)]
    fn load(&self) -> bool {
        AtomicBool::load(self)
    }

    #[inline(always)]
    fn swap(&self, new: bool) -> bool {
        AtomicBool::swap(self, new)
    }

    #[inline(always)]
    fn compare_and_swap(&self, current: bool, new: bool) -> bool {
        AtomicBool::compare_and_swap(self, current, new)
    }
}

impl AtomicBoolean for AtomicBool {
    #[inline]
    fn toggle(&self) -> bool {
        AtomicBool::toggle(self)
    }
}
