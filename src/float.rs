//! The atomic 64-bit float container.

use core::fmt;

use crate::num::Atomic;
use crate::value::{AtomicNumber, AtomicValue};

/// A lock-free container for one IEEE-754 64-bit float.
///
/// The float lives in a 64-bit cell as its raw bit pattern, so `load`,
/// `store`, `swap` and `compare_and_swap` are single native instructions.
/// Every bit pattern round-trips exactly — NaN payloads and signed zeros
/// included; nothing is canonicalized.
///
/// `compare_and_swap` compares **bit patterns**, not float equality: `0.0`
/// does not match `-0.0`, and a stored NaN matches only the exact same NaN
/// bits (well-defined, though rarely what NaN arithmetic wants).
///
/// [`add`](AtomicF64::add) is the one operation that is not a single
/// instruction.
pub struct AtomicF64 {
    bits: Atomic<f64>,
}

impl AtomicF64 {
    /// Creates a container holding `value`.
    #[inline]
    pub fn new(value: f64) -> Self {
        Self {
            bits: Atomic::new(value),
        }
    }

    /// Atomically stores `value`.
    #[inline(always)]
    pub fn store(&self, value: f64) {
        self.bits.store(value);
    }

    /// Atomically loads the current value.
    #[inline(always)]
    pub fn load(&self) -> f64 {
        self.bits.load()
    }

    /// Atomically replaces the value, returning the previous one.
    #[inline(always)]
    pub fn swap(&self, new: f64) -> f64 {
        self.bits.swap(new)
    }

    /// Stores `new` only if the current bit pattern equals `current`'s.
    #[inline(always)]
    pub fn compare_and_swap(&self, current: f64, new: f64) -> bool {
        self.bits.compare_and_swap(current, new)
    }

    /// Atomically adds `delta`, returning the new value.
    ///
    /// Float addition has no native atomic instruction, so this runs a
    /// load/compute/CAS retry loop: lock-free, not wait-free. The operand
    /// observed by the first load is not necessarily the one the committing
    /// CAS acts on — the loop re-reads until an attempt sticks.
    pub fn add(&self, delta: f64) -> f64 {
        self.bits.update(|current| current + delta)
    }
}

impl Default for AtomicF64 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f64> for AtomicF64 {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicF64").field(&self.load()).finish()
    }
}

impl AtomicValue for AtomicF64 {
    type Value = f64;

    #[inline(always)]
    fn store(&self, value: f64) {
        AtomicF64::store(self, value);
    }

    #[inline(always)]
    fn load(&self) -> f64 {
        AtomicF64::load(self)
    }

    #[inline(always)]
    fn swap(&self, new: f64) -> f64 {
        AtomicF64::swap(self, new)
    }

    #[inline(always)]
    fn compare_and_swap(&self, current: f64, new: f64) -> bool {
        AtomicF64::compare_and_swap(self, current, new)
    }
}

impl AtomicNumber for AtomicF64 {
    #[inline]
    fn add(&self, delta: f64) -> f64 {
        AtomicF64::add(self, delta)
    }
}
