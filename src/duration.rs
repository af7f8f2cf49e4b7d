//! The atomic duration container.

use core::fmt;
use std::time::Duration;

use crate::num::Atomic;
use crate::value::{AtomicNumber, AtomicValue};

/// A lock-free container for one [`Duration`], stored as whole nanoseconds
/// in a 64-bit cell.
///
/// `Duration` itself is wider than any atomic cell, so values are mapped to
/// `u64` nanoseconds on the way in. Durations longer than `u64::MAX`
/// nanoseconds (about 584 years) saturate to that maximum; everything below
/// round-trips exactly.
///
/// [`add`](AtomicDuration::add) is a single native instruction on the
/// nanosecond representation.
pub struct AtomicDuration {
    nanos: Atomic<u64>,
}

fn to_nanos(value: Duration) -> u64 {
    u64::try_from(value.as_nanos()).unwrap_or(u64::MAX)
}

impl AtomicDuration {
    /// Creates a container holding `value`.
    #[inline]
    pub fn new(value: Duration) -> Self {
        Self {
            nanos: Atomic::new(to_nanos(value)),
        }
    }

    /// Atomically stores `value`.
    #[inline(always)]
    pub fn store(&self, value: Duration) {
        self.nanos.store(to_nanos(value));
    }

    /// Atomically loads the current value.
    #[inline(always)]
    pub fn load(&self) -> Duration {
        Duration::from_nanos(self.nanos.load())
    }

    /// Atomically replaces the value, returning the previous one.
    #[inline(always)]
    pub fn swap(&self, new: Duration) -> Duration {
        Duration::from_nanos(self.nanos.swap(to_nanos(new)))
    }

    /// Stores `new` only if the current value equals `current` (compared on
    /// the nanosecond representation).
    #[inline(always)]
    pub fn compare_and_swap(&self, current: Duration, new: Duration) -> bool {
        self.nanos.compare_and_swap(to_nanos(current), to_nanos(new))
    }

    /// Atomically adds `delta` (wrapping on overflow of the nanosecond
    /// cell), returning the new value.
    #[inline(always)]
    pub fn add(&self, delta: Duration) -> Duration {
        Duration::from_nanos(self.nanos.add(to_nanos(delta)))
    }
}

impl Default for AtomicDuration {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl From<Duration> for AtomicDuration {
    fn from(value: Duration) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicDuration").field(&self.load()).finish()
    }
}

impl AtomicValue for AtomicDuration {
    type Value = Duration;

    #[inline(always)]
    fn store(&self, value: Duration) {
        AtomicDuration::store(self, value);
    }

    #[inline(always)]
    fn load(&self) -> Duration {
        AtomicDuration::load(self)
    }

    #[inline(always)]
    fn swap(&self, new: Duration) -> Duration {
        AtomicDuration::swap(self, new)
    }

    #[inline(always)]
    fn compare_and_swap(&self, current: Duration, new: Duration) -> bool {
        AtomicDuration::compare_and_swap(self, current, new)
    }
}

impl AtomicNumber for AtomicDuration {
    #[inline(always)]
    fn add(&self, delta: Duration) -> Duration {
        AtomicDuration::add(self, delta)
    }
}
