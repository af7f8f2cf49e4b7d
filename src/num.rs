//! The generic integer container and its fixed-width aliases.

use core::fmt;
use core::marker::PhantomData;

use crate::bits::{Primitive, PrimitiveAdd, RawAtomic};
use crate::value::{AtomicNumber, AtomicValue};

/// A lock-free container for one value of a native atomic width.
///
/// One parametrized type stands in for four hand-written fixed-width
/// containers: `Atomic<i32>`, `Atomic<i64>`, `Atomic<u32>` and `Atomic<u64>`
/// each compile down to direct calls on the matching native atomic cell.
/// The dispatch is monomorphized — there is no per-operation branch, no
/// virtual call, and no fallback arm that could silently pick the wrong
/// width: the [`Primitive`] set is sealed and exhaustive.
///
/// Every method is a single hardware atomic instruction.
///
/// A container is not `Clone`: duplicating the backing cell would split one
/// logical value into two. Move it before sharing, never after.
///
/// # Example
///
/// ```
/// use quark::Atomic;
///
/// let counter: Atomic<u64> = Atomic::new(5);
/// assert_eq!(counter.swap(9), 5);
/// assert_eq!(counter.load(), 9);
/// assert_eq!(counter.add(1), 10);
/// ```
pub struct Atomic<T: Primitive> {
    cell: T::Cell,
    _value: PhantomData<T>,
}

/// 32-bit signed integer container.
pub type AtomicI32 = Atomic<i32>;
/// 64-bit signed integer container.
pub type AtomicI64 = Atomic<i64>;
/// 32-bit unsigned integer container.
pub type AtomicU32 = Atomic<u32>;
/// 64-bit unsigned integer container.
pub type AtomicU64 = Atomic<u64>;

impl<T: Primitive> Atomic<T> {
    /// Creates a container holding `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            cell: T::Cell::new(value.into_bits()),
            _value: PhantomData,
        }
    }

    /// Atomically stores `value`.
    #[inline(always)]
    pub fn store(&self, value: T) {
        self.cell.store(value.into_bits());
    }

    /// Atomically loads the current value.
    #[inline(always)]
    pub fn load(&self) -> T {
        T::from_bits(self.cell.load())
    }

    /// Atomically replaces the value, returning the previous one.
    #[inline(always)]
    pub fn swap(&self, new: T) -> T {
        T::from_bits(self.cell.swap(new.into_bits()))
    }

    /// Stores `new` only if the current bit pattern equals `current`'s.
    ///
    /// For the integer instantiations bit-pattern equality coincides with
    /// value equality; for `Atomic<f64>` (the cell behind
    /// [`AtomicF64`](crate::AtomicF64)) it is stricter — see there.
    #[inline(always)]
    pub fn compare_and_swap(&self, current: T, new: T) -> bool {
        self.cell
            .compare_exchange(current.into_bits(), new.into_bits())
            .is_ok()
    }
}

impl<T: PrimitiveAdd> Atomic<T> {
    /// Atomically adds `delta` (wrapping on overflow), returning the new
    /// value. A single native instruction; never retries.
    #[inline(always)]
    pub fn add(&self, delta: T) -> T {
        T::from_bits(self.cell.add(delta.into_bits()))
    }
}

impl<T: Primitive + Default> Default for Atomic<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Primitive> From<T> for Atomic<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Primitive + fmt::Debug> fmt::Debug for Atomic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Atomic").field(&self.load()).finish()
    }
}

impl<T: Primitive> AtomicValue for Atomic<T> {
    type Value = T;

    #[inline(always)]
    fn store(&self, value: T) {
        Atomic::store(self, value);
    }

    #[inline(always)]
    fn load(&self) -> T {
        Atomic::load(self)
    }

    #[inline(always)]
    fn swap(&self, new: T) -> T {
        Atomic::swap(self, new)
    }

    #[inline(always)]
    fn compare_and_swap(&self, current: T, new: T) -> bool {
        Atomic::compare_and_swap(self, current, new)
    }
}

impl<T: PrimitiveAdd> AtomicNumber for Atomic<T> {
    #[inline(always)]
    fn add(&self, delta: T) -> T {
        Atomic::add(self, delta)
    }
}
