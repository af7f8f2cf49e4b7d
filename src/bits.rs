//! Bit-level plumbing that maps value types onto native fixed-width atomic
//! cells.
//!
//! This module is the crate's single audited reinterpretation site: a value
//! is stored as the bit pattern of a same-width integer and every atomic
//! operation happens on that integer. The mapping is total in both
//! directions (every cell bit pattern is a valid value and vice versa),
//! never allocates, and can never observe a torn write because only
//! hardware-atomic widths are used.
//!
//! [`Primitive`] is sealed, so the set of mappable types is closed: a new
//! mapping — and with it any chance of a width mismatch — cannot be added
//! outside this module. A mismatch is a compile error, never a runtime
//! branch.

use core::sync::atomic::{AtomicI32, AtomicI64, AtomicU32, AtomicU64, Ordering};

pub(crate) mod sealed {
    /// Seals [`Primitive`](super::Primitive) to the native atomic widths.
    pub trait Sealed {}
}

/// A native fixed-width atomic cell.
///
/// Every operation is a single hardware atomic instruction with no retry
/// loop and no intermediate visible state. All orderings are sequentially
/// consistent.
#[doc(hidden)]
pub trait RawAtomic: Default + Send + Sync {
    /// The integer representation this cell operates on.
    type Bits: Copy + PartialEq;

    /// Creates a cell holding `bits`.
    fn new(bits: Self::Bits) -> Self;

    /// Atomically loads the current bit pattern.
    fn load(&self) -> Self::Bits;

    /// Atomically stores `bits`.
    fn store(&self, bits: Self::Bits);

    /// Atomically replaces the bit pattern, returning the previous one.
    fn swap(&self, bits: Self::Bits) -> Self::Bits;

    /// Stores `new` iff the cell currently holds `current`.
    ///
    /// Returns `Ok(previous)` on success and `Err(actual)` on failure.
    fn compare_exchange(
        &self,
        current: Self::Bits,
        new: Self::Bits,
    ) -> Result<Self::Bits, Self::Bits>;

    /// Atomically adds `delta` (wrapping), returning the new value.
    fn add(&self, delta: Self::Bits) -> Self::Bits;
}

macro_rules! impl_raw_atomic {
    ($atomic:ty, $bits:ty) => {
        impl RawAtomic for $atomic {
            type Bits = $bits;

            #[inline(always)]
            fn new(bits: $bits) -> Self {
                <$atomic>::new(bits)
            }

            #[inline(always)]
            fn load(&self) -> $bits {
                self.load(Ordering::SeqCst)
            }

            #[inline(always)]
            fn store(&self, bits: $bits) {
                self.store(bits, Ordering::SeqCst);
            }

            #[inline(always)]
            fn swap(&self, bits: $bits) -> $bits {
                self.swap(bits, Ordering::SeqCst)
            }

            #[inline(always)]
            fn compare_exchange(&self, current: $bits, new: $bits) -> Result<$bits, $bits> {
                self.compare_exchange(current, new, Ordering::SeqCst, Ordering::SeqCst)
            }

            #[inline(always)]
            fn add(&self, delta: $bits) -> $bits {
                self.fetch_add(delta, Ordering::SeqCst).wrapping_add(delta)
            }
        }
    };
}

impl_raw_atomic!(AtomicI32, i32);
impl_raw_atomic!(AtomicI64, i64);
impl_raw_atomic!(AtomicU32, u32);
impl_raw_atomic!(AtomicU64, u64);

/// A value type whose bit pattern maps exactly onto one native atomic width.
///
/// Implemented for `i32`, `i64`, `u32` and `u64` (identity mapping) and for
/// `f64` (IEEE-754 bits stored as `u64`). The trait is sealed; the mapping
/// methods are an implementation detail and hidden from the public surface.
pub trait Primitive: Copy + sealed::Sealed {
    /// The atomic cell whose width matches `Self` exactly.
    #[doc(hidden)]
    type Cell: RawAtomic;

    /// Converts a value into the bit pattern stored in the cell.
    #[doc(hidden)]
    fn into_bits(self) -> <Self::Cell as RawAtomic>::Bits;

    /// Rebuilds a value from a bit pattern read out of the cell.
    #[doc(hidden)]
    fn from_bits(bits: <Self::Cell as RawAtomic>::Bits) -> Self;
}

/// Marker for [`Primitive`] types whose addition is a native atomic
/// instruction on the stored bits.
///
/// True for the two's-complement integers; `f64` is deliberately excluded
/// because float addition is not bit-pattern addition — the float container
/// builds its `add` from a CAS retry loop instead.
pub trait PrimitiveAdd: Primitive {}

macro_rules! impl_identity_primitive {
    ($ty:ty, $cell:ty) => {
        impl sealed::Sealed for $ty {}

        impl Primitive for $ty {
            type Cell = $cell;

            #[inline(always)]
            fn into_bits(self) -> $ty {
                self
            }

            #[inline(always)]
            fn from_bits(bits: $ty) -> $ty {
                bits
            }
        }

        impl PrimitiveAdd for $ty {}

        // The reinterpretation is only sound if the widths agree.
        const _: () = assert!(core::mem::size_of::<$ty>() == core::mem::size_of::<$cell>());
    };
}

impl_identity_primitive!(i32, AtomicI32);
impl_identity_primitive!(i64, AtomicI64);
impl_identity_primitive!(u32, AtomicU32);
impl_identity_primitive!(u64, AtomicU64);

impl sealed::Sealed for f64 {}

impl Primitive for f64 {
    type Cell = AtomicU64;

    #[inline(always)]
    fn into_bits(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> f64 {
        f64::from_bits(bits)
    }
}

const _: () = assert!(core::mem::size_of::<f64>() == core::mem::size_of::<AtomicU64>());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_mapping_is_identity() {
        assert_eq!(<i32 as Primitive>::into_bits(-7), -7);
        assert_eq!(<i32 as Primitive>::from_bits(i32::MIN), i32::MIN);
        assert_eq!(<u64 as Primitive>::into_bits(u64::MAX), u64::MAX);
    }

    #[test]
    fn float_mapping_preserves_every_bit() {
        for value in [0.0, -0.0, 1.5, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let bits = <f64 as Primitive>::into_bits(value);
            assert_eq!(bits, value.to_bits());
            assert_eq!(<f64 as Primitive>::from_bits(bits).to_bits(), value.to_bits());
        }

        // A NaN with a nonstandard payload survives the round trip untouched.
        let payload = 0x7ff8_0000_dead_beef_u64;
        assert_eq!(<f64 as Primitive>::from_bits(payload).to_bits(), payload);
    }

    #[test]
    fn raw_add_wraps_and_returns_new_value() {
        let cell = AtomicU32::new(u32::MAX);
        assert_eq!(RawAtomic::add(&cell, 1), 0);
        assert_eq!(RawAtomic::load(&cell), 0);

        let cell = AtomicI32::new(5);
        assert_eq!(RawAtomic::add(&cell, -7), -2);
    }

    #[test]
    fn raw_compare_exchange_reports_previous() {
        let cell = AtomicI64::new(5);
        assert_eq!(RawAtomic::compare_exchange(&cell, 5, 9), Ok(5));
        assert_eq!(RawAtomic::compare_exchange(&cell, 5, 11), Err(9));
        assert_eq!(RawAtomic::load(&cell), 9);
    }
}
