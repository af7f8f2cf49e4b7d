//! # `quark` - Lock-Free Atomic Value Containers
//!
//! Type-safe atomic containers for integers, floats, booleans, durations,
//! strings, and typed references. Every container holds exactly one logical
//! value, accessed only through atomic primitives — never ordinary reads or
//! writes — and the library uses no mutual-exclusion locks anywhere.
//!
//! ## Guarantees
//!
//! ### Atomicity
//! - **Linearizable per container**: operations on one container behave as if
//!   executed in a single sequential order consistent with real time. No
//!   cross-container atomicity is provided.
//! - **No torn reads**: values are stored only at hardware-atomic widths, so
//!   a load can never observe a mix of two writes.
//!
//! ### Progress
//! - `load`, `store`, `swap`, `compare_and_swap` and integer/duration `add`
//!   are single native atomic instructions: bounded time, no retries.
//! - [`AtomicF64::add`], [`AtomicBool::toggle`] and
//!   [`AtomicString::compare_and_swap`] are CAS retry loops: **lock-free but
//!   not wait-free** — some thread always completes, but a single call has no
//!   retry bound under sustained contention.
//!
//! ### Width safety
//! - The generic container [`Atomic<T>`] maps each instantiation onto the
//!   native cell of exactly its width through the sealed [`Primitive`]
//!   trait. The set is closed and exhaustive; a width mismatch is a compile
//!   error, and no runtime fallback branch exists that could silently return
//!   a stale value.
//!
//! ## The containers
//!
//! | Container | Value | Extra operation |
//! |---|---|---|
//! | [`Atomic<T>`] (aliases [`AtomicI32`], [`AtomicI64`], [`AtomicU32`], [`AtomicU64`]) | native-width integer | `add` (native) |
//! | [`AtomicF64`] | IEEE-754 double, stored as its bit pattern | `add` (CAS loop) |
//! | [`AtomicBool`] | boolean, canonicalized to `{0, 1}` in a 32-bit cell | `toggle` (CAS loop) |
//! | [`AtomicDuration`] | [`std::time::Duration`] as saturating `u64` nanoseconds | `add` (native) |
//! | [`AtomicArc<T>`] | owning `Option<Arc<T>>` slot, identity CAS | — |
//! | [`AtomicString`] | immutable text snapshot, content CAS | — |
//!
//! The shared capability contracts live in [`value`]: [`AtomicValue`],
//! [`AtomicNumber`] and [`AtomicBoolean`], along with the single reusable
//! CAS-retry building block ([`AtomicValue::update`] /
//! [`AtomicValue::try_update`]) that all three loop-based operations are
//! built from.
//!
//! ## Reclamation
//!
//! [`AtomicArc`] and [`AtomicString`] own their current pointee. A
//! superseded snapshot is reclaimed by reference counting once the last
//! reader drops its handle; the lock-free slot itself comes from
//! [`arc_swap`], so a concurrent `load` can never observe a freed value.
//!
//! ## Example
//!
//! ```rust
//! use quark::{AtomicF64, AtomicI64, AtomicString};
//!
//! let hits: AtomicI64 = AtomicI64::new(5);
//! assert_eq!(hits.swap(9), 5);
//! assert_eq!(hits.add(1), 10);
//!
//! let mean = AtomicF64::new(0.0);
//! assert_eq!(mean.add(1.5), 1.5);
//!
//! let label = AtomicString::empty();
//! assert!(label.compare_and_swap("", "ready"));
//! assert_eq!(label.load(), "ready");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod arc;
mod bits;
pub mod boolean;
pub mod duration;
pub mod float;
pub mod num;
pub mod string;
pub mod value;

#[cfg(feature = "serde")]
mod ser;

pub use arc::AtomicArc;
pub use bits::{Primitive, PrimitiveAdd};
pub use boolean::AtomicBool;
pub use duration::AtomicDuration;
pub use float::AtomicF64;
pub use num::{Atomic, AtomicI32, AtomicI64, AtomicU32, AtomicU64};
pub use string::AtomicString;
pub use value::{AtomicBoolean, AtomicNumber, AtomicValue};

// Compile-time layout proofs: every inline container is exactly the size and
// alignment of the native cell backing it, so the bit reinterpretation in
// `bits` can never be torn or misaligned.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<Atomic<i32>>() == 4);
    assert!(mem::size_of::<Atomic<u32>>() == 4);
    assert!(mem::size_of::<Atomic<i64>>() == 8);
    assert!(mem::size_of::<Atomic<u64>>() == 8);
    assert!(mem::size_of::<AtomicF64>() == 8);
    assert!(mem::size_of::<AtomicBool>() == 4);
    assert!(mem::size_of::<AtomicDuration>() == 8);

    assert!(mem::align_of::<Atomic<i64>>() == mem::align_of::<core::sync::atomic::AtomicI64>());
    assert!(mem::align_of::<AtomicF64>() == mem::align_of::<core::sync::atomic::AtomicU64>());
};
