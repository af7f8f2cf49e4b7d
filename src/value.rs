//! Capability contracts shared by every container in the crate, plus the one
//! reusable CAS-retry building block ([`AtomicValue::update`] /
//! [`AtomicValue::try_update`]) that the non-native operations are built
//! from.

/// The base contract: one logical value, accessed only atomically.
///
/// Operations on a single container are linearizable — they behave as if
/// executed in some single sequential order consistent with real time. No
/// ordering is promised *between* distinct containers.
///
/// `compare_and_swap` returning `false` is the routine "somebody got there
/// first" outcome, not an error; the caller re-loads and decides whether to
/// retry. Nothing in this crate blocks, and nothing returns a recoverable
/// error.
pub trait AtomicValue {
    /// The logical value type held by the container.
    type Value;

    /// Atomically stores `value`.
    fn store(&self, value: Self::Value);

    /// Atomically loads the current value.
    fn load(&self) -> Self::Value;

    /// Atomically replaces the value, returning the previous one.
    fn swap(&self, new: Self::Value) -> Self::Value;

    /// Stores `new` only if the current value equals `current`.
    ///
    /// What "equals" means is the container's business: bit-pattern equality
    /// for the numeric containers, slot identity for [`AtomicArc`], text
    /// content for [`AtomicString`].
    ///
    /// [`AtomicArc`]: crate::AtomicArc
    /// [`AtomicString`]: crate::AtomicString
    fn compare_and_swap(&self, current: Self::Value, new: Self::Value) -> bool;

    /// Applies `f` in a CAS retry loop until the result commits, returning
    /// the committed value.
    ///
    /// Lock-free, not wait-free: a single call may retry arbitrarily many
    /// times under sustained contention, but some thread always makes
    /// progress. The value `f` is given is re-read on every attempt, so the
    /// read-compute-CAS race is resolved by the loop itself.
    fn update<F>(&self, mut f: F) -> Self::Value
    where
        Self::Value: Clone,
        F: FnMut(Self::Value) -> Self::Value,
    {
        loop {
            let current = self.load();
            let next = f(current.clone());
            if self.compare_and_swap(current, next.clone()) {
                return next;
            }
        }
    }

    /// Like [`update`](Self::update), except `f` may abort the loop by
    /// returning `None` for a value it does not want to replace.
    ///
    /// Returns the committed value, or `None` if `f` aborted.
    fn try_update<F>(&self, mut f: F) -> Option<Self::Value>
    where
        Self::Value: Clone,
        F: FnMut(&Self::Value) -> Option<Self::Value>,
    {
        loop {
            let current = self.load();
            let next = f(&current)?;
            if self.compare_and_swap(current, next.clone()) {
                return Some(next);
            }
        }
    }
}

/// Numeric extension of [`AtomicValue`]: atomic addition.
pub trait AtomicNumber: AtomicValue {
    /// Atomically adds `delta`, returning the new value.
    fn add(&self, delta: Self::Value) -> Self::Value;
}

/// Boolean extension of [`AtomicValue`]: lock-free toggle.
pub trait AtomicBoolean: AtomicValue<Value = bool> {
    /// Atomically flips the value, returning the new one.
    fn toggle(&self) -> bool;
}
