//! The membership tier shared by every set in this crate.
//!
//! [`UniqueSet`] covers what every configuration can do: count, add, remove,
//! test membership and take a snapshot. Code written against it works the
//! same for locked, unsynchronized, concurrent and run-time configured sets.
//!
//! # Examples
//!
//! ```rust
//! use syncset::{LockedSet, UniqueSet, UnsyncPlainSet};
//!
//! fn register<S: UniqueSet<u32>>(set: &S, ids: &[u32]) -> usize {
//!     ids.iter().filter(|&&id| set.add(id)).count()
//! }
//!
//! let locked: LockedSet<u32> = LockedSet::new();
//! let local: UnsyncPlainSet<u32> = UnsyncPlainSet::new();
//!
//! assert_eq!(register(&locked, &[1, 2, 2, 3]), 3);
//! assert_eq!(register(&local, &[1, 2, 2, 3]), 3);
//! ```

/// Operations available on every set configuration.
///
/// No operation fails: absence and duplication are reported through the
/// returned `bool`.
pub trait UniqueSet<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `value` unless an equal element is present.
    ///
    /// Returns `true` if the value was inserted.
    fn add(&self, value: T) -> bool;

    /// Removes the element equal to `value`.
    ///
    /// Returns `true` if it was present.
    fn remove(&self, value: &T) -> bool;

    /// Returns `true` if an element equal to `value` is present.
    fn contains(&self, value: &T) -> bool;

    /// Returns a snapshot of the elements.
    ///
    /// Only index-tracking sets guarantee an order (insertion index order).
    fn to_vec(&self) -> Vec<T>;
}
