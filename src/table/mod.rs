//! Storage layouts for [`Set`](crate::Set).
//!
//! A [`Layout`] picks the table a set stores its elements in:
//!
//! - [`Indexed`]: [`IndexedTable`], which assigns every element an insertion
//!   index and supports positional lookup, order-preserving replacement and
//!   an index-ordered snapshot.
//! - [`Unindexed`]: a plain [`HashSet`](std::collections::HashSet) with
//!   membership semantics only. Snapshot order is unspecified.
//!
//! Both layouts report their length as the size of the underlying map, so
//! there is no separately maintained counter that could drift from the
//! contents.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use crate::sealed::Sealed;

mod indexed;
mod unindexed;

pub use indexed::IndexedTable;

/// Unguarded storage behind a [`Set`](crate::Set).
///
/// All methods take the table directly; locking is the caller's concern.
/// This trait is sealed.
pub trait Table<T, S>: Sealed {
    /// Creates an empty table able to hold `capacity` elements without
    /// reallocating its hash map.
    fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Inserts `value` unless an equal element is present.
    ///
    /// Returns `true` if the value was inserted.
    fn insert(&mut self, value: T) -> bool;

    /// Removes the element equal to `value`.
    ///
    /// Returns `true` if an element was removed.
    fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns `true` if an element equal to `value` is stored.
    fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Clones the elements into a vector.
    fn to_vec(&self) -> Vec<T>;

    /// Removes every element.
    fn clear(&mut self);

    /// Moves every element out, in the same order [`Table::to_vec`] uses.
    fn drain(&mut self) -> Vec<T>;
}

/// The layout axis of a [`Set`](crate::Set).
///
/// This trait is sealed; the crate provides [`Indexed`] and [`Unindexed`].
pub trait Layout: Sealed {
    /// The table this layout stores elements in.
    type Table<T, S>: Table<T, S>
    where
        T: Eq + Hash + Clone,
        S: BuildHasher;
}

/// Tracks an insertion index for every element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Indexed;

impl Sealed for Indexed {}

impl Layout for Indexed {
    type Table<T, S>
        = IndexedTable<T, S>
    where
        T: Eq + Hash + Clone,
        S: BuildHasher;
}

/// Stores membership only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unindexed;

impl Sealed for Unindexed {}

impl Layout for Unindexed {
    type Table<T, S>
        = std::collections::HashSet<T, S>
    where
        T: Eq + Hash + Clone,
        S: BuildHasher;
}
