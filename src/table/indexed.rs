//! Index-tracking table.
//!
//! Elements are kept in two maps that always hold the same element set:
//!
//! - `positions`: element -> insertion index, for O(1) membership and
//!   index lookup;
//! - `order`: insertion index -> element, ordered, for positional lookup
//!   and the index-ordered snapshot.
//!
//! Indices come from a counter that only ever grows. Removing an element
//! leaves a gap instead of renumbering the rest, and a removed index is
//! never handed out again (not even after [`Table::clear`]).
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `remove`   | O(log n)   |
//! | `contains` | O(1)       |
//! | `index`    | O(1)       |
//! | `at`       | O(log n)   |
//! | `replace`  | O(log n)   |
//! | `to_vec`   | O(n)       |

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::Table;
use crate::sealed::Sealed;

/// Table storing each element together with its insertion index.
#[derive(Debug, Clone)]
pub struct IndexedTable<T, S> {
    positions: HashMap<T, usize, S>,
    order: BTreeMap<usize, T>,
    next_index: usize,
}

impl<T, S> Sealed for IndexedTable<T, S> {}

impl<T, S> IndexedTable<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Index assigned to `value` when it was inserted.
    pub(crate) fn index<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(value).copied()
    }

    /// Element currently holding `index`.
    pub(crate) fn at(&self, index: usize) -> Option<&T> {
        self.order.get(&index)
    }

    /// Element with the smallest index.
    pub(crate) fn first(&self) -> Option<&T> {
        self.order.first_key_value().map(|(_, value)| value)
    }

    /// Element with the largest index.
    pub(crate) fn last(&self) -> Option<&T> {
        self.order.last_key_value().map(|(_, value)| value)
    }

    /// Stores `new` at the index held by `old`, removing `old`.
    ///
    /// If `new` was already stored under another index, that entry is
    /// dropped: `new` ends up only at `old`'s index.
    ///
    /// Returns `false` without touching the table if `old` is absent.
    pub(crate) fn replace<Q>(&mut self, old: &Q, new: T) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(index) = self.positions.get(old).copied() else {
            return false;
        };
        // Clone before mutating: a panicking clone must leave both maps intact.
        let key = new.clone();

        self.positions.remove(old);
        if let Some(displaced) = self.positions.insert(key, index) {
            self.order.remove(&displaced);
            tracing::trace!(
                index,
                displaced,
                "replacement value was already present; dropped its previous index"
            );
        }
        self.order.insert(index, new);

        debug_assert_eq!(self.positions.len(), self.order.len());
        true
    }
}

impl<T, S> Table<T, S> for IndexedTable<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            positions: HashMap::with_capacity_and_hasher(capacity, hasher),
            order: BTreeMap::new(),
            next_index: 0,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        debug_assert_eq!(self.positions.len(), self.order.len());
        self.positions.len()
    }

    fn insert(&mut self, value: T) -> bool {
        match self.positions.entry(value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let index = self.next_index;
                self.order.insert(index, entry.key().clone());
                entry.insert(index);
                self.next_index += 1;
                true
            }
        }
    }

    fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .remove(value)
            .and_then(|index| self.order.remove(&index))
            .is_some()
    }

    #[inline]
    fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.order.values().cloned().collect()
    }

    fn clear(&mut self) {
        self.positions.clear();
        self.order.clear();
    }

    fn drain(&mut self) -> Vec<T> {
        self.positions.clear();
        std::mem::take(&mut self.order).into_values().collect()
    }
}
