//! The unique-element set.
//!
//! [`Set`] is one container with two orthogonal configuration axes:
//!
//! | Axis            | Choices                                  |
//! |-----------------|------------------------------------------|
//! | layout `L`      | [`Indexed`] (default), [`Unindexed`]     |
//! | guard `G`       | [`Locked`] (default), [`Unsynchronized`] |
//!
//! plus the hasher `S`. The common combinations have aliases:
//! [`LockedSet`], [`UnsyncSet`], [`PlainSet`] and [`UnsyncPlainSet`].
//!
//! Changing the guard never changes what an operation returns, only whether
//! the table is locked while it runs.
//!
//! # Examples
//!
//! ```rust
//! use syncset::LockedSet;
//!
//! let set: LockedSet<&str> = LockedSet::new();
//! set.add("test0");
//! set.add("test1");
//! set.add("test1");
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.at(1), Some("test1"));
//! assert_eq!(set.at(2), None);
//! assert_eq!(set.to_vec(), vec!["test0", "test1"]);
//! ```
//!
//! ## Order-preserving replacement
//!
//! ```rust
//! use syncset::LockedSet;
//!
//! let set = LockedSet::from_slice(&["one", "two"]);
//! assert!(set.replace("two", "three"));
//! assert_eq!(set.to_vec()[1], "three");
//! assert_eq!(set.index("three"), Some(1));
//! assert_eq!(set.index("zero"), None);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use crate::guard::{Guard, Locked, Unsynchronized};
use crate::hash::DefaultHashBuilder;
use crate::table::{Indexed, Layout, Table, Unindexed};
use crate::unique_set::UniqueSet;

// =============================================================================
// Set Definition
// =============================================================================

/// A set of unique elements.
///
/// See the [module documentation](self) for the configuration axes.
///
/// # Type Parameters
///
/// * `T` - The element type. Uniqueness is decided by `Eq` and `Hash`.
/// * `L` - The storage [`Layout`].
/// * `G` - The synchronization [`Guard`].
/// * `S` - The hasher builder.
///
/// # Time Complexity
///
/// | Operation  | `Indexed` | `Unindexed` |
/// |------------|-----------|-------------|
/// | `add`      | O(log n)  | O(1)        |
/// | `remove`   | O(log n)  | O(1)        |
/// | `contains` | O(1)      | O(1)        |
/// | `len`      | O(1)      | O(1)        |
/// | `index`    | O(1)      | -           |
/// | `at`       | O(log n)  | -           |
/// | `replace`  | O(log n)  | -           |
/// | `to_vec`   | O(n)      | O(n)        |
pub struct Set<T, L = Indexed, G = Locked, S = DefaultHashBuilder>
where
    T: Eq + Hash + Clone,
    L: Layout,
    G: Guard,
    S: BuildHasher,
{
    table: G::Cell<L::Table<T, S>>,
}

/// An index-tracking set guarded by a reader-writer lock.
pub type LockedSet<T> = Set<T, Indexed, Locked>;

/// An index-tracking set without a lock, for single-threaded use.
pub type UnsyncSet<T> = Set<T, Indexed, Unsynchronized>;

/// A membership-only set guarded by a reader-writer lock.
pub type PlainSet<T> = Set<T, Unindexed, Locked>;

/// A membership-only set without a lock.
pub type UnsyncPlainSet<T> = Set<T, Unindexed, Unsynchronized>;

static_assertions::assert_impl_all!(LockedSet<String>: Send, Sync);
static_assertions::assert_impl_all!(PlainSet<String>: Send, Sync);
static_assertions::assert_impl_all!(UnsyncSet<String>: Send);
static_assertions::assert_not_impl_any!(UnsyncSet<String>: Sync);
static_assertions::assert_not_impl_any!(UnsyncPlainSet<String>: Sync);

// =============================================================================
// Construction
// =============================================================================

impl<T, L, G> Set<T, L, G, DefaultHashBuilder>
where
    T: Eq + Hash + Clone,
    L: Layout,
    G: Guard,
{
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::UnsyncSet;
    ///
    /// let set: UnsyncSet<i32> = UnsyncSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a set holding the distinct elements of `values`.
    ///
    /// Elements are added in slice order, so for an [`Indexed`] set the
    /// first occurrence of each value decides its index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LockedSet;
    ///
    /// let set = LockedSet::from_slice(&["one", "two", "one"]);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.index("two"), Some(1));
    /// ```
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T, L, G, S> Set<T, L, G, S>
where
    T: Eq + Hash + Clone,
    L: Layout,
    G: Guard,
    S: BuildHasher,
{
    /// Creates an empty set using `hasher` to hash elements.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty set with room for `capacity` elements, using
    /// `hasher` to hash elements.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let table = <L::Table<T, S> as Table<T, S>>::with_capacity_and_hasher(capacity, hasher);
        Self {
            table: G::new(table),
        }
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Returns the number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        G::read(&self.table, |table| table.len())
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `value` if no equal element is present.
    ///
    /// Returns `true` if the value was inserted. Adding a duplicate is a
    /// no-op, not an error. An [`Indexed`] set gives the new element the next
    /// insertion index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LockedSet;
    ///
    /// let set: LockedSet<&str> = LockedSet::new();
    /// assert!(set.add("a"));
    /// assert!(!set.add("a"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&self, value: T) -> bool {
        G::write(&self.table, |table| table.insert(value))
    }

    /// Removes the element equal to `value`.
    ///
    /// Returns `true` if it was present. Remaining elements keep their
    /// indices.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LockedSet;
    ///
    /// let set = LockedSet::from_slice(&["a".to_string(), "b".to_string()]);
    /// assert!(set.remove("a"));
    /// assert!(!set.remove("a"));
    /// assert_eq!(set.index("b"), Some(1));
    /// ```
    pub fn remove<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        G::write(&self.table, |table| table.remove(value))
    }

    /// Returns `true` if an element equal to `value` is present.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        G::read(&self.table, |table| table.contains(value))
    }

    /// Returns a snapshot of the elements.
    ///
    /// An [`Indexed`] set returns them ordered by insertion index; gaps left
    /// by removals are skipped, so the result always has [`Set::len`]
    /// elements. An [`Unindexed`] set returns them in unspecified order.
    pub fn to_vec(&self) -> Vec<T> {
        G::read(&self.table, |table| table.to_vec())
    }

    /// Removes every element.
    ///
    /// An [`Indexed`] set keeps counting from where it was, so indices are
    /// unique over the whole lifetime of the set.
    pub fn clear(&self) {
        G::write(&self.table, |table| table.clear());
    }

    /// Consumes the set, returning its elements in [`Set::to_vec`] order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        G::write(&self.table, |table| table.drain())
    }
}

// =============================================================================
// Indexed Operations
// =============================================================================

impl<T, G, S> Set<T, Indexed, G, S>
where
    T: Eq + Hash + Clone,
    G: Guard,
    S: BuildHasher,
{
    /// Returns the index `value` was given when it was inserted, or `None`
    /// if it is absent.
    #[inline]
    pub fn index<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        G::read(&self.table, |table| table.index(value))
    }

    /// Returns the element holding `index`, or `None` if no element does
    /// (never assigned, or assigned to an element that was removed).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LockedSet;
    ///
    /// let set = LockedSet::from_slice(&[10, 20, 30]);
    /// set.remove(&20);
    /// assert_eq!(set.at(0), Some(10));
    /// assert_eq!(set.at(1), None);
    /// assert_eq!(set.at(2), Some(30));
    /// ```
    pub fn at(&self, index: usize) -> Option<T> {
        G::read(&self.table, |table| table.at(index).cloned())
    }

    /// Replaces `old` with `new`, keeping `old`'s index.
    ///
    /// Returns `false` and leaves the set untouched if `old` is absent.
    ///
    /// If `new` is already present under another index, that entry is
    /// dropped so elements and indices stay unique; the set then shrinks by
    /// one. Callers should not rely on which index survives in that case
    /// beyond `new` ending up at `old`'s index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::LockedSet;
    ///
    /// let set = LockedSet::from_slice(&["one", "two"]);
    /// assert!(set.replace("two", "three"));
    /// assert!(!set.contains("two"));
    /// assert_eq!(set.index("three"), Some(1));
    ///
    /// assert!(!set.replace("zero", "four"));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn replace<Q>(&self, old: &Q, new: T) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        G::write(&self.table, |table| table.replace(old, new))
    }

    /// Returns the element with the smallest index.
    pub fn first(&self) -> Option<T> {
        G::read(&self.table, |table| table.first().cloned())
    }

    /// Returns the element with the largest index.
    pub fn last(&self) -> Option<T> {
        G::read(&self.table, |table| table.last().cloned())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T, L, G, S> UniqueSet<T> for Set<T, L, G, S>
where
    T: Eq + Hash + Clone,
    L: Layout,
    G: Guard,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn add(&self, value: T) -> bool {
        Self::add(self, value)
    }

    fn remove(&self, value: &T) -> bool {
        Self::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        Self::contains(self, value)
    }

    fn to_vec(&self) -> Vec<T> {
        Self::to_vec(self)
    }
}

impl<T, L, G, S> Default for Set<T, L, G, S>
where
    T: Eq + Hash + Clone,
    L: Layout,
    G: Guard,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, L, G, S> Clone for Set<T, L, G, S>
where
    T: Eq + Hash + Clone,
    L: Layout,
    G: Guard,
    S: BuildHasher,
    L::Table<T, S>: Clone,
{
    /// Clones a snapshot of the table taken under the read guard.
    fn clone(&self) -> Self {
        Self {
            table: G::new(G::read(&self.table, |table| table.clone())),
        }
    }
}

impl<T, L, G, S> FromIterator<T> for Set<T, L, G, S>
where
    T: Eq + Hash + Clone,
    L: Layout,
    G: Guard,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let set = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        let skipped = G::write(&set.table, |table| {
            iter.map(|value| table.insert(value))
                .filter(|inserted| !inserted)
                .count()
        });
        if skipped > 0 {
            tracing::debug!(skipped, len = set.len(), "bulk load skipped duplicate elements");
        }
        set
    }
}

impl<T, L, G, S> Extend<T> for Set<T, L, G, S>
where
    T: Eq + Hash + Clone,
    L: Layout,
    G: Guard,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let skipped = G::write(&self.table, |table| {
            iter.into_iter()
                .map(|value| table.insert(value))
                .filter(|inserted| !inserted)
                .count()
        });
        if skipped > 0 {
            tracing::debug!(skipped, len = self.len(), "bulk load skipped duplicate elements");
        }
    }
}

impl<T, L, G, S> fmt::Debug for Set<T, L, G, S>
where
    T: Eq + Hash + Clone + fmt::Debug,
    L: Layout,
    G: Guard,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.to_vec()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(all(test, not(loom)))]
mod tests {
    use super::{LockedSet, PlainSet, Set, UnsyncPlainSet, UnsyncSet};
    use crate::guard::{Locked, Unsynchronized};
    use crate::table::Indexed;
    use rstest::rstest;

    #[rstest]
    fn test_new_set_is_empty() {
        let set: LockedSet<i32> = LockedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.to_vec(), Vec::<i32>::new());
    }

    #[rstest]
    fn test_with_capacity_starts_empty() {
        let set: UnsyncSet<i32> = UnsyncSet::with_capacity(64);
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
    }

    #[rstest]
    fn test_explicit_hasher() {
        let set: Set<&str, Indexed, Locked, std::hash::RandomState> =
            Set::with_hasher(std::hash::RandomState::new());
        set.add("hashed");
        assert_eq!(set.index("hashed"), Some(0));
    }

    #[rstest]
    fn test_from_iter_keeps_first_occurrence_index() {
        let set: LockedSet<char> = "abcab".chars().collect();

        assert_eq!(set.len(), 3);
        assert_eq!(set.to_vec(), vec!['a', 'b', 'c']);
        assert_eq!(set.index(&'c'), Some(2));
    }

    #[rstest]
    fn test_extend_appends_after_existing_indices() {
        let mut set = LockedSet::from_slice(&[1, 2]);
        set.extend([2, 3, 4]);

        assert_eq!(set.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(set.index(&4), Some(3));
    }

    #[rstest]
    fn test_clone_is_independent_snapshot() {
        let original = LockedSet::from_slice(&[1, 2, 3]);
        let snapshot = original.clone();

        original.add(4);
        snapshot.remove(&1);

        assert_eq!(original.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(snapshot.to_vec(), vec![2, 3]);
        assert_eq!(snapshot.index(&3), Some(2));
    }

    #[rstest]
    fn test_debug_lists_elements_in_index_order() {
        let set = UnsyncSet::from_slice(&["b", "a"]);
        assert_eq!(format!("{set:?}"), r#"{"b", "a"}"#);
    }

    #[rstest]
    fn test_into_vec_returns_index_order() {
        let set = LockedSet::from_slice(&[3, 1, 2]);
        set.remove(&1);
        assert_eq!(set.into_vec(), vec![3, 2]);
    }

    #[rstest]
    fn test_clear_empties_and_keeps_counting() {
        let set = LockedSet::from_slice(&["a", "b"]);
        set.clear();

        assert!(set.is_empty());
        assert!(set.add("c"));
        assert_eq!(set.index("c"), Some(2));
    }

    #[rstest]
    fn test_first_and_last() {
        let set = UnsyncSet::from_slice(&[5, 6, 7]);
        set.remove(&5);
        assert_eq!(set.first(), Some(6));
        assert_eq!(set.last(), Some(7));
    }

    #[rstest]
    fn test_plain_set_membership() {
        let set: PlainSet<String> = PlainSet::new();
        assert!(set.add("x".to_string()));
        assert!(!set.add("x".to_string()));
        assert!(set.contains("x"));
        assert!(set.remove("x"));
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_unsync_plain_set_to_vec_contains_every_element() {
        let set = UnsyncPlainSet::from_slice(&[3, 1, 2]);
        let mut elements = set.to_vec();
        elements.sort_unstable();
        assert_eq!(elements, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_unsynchronized_set_can_move_to_another_thread() {
        let set: Set<i32, Indexed, Unsynchronized> = Set::from_slice(&[1, 2]);
        let moved = std::thread::spawn(move || {
            set.add(3);
            set.to_vec()
        })
        .join()
        .expect("thread panicked");
        assert_eq!(moved, vec![1, 2, 3]);
    }
}
