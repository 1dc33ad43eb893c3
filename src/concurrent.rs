//! Lock-free-best-effort set.
//!
//! [`ConcurrentSet`] is the lighter capability tier. It has no global lock:
//! elements live in a sharded [`DashMap`], so operations on different shards
//! never contend, and the element count is an atomic counter that `len`
//! reads without touching the map.
//!
//! It offers the membership tier only. There are no insertion indices, no
//! `replace` and no positional lookup; use [`Set`](crate::Set) with the
//! [`Indexed`](crate::Indexed) layout for those.
//!
//! # Counting
//!
//! The counter is changed with `fetch_add`/`fetch_sub`, and only after the
//! map mutation it accounts for has succeeded. A reader racing with an
//! `add`/`remove` pair on the same element can observe the counter one step
//! behind the map, never drifting: once the writers finish it equals the
//! number of entries. A transiently negative value is reported as zero.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use syncset::ConcurrentSet;
//!
//! let set: Arc<ConcurrentSet<u32>> = Arc::new(ConcurrentSet::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let set = Arc::clone(&set);
//!         thread::spawn(move || {
//!             for value in 0..100 {
//!                 set.add(value * 4 + worker);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(set.len(), 400);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use dashmap::DashMap;

#[cfg(loom)]
use loom::sync::atomic::{AtomicIsize, Ordering};
#[cfg(not(loom))]
use std::sync::atomic::{AtomicIsize, Ordering};

use crate::hash::DefaultHashBuilder;
use crate::unique_set::UniqueSet;

/// A sharded concurrent set with an atomic element counter.
///
/// # Time Complexity
///
/// | Operation  | Complexity      |
/// |------------|-----------------|
/// | `add`      | O(1)            |
/// | `remove`   | O(1)            |
/// | `contains` | O(1)            |
/// | `len`      | O(1)            |
/// | `to_vec`   | O(n)            |
/// | `clear`    | O(n)            |
pub struct ConcurrentSet<T, S = DefaultHashBuilder>
where
    T: Eq + Hash,
    S: BuildHasher + Clone,
{
    entries: DashMap<T, (), S>,
    len: AtomicIsize,
}

static_assertions::assert_impl_all!(ConcurrentSet<String>: Send, Sync);

impl<T> ConcurrentSet<T, DefaultHashBuilder>
where
    T: Eq + Hash,
{
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a set holding the distinct elements of `values`.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        values.iter().cloned().collect()
    }
}

impl<T, S> ConcurrentSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Creates an empty set using `hasher` to hash elements.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: DashMap::with_hasher(hasher),
            len: AtomicIsize::new(0),
        }
    }

    /// Creates an empty set with room for `capacity` elements, using
    /// `hasher` to hash elements.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: DashMap::with_capacity_and_hasher(capacity, hasher),
            len: AtomicIsize::new(0),
        }
    }

    /// Returns the number of elements, as tracked by the atomic counter.
    #[inline]
    pub fn len(&self) -> usize {
        usize::try_from(self.len.load(Ordering::Acquire)).unwrap_or(0)
    }

    /// Returns `true` if the counter reports no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `value` if no equal element is present.
    ///
    /// Returns `true` if the value was inserted. When several threads add
    /// the same value, exactly one of them gets `true`.
    pub fn add(&self, value: T) -> bool {
        let inserted = self.entries.insert(value, ()).is_none();
        if inserted {
            self.len.fetch_add(1, Ordering::AcqRel);
        }
        inserted
    }

    /// Removes the element equal to `value`.
    ///
    /// Returns `true` if it was present.
    pub fn remove<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.entries.remove(value).is_some();
        if removed {
            self.len.fetch_sub(1, Ordering::AcqRel);
        }
        removed
    }

    /// Returns `true` if an element equal to `value` is present.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(value)
    }

    /// Returns the elements in unspecified order.
    ///
    /// The snapshot is taken shard by shard, so elements added or removed
    /// concurrently may or may not appear.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Removes every element, decrementing the counter once per element
    /// actually removed.
    pub fn clear(&self) {
        self.entries.retain(|_, _| {
            self.len.fetch_sub(1, Ordering::AcqRel);
            false
        });
    }
}

impl<T, S> UniqueSet<T> for ConcurrentSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
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

impl<T, S> Default for ConcurrentSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> FromIterator<T> for ConcurrentSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let set = Self::default();
        let skipped = iter
            .into_iter()
            .map(|value| set.add(value))
            .filter(|inserted| !inserted)
            .count();
        if skipped > 0 {
            tracing::debug!(skipped, len = set.len(), "bulk load skipped duplicate elements");
        }
        set
    }
}

impl<T, S> fmt::Debug for ConcurrentSet<T, S>
where
    T: Eq + Hash + fmt::Debug,
    S: BuildHasher + Clone,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = formatter.debug_set();
        for entry in self.entries.iter() {
            set.entry(entry.key());
        }
        set.finish()
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::ConcurrentSet;
    use rstest::rstest;

    #[rstest]
    fn test_add_counts_only_new_elements() {
        let set: ConcurrentSet<i32> = ConcurrentSet::new();

        assert!(set.add(1));
        assert!(!set.add(1));
        assert!(set.add(2));

        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_remove_absent_leaves_counter_unchanged() {
        let set = ConcurrentSet::from_slice(&[1, 2]);

        assert!(!set.remove(&3));
        assert_eq!(set.len(), 2);

        assert!(set.remove(&1));
        assert_eq!(set.len(), 1);
        assert!(!set.contains(&1));
    }

    #[rstest]
    fn test_clear_resets_counter() {
        let set = ConcurrentSet::from_slice(&["a", "b", "c"]);

        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains("a"));
        assert!(set.add("a"));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_from_slice_skips_duplicates() {
        let set = ConcurrentSet::from_slice(&[1, 1, 2, 3, 3]);
        let mut elements = set.to_vec();
        elements.sort_unstable();

        assert_eq!(elements, vec![1, 2, 3]);
        assert_eq!(set.len(), 3);
    }

    #[rstest]
    fn test_borrowed_lookup() {
        let set: ConcurrentSet<String> = ConcurrentSet::new();
        set.add("key".to_string());

        assert!(set.contains("key"));
        assert!(set.remove("key"));
        assert!(set.is_empty());
    }
}
