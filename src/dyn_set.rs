//! Set whose configuration is chosen at run time.

use std::hash::Hash;

#[cfg(feature = "concurrent")]
use crate::concurrent::ConcurrentSet;
use crate::config::{Indexing, SetConfig, Synchronization};
use crate::set::{LockedSet, PlainSet};
use crate::unique_set::UniqueSet;

/// A set built from a [`SetConfig`].
///
/// Every variant is `Send + Sync` for `T: Send + Sync`, so a `DynSet` can be
/// shared between threads regardless of the configuration it was built
/// with. The membership tier is available through [`UniqueSet`]; indexed
/// operations through [`DynSet::as_indexed`].
#[derive(Debug)]
pub enum DynSet<T>
where
    T: Eq + Hash + Clone,
{
    /// Tracked indexing, locked.
    Indexed(LockedSet<T>),
    /// Untracked indexing, locked.
    Plain(PlainSet<T>),
    /// Untracked indexing, lock-free.
    #[cfg(feature = "concurrent")]
    Concurrent(ConcurrentSet<T>),
}

static_assertions::assert_impl_all!(DynSet<String>: Send, Sync);

impl<T> DynSet<T>
where
    T: Eq + Hash + Clone,
{
    /// Builds an empty set for a configuration that passed
    /// [`SetConfig::validate`].
    pub(crate) fn with_config(config: &SetConfig) -> Self {
        match (config.indexing, config.synchronization) {
            #[cfg(feature = "concurrent")]
            (Indexing::Untracked, Synchronization::LockFree) => {
                Self::Concurrent(ConcurrentSet::with_capacity(config.capacity))
            }
            (Indexing::Untracked, _) => Self::Plain(PlainSet::with_capacity(config.capacity)),
            (Indexing::Tracked, _) => Self::Indexed(LockedSet::with_capacity(config.capacity)),
        }
    }

    /// The indexing axis of this set.
    pub const fn indexing(&self) -> Indexing {
        match self {
            Self::Indexed(_) => Indexing::Tracked,
            _ => Indexing::Untracked,
        }
    }

    /// The synchronization axis of this set.
    pub const fn synchronization(&self) -> Synchronization {
        match self {
            #[cfg(feature = "concurrent")]
            Self::Concurrent(_) => Synchronization::LockFree,
            _ => Synchronization::Locked,
        }
    }

    /// Returns the underlying indexed set if indices are tracked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::{SetConfig, UniqueSet};
    ///
    /// let set = SetConfig::new().build::<&str>().unwrap();
    /// set.add("one");
    /// set.add("two");
    ///
    /// let indexed = set.as_indexed().expect("tracked by default");
    /// assert!(indexed.replace("two", "three"));
    /// assert_eq!(indexed.index("three"), Some(1));
    /// ```
    pub const fn as_indexed(&self) -> Option<&LockedSet<T>> {
        match self {
            Self::Indexed(set) => Some(set),
            _ => None,
        }
    }

    /// Removes every element.
    pub fn clear(&self) {
        match self {
            Self::Indexed(set) => set.clear(),
            Self::Plain(set) => set.clear(),
            #[cfg(feature = "concurrent")]
            Self::Concurrent(set) => set.clear(),
        }
    }
}

impl<T> UniqueSet<T> for DynSet<T>
where
    T: Eq + Hash + Clone,
{
    fn len(&self) -> usize {
        match self {
            Self::Indexed(set) => set.len(),
            Self::Plain(set) => set.len(),
            #[cfg(feature = "concurrent")]
            Self::Concurrent(set) => set.len(),
        }
    }

    fn add(&self, value: T) -> bool {
        match self {
            Self::Indexed(set) => set.add(value),
            Self::Plain(set) => set.add(value),
            #[cfg(feature = "concurrent")]
            Self::Concurrent(set) => set.add(value),
        }
    }

    fn remove(&self, value: &T) -> bool {
        match self {
            Self::Indexed(set) => set.remove(value),
            Self::Plain(set) => set.remove(value),
            #[cfg(feature = "concurrent")]
            Self::Concurrent(set) => set.remove(value),
        }
    }

    fn contains(&self, value: &T) -> bool {
        match self {
            Self::Indexed(set) => set.contains(value),
            Self::Plain(set) => set.contains(value),
            #[cfg(feature = "concurrent")]
            Self::Concurrent(set) => set.contains(value),
        }
    }

    fn to_vec(&self) -> Vec<T> {
        match self {
            Self::Indexed(set) => set.to_vec(),
            Self::Plain(set) => set.to_vec(),
            #[cfg(feature = "concurrent")]
            Self::Concurrent(set) => set.to_vec(),
        }
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::DynSet;
    use crate::config::{Indexing, SetConfig, Synchronization};
    use crate::unique_set::UniqueSet;
    use rstest::rstest;

    #[rstest]
    fn test_default_config_builds_indexed_set() {
        let set: DynSet<i32> = SetConfig::new().build().expect("valid config");

        assert_eq!(set.indexing(), Indexing::Tracked);
        assert_eq!(set.synchronization(), Synchronization::Locked);
        assert!(matches!(set, DynSet::Indexed(_)));
    }

    #[rstest]
    fn test_untracked_locked_builds_plain_set() {
        let set: DynSet<i32> = SetConfig::new()
            .with_indexing(Indexing::Untracked)
            .build()
            .expect("valid config");

        assert!(matches!(set, DynSet::Plain(_)));
        assert!(set.as_indexed().is_none());
    }

    #[cfg(feature = "concurrent")]
    #[rstest]
    fn test_untracked_lock_free_builds_concurrent_set() {
        let set: DynSet<i32> = SetConfig::new()
            .with_indexing(Indexing::Untracked)
            .with_synchronization(Synchronization::LockFree)
            .build()
            .expect("valid config");

        assert!(matches!(set, DynSet::Concurrent(_)));
        assert_eq!(set.synchronization(), Synchronization::LockFree);
    }

    #[rstest]
    fn test_clear_through_dyn_set() {
        let set: DynSet<i32> = SetConfig::new().build().expect("valid config");
        set.add(1);
        set.add(2);

        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.as_indexed().and_then(|indexed| indexed.index(&1)), None);
    }
}
