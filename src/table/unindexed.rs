//! Membership-only table.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use super::Table;
use crate::sealed::Sealed;

impl<T, S> Sealed for HashSet<T, S> {}

impl<T, S> Table<T, S> for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::with_capacity_and_hasher(capacity, hasher)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn insert(&mut self, value: T) -> bool {
        Self::insert(self, value)
    }

    #[inline]
    fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Self::remove(self, value)
    }

    #[inline]
    fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Self::contains(self, value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn drain(&mut self) -> Vec<T> {
        Self::drain(self).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::table::Table;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::hash::RandomState;

    type PlainTable = HashSet<i32, RandomState>;

    fn table_len(table: &PlainTable) -> usize {
        <PlainTable as Table<i32, RandomState>>::len(table)
    }

    #[rstest]
    fn test_table_insert_reports_duplicates() {
        let mut table =
            <PlainTable as Table<i32, RandomState>>::with_capacity_and_hasher(4, RandomState::new());

        assert!(<PlainTable as Table<i32, RandomState>>::insert(&mut table, 1));
        assert!(!<PlainTable as Table<i32, RandomState>>::insert(&mut table, 1));
        assert_eq!(table_len(&table), 1);
    }

    #[rstest]
    fn test_table_drain_empties() {
        let mut table: PlainTable = [1, 2, 3].into_iter().collect();

        let mut drained = <PlainTable as Table<i32, RandomState>>::drain(&mut table);
        drained.sort_unstable();

        assert_eq!(drained, vec![1, 2, 3]);
        assert_eq!(table_len(&table), 0);
    }
}
