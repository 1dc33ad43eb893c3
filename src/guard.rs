//! Synchronization strategies for [`Set`](crate::Set).
//!
//! A [`Guard`] decides how a set's table is protected:
//!
//! - [`Locked`]: a reader-writer lock. Mutations take the exclusive lock,
//!   lookups take the shared lock, so any number of readers proceed together
//!   while writers are exclusive. The resulting set is `Send + Sync`.
//! - [`Unsynchronized`]: no lock at all. The table lives in a [`RefCell`], so
//!   the resulting set is `Send` but not `Sync`. Sharing it between threads
//!   is rejected by the compiler instead of being a caller obligation.
//!
//! Each operation on a set is a single guarded section. Nothing is atomic
//! across calls: "`contains` then `add`" from two threads can interleave.
//!
//! # Examples
//!
//! ```rust
//! use syncset::{Indexed, Set, Unsynchronized};
//!
//! let set: Set<&str, Indexed, Unsynchronized> = Set::new();
//! set.add("local");
//! assert!(set.contains("local"));
//! ```

use std::cell::RefCell;

#[cfg(not(loom))]
use parking_lot::RwLock;

#[cfg(loom)]
use loom::sync::RwLock;
#[cfg(loom)]
use std::sync::PoisonError;

use crate::sealed::Sealed;

/// The synchronization axis of a [`Set`](crate::Set).
///
/// This trait is sealed; the crate provides [`Locked`] and [`Unsynchronized`].
pub trait Guard: Sealed {
    /// The cell wrapping the protected value.
    type Cell<V>;

    /// Wraps `value` in a new cell.
    fn new<V>(value: V) -> Self::Cell<V>;

    /// Runs `reader` with shared access to the protected value.
    fn read<V, R>(cell: &Self::Cell<V>, reader: impl FnOnce(&V) -> R) -> R;

    /// Runs `writer` with exclusive access to the protected value.
    fn write<V, R>(cell: &Self::Cell<V>, writer: impl FnOnce(&mut V) -> R) -> R;
}

/// Guards the table with a reader-writer lock.
///
/// Backed by [`parking_lot::RwLock`], which never poisons. When compiled with
/// `--cfg loom` the lock is `loom::sync::RwLock` so the locking protocol can be
/// model-checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Locked;

impl Sealed for Locked {}

impl Guard for Locked {
    type Cell<V> = RwLock<V>;

    #[inline]
    fn new<V>(value: V) -> Self::Cell<V> {
        RwLock::new(value)
    }

    #[cfg(not(loom))]
    #[inline]
    fn read<V, R>(cell: &Self::Cell<V>, reader: impl FnOnce(&V) -> R) -> R {
        reader(&cell.read())
    }

    #[cfg(not(loom))]
    #[inline]
    fn write<V, R>(cell: &Self::Cell<V>, writer: impl FnOnce(&mut V) -> R) -> R {
        writer(&mut cell.write())
    }

    #[cfg(loom)]
    fn read<V, R>(cell: &Self::Cell<V>, reader: impl FnOnce(&V) -> R) -> R {
        reader(&cell.read().unwrap_or_else(PoisonError::into_inner))
    }

    #[cfg(loom)]
    fn write<V, R>(cell: &Self::Cell<V>, writer: impl FnOnce(&mut V) -> R) -> R {
        writer(&mut cell.write().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Leaves the table unguarded.
///
/// For single-threaded use where lock overhead is unwanted. Sets using this
/// guard can be moved to another thread but never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unsynchronized;

impl Sealed for Unsynchronized {}

impl Guard for Unsynchronized {
    type Cell<V> = RefCell<V>;

    #[inline]
    fn new<V>(value: V) -> Self::Cell<V> {
        RefCell::new(value)
    }

    #[inline]
    fn read<V, R>(cell: &Self::Cell<V>, reader: impl FnOnce(&V) -> R) -> R {
        reader(&cell.borrow())
    }

    #[inline]
    fn write<V, R>(cell: &Self::Cell<V>, writer: impl FnOnce(&mut V) -> R) -> R {
        writer(&mut cell.borrow_mut())
    }
}
