//! # syncset
//!
//! A unique-element set with insertion-index tracking, order-preserving
//! replacement and positional lookup, usable from one thread or many.
//!
//! ## Overview
//!
//! - [`Set`]: the container. Two orthogonal type parameters configure it:
//!   - layout: [`Indexed`] (insertion indices, [`Set::index`], [`Set::at`],
//!     [`Set::replace`], index-ordered snapshots) or [`Unindexed`]
//!     (membership only);
//!   - guard: [`Locked`] (reader-writer lock, `Send + Sync`) or
//!     [`Unsynchronized`] (no lock, `!Sync`).
//! - [`ConcurrentSet`]: a sharded, lock-free-best-effort set with an atomic
//!   counter, offering the membership tier only.
//! - [`UniqueSet`]: the membership tier every set implements.
//! - [`SetConfig`] / [`DynSet`]: choose the configuration at run time.
//!
//! No operation fails. Absence and duplication are reported with `bool` and
//! `Option` return values.
//!
//! ## Feature Flags
//!
//! - `concurrent` (default): [`ConcurrentSet`], backed by `dashmap`
//! - `fxhash`: use `rustc-hash` as [`DefaultHashBuilder`]
//! - `ahash`: use `ahash` as [`DefaultHashBuilder`]
//! - `full`: enable all default-off features that add functionality
//!
//! ## Example
//!
//! ```rust
//! use syncset::prelude::*;
//!
//! let set: LockedSet<&str> = LockedSet::new();
//! set.add("test0");
//! set.add("test1");
//!
//! assert_eq!(set.to_vec(), vec!["test0", "test1"]);
//! assert_eq!(set.index("test1"), Some(1));
//! assert!(set.remove("test0"));
//! assert_eq!(set.at(0), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use syncset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigError, Indexing, SetConfig, Synchronization};
    pub use crate::dyn_set::DynSet;
    pub use crate::guard::{Guard, Locked, Unsynchronized};
    pub use crate::set::{LockedSet, PlainSet, Set, UnsyncPlainSet, UnsyncSet};
    pub use crate::table::{Indexed, Layout, Unindexed};
    pub use crate::unique_set::UniqueSet;

    #[cfg(feature = "concurrent")]
    pub use crate::concurrent::ConcurrentSet;
}

pub mod guard;
pub mod hash;
pub mod table;

mod config;
mod dyn_set;
mod set;
mod unique_set;

#[cfg(feature = "concurrent")]
mod concurrent;

pub use config::{ConfigError, Indexing, SetConfig, Synchronization};
pub use dyn_set::DynSet;
pub use guard::{Guard, Locked, Unsynchronized};
pub use hash::DefaultHashBuilder;
pub use set::{LockedSet, PlainSet, Set, UnsyncPlainSet, UnsyncSet};
pub use table::{Indexed, Layout, Unindexed};
pub use unique_set::UniqueSet;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentSet;

mod sealed {
    /// Restricts [`Guard`](crate::Guard), [`Layout`](crate::Layout) and
    /// [`Table`](crate::table::Table) to the implementations in this crate.
    pub trait Sealed {}
}
