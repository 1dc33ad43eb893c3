//! Run-time set configuration.
//!
//! The type parameters of [`Set`](crate::Set) fix a configuration at compile
//! time. [`SetConfig`] makes the same choice from data instead and builds a
//! [`DynSet`]:
//!
//! | `indexing` \ `synchronization` | `Locked`             | `LockFree`                 |
//! |--------------------------------|----------------------|----------------------------|
//! | `Tracked`                      | [`LockedSet`]        | rejected                   |
//! | `Untracked`                    | [`PlainSet`]         | [`ConcurrentSet`]          |
//!
//! Tracked indexing needs every insertion to see a single counter, which the
//! lock-free tier does not have, so that combination is a
//! [`ConfigError::IndexingUnsupported`].
//!
//! Unsynchronized sets are not offered here: a value that may hold one can
//! never be `Sync`. Pick [`UnsyncSet`](crate::UnsyncSet) or
//! [`UnsyncPlainSet`](crate::UnsyncPlainSet) by type instead.
//!
//! [`LockedSet`]: crate::LockedSet
//! [`PlainSet`]: crate::PlainSet
//! [`ConcurrentSet`]: crate::ConcurrentSet
//!
//! # Examples
//!
//! ```rust
//! use syncset::{Indexing, SetConfig, Synchronization, UniqueSet};
//!
//! let set = SetConfig::new()
//!     .with_indexing(Indexing::Untracked)
//!     .with_synchronization(Synchronization::Locked)
//!     .with_capacity(16)
//!     .build::<u64>()
//!     .expect("untracked + locked is always valid");
//!
//! assert!(set.add(7));
//! assert!(set.as_indexed().is_none());
//! ```

use std::fmt;
use std::hash::Hash;

use thiserror::Error;

use crate::dyn_set::DynSet;

// =============================================================================
// Axes
// =============================================================================

/// Whether a set tracks insertion indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Indexing {
    /// Every element gets an insertion index; `index`, `at` and `replace`
    /// are available.
    #[default]
    Tracked,
    /// Membership only.
    Untracked,
}

impl fmt::Display for Indexing {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tracked => write!(formatter, "tracked"),
            Self::Untracked => write!(formatter, "untracked"),
        }
    }
}

/// How a set synchronizes concurrent access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Synchronization {
    /// A reader-writer lock around the whole table.
    #[default]
    Locked,
    /// A sharded map with an atomic counter. Requires the `concurrent`
    /// feature.
    LockFree,
}

impl fmt::Display for Synchronization {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(formatter, "locked"),
            Self::LockFree => write!(formatter, "lock-free"),
        }
    }
}

// =============================================================================
// ConfigError
// =============================================================================

/// Error returned when a [`SetConfig`] cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The synchronization strategy cannot track insertion indices.
    #[error("{synchronization} sets cannot track insertion indices")]
    IndexingUnsupported {
        /// The requested synchronization strategy.
        synchronization: Synchronization,
    },

    /// The configuration needs a cargo feature that is not enabled.
    #[error("{synchronization} sets require the `{feature}` feature")]
    FeatureDisabled {
        /// The requested synchronization strategy.
        synchronization: Synchronization,
        /// The cargo feature that provides it.
        feature: &'static str,
    },
}

// =============================================================================
// SetConfig
// =============================================================================

/// Run-time choice of set configuration.
///
/// The default is tracked indexing, locked synchronization and no
/// preallocated capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SetConfig {
    /// Whether insertion indices are tracked.
    pub indexing: Indexing,
    /// How concurrent access is synchronized.
    pub synchronization: Synchronization,
    /// Number of elements to preallocate room for.
    pub capacity: usize,
}

impl SetConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indexing: Indexing::Tracked,
            synchronization: Synchronization::Locked,
            capacity: 0,
        }
    }

    /// Sets the indexing axis.
    #[must_use]
    pub const fn with_indexing(mut self, indexing: Indexing) -> Self {
        self.indexing = indexing;
        self
    }

    /// Sets the synchronization axis.
    #[must_use]
    pub const fn with_synchronization(mut self, synchronization: Synchronization) -> Self {
        self.synchronization = synchronization;
        self
    }

    /// Sets the preallocated capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks that the configuration can be built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IndexingUnsupported`] for tracked indexing with
    /// lock-free synchronization, and [`ConfigError::FeatureDisabled`] for
    /// lock-free synchronization without the `concurrent` feature.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        match (self.indexing, self.synchronization) {
            (Indexing::Tracked, Synchronization::LockFree) => {
                Err(ConfigError::IndexingUnsupported {
                    synchronization: Synchronization::LockFree,
                })
            }
            (Indexing::Untracked, Synchronization::LockFree) if !cfg!(feature = "concurrent") => {
                Err(ConfigError::FeatureDisabled {
                    synchronization: Synchronization::LockFree,
                    feature: "concurrent",
                })
            }
            _ => Ok(()),
        }
    }

    /// Builds an empty set with this configuration.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`SetConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncset::{ConfigError, Indexing, SetConfig, Synchronization};
    ///
    /// let error = SetConfig::new()
    ///     .with_indexing(Indexing::Tracked)
    ///     .with_synchronization(Synchronization::LockFree)
    ///     .build::<String>()
    ///     .unwrap_err();
    ///
    /// assert!(matches!(error, ConfigError::IndexingUnsupported { .. }));
    /// ```
    pub fn build<T>(&self) -> Result<DynSet<T>, ConfigError>
    where
        T: Eq + Hash + Clone,
    {
        self.validate()?;
        tracing::debug!(
            indexing = %self.indexing,
            synchronization = %self.synchronization,
            capacity = self.capacity,
            "building set"
        );
        Ok(DynSet::with_config(self))
    }
}
