//! Hasher selection.
//!
//! Every set in this crate is generic over a [`BuildHasher`](std::hash::BuildHasher)
//! and defaults to [`DefaultHashBuilder`]. Which hasher that is depends on the
//! enabled feature flags:
//!
//! | Feature   | `DefaultHashBuilder`              |
//! |-----------|-----------------------------------|
//! | (none)    | `std::hash::RandomState` (SipHash) |
//! | `fxhash`  | `rustc_hash::FxBuildHasher`       |
//! | `ahash`   | `ahash::RandomState`              |
//!
//! If both `fxhash` and `ahash` are enabled, `fxhash` wins.
//!
//! `fxhash` is not resistant to hash flooding. Only enable it when elements
//! do not come from untrusted input.

/// The hasher used by sets constructed without an explicit hasher.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hasher used by sets constructed without an explicit hasher.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hasher used by sets constructed without an explicit hasher.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

#[cfg(test)]
mod tests {
    use super::DefaultHashBuilder;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_default_hash_builder_is_deterministic_per_instance() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("element"), builder.hash_one("element"));
    }

    #[rstest]
    fn test_default_hash_builder_clone_hashes_identically() {
        let builder = DefaultHashBuilder::default();
        let clone = builder.clone();
        assert_eq!(builder.hash_one(42_u64), clone.hash_one(42_u64));
    }
}
