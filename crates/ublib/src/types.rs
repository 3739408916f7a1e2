//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{UbResult, UblibError};

/// A type that can be used as a token index in padded sequences.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max token in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Validates that every index in `[0, vocab_size)` is representable as `T`.
///
/// ## Returns
/// The `vocab_size`, or [`UblibError::VocabSizeOverflow`].
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> UbResult<usize> {
    if vocab_size > 0 && T::from_usize(vocab_size - 1).is_none() {
        Err(UblibError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

/// Convert a `usize` index to `T`.
///
/// Callers must have validated the range with [`try_vocab_size`].
pub(crate) fn index_to_token<T: TokenType>(index: usize) -> T {
    T::from_usize(index).unwrap_or_else(T::max_value)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type UbHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> UbHashMap<K, V> {
            UbHashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type UbHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type UbHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> UbHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type UbHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type UbHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> UbHashMap<K, V> {
            UbHashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type UbHashSet<V> = std::collections::HashSet<V>;
    }
}
