//! # Reserved Sequence Indices
//!
//! Sequence vocabularies carve two indices out of the front of the index
//! space; every learned term is shifted past them by [`VOCAB_OFFSET`].

/// Index used for padding positions.
pub const PAD_INDEX: usize = 0;

/// Index used for tokens missing from the vocabulary.
pub const UNK_INDEX: usize = 1;

/// Shift applied to every learned term index.
pub const VOCAB_OFFSET: usize = 2;

/// Literal decoded for [`PAD_INDEX`].
pub const PAD_TOKEN: &str = "<PAD>";

/// Literal decoded for [`UNK_INDEX`].
pub const UNK_TOKEN: &str = "<UNK>";

/// Is `index` one of the reserved indices?
pub fn is_reserved_index(index: usize) -> bool {
    index == PAD_INDEX || index == UNK_INDEX
}
