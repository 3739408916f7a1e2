//! # Sequence Vocabulary

use crate::{
    errors::{UbResult, UblibError},
    vocab::{
        TermVocab,
        reserved::{PAD_INDEX, PAD_TOKEN, UNK_INDEX, UNK_TOKEN, VOCAB_OFFSET, is_reserved_index},
    },
};

/// A [`TermVocab`] shifted past the reserved `PAD` / `UNK` indices.
///
/// Holds both directions: `term -> index + VOCAB_OFFSET` for encoding,
/// and the reverse table (including `"<PAD>"` and `"<UNK>"`) for decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceVocab {
    terms: TermVocab,
    reverse: Vec<String>,
}

impl SequenceVocab {
    /// Build a sequence vocabulary over learned terms.
    ///
    /// ## Returns
    /// The vocabulary; or [`UblibError::ReservedIndexCollision`] if any shifted
    /// term would land on a reserved index.
    pub fn new(terms: TermVocab) -> UbResult<Self> {
        let mut reverse = vec![String::new(); terms.len() + VOCAB_OFFSET];
        reverse[PAD_INDEX] = PAD_TOKEN.to_string();
        reverse[UNK_INDEX] = UNK_TOKEN.to_string();

        for (term, index) in terms.iter() {
            let shifted = index + VOCAB_OFFSET;
            if is_reserved_index(shifted) {
                return Err(UblibError::ReservedIndexCollision {
                    token: term.to_string(),
                    index: shifted,
                });
            }
            reverse[shifted] = term.to_string();
        }

        Ok(Self { terms, reverse })
    }

    /// The underlying unshifted vocabulary.
    pub fn term_vocab(&self) -> &TermVocab {
        &self.terms
    }

    /// The total index space, including reserved indices.
    pub fn size(&self) -> usize {
        self.reverse.len()
    }

    /// Look up the shifted index of a term.
    pub fn lookup(
        &self,
        term: &str,
    ) -> Option<usize> {
        self.terms.get(term).map(|index| index + VOCAB_OFFSET)
    }

    /// Decode a shifted index.
    ///
    /// ## Returns
    /// The term, `"<PAD>"`, `"<UNK>"`; or [`UblibError::UnknownIndex`].
    pub fn decode_index(
        &self,
        index: usize,
    ) -> UbResult<&str> {
        self.reverse
            .get(index)
            .map(String::as_str)
            .ok_or(UblibError::UnknownIndex { index })
    }
}
