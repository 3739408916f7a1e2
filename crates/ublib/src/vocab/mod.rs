//! # Vocabulary
//!
//! * [`TermVocab`] - a dense ``{ String -> usize }`` vocabulary learned by a
//!   [`crate::vectorizers::CountVectorizer`], or fixed by the caller.
//! * [`SequenceVocab`] - a [`TermVocab`] shifted past the reserved indices
//!   in [`reserved`], with the reverse table used for decoding.

pub mod reserved;
pub mod sequence_vocab;
pub mod term_vocab;

#[doc(inline)]
pub use reserved::{PAD_INDEX, PAD_TOKEN, UNK_INDEX, UNK_TOKEN, VOCAB_OFFSET};
#[doc(inline)]
pub use sequence_vocab::SequenceVocab;
#[doc(inline)]
pub use term_vocab::TermVocab;
