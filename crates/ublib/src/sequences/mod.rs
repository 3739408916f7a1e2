//! # Padded Sequences
//!
//! [`PaddedSequence`] turns free text into fixed-width integer batches for
//! sequence models:
//!
//! 1. `fit` learns a unigram vocabulary;
//! 2. `encode_sequences` maps every term to its shifted index, applying
//!    the `UNK` and empty-document policies;
//! 3. [`pad_sequences`] pads (and optionally sorts) the batch;
//! 4. `inverse_transform` maps indices back to terms.
//!
//! ## Example
//!
//! ```rust
//! use ublib::sequences::PaddedSequenceOptions;
//!
//! let mut sequencer = PaddedSequenceOptions::default().build::<u32>().unwrap();
//! let batch = sequencer.fit_transform(&["a b", "b c c"]).unwrap();
//! assert_eq!(batch.tokens().dim(), (2, 3));
//!
//! let text = sequencer
//!     .inverse_transform_joined(&sequencer.encode_sequences(&["a b"]).unwrap(), "_")
//!     .unwrap();
//! assert_eq!(text, vec!["a_b"]);
//! ```

mod padded_batch;
mod padded_sequence;
mod sequence_options;

#[doc(inline)]
pub use padded_batch::*;
#[doc(inline)]
pub use padded_sequence::*;
#[doc(inline)]
pub use sequence_options::*;
