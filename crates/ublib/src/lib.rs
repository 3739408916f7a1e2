//! # `ublib` Text Vectorization Adapters
//!
//! Small adapters between text, vocabularies, embeddings and tensors.
//!
//! See:
//! * [`sequences`] to turn documents into padded integer batches, and back.
//! * [`vectorizers`] for count, TF-IDF and embedded bag-of-words vectors.
//! * [`embeddings`] to peek at and load word2vec text embeddings.
//! * [`ops`] for the batched row-wise inner product.
//! * [`autoencoder`] for encode / reconstruct composition.
//!
//! Lower level pieces live in [`analysis`] (tokenizing), [`vocab`] (term
//! indices and reserved sequence indices) and [`sparse`] (CSR matrices).
//!
//! ## Padded Sequences
//!
//! ```rust
//! use ublib::sequences::PaddedSequenceOptions;
//!
//! let mut sequencer = PaddedSequenceOptions::default()
//!     .with_sort(true)
//!     .build::<u32>()
//!     .unwrap();
//!
//! let batch = sequencer.fit_transform(&["a b", "b c c"]).unwrap();
//! assert_eq!(batch.lengths(), &[3, 2]);
//! assert_eq!(batch.order(), &[1, 0]);
//!
//! let batch = batch.restore_order();
//! let docs = sequencer
//!     .inverse_transform_joined(batch.tokens().rows(), " ")
//!     .unwrap();
//! assert_eq!(docs, vec!["a b <PAD>", "b c c"]);
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod analysis;
pub mod autoencoder;
pub mod embeddings;
pub mod errors;
pub mod ops;
pub mod sequences;
pub mod sparse;
pub mod types;
pub mod vectorizers;
pub mod vocab;

#[doc(inline)]
pub use autoencoder::{AutoEncoder, reconstruct};
#[doc(inline)]
pub use errors::{UbResult, UblibError};
#[doc(inline)]
pub use types::TokenType;
