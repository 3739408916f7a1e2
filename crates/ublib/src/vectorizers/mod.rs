//! # Vectorizers
//!
//! Bag-of-words document vectorizers:
//!
//! * [`CountVectorizer`] - sparse term counts over a learned or fixed vocabulary.
//! * [`TfidfVectorizer`] - counts re-weighted by a [`TfidfTransformer`].
//! * [`EmbeddedVectorizer`] - TF-IDF scores projected through an embedding matrix.
//!
//! Every vectorizer follows the same two-phase contract: `fit(&mut self, docs)`
//! learns state and returns `&mut Self` for chaining; `transform(&self, docs)`
//! never mutates it.
//!
//! ## Example
//!
//! ```rust
//! use ndarray::array;
//! use ublib::vectorizers::{EmbeddedVectorizer, Norm, TfidfOptions};
//!
//! let embedding = array![[1.0, 0.0], [0.0, 1.0]];
//! let options = TfidfOptions::default().with_norm(Norm::L1);
//!
//! let mut embedder = EmbeddedVectorizer::new(embedding, ["cat", "dog"], options).unwrap();
//! let vectors = embedder.fit_transform(&["cat dog", "dog"]).unwrap();
//! assert_eq!(vectors.shape(), &[2, 2]);
//! ```

mod count_options;
mod count_vectorizer;
mod embedded_vectorizer;
mod tfidf;

#[doc(inline)]
pub use count_options::*;
#[doc(inline)]
pub use count_vectorizer::*;
#[doc(inline)]
pub use embedded_vectorizer::*;
#[doc(inline)]
pub use tfidf::*;
