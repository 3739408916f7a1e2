//! # Word Embeddings
//!
//! Loading and inspecting word2vec text embeddings.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ublib::embeddings::{Word2VecHeader, load_word2vec_text};
//!
//! let header = Word2VecHeader::peek("vectors.txt.gz", true).unwrap();
//! let kv = load_word2vec_text("vectors.txt.gz", true).unwrap();
//! assert_eq!(kv.dim(), header.dim);
//! ```

mod keyed_vectors;
mod word2vec_io;

#[doc(inline)]
pub use keyed_vectors::*;
#[doc(inline)]
pub use word2vec_io::*;
