//! # Tensor Ops
//!
//! Small batched operations over [`ndarray`] arrays.

mod inner_product;

#[doc(inline)]
pub use inner_product::*;
