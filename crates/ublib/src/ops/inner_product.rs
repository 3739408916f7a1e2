//! # Batched Inner Product

use ndarray::{Array, ArrayBase, Axis, Data, Dimension, LinalgScalar, RemoveAxis, Zip};

use crate::errors::{UbResult, UblibError};

/// The default contraction axis; axis 0 is the batch.
pub const DEFAULT_INNER_PRODUCT_AXIS: usize = 1;

/// Row-wise dot product of two equal-shaped batches.
///
/// For `(batch, dim)` inputs, `forward` returns the `(batch,)` dot products
/// of corresponding rows; no cross-batch terms are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InnerProduct {
    axis: usize,
}

impl Default for InnerProduct {
    fn default() -> Self {
        Self::new(DEFAULT_INNER_PRODUCT_AXIS)
    }
}

impl InnerProduct {
    /// Create an inner product contracting `axis`.
    pub fn new(axis: usize) -> Self {
        Self { axis }
    }

    /// The contracted axis.
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Multiply `a` and `b` elementwise and sum along the contracted axis.
    ///
    /// ## Returns
    /// An array with the contracted axis removed;
    /// [`UblibError::ShapeMismatch`] if the shapes differ, or
    /// [`UblibError::AxisOutOfBounds`].
    pub fn forward<A, S1, S2, D>(
        &self,
        a: &ArrayBase<S1, D>,
        b: &ArrayBase<S2, D>,
    ) -> UbResult<Array<A, D::Smaller>>
    where
        A: LinalgScalar,
        S1: Data<Elem = A>,
        S2: Data<Elem = A>,
        D: Dimension + RemoveAxis,
    {
        if a.shape() != b.shape() {
            return Err(UblibError::ShapeMismatch {
                expected: a.shape().to_vec(),
                found: b.shape().to_vec(),
            });
        }
        if self.axis >= a.ndim() {
            return Err(UblibError::AxisOutOfBounds {
                axis: self.axis,
                ndim: a.ndim(),
            });
        }

        let products = Zip::from(a).and(b).map_collect(|&x, &y| x * y);
        Ok(products.sum_axis(Axis(self.axis)))
    }
}
