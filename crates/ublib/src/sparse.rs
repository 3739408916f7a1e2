//! # Compressed Sparse Row Matrices
//!
//! Document-term matrices are very sparse; [`CsrMatrix`] stores only the
//! non-zero entries of each row, and can be right-multiplied by a dense
//! [`ndarray`] matrix.

use ndarray::{Array2, ArrayView2};

use crate::errors::{UbResult, UblibError};

/// A row-major sparse `f32` matrix.
///
/// Row `i` holds the entries `indices[indptr[i]..indptr[i + 1]]`
/// (column ids, ascending) with values `data[indptr[i]..indptr[i + 1]]`.
///
/// ## Style Hints
///
/// Instance names should prefer `counts` or `scores`, after what the values hold.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    n_cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f32>,
}

impl CsrMatrix {
    /// Build a matrix from per-row `(column, value)` entries.
    ///
    /// ## Arguments
    /// * `n_cols` - The column count; every column id must be below it.
    /// * `rows` - The entries of each row, in any order, without duplicates.
    ///
    /// ## Panics
    /// Panics if a column id is out of range.
    pub fn from_rows<R>(
        n_cols: usize,
        rows: R,
    ) -> Self
    where
        R: IntoIterator<Item = Vec<(usize, f32)>>,
    {
        let mut indptr = vec![0];
        let mut indices = Vec::new();
        let mut data = Vec::new();

        for mut row in rows {
            row.sort_unstable_by_key(|&(col, _)| col);
            for (col, value) in row {
                assert!(col < n_cols, "column {col} out of range for {n_cols} columns");
                indices.push(col);
                data.push(value);
            }
            indptr.push(indices.len());
        }

        Self {
            n_cols,
            indptr,
            indices,
            data,
        }
    }

    /// The number of rows.
    pub fn n_rows(&self) -> usize {
        self.indptr.len() - 1
    }

    /// The number of columns.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// The `(rows, cols)` shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols)
    }

    /// The number of stored entries.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// The `(columns, values)` of row `i`.
    pub fn row(
        &self,
        i: usize,
    ) -> (&[usize], &[f32]) {
        let span = self.indptr[i]..self.indptr[i + 1];
        (&self.indices[span.clone()], &self.data[span])
    }

    /// Look up a single entry; absent entries are zero.
    pub fn get(
        &self,
        i: usize,
        j: usize,
    ) -> f32 {
        let (cols, values) = self.row(i);
        match cols.binary_search(&j) {
            Ok(pos) => values[pos],
            Err(_) => 0.0,
        }
    }

    /// Apply `f` to every stored value.
    pub fn map_values_inplace<F>(
        &mut self,
        f: F,
    ) where
        F: Fn(f32) -> f32,
    {
        self.data.iter_mut().for_each(|v| *v = f(*v));
    }

    /// Multiply every stored value by its column's factor.
    ///
    /// ## Panics
    /// Panics if `factors.len() != self.n_cols()`.
    pub fn scale_columns(
        &mut self,
        factors: &[f32],
    ) {
        assert_eq!(factors.len(), self.n_cols);
        for (col, value) in self.indices.iter().zip(self.data.iter_mut()) {
            *value *= factors[*col];
        }
    }

    /// Call `f` with the mutable values of each row.
    pub fn for_each_row_mut<F>(
        &mut self,
        mut f: F,
    ) where
        F: FnMut(&mut [f32]),
    {
        for w in self.indptr.windows(2) {
            f(&mut self.data[w[0]..w[1]]);
        }
    }

    /// Count, per column, the rows with a stored non-zero entry.
    pub fn column_nonzero_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.n_cols];
        for (col, value) in self.indices.iter().zip(&self.data) {
            if *value != 0.0 {
                counts[*col] += 1;
            }
        }
        counts
    }

    /// Expand into a dense matrix.
    pub fn to_dense(&self) -> Array2<f32> {
        let mut dense = Array2::zeros((self.n_rows(), self.n_cols));
        for i in 0..self.n_rows() {
            let (cols, values) = self.row(i);
            for (&j, &v) in cols.iter().zip(values) {
                dense[[i, j]] = v;
            }
        }
        dense
    }

    /// Compute the dense product `self @ rhs`.
    ///
    /// ## Returns
    /// A `(self.n_rows(), rhs.ncols())` matrix; or [`UblibError::ShapeMismatch`]
    /// when `rhs.nrows() != self.n_cols()`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, rhs)))]
    pub fn dot_dense(
        &self,
        rhs: &ArrayView2<f32>,
    ) -> UbResult<Array2<f32>> {
        if rhs.nrows() != self.n_cols {
            return Err(UblibError::ShapeMismatch {
                expected: vec![self.n_cols, rhs.ncols()],
                found: rhs.shape().to_vec(),
            });
        }

        let mut out = Array2::zeros((self.n_rows(), rhs.ncols()));
        for (i, mut out_row) in out.rows_mut().into_iter().enumerate() {
            let (cols, values) = self.row(i);
            for (&j, &v) in cols.iter().zip(values) {
                out_row.scaled_add(v, &rhs.row(j));
            }
        }
        Ok(out)
    }
}
