//! # Padded Batches

use core::cmp::Reverse;

use ndarray::{Array2, ArrayView1, s};

use crate::{
    types::{TokenType, index_to_token},
    vocab::PAD_INDEX,
};

/// A batch of variable-length sequences padded into a fixed-width array.
///
/// Row `r` of [`tokens`](Self::tokens) holds the sequence of input
/// `order()[r]`, of true length `lengths()[r]`, followed by `PAD`.
///
/// ## Style Hints
///
/// Instance names should prefer `batch`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedBatch<T: TokenType> {
    tokens: Array2<T>,
    lengths: Vec<usize>,
    order: Vec<usize>,
}

impl<T: TokenType> PaddedBatch<T> {
    /// The `(batch, width)` token array.
    pub fn tokens(&self) -> &Array2<T> {
        &self.tokens
    }

    /// The true length of each row.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// The input index of each row.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The number of rows.
    pub fn batch_size(&self) -> usize {
        self.tokens.nrows()
    }

    /// The padded width.
    pub fn width(&self) -> usize {
        self.tokens.ncols()
    }

    /// Are the rows in input order?
    pub fn is_input_order(&self) -> bool {
        self.order.iter().enumerate().all(|(row, &src)| row == src)
    }

    /// The unpadded prefix of row `row`.
    ///
    /// ## Panics
    /// Panics if `row >= self.batch_size()`.
    pub fn sequence(
        &self,
        row: usize,
    ) -> ArrayView1<'_, T> {
        self.tokens.slice(s![row, ..self.lengths[row]])
    }

    /// Reorder the rows back into input order.
    pub fn restore_order(self) -> Self {
        if self.is_input_order() {
            return self;
        }

        let mut tokens = Array2::from_elem(self.tokens.dim(), index_to_token::<T>(PAD_INDEX));
        let mut lengths = vec![0; self.lengths.len()];
        for (row, &src) in self.order.iter().enumerate() {
            tokens.row_mut(src).assign(&self.tokens.row(row));
            lengths[src] = self.lengths[row];
        }

        Self {
            tokens,
            lengths,
            order: (0..self.order.len()).collect(),
        }
    }

    /// Split into `(tokens, lengths, order)`.
    pub fn into_parts(self) -> (Array2<T>, Vec<usize>, Vec<usize>) {
        (self.tokens, self.lengths, self.order)
    }
}

/// Pad a batch of sequences into a [`PaddedBatch`].
///
/// ## Arguments
/// * `sequences` - The token sequences.
/// * `sort` - Reorder rows by descending length; ties keep input order.
///
/// ## Returns
/// A `(sequences.len(), width)` batch, where `width` is the longest
/// sequence length. An empty batch has shape `(0, 0)`; a non-empty batch
/// is at least one column wide, so all-empty sequences give all-`PAD` rows.
pub fn pad_sequences<T, S>(
    sequences: &[S],
    sort: bool,
) -> PaddedBatch<T>
where
    T: TokenType,
    S: AsRef<[T]>,
{
    let mut order: Vec<usize> = (0..sequences.len()).collect();
    if sort {
        order.sort_by_key(|&i| Reverse(sequences[i].as_ref().len()));
    }

    let lengths: Vec<usize> = order.iter().map(|&i| sequences[i].as_ref().len()).collect();

    let width = match lengths.iter().max() {
        Some(&max_len) => max_len.max(1),
        None => 0,
    };

    let mut tokens = Array2::from_elem((sequences.len(), width), index_to_token::<T>(PAD_INDEX));
    for (mut row, &src) in tokens.rows_mut().into_iter().zip(&order) {
        let seq = sequences[src].as_ref();
        row.slice_mut(s![..seq.len()]).assign(&ArrayView1::from(seq));
    }

    log::trace!("padded {} sequences to width {}", sequences.len(), width);

    PaddedBatch {
        tokens,
        lengths,
        order,
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_pad_in_order() {
        let sequences: Vec<Vec<u32>> = vec![vec![2, 3], vec![4, 5, 6], vec![]];
        let batch: PaddedBatch<u32> = pad_sequences(&sequences, false);
        assert_eq!(batch.tokens(), &array![[2, 3, 0], [4, 5, 6], [0, 0, 0]]);
        assert_eq!(batch.lengths(), &[2, 3, 0]);
        assert_eq!(batch.order(), &[0, 1, 2]);
        assert!(batch.is_input_order());
        assert_eq!(batch.sequence(0), array![2, 3]);
    }

    #[test]
    fn test_pad_sorted() {
        let sequences: Vec<Vec<u16>> = vec![vec![2], vec![3, 4, 5], vec![6, 7], vec![8]];
        let batch: PaddedBatch<u16> = pad_sequences(&sequences, true);
        assert_eq!(batch.lengths(), &[3, 2, 1, 1]);
        assert_eq!(batch.order(), &[1, 2, 0, 3]);
        assert_eq!(
            batch.tokens(),
            &array![[3, 4, 5], [6, 7, 0], [2, 0, 0], [8, 0, 0]]
        );

        let restored = batch.restore_order();
        assert_eq!(restored, pad_sequences::<u16, _>(&sequences, false));
    }

    #[test]
    fn test_pad_degenerate() {
        let empty: Vec<Vec<u32>> = vec![];
        let batch: PaddedBatch<u32> = pad_sequences(&empty, true);
        assert_eq!(batch.tokens().dim(), (0, 0));
        assert!(batch.lengths().is_empty());

        let batch = pad_sequences::<u32, Vec<u32>>(&[vec![], vec![]], false);
        assert_eq!(batch.tokens(), &array![[0], [0]]);
        assert_eq!(batch.lengths(), &[0, 0]);

        let (tokens, lengths, order) = batch.into_parts();
        assert_eq!(tokens.dim(), (2, 1));
        assert_eq!(lengths, vec![0, 0]);
        assert_eq!(order, vec![0, 1]);
    }
}
