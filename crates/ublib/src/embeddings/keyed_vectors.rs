//! # Keyed Vectors

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::{
    errors::{UbResult, UblibError},
    vocab::TermVocab,
};

/// An embedding matrix keyed by word.
///
/// Row `i` of [`vectors`](Self::vectors) belongs to `index2word()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedVectors {
    vocab: TermVocab,
    vectors: Array2<f32>,
}

impl KeyedVectors {
    /// Pair an ordered word list with its embedding rows.
    ///
    /// ## Returns
    /// The keyed vectors; [`UblibError::ShapeMismatch`] when the row count
    /// differs from the word count, or [`UblibError::DuplicateTerm`].
    pub fn new<I, S>(
        index2word: I,
        vectors: Array2<f32>,
    ) -> UbResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vocab = TermVocab::from_ordered_terms(index2word)?;
        if vocab.len() != vectors.nrows() {
            return Err(UblibError::ShapeMismatch {
                expected: vec![vocab.len(), vectors.ncols()],
                found: vectors.shape().to_vec(),
            });
        }
        Ok(Self { vocab, vectors })
    }

    /// The number of words.
    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    /// Is this empty?
    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }

    /// The embedding dimension.
    pub fn dim(&self) -> usize {
        self.vectors.ncols()
    }

    /// The words, in row order.
    pub fn index2word(&self) -> &[String] {
        self.vocab.terms()
    }

    /// The word vocabulary.
    pub fn vocab(&self) -> &TermVocab {
        &self.vocab
    }

    /// The `(len, dim)` embedding matrix.
    pub fn vectors(&self) -> ArrayView2<'_, f32> {
        self.vectors.view()
    }

    /// Look up the vector of a word.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<ArrayView1<'_, f32>> {
        self.vocab.get(word).map(|row| self.vectors.row(row))
    }

    /// Split into the word vocabulary and the embedding matrix.
    pub fn into_parts(self) -> (TermVocab, Array2<f32>) {
        (self.vocab, self.vectors)
    }
}
