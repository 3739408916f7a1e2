//! # Embedded Bag-of-Words Vectorizer

use ndarray::Array2;

use crate::{
    embeddings::KeyedVectors,
    errors::{UbResult, UblibError},
    vectorizers::{TfidfOptions, TfidfVectorizer},
    vocab::TermVocab,
};

/// Projects TF-IDF document vectors through an embedding matrix.
///
/// Each output row is the TF-IDF weighted sum of the embeddings of the
/// document's words. The TF-IDF vocabulary is fixed to the embedding's
/// row order, so column `i` of the score matrix lines up with row `i`
/// of the embedding.
///
/// ## Style Hints
///
/// Instance names should prefer `embedder`.
#[derive(Debug, Clone)]
pub struct EmbeddedVectorizer {
    tfidf: TfidfVectorizer,
    embedding: Array2<f32>,
}

impl EmbeddedVectorizer {
    /// Build a vectorizer over an embedding matrix.
    ///
    /// ## Arguments
    /// * `embedding` - The `(V, D)` embedding matrix.
    /// * `index2word` - The `V` words, in row order.
    /// * `options` - TF-IDF options; the vocabulary options are ignored.
    ///
    /// ## Returns
    /// The vectorizer; [`UblibError::ShapeMismatch`] if the row count differs
    /// from the word count, or [`UblibError::DuplicateTerm`].
    pub fn new<I, S>(
        embedding: Array2<f32>,
        index2word: I,
        options: TfidfOptions,
    ) -> UbResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vocab = TermVocab::from_ordered_terms(index2word)?;
        Self::from_parts(vocab, embedding, options)
    }

    /// Build a vectorizer over loaded word vectors.
    pub fn from_keyed_vectors(
        kv: KeyedVectors,
        options: TfidfOptions,
    ) -> UbResult<Self> {
        let (vocab, embedding) = kv.into_parts();
        Self::from_parts(vocab, embedding, options)
    }

    fn from_parts(
        vocab: TermVocab,
        embedding: Array2<f32>,
        options: TfidfOptions,
    ) -> UbResult<Self> {
        if embedding.nrows() != vocab.len() {
            return Err(UblibError::ShapeMismatch {
                expected: vec![vocab.len(), embedding.ncols()],
                found: embedding.shape().to_vec(),
            });
        }
        Ok(Self {
            tfidf: options.build_with_vocabulary(vocab)?,
            embedding,
        })
    }

    /// The embedding dimension.
    pub fn dim(&self) -> usize {
        self.embedding.ncols()
    }

    /// The embedding matrix.
    pub fn embedding(&self) -> &Array2<f32> {
        &self.embedding
    }

    /// The underlying TF-IDF vectorizer.
    pub fn tfidf(&self) -> &TfidfVectorizer {
        &self.tfidf
    }

    /// Learn document frequencies from `docs`.
    pub fn fit<S: AsRef<str>>(
        &mut self,
        docs: &[S],
    ) -> UbResult<&mut Self> {
        self.tfidf.fit(docs)?;
        Ok(self)
    }

    /// Embed `docs`.
    ///
    /// ## Returns
    /// A `(docs.len(), dim)` dense matrix.
    pub fn transform<S: AsRef<str>>(
        &self,
        docs: &[S],
    ) -> UbResult<Array2<f32>> {
        let scores = self.tfidf.transform(docs)?;
        log::trace!(
            "projecting {:?} scores through {:?} embedding",
            scores.shape(),
            self.embedding.shape()
        );
        scores.dot_dense(&self.embedding.view())
    }

    /// [`fit`](Self::fit), then [`transform`](Self::transform).
    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        docs: &[S],
    ) -> UbResult<Array2<f32>> {
        self.fit(docs)?.transform(docs)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::vectorizers::Norm;

    fn embedding() -> Array2<f32> {
        array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
    }

    #[test]
    fn test_weighted_sum() {
        let options = TfidfOptions::default()
            .with_use_idf(false)
            .with_norm(Norm::None);
        let mut embedder =
            EmbeddedVectorizer::new(embedding(), ["cat", "dog", "fish"], options).unwrap();
        assert_eq!(embedder.dim(), 2);

        let vectors = embedder
            .fit_transform(&["cat dog dog", "fish bird", "bird"])
            .unwrap();
        assert_eq!(vectors, array![[1.0, 2.0], [1.0, 1.0], [0.0, 0.0]]);
    }

    #[test]
    fn test_matches_dense_tfidf() {
        let mut embedder =
            EmbeddedVectorizer::new(embedding(), ["cat", "dog", "fish"], TfidfOptions::default())
                .unwrap();
        let docs = ["cat cat dog", "fish", "dog fish"];
        let vectors = embedder.fit_transform(&docs).unwrap();

        let expected = embedder
            .tfidf()
            .transform(&docs)
            .unwrap()
            .to_dense()
            .dot(embedder.embedding());
        assert_eq!(vectors.shape(), &[3, 2]);
        for (a, b) in vectors.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_from_keyed_vectors() {
        let kv = KeyedVectors::new(["cat", "dog", "fish"], embedding()).unwrap();
        let mut embedder =
            EmbeddedVectorizer::from_keyed_vectors(kv, TfidfOptions::default()).unwrap();
        let vectors = embedder.fit_transform(&["dog"]).unwrap();
        assert_eq!(vectors, array![[0.0, 1.0]]);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            EmbeddedVectorizer::new(embedding(), ["cat", "dog"], TfidfOptions::default()),
            Err(UblibError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            EmbeddedVectorizer::new(embedding(), ["cat", "dog", "cat"], TfidfOptions::default()),
            Err(UblibError::DuplicateTerm(_))
        ));

        let embedder =
            EmbeddedVectorizer::new(embedding(), ["cat", "dog", "fish"], TfidfOptions::default())
                .unwrap();
        assert!(matches!(
            embedder.transform(&["cat"]),
            Err(UblibError::NotFitted { .. })
        ));
    }
}
