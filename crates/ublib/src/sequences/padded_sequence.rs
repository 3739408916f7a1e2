//! # Padded Sequence Vectorizer

use core::{borrow::Borrow, marker::PhantomData};

use crate::{
    errors::{UbResult, UblibError},
    sequences::{PaddedBatch, PaddedSequenceOptions, pad_sequences},
    types::{TokenType, index_to_token, try_vocab_size},
    vectorizers::CountVectorizer,
    vocab::{SequenceVocab, UNK_INDEX},
};

/// Converts documents into padded integer sequences, and back.
///
/// Learned terms are indexed from [`crate::vocab::VOCAB_OFFSET`]; `PAD` and
/// `UNK` hold the reserved indices below it.
///
/// ## Style Hints
///
/// Instance names should prefer `sequencer`.
#[derive(Debug, Clone)]
pub struct PaddedSequence<T: TokenType = u32> {
    options: PaddedSequenceOptions,
    counter: CountVectorizer,
    vocab: Option<SequenceVocab>,
    marker: PhantomData<T>,
}

impl<T: TokenType> PaddedSequence<T> {
    /// Assemble an unfitted vectorizer.
    ///
    /// Prefer [`PaddedSequenceOptions::build`], which checks the n-gram range.
    pub(crate) fn new(
        options: PaddedSequenceOptions,
        counter: CountVectorizer,
    ) -> Self {
        Self {
            options,
            counter,
            vocab: None,
            marker: PhantomData,
        }
    }

    /// Get the options.
    pub fn options(&self) -> &PaddedSequenceOptions {
        &self.options
    }

    /// Get the underlying count vectorizer.
    pub fn counter(&self) -> &CountVectorizer {
        &self.counter
    }

    /// Get the sequence vocabulary, if fitted.
    pub fn vocabulary(&self) -> Option<&SequenceVocab> {
        self.vocab.as_ref()
    }

    /// The index space size, `|vocabulary| + 2`, if fitted.
    pub fn vocabulary_size(&self) -> Option<usize> {
        self.vocab.as_ref().map(SequenceVocab::size)
    }

    fn try_vocab(&self) -> UbResult<&SequenceVocab> {
        self.vocab.as_ref().ok_or(UblibError::NotFitted {
            component: "PaddedSequence",
        })
    }

    /// Learn the vocabulary of `docs`.
    ///
    /// ## Returns
    /// `self`, for chaining; [`UblibError::VocabSizeOverflow`] if the index
    /// space does not fit `T`. On error, the previous fit is left intact.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, docs)))]
    pub fn fit<S: AsRef<str>>(
        &mut self,
        docs: &[S],
    ) -> UbResult<&mut Self> {
        let mut counter = self.counter.clone();
        counter.fit(docs)?;
        let vocab = SequenceVocab::new(counter.try_vocabulary()?.clone())?;
        try_vocab_size::<T>(vocab.size())?;

        log::debug!("fitted sequence vocabulary of size {}", vocab.size());
        self.counter = counter;
        self.vocab = Some(vocab);
        Ok(self)
    }

    /// Encode `docs` as unpadded token sequences.
    ///
    /// Known terms map to their shifted index; unknown terms map to `UNK`,
    /// or are dropped with `drop_unk`. With `fix_empty`, an empty sequence
    /// becomes `[UNK]`.
    pub fn encode_sequences<S: AsRef<str>>(
        &self,
        docs: &[S],
    ) -> UbResult<Vec<Vec<T>>> {
        let vocab = self.try_vocab()?;
        let unk = index_to_token::<T>(UNK_INDEX);

        docs.iter()
            .map(|doc| {
                let mut seq: Vec<T> = self
                    .counter
                    .analyzer()
                    .analyze(doc.as_ref())?
                    .iter()
                    .filter_map(|term| match vocab.lookup(term) {
                        Some(index) => Some(index_to_token(index)),
                        None if self.options.drop_unk => None,
                        None => Some(unk),
                    })
                    .collect();
                if seq.is_empty() && self.options.fix_empty {
                    seq.push(unk);
                }
                Ok(seq)
            })
            .collect()
    }

    /// Encode and pad `docs`.
    pub fn transform<S: AsRef<str>>(
        &self,
        docs: &[S],
    ) -> UbResult<PaddedBatch<T>> {
        let sequences = self.encode_sequences(docs)?;
        Ok(pad_sequences(&sequences, self.options.sort))
    }

    /// [`fit`](Self::fit), then [`transform`](Self::transform).
    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        docs: &[S],
    ) -> UbResult<PaddedBatch<T>> {
        self.fit(docs)?.transform(docs)
    }

    /// Decode index sequences back to tokens.
    ///
    /// Accepts any iterable of iterables of indices; including the rows of
    /// a padded batch. `PAD` and `UNK` decode to `"<PAD>"` and `"<UNK>"`.
    ///
    /// ## Returns
    /// The decoded tokens; or [`UblibError::UnknownIndex`].
    pub fn inverse_transform<I, R, B>(
        &self,
        sequences: I,
    ) -> UbResult<Vec<Vec<String>>>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = B>,
        B: Borrow<T>,
    {
        let vocab = self.try_vocab()?;
        sequences
            .into_iter()
            .map(|seq| {
                seq.into_iter()
                    .map(|token| {
                        let index = token.borrow().to_usize().unwrap_or(usize::MAX);
                        vocab.decode_index(index).map(str::to_string)
                    })
                    .collect()
            })
            .collect()
    }

    /// Decode index sequences, joining each one with `join`.
    pub fn inverse_transform_joined<I, R, B>(
        &self,
        sequences: I,
        join: &str,
    ) -> UbResult<Vec<String>>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = B>,
        B: Borrow<T>,
    {
        Ok(self
            .inverse_transform(sequences)?
            .into_iter()
            .map(|tokens| tokens.join(join))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::{
        analysis::{AnalyzerOptions, StopWords},
        vocab::{PAD_INDEX, VOCAB_OFFSET},
    };

    fn fitted(options: PaddedSequenceOptions) -> PaddedSequence<u32> {
        let mut sequencer = options.build().unwrap();
        sequencer.fit(&["a b", "b c c"]).unwrap();
        sequencer
    }

    #[test]
    fn test_fit_transform() {
        let mut sequencer = PaddedSequenceOptions::default().build::<u32>().unwrap();
        let batch = sequencer.fit_transform(&["a b", "b c c"]).unwrap();

        assert_eq!(sequencer.vocabulary_size(), Some(5));
        assert_eq!(batch.tokens(), &array![[2, 3, 0], [3, 4, 4]]);
        assert_eq!(batch.lengths(), &[2, 3]);
    }

    #[test]
    fn test_not_fitted() {
        let sequencer = PaddedSequenceOptions::default().build::<u32>().unwrap();
        assert_eq!(sequencer.vocabulary_size(), None);
        assert!(matches!(
            sequencer.transform(&["a"]),
            Err(UblibError::NotFitted { .. })
        ));
        assert!(matches!(
            sequencer.inverse_transform(vec![vec![2u32]]),
            Err(UblibError::NotFitted { .. })
        ));
    }

    #[test]
    fn test_unknown_policy() {
        let sequencer = fitted(PaddedSequenceOptions::default());
        assert_eq!(
            sequencer.encode_sequences(&["a z b", "z", ""]).unwrap(),
            vec![vec![2, 1, 3], vec![1], vec![1]]
        );

        let sequencer = fitted(PaddedSequenceOptions::default().with_drop_unk(true));
        assert_eq!(
            sequencer.encode_sequences(&["a z b", "z"]).unwrap(),
            vec![vec![2, 3], vec![1]]
        );

        let sequencer = fitted(
            PaddedSequenceOptions::default()
                .with_drop_unk(true)
                .with_fix_empty(false),
        );
        let batch = sequencer.transform(&["z", ""]).unwrap();
        assert_eq!(batch.tokens(), &array![[0], [0]]);
        assert_eq!(batch.lengths(), &[0, 0]);
    }

    #[test]
    fn test_sorted_transform() {
        let sequencer = fitted(PaddedSequenceOptions::default().with_sort(true));
        let batch = sequencer.transform(&["a", "c c b", "b c"]).unwrap();
        assert_eq!(batch.lengths(), &[3, 2, 1]);
        assert_eq!(batch.order(), &[1, 2, 0]);

        let restored = batch.restore_order();
        assert_eq!(restored.tokens(), &array![[2, 0, 0], [4, 4, 3], [3, 4, 0]]);
    }

    #[test]
    fn test_inverse_transform() {
        let sequencer = fitted(PaddedSequenceOptions::default());
        let batch = sequencer.transform(&["a b", "c z"]).unwrap();

        assert_eq!(
            sequencer.inverse_transform(batch.tokens().rows()).unwrap(),
            vec![vec!["a", "b"], vec!["c", "<UNK>"]]
        );
        assert_eq!(
            sequencer
                .inverse_transform_joined(vec![vec![2u32, 3, 0]], "_")
                .unwrap(),
            vec!["a_b_<PAD>"]
        );
        assert!(matches!(
            sequencer.inverse_transform(vec![vec![99u32]]),
            Err(UblibError::UnknownIndex { index: 99 })
        ));
    }

    #[test]
    fn test_reserved_indices() {
        let sequencer = fitted(PaddedSequenceOptions::default());
        let vocab = sequencer.vocabulary().unwrap();
        for term in vocab.term_vocab().terms() {
            let index = vocab.lookup(term).unwrap();
            assert!(index >= VOCAB_OFFSET);
            assert_ne!(index, PAD_INDEX);
            assert_ne!(index, UNK_INDEX);
        }
    }

    #[test]
    fn test_vocab_overflow() {
        let docs: Vec<String> = (0..300).map(|i| format!("w{i}")).collect();
        let mut sequencer = PaddedSequenceOptions::default().build::<u8>().unwrap();
        assert!(matches!(
            sequencer.fit(&docs),
            Err(UblibError::VocabSizeOverflow { size: 302 })
        ));
        assert!(sequencer.vocabulary().is_none());
        assert!(sequencer.counter().vocabulary().is_none());

        sequencer.fit(&["a b"]).unwrap();
        assert!(sequencer.fit(&docs).is_err());
        assert_eq!(sequencer.vocabulary_size(), Some(4));
        assert_eq!(sequencer.counter().vocabulary().unwrap().terms(), &["a", "b"]);
    }

    #[test]
    fn test_analyzer_passthrough() {
        let options = PaddedSequenceOptions::default().with_analyzer(
            AnalyzerOptions::default()
                .with_lowercase(false)
                .with_stop_words(StopWords::custom(["the"])),
        );
        let mut sequencer = options.build::<u16>().unwrap();
        sequencer.fit(&["the Cat", "the cat"]).unwrap();
        assert_eq!(
            sequencer.vocabulary().unwrap().term_vocab().terms(),
            &["Cat", "cat"]
        );
    }
}
