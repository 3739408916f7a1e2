//! Padded Sequence Options
//!
//! Options for building a [`PaddedSequence`].

use crate::{
    analysis::AnalyzerOptions,
    errors::{UbResult, UblibError},
    sequences::PaddedSequence,
    types::TokenType,
    vectorizers::CountVectorizerOptions,
};

/// Options for configuring a [`PaddedSequence`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedSequenceOptions {
    /// Vocabulary options; the analyzer must emit unigrams.
    pub counter: CountVectorizerOptions,

    /// Reorder each batch by descending sequence length.
    pub sort: bool,

    /// Replace empty sequences with `[UNK]`.
    pub fix_empty: bool,

    /// Omit unknown tokens instead of encoding them as `UNK`.
    pub drop_unk: bool,
}

impl Default for PaddedSequenceOptions {
    fn default() -> Self {
        Self {
            counter: CountVectorizerOptions::default(),
            sort: false,
            fix_empty: true,
            drop_unk: false,
        }
    }
}

impl PaddedSequenceOptions {
    /// Get the [`CountVectorizerOptions`].
    pub fn counter(&self) -> &CountVectorizerOptions {
        &self.counter
    }

    /// Set the [`CountVectorizerOptions`] and return the options.
    pub fn with_counter(
        mut self,
        counter: CountVectorizerOptions,
    ) -> Self {
        self.counter = counter;
        self
    }

    /// Set the [`AnalyzerOptions`] and return the options.
    pub fn with_analyzer(
        mut self,
        analyzer: AnalyzerOptions,
    ) -> Self {
        self.counter.analyzer = analyzer;
        self
    }

    /// Is batch sorting enabled?
    pub fn sort(&self) -> bool {
        self.sort
    }

    /// Set whether batches are sorted by descending length.
    pub fn set_sort(
        &mut self,
        sort: bool,
    ) {
        self.sort = sort;
    }

    /// Set whether batches are sorted and return the options.
    pub fn with_sort(
        mut self,
        sort: bool,
    ) -> Self {
        self.set_sort(sort);
        self
    }

    /// Is the empty-sequence fix enabled?
    pub fn fix_empty(&self) -> bool {
        self.fix_empty
    }

    /// Set whether empty sequences become `[UNK]`.
    pub fn set_fix_empty(
        &mut self,
        fix_empty: bool,
    ) {
        self.fix_empty = fix_empty;
    }

    /// Set whether empty sequences become `[UNK]` and return the options.
    pub fn with_fix_empty(
        mut self,
        fix_empty: bool,
    ) -> Self {
        self.set_fix_empty(fix_empty);
        self
    }

    /// Are unknown tokens dropped?
    pub fn drop_unk(&self) -> bool {
        self.drop_unk
    }

    /// Set whether unknown tokens are dropped.
    pub fn set_drop_unk(
        &mut self,
        drop_unk: bool,
    ) {
        self.drop_unk = drop_unk;
    }

    /// Set whether unknown tokens are dropped and return the options.
    pub fn with_drop_unk(
        mut self,
        drop_unk: bool,
    ) -> Self {
        self.set_drop_unk(drop_unk);
        self
    }

    /// Build an unfitted [`PaddedSequence`].
    ///
    /// ## Returns
    /// The vectorizer; or [`UblibError::NgramRangeNotAllowed`] when the
    /// analyzer is configured for anything but unigrams.
    pub fn build<T: TokenType>(&self) -> UbResult<PaddedSequence<T>> {
        let analyzer = self.counter.analyzer();
        if !analyzer.is_unigram() {
            let (min_n, max_n) = analyzer.ngram_range();
            return Err(UblibError::NgramRangeNotAllowed { min_n, max_n });
        }
        Ok(PaddedSequence::new(self.clone(), self.counter.build()?))
    }
}
