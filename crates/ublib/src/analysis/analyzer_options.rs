//! Analyzer Options
//!
//! Options for building an [`Analyzer`].

use crate::{
    analysis::{Analyzer, StopWords, TokenPattern},
    errors::{UbResult, UblibError},
};

/// Options for configuring an [`Analyzer`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerOptions {
    /// The pattern which selects tokens.
    pub token_pattern: TokenPattern,

    /// Should text be lowercased before tokenizing?
    pub lowercase: bool,

    /// Stop words removed after tokenizing.
    pub stop_words: StopWords,

    /// The inclusive `(min_n, max_n)` range of word n-grams to emit.
    pub ngram_range: (usize, usize),
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            token_pattern: TokenPattern::default(),
            lowercase: true,
            stop_words: StopWords::None,
            ngram_range: (1, 1),
        }
    }
}

impl AnalyzerOptions {
    /// Get the configured [`TokenPattern`].
    pub fn token_pattern(&self) -> &TokenPattern {
        &self.token_pattern
    }

    /// Set the configured [`TokenPattern`].
    pub fn set_token_pattern<P>(
        &mut self,
        token_pattern: P,
    ) where
        P: Into<TokenPattern>,
    {
        self.token_pattern = token_pattern.into();
    }

    /// Set the configured [`TokenPattern`] and return the options.
    pub fn with_token_pattern<P>(
        mut self,
        token_pattern: P,
    ) -> Self
    where
        P: Into<TokenPattern>,
    {
        self.set_token_pattern(token_pattern);
        self
    }

    /// Is lowercasing enabled?
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Set whether text is lowercased.
    pub fn set_lowercase(
        &mut self,
        lowercase: bool,
    ) {
        self.lowercase = lowercase;
    }

    /// Set whether text is lowercased and return the options.
    pub fn with_lowercase(
        mut self,
        lowercase: bool,
    ) -> Self {
        self.set_lowercase(lowercase);
        self
    }

    /// Get the configured [`StopWords`].
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Set the configured [`StopWords`].
    pub fn set_stop_words(
        &mut self,
        stop_words: StopWords,
    ) {
        self.stop_words = stop_words;
    }

    /// Set the configured [`StopWords`] and return the options.
    pub fn with_stop_words(
        mut self,
        stop_words: StopWords,
    ) -> Self {
        self.set_stop_words(stop_words);
        self
    }

    /// Get the configured n-gram range.
    pub fn ngram_range(&self) -> (usize, usize) {
        self.ngram_range
    }

    /// Set the configured n-gram range.
    pub fn set_ngram_range(
        &mut self,
        ngram_range: (usize, usize),
    ) {
        self.ngram_range = ngram_range;
    }

    /// Set the configured n-gram range and return the options.
    pub fn with_ngram_range(
        mut self,
        ngram_range: (usize, usize),
    ) -> Self {
        self.set_ngram_range(ngram_range);
        self
    }

    /// Does this configuration emit only single tokens?
    pub fn is_unigram(&self) -> bool {
        self.ngram_range == (1, 1)
    }

    /// Build an [`Analyzer`].
    ///
    /// ## Returns
    /// The analyzer; or an error for a malformed n-gram range or token pattern.
    pub fn build(&self) -> UbResult<Analyzer> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(UblibError::InvalidNgramRange { min_n, max_n });
        }

        Ok(Analyzer::new(
            self.token_pattern.compile()?,
            self.lowercase,
            self.stop_words.to_set(),
            self.ngram_range,
        ))
    }
}
