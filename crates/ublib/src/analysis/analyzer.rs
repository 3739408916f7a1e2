//! # Text Analyzer

use crate::{
    analysis::TokenRegex,
    errors::UbResult,
    types::UbHashSet,
};

/// Turns raw text into a list of terms.
///
/// The pipeline is: optional lowercasing, token pattern matching,
/// stop word removal, then word n-gram expansion.
///
/// ## Style Hints
///
/// Instance names should prefer `analyzer`.
#[derive(Debug, Clone)]
pub struct Analyzer {
    token_regex: TokenRegex,
    lowercase: bool,
    stop_words: Option<UbHashSet<String>>,
    ngram_range: (usize, usize),
}

impl Analyzer {
    /// Create an analyzer from compiled parts.
    ///
    /// Prefer [`AnalyzerOptions::build`](crate::analysis::AnalyzerOptions::build),
    /// which validates the n-gram range.
    pub fn new(
        token_regex: TokenRegex,
        lowercase: bool,
        stop_words: Option<UbHashSet<String>>,
        ngram_range: (usize, usize),
    ) -> Self {
        Self {
            token_regex,
            lowercase,
            stop_words,
            ngram_range,
        }
    }

    /// Get the compiled token regex.
    pub fn token_regex(&self) -> &TokenRegex {
        &self.token_regex
    }

    /// Get the n-gram range.
    pub fn ngram_range(&self) -> (usize, usize) {
        self.ngram_range
    }

    /// Is `term` a stop word?
    pub fn is_stop_word(
        &self,
        term: &str,
    ) -> bool {
        self.stop_words
            .as_ref()
            .is_some_and(|words| words.contains(term))
    }

    /// Split a document into terms.
    ///
    /// ## Arguments
    /// * `doc` - The raw document.
    ///
    /// ## Returns
    /// The ordered terms; unigrams first, then each longer n-gram size in turn.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, doc)))]
    pub fn analyze(
        &self,
        doc: &str,
    ) -> UbResult<Vec<String>> {
        let folded;
        let text = if self.lowercase {
            folded = doc.to_lowercase();
            folded.as_str()
        } else {
            doc
        };

        let tokens: Vec<String> = self
            .token_regex
            .find_tokens(text)?
            .into_iter()
            .filter(|t| !self.is_stop_word(t))
            .map(str::to_string)
            .collect();

        Ok(self.expand_ngrams(tokens))
    }

    fn expand_ngrams(
        &self,
        tokens: Vec<String>,
    ) -> Vec<String> {
        let (min_n, max_n) = self.ngram_range;
        if max_n == 1 {
            return tokens;
        }

        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            if n == 1 {
                terms.extend(tokens.iter().cloned());
            } else {
                terms.extend(tokens.windows(n).map(|w| w.join(" ")));
            }
        }
        terms
    }
}
