//! Count Vectorizer Options
//!
//! Options for building a [`CountVectorizer`].

use crate::{
    analysis::AnalyzerOptions,
    errors::{UbResult, UblibError},
    vectorizers::CountVectorizer,
    vocab::TermVocab,
};

/// A document frequency bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocFrequency {
    /// An absolute number of documents.
    Count(usize),

    /// A fraction of the corpus, in `[0.0, 1.0]`.
    Fraction(f64),
}

impl DocFrequency {
    /// Resolve the bound to a document count for a corpus of `n_docs`.
    pub fn resolve(
        &self,
        n_docs: usize,
    ) -> f64 {
        match *self {
            Self::Count(count) => count as f64,
            Self::Fraction(fraction) => fraction * n_docs as f64,
        }
    }

    fn validate(
        &self,
        name: &str,
    ) -> UbResult<()> {
        match *self {
            Self::Fraction(f) if !(0.0..=1.0).contains(&f) => Err(
                UblibError::InvalidDocumentFrequency(format!("{name} fraction {f} not in [0, 1]")),
            ),
            _ => Ok(()),
        }
    }
}

/// Options for configuring a [`CountVectorizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct CountVectorizerOptions {
    /// Analyzer options.
    pub analyzer: AnalyzerOptions,

    /// Terms in fewer documents than this are dropped while fitting.
    pub min_df: DocFrequency,

    /// Terms in more documents than this are dropped while fitting.
    pub max_df: DocFrequency,

    /// Keep only the most frequent terms, when set.
    pub max_features: Option<usize>,
}

impl Default for CountVectorizerOptions {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerOptions::default(),
            min_df: DocFrequency::Count(1),
            max_df: DocFrequency::Fraction(1.0),
            max_features: None,
        }
    }
}

impl CountVectorizerOptions {
    /// Get the [`AnalyzerOptions`].
    pub fn analyzer(&self) -> &AnalyzerOptions {
        &self.analyzer
    }

    /// Get a mutable reference to the [`AnalyzerOptions`].
    pub fn analyzer_mut(&mut self) -> &mut AnalyzerOptions {
        &mut self.analyzer
    }

    /// Set the [`AnalyzerOptions`] and return the options.
    pub fn with_analyzer(
        mut self,
        analyzer: AnalyzerOptions,
    ) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Get the lower document frequency bound.
    pub fn min_df(&self) -> DocFrequency {
        self.min_df
    }

    /// Set the lower document frequency bound.
    pub fn set_min_df(
        &mut self,
        min_df: DocFrequency,
    ) {
        self.min_df = min_df;
    }

    /// Set the lower document frequency bound and return the options.
    pub fn with_min_df(
        mut self,
        min_df: DocFrequency,
    ) -> Self {
        self.set_min_df(min_df);
        self
    }

    /// Get the upper document frequency bound.
    pub fn max_df(&self) -> DocFrequency {
        self.max_df
    }

    /// Set the upper document frequency bound.
    pub fn set_max_df(
        &mut self,
        max_df: DocFrequency,
    ) {
        self.max_df = max_df;
    }

    /// Set the upper document frequency bound and return the options.
    pub fn with_max_df(
        mut self,
        max_df: DocFrequency,
    ) -> Self {
        self.set_max_df(max_df);
        self
    }

    /// Get the feature limit.
    pub fn max_features(&self) -> Option<usize> {
        self.max_features
    }

    /// Set the feature limit.
    pub fn set_max_features(
        &mut self,
        max_features: Option<usize>,
    ) {
        self.max_features = max_features;
    }

    /// Set the feature limit and return the options.
    pub fn with_max_features(
        mut self,
        max_features: Option<usize>,
    ) -> Self {
        self.set_max_features(max_features);
        self
    }

    /// Check the frequency bounds.
    pub fn validate(&self) -> UbResult<()> {
        self.min_df.validate("min_df")?;
        self.max_df.validate("max_df")?;
        if self.max_features == Some(0) {
            return Err(UblibError::InvalidDocumentFrequency(
                "max_features must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Build an unfitted [`CountVectorizer`].
    pub fn build(&self) -> UbResult<CountVectorizer> {
        self.validate()?;
        Ok(CountVectorizer::new(self.clone(), self.analyzer.build()?, None))
    }

    /// Build a [`CountVectorizer`] over a fixed vocabulary.
    ///
    /// Fixed vocabularies ignore the frequency bounds.
    pub fn build_with_vocabulary(
        &self,
        vocab: TermVocab,
    ) -> UbResult<CountVectorizer> {
        self.validate()?;
        Ok(CountVectorizer::new(
            self.clone(),
            self.analyzer.build()?,
            Some(vocab),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(DocFrequency::Count(3).resolve(10), 3.0);
        assert_eq!(DocFrequency::Fraction(0.5).resolve(10), 5.0);
    }

    #[test]
    fn test_validate() {
        assert!(CountVectorizerOptions::default().validate().is_ok());

        let bad = CountVectorizerOptions::default().with_max_df(DocFrequency::Fraction(1.5));
        assert!(matches!(
            bad.validate(),
            Err(UblibError::InvalidDocumentFrequency(_))
        ));

        let bad = CountVectorizerOptions::default().with_max_features(Some(0));
        assert!(bad.build().is_err());
    }
}
