//! # Count Vectorizer

use crate::{
    analysis::Analyzer,
    errors::{UbResult, UblibError},
    sparse::CsrMatrix,
    types::{UbHashMap, UbHashSet, hash_map_new},
    vectorizers::CountVectorizerOptions,
    vocab::TermVocab,
};

/// Learns a [`TermVocab`] from a corpus and counts term occurrences.
///
/// ## Style Hints
///
/// Instance names should prefer `counter`.
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    options: CountVectorizerOptions,
    analyzer: Analyzer,
    vocab: Option<TermVocab>,
    fixed_vocab: bool,
}

impl CountVectorizer {
    /// Assemble a vectorizer.
    ///
    /// Prefer [`CountVectorizerOptions::build`] or
    /// [`CountVectorizerOptions::build_with_vocabulary`].
    ///
    /// ## Arguments
    /// * `options` - The options the vectorizer was built from.
    /// * `analyzer` - The analyzer built from `options`.
    /// * `vocab` - A fixed vocabulary; `None` to learn one in [`fit`](Self::fit).
    pub fn new(
        options: CountVectorizerOptions,
        analyzer: Analyzer,
        vocab: Option<TermVocab>,
    ) -> Self {
        let fixed_vocab = vocab.is_some();
        Self {
            options,
            analyzer,
            vocab,
            fixed_vocab,
        }
    }

    /// Get the options.
    pub fn options(&self) -> &CountVectorizerOptions {
        &self.options
    }

    /// Get the analyzer.
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Was the vocabulary supplied at construction?
    pub fn has_fixed_vocabulary(&self) -> bool {
        self.fixed_vocab
    }

    /// Get the vocabulary, if fitted or fixed.
    pub fn vocabulary(&self) -> Option<&TermVocab> {
        self.vocab.as_ref()
    }

    /// Get the vocabulary, or [`UblibError::NotFitted`].
    pub fn try_vocabulary(&self) -> UbResult<&TermVocab> {
        self.vocab.as_ref().ok_or(UblibError::NotFitted {
            component: "CountVectorizer",
        })
    }

    /// Analyze every document.
    pub fn analyze_all<S: AsRef<str>>(
        &self,
        docs: &[S],
    ) -> UbResult<Vec<Vec<String>>> {
        docs.iter()
            .map(|doc| self.analyzer.analyze(doc.as_ref()))
            .collect()
    }

    /// Learn the vocabulary of `docs`.
    ///
    /// A fixed vocabulary is kept as is.
    ///
    /// ## Returns
    /// `self`, for chaining; or [`UblibError::EmptyVocabulary`] when no
    /// terms survive analysis and frequency pruning.
    pub fn fit<S: AsRef<str>>(
        &mut self,
        docs: &[S],
    ) -> UbResult<&mut Self> {
        if self.fixed_vocab {
            return Ok(self);
        }

        let analyzed = self.analyze_all(docs)?;
        self.vocab = Some(self.learn_vocab(&analyzed)?);
        Ok(self)
    }

    fn learn_vocab(
        &self,
        analyzed: &[Vec<String>],
    ) -> UbResult<TermVocab> {
        let n_docs = analyzed.len();

        let mut doc_freq: UbHashMap<&str, usize> = hash_map_new();
        let mut term_freq: UbHashMap<&str, usize> = hash_map_new();
        for terms in analyzed {
            let mut seen: UbHashSet<&str> = UbHashSet::default();
            for term in terms {
                *term_freq.entry(term.as_str()).or_default() += 1;
                if seen.insert(term.as_str()) {
                    *doc_freq.entry(term.as_str()).or_default() += 1;
                }
            }
        }

        if doc_freq.is_empty() {
            return Err(UblibError::EmptyVocabulary);
        }

        let min_count = self.options.min_df.resolve(n_docs);
        let max_count = self.options.max_df.resolve(n_docs);
        if max_count < min_count {
            return Err(UblibError::InvalidDocumentFrequency(format!(
                "max_df ({max_count}) resolves below min_df ({min_count})"
            )));
        }

        let mut kept: Vec<(&str, usize)> = doc_freq
            .iter()
            .filter(|&(_, &df)| (df as f64) >= min_count && (df as f64) <= max_count)
            .map(|(&term, _)| (term, term_freq.get(term).copied().unwrap_or(0)))
            .collect();

        if let Some(limit) = self.options.max_features
            && kept.len() > limit
        {
            kept.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            kept.truncate(limit);
        }

        log::debug!(
            "learned {} terms ({} before pruning) from {} documents",
            kept.len(),
            doc_freq.len(),
            n_docs
        );

        TermVocab::from_learned_terms(kept.into_iter().map(|(term, _)| term.to_string()))
    }

    /// Count the vocabulary terms of each document.
    ///
    /// ## Returns
    /// A `(docs.len(), vocab.len())` count matrix; out-of-vocabulary terms are ignored.
    pub fn transform<S: AsRef<str>>(
        &self,
        docs: &[S],
    ) -> UbResult<CsrMatrix> {
        let vocab = self.try_vocabulary()?;

        let mut rows = Vec::with_capacity(docs.len());
        for doc in docs {
            let mut counts: UbHashMap<usize, f32> = hash_map_new();
            for term in self.analyzer.analyze(doc.as_ref())? {
                if let Some(index) = vocab.get(&term) {
                    *counts.entry(index).or_default() += 1.0;
                }
            }
            rows.push(counts.into_iter().collect::<Vec<_>>());
        }

        Ok(CsrMatrix::from_rows(vocab.len(), rows))
    }

    /// [`fit`](Self::fit), then [`transform`](Self::transform).
    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        docs: &[S],
    ) -> UbResult<CsrMatrix> {
        self.fit(docs)?.transform(docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::{AnalyzerOptions, StopWords},
        vectorizers::DocFrequency,
    };

    const DOCS: &[&str] = &["the cat sat", "the dog sat", "the cat ran"];

    #[test]
    fn test_fit_transform() {
        let mut counter = CountVectorizerOptions::default().build().unwrap();
        assert!(matches!(
            counter.transform(DOCS),
            Err(UblibError::NotFitted { .. })
        ));

        let counts = counter.fit_transform(DOCS).unwrap();
        let vocab = counter.vocabulary().unwrap();
        assert_eq!(vocab.terms(), &["cat", "dog", "ran", "sat", "the"]);

        assert_eq!(counts.shape(), (3, 5));
        assert_eq!(counts.get(0, vocab.get("cat").unwrap()), 1.0);
        assert_eq!(counts.get(1, vocab.get("cat").unwrap()), 0.0);
        assert_eq!(counts.get(2, vocab.get("the").unwrap()), 1.0);

        let unseen = counter.transform(&["the the bird"]).unwrap();
        assert_eq!(unseen.get(0, vocab.get("the").unwrap()), 2.0);
        assert_eq!(unseen.nnz(), 1);
    }

    #[test]
    fn test_document_frequency_pruning() {
        let mut counter = CountVectorizerOptions::default()
            .with_min_df(DocFrequency::Count(2))
            .with_max_df(DocFrequency::Fraction(0.9))
            .build()
            .unwrap();
        counter.fit(DOCS).unwrap();
        assert_eq!(counter.vocabulary().unwrap().terms(), &["cat", "sat"]);

        let mut bad = CountVectorizerOptions::default()
            .with_min_df(DocFrequency::Count(3))
            .with_max_df(DocFrequency::Count(1))
            .build()
            .unwrap();
        assert!(bad.fit(DOCS).is_err());
    }

    #[test]
    fn test_max_features() {
        let mut counter = CountVectorizerOptions::default()
            .with_max_features(Some(2))
            .build()
            .unwrap();
        counter.fit(DOCS).unwrap();
        // "the" x3, then "cat" and "sat" x2; ties break alphabetically.
        assert_eq!(counter.vocabulary().unwrap().terms(), &["cat", "the"]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let mut counter = CountVectorizerOptions::default()
            .with_analyzer(AnalyzerOptions::default().with_stop_words(StopWords::English))
            .build()
            .unwrap();
        assert!(matches!(
            counter.fit(&["the", "and the"]),
            Err(UblibError::EmptyVocabulary)
        ));

        let mut counter = CountVectorizerOptions::default().build().unwrap();
        let docs: [&str; 0] = [];
        assert!(matches!(counter.fit(&docs), Err(UblibError::EmptyVocabulary)));
        assert!(matches!(counter.fit(&["", "  "]), Err(UblibError::EmptyVocabulary)));
    }

    #[test]
    fn test_fixed_vocabulary() {
        let vocab = TermVocab::from_ordered_terms(["sat", "cat"]).unwrap();
        let mut counter = CountVectorizerOptions::default()
            .build_with_vocabulary(vocab.clone())
            .unwrap();
        assert!(counter.has_fixed_vocabulary());

        let counts = counter.fit_transform(DOCS).unwrap();
        assert_eq!(counter.vocabulary(), Some(&vocab));
        assert_eq!(counts.shape(), (3, 2));
        assert_eq!(counts.row(2), (&[1][..], &[1.0][..]));
    }
}
