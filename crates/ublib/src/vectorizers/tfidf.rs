//! # TF-IDF Weighting

use crate::{
    errors::{UbResult, UblibError},
    sparse::CsrMatrix,
    vectorizers::{CountVectorizer, CountVectorizerOptions},
    vocab::TermVocab,
};

/// Row normalization applied after weighting.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Norm {
    /// Divide each row by the sum of absolute values.
    L1,

    /// Divide each row by its euclidean length.
    #[default]
    L2,

    /// Leave rows unnormalized.
    None,
}

impl Norm {
    /// Normalize `values` in place; all-zero rows are left untouched.
    pub fn apply(
        &self,
        values: &mut [f32],
    ) {
        let total = match self {
            Self::L1 => values.iter().map(|v| v.abs()).sum::<f32>(),
            Self::L2 => values.iter().map(|v| v * v).sum::<f32>().sqrt(),
            Self::None => return,
        };
        if total > 0.0 {
            values.iter_mut().for_each(|v| *v /= total);
        }
    }
}

/// Options for configuring TF-IDF weighting.
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfOptions {
    /// Count vectorizer options.
    pub counter: CountVectorizerOptions,

    /// Row normalization.
    pub norm: Norm,

    /// Weight counts by inverse document frequency.
    pub use_idf: bool,

    /// Add one to every document frequency, as if a document held every term once.
    pub smooth_idf: bool,

    /// Replace `tf` with `1 + ln(tf)`.
    pub sublinear_tf: bool,
}

impl Default for TfidfOptions {
    fn default() -> Self {
        Self {
            counter: CountVectorizerOptions::default(),
            norm: Norm::L2,
            use_idf: true,
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

impl TfidfOptions {
    /// Set the [`CountVectorizerOptions`] and return the options.
    pub fn with_counter(
        mut self,
        counter: CountVectorizerOptions,
    ) -> Self {
        self.counter = counter;
        self
    }

    /// Set the [`Norm`] and return the options.
    pub fn with_norm(
        mut self,
        norm: Norm,
    ) -> Self {
        self.norm = norm;
        self
    }

    /// Set `use_idf` and return the options.
    pub fn with_use_idf(
        mut self,
        use_idf: bool,
    ) -> Self {
        self.use_idf = use_idf;
        self
    }

    /// Set `smooth_idf` and return the options.
    pub fn with_smooth_idf(
        mut self,
        smooth_idf: bool,
    ) -> Self {
        self.smooth_idf = smooth_idf;
        self
    }

    /// Set `sublinear_tf` and return the options.
    pub fn with_sublinear_tf(
        mut self,
        sublinear_tf: bool,
    ) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    /// Build an unfitted [`TfidfVectorizer`] which learns its vocabulary.
    pub fn build(&self) -> UbResult<TfidfVectorizer> {
        Ok(TfidfVectorizer {
            counter: self.counter.build()?,
            transformer: TfidfTransformer::new(self.clone()),
        })
    }

    /// Build an unfitted [`TfidfVectorizer`] over a fixed vocabulary.
    pub fn build_with_vocabulary(
        &self,
        vocab: TermVocab,
    ) -> UbResult<TfidfVectorizer> {
        Ok(TfidfVectorizer {
            counter: self.counter.build_with_vocabulary(vocab)?,
            transformer: TfidfTransformer::new(self.clone()),
        })
    }
}

/// Re-weights a count matrix by TF-IDF.
#[derive(Debug, Clone)]
pub struct TfidfTransformer {
    options: TfidfOptions,
    idf: Option<Vec<f32>>,
}

impl TfidfTransformer {
    /// Create an unfitted transformer.
    pub fn new(options: TfidfOptions) -> Self {
        Self { options, idf: None }
    }

    /// The learned inverse document frequencies, if fitted with `use_idf`.
    pub fn idf(&self) -> Option<&[f32]> {
        self.idf.as_deref()
    }

    /// Learn the inverse document frequencies of a count matrix.
    pub fn fit(
        &mut self,
        counts: &CsrMatrix,
    ) -> &mut Self {
        if !self.options.use_idf {
            self.idf = None;
            return self;
        }

        let smooth = if self.options.smooth_idf { 1.0 } else { 0.0 };
        let n_docs = counts.n_rows() as f32 + smooth;
        self.idf = Some(
            counts
                .column_nonzero_counts()
                .into_iter()
                .map(|df| (n_docs / (df as f32 + smooth)).ln() + 1.0)
                .collect(),
        );
        self
    }

    /// Weight and normalize a count matrix.
    ///
    /// ## Returns
    /// The TF-IDF matrix; [`UblibError::NotFitted`] when `use_idf` is set and
    /// [`fit`](Self::fit) was never called.
    pub fn transform(
        &self,
        mut counts: CsrMatrix,
    ) -> UbResult<CsrMatrix> {
        if self.options.sublinear_tf {
            counts.map_values_inplace(|tf| if tf > 0.0 { 1.0 + tf.ln() } else { tf });
        }

        if self.options.use_idf {
            let idf = self.idf.as_ref().ok_or(UblibError::NotFitted {
                component: "TfidfTransformer",
            })?;
            if idf.len() != counts.n_cols() {
                return Err(UblibError::ShapeMismatch {
                    expected: vec![counts.n_rows(), idf.len()],
                    found: vec![counts.n_rows(), counts.n_cols()],
                });
            }
            counts.scale_columns(idf);
        }

        let norm = self.options.norm;
        counts.for_each_row_mut(|values| norm.apply(values));
        Ok(counts)
    }
}

/// A [`CountVectorizer`] followed by a [`TfidfTransformer`].
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    counter: CountVectorizer,
    transformer: TfidfTransformer,
}

impl TfidfVectorizer {
    /// Get the count vectorizer.
    pub fn counter(&self) -> &CountVectorizer {
        &self.counter
    }

    /// Get the TF-IDF transformer.
    pub fn transformer(&self) -> &TfidfTransformer {
        &self.transformer
    }

    /// Learn the vocabulary (unless fixed) and the document frequencies.
    pub fn fit<S: AsRef<str>>(
        &mut self,
        docs: &[S],
    ) -> UbResult<&mut Self> {
        let counts = self.counter.fit_transform(docs)?;
        self.transformer.fit(&counts);
        log::debug!(
            "fitted tf-idf over {} documents, {} terms",
            counts.n_rows(),
            counts.n_cols()
        );
        Ok(self)
    }

    /// Compute the TF-IDF matrix of `docs`.
    pub fn transform<S: AsRef<str>>(
        &self,
        docs: &[S],
    ) -> UbResult<CsrMatrix> {
        self.transformer.transform(self.counter.transform(docs)?)
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
    use core::str::FromStr;

    use super::*;

    const DOCS: &[&str] = &["a b", "a c", "a"];

    fn assert_close(
        actual: f32,
        expected: f32,
    ) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_norm_parse() {
        assert_eq!(Norm::from_str("l1").unwrap(), Norm::L1);
        assert_eq!(Norm::from_str("L2").unwrap(), Norm::L2);
        assert_eq!(Norm::from_str("none").unwrap(), Norm::None);
        assert!(Norm::from_str("l3").is_err());
        assert_eq!(Norm::L2.to_string(), "l2");
    }

    #[test]
    fn test_norm_apply() {
        let mut v = [3.0, -4.0];
        Norm::L2.apply(&mut v);
        assert_eq!(v, [0.6, -0.8]);

        let mut v = [1.0, -3.0];
        Norm::L1.apply(&mut v);
        assert_eq!(v, [0.25, -0.75]);

        let mut v = [0.0, 0.0];
        Norm::L2.apply(&mut v);
        assert_eq!(v, [0.0, 0.0]);
    }

    #[test]
    fn test_smooth_idf() {
        let mut tfidf = TfidfOptions::default()
            .with_norm(Norm::None)
            .build()
            .unwrap();
        let scores = tfidf.fit_transform(DOCS).unwrap();

        let idf = tfidf.transformer().idf().unwrap();
        // ln((1 + 3) / (1 + df)) + 1
        assert_close(idf[0], 1.0);
        assert_close(idf[1], (4.0f32 / 2.0).ln() + 1.0);

        assert_close(scores.get(0, 0), 1.0);
        assert_close(scores.get(0, 1), idf[1]);
        assert_close(scores.get(2, 1), 0.0);
    }

    #[test]
    fn test_raw_idf_and_sublinear_tf() {
        let mut tfidf = TfidfOptions::default()
            .with_norm(Norm::None)
            .with_smooth_idf(false)
            .with_sublinear_tf(true)
            .build()
            .unwrap();
        tfidf.fit(DOCS).unwrap();

        let idf = tfidf.transformer().idf().unwrap().to_vec();
        assert_close(idf[1], 3.0f32.ln() + 1.0);

        let scores = tfidf.transform(&["b b b"]).unwrap();
        assert_close(scores.get(0, 1), (1.0 + 3.0f32.ln()) * idf[1]);
    }

    #[test]
    fn test_l2_rows_are_unit_length() {
        let mut tfidf = TfidfOptions::default().build().unwrap();
        let scores = tfidf.fit_transform(DOCS).unwrap();
        for i in 0..scores.n_rows() {
            let (_, values) = scores.row(i);
            let length = values.iter().map(|v| v * v).sum::<f32>().sqrt();
            assert_close(length, 1.0);
        }
    }

    #[test]
    fn test_without_idf() {
        let mut tfidf = TfidfOptions::default()
            .with_use_idf(false)
            .with_norm(Norm::L1)
            .build()
            .unwrap();
        let scores = tfidf.fit_transform(&["a a b"]).unwrap();
        assert!(tfidf.transformer().idf().is_none());
        assert_close(scores.get(0, 0), 2.0 / 3.0);
        assert_close(scores.get(0, 1), 1.0 / 3.0);
    }

    #[test]
    fn test_transform_before_fit() {
        let transformer = TfidfTransformer::new(TfidfOptions::default());
        let counts = CsrMatrix::from_rows(1, vec![vec![(0, 1.0)]]);
        assert!(matches!(
            transformer.transform(counts),
            Err(UblibError::NotFitted { .. })
        ));
    }
}
