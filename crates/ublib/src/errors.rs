//! # Error Types

/// Errors from ublib operations.
#[derive(Debug, thiserror::Error)]
pub enum UblibError {
    /// A transform was requested before the component was fitted.
    #[error("{component} is not fitted; call fit() first")]
    NotFitted {
        /// The component which was not fitted.
        component: &'static str,
    },

    /// N-gram ranges are not supported by sequence vectorizers.
    #[error("ngram_range ({min_n}, {max_n}) is not supported for sequences; use (1, 1)")]
    NgramRangeNotAllowed {
        /// The configured lower bound.
        min_n: usize,
        /// The configured upper bound.
        max_n: usize,
    },

    /// The n-gram range is malformed.
    #[error("invalid ngram_range ({min_n}, {max_n})")]
    InvalidNgramRange {
        /// The configured lower bound.
        min_n: usize,
        /// The configured upper bound.
        max_n: usize,
    },

    /// A token pattern failed to compile.
    #[error("invalid token pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// The compiler message.
        reason: String,
    },

    /// A document frequency bound is out of range, or `max_df < min_df`.
    #[error("invalid document frequency bound: {0}")]
    InvalidDocumentFrequency(String),

    /// Fitting produced, or was given, no terms.
    #[error("empty vocabulary; documents may only contain stop words")]
    EmptyVocabulary,

    /// A fixed vocabulary listed the same term twice.
    #[error("duplicate term in vocabulary: {0:?}")]
    DuplicateTerm(String),

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A learned token was assigned one of the reserved indices.
    #[error("learned token {token:?} collides with reserved index {index}")]
    ReservedIndexCollision {
        /// The offending token.
        token: String,
        /// The reserved index.
        index: usize,
    },

    /// An index has no entry in the reverse vocabulary.
    #[error("index {index} is not in the vocabulary")]
    UnknownIndex {
        /// The index that could not be decoded.
        index: usize,
    },

    /// Array shapes do not agree.
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        /// The expected shape.
        expected: Vec<usize>,
        /// The shape found.
        found: Vec<usize>,
    },

    /// An axis is outside of the array dimensions.
    #[error("axis {axis} is out of bounds for an array of dimension {ndim}")]
    AxisOutOfBounds {
        /// The requested axis.
        axis: usize,
        /// The array dimension.
        ndim: usize,
    },

    /// The first line of an embedding file is not a list of integers.
    #[error("malformed embedding header: {0:?}")]
    MalformedHeader(String),

    /// An embedding file body disagrees with its header.
    #[error("malformed embedding at line {line}: {reason}")]
    MalformedEmbedding {
        /// The 1-based line number.
        line: usize,
        /// What was wrong.
        reason: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for ublib operations.
pub type UbResult<T> = core::result::Result<T, UblibError>;
