//! # Stop Words

use crate::types::UbHashSet;

/// A built-in list of common English stop words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Stop word selection for an analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StopWords {
    /// Keep every token.
    #[default]
    None,

    /// Remove [`ENGLISH_STOP_WORDS`].
    English,

    /// Remove the listed words.
    Custom(Vec<String>),
}

impl StopWords {
    /// Build a custom list from any iterable of words.
    pub fn custom<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Custom(words.into_iter().map(|w| w.as_ref().to_string()).collect())
    }

    /// Materialize the selection as a lookup set.
    ///
    /// ## Returns
    /// `None` when no words are to be removed.
    pub fn to_set(&self) -> Option<UbHashSet<String>> {
        match self {
            Self::None => None,
            Self::English => Some(ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect()),
            Self::Custom(words) if words.is_empty() => None,
            Self::Custom(words) => Some(words.iter().cloned().collect()),
        }
    }
}
