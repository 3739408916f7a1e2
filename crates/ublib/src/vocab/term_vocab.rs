//! # Term Vocabulary

use crate::{
    errors::{UbResult, UblibError},
    types::{UbHashMap, hash_map_new},
};

/// A `{ term -> index }` vocabulary with its reverse `index -> term` list.
///
/// Indices are dense in `[0, len)`.
///
/// ## Style Hints
///
/// Instance names should prefer `vocab`, or `term_vocab` when there is ambiguity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVocab {
    term_to_index: UbHashMap<String, usize>,
    index_to_term: Vec<String>,
}

impl TermVocab {
    /// Build a vocabulary whose indices follow the given order.
    ///
    /// ## Arguments
    /// * `terms` - The terms; `terms[i]` gets index `i`.
    ///
    /// ## Returns
    /// The vocabulary, or [`UblibError::DuplicateTerm`] / [`UblibError::EmptyVocabulary`].
    pub fn from_ordered_terms<I, S>(terms: I) -> UbResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut term_to_index = hash_map_new();
        let mut index_to_term = Vec::new();
        for term in terms {
            let term = term.into();
            if term_to_index.contains_key(&term) {
                return Err(UblibError::DuplicateTerm(term));
            }
            term_to_index.insert(term.clone(), index_to_term.len());
            index_to_term.push(term);
        }

        if index_to_term.is_empty() {
            return Err(UblibError::EmptyVocabulary);
        }

        Ok(Self {
            term_to_index,
            index_to_term,
        })
    }

    /// Build a vocabulary from a set of learned terms.
    ///
    /// Terms are sorted first, so indices are independent of corpus order.
    pub fn from_learned_terms<I>(terms: I) -> UbResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut terms: Vec<String> = terms.into_iter().collect();
        terms.sort_unstable();
        terms.dedup();
        Self::from_ordered_terms(terms)
    }

    /// The number of terms.
    pub fn len(&self) -> usize {
        self.index_to_term.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.index_to_term.is_empty()
    }

    /// Look up the index of a term.
    pub fn get(
        &self,
        term: &str,
    ) -> Option<usize> {
        self.term_to_index.get(term).copied()
    }

    /// Does the vocabulary contain `term`?
    pub fn contains(
        &self,
        term: &str,
    ) -> bool {
        self.term_to_index.contains_key(term)
    }

    /// Look up the term at an index.
    pub fn term(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.index_to_term.get(index).map(String::as_str)
    }

    /// The terms, in index order.
    pub fn terms(&self) -> &[String] {
        &self.index_to_term
    }

    /// Iterate `(term, index)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.index_to_term
            .iter()
            .enumerate()
            .map(|(index, term)| (term.as_str(), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_terms() {
        let vocab = TermVocab::from_ordered_terms(["zebra", "apple"]).unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get("zebra"), Some(0));
        assert_eq!(vocab.get("apple"), Some(1));
        assert_eq!(vocab.term(1), Some("apple"));
        assert_eq!(vocab.term(2), None);
        assert!(!vocab.contains("pear"));
        assert_eq!(
            vocab.iter().collect::<Vec<_>>(),
            vec![("zebra", 0), ("apple", 1)]
        );
    }

    #[test]
    fn test_learned_terms_are_sorted() {
        let vocab = TermVocab::from_learned_terms(
            ["c", "a", "b", "a"].into_iter().map(String::from),
        )
        .unwrap();
        assert_eq!(vocab.terms(), &["a", "b", "c"]);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            TermVocab::from_ordered_terms(["a", "b", "a"]),
            Err(UblibError::DuplicateTerm(t)) if t == "a"
        ));
        assert!(matches!(
            TermVocab::from_ordered_terms(Vec::<String>::new()),
            Err(UblibError::EmptyVocabulary)
        ));
    }
}
