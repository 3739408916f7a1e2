//! # Token Patterns
//!
//! Most token patterns are plain regular expressions, but some rely on
//! look-around or back-references, which only [`fancy_regex`] supports.
//! Patterns are labeled with [`TokenPattern`] and compiled to a [`TokenRegex`].

use crate::errors::{UbResult, UblibError};

/// The default token pattern: runs of Unicode word characters.
///
/// Unlike some vectorizers, single-character words are kept.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\w+";

/// Labeled wrapper for token regex patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TokenPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(String),

    /// This is a regex pattern that requires regex extensions.
    Fancy(String),

    /// The requirements of this pattern are unknown; try basic, then fall-up to fancy.
    Adaptive(String),
}

impl Default for TokenPattern {
    fn default() -> Self {
        Self::Basic(DEFAULT_TOKEN_PATTERN.to_string())
    }
}

impl From<&str> for TokenPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for TokenPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl TokenPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the pattern into a [`TokenRegex`].
    ///
    /// ## Returns
    /// The compiled regex, or [`UblibError::InvalidPattern`].
    pub fn compile(&self) -> UbResult<TokenRegex> {
        let invalid = |reason: String| UblibError::InvalidPattern {
            pattern: self.as_str().to_string(),
            reason,
        };

        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(TokenRegex::Basic)
                .map_err(|e| invalid(e.to_string())),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(TokenRegex::Fancy)
                .map_err(|e| invalid(e.to_string())),
            Self::Adaptive(pattern) => regex::Regex::new(pattern)
                .map(TokenRegex::Basic)
                .or_else(|_| {
                    fancy_regex::Regex::new(pattern)
                        .map(TokenRegex::Fancy)
                        .map_err(|e| invalid(e.to_string()))
                }),
        }
    }
}

/// A compiled token regex.
#[derive(Debug, Clone)]
pub enum TokenRegex {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl TokenRegex {
    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Find every non-overlapping token in `haystack`.
    ///
    /// ## Returns
    /// The matched slices in order; fails only when the fancy engine
    /// hits its backtracking limit.
    pub fn find_tokens<'h>(
        &self,
        haystack: &'h str,
    ) -> UbResult<Vec<&'h str>> {
        match self {
            Self::Basic(regex) => Ok(regex.find_iter(haystack).map(|m| m.as_str()).collect()),
            Self::Fancy(regex) => regex
                .find_iter(haystack)
                .map(|m| {
                    m.map(|m| m.as_str())
                        .map_err(|e| UblibError::InvalidPattern {
                            pattern: regex.as_str().to_string(),
                            reason: e.to_string(),
                        })
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_keeps_single_chars() {
        let re = TokenPattern::default().compile().unwrap();
        assert!(!re.is_fancy());
        assert_eq!(re.find_tokens("a bb, c!").unwrap(), vec!["a", "bb", "c"]);
    }

    #[test]
    fn test_adaptive_falls_up_to_fancy() {
        let basic = TokenPattern::from(r"\b\w\w+\b").compile().unwrap();
        assert!(!basic.is_fancy());
        assert_eq!(basic.find_tokens("a bb ccc").unwrap(), vec!["bb", "ccc"]);

        // Look-ahead is not supported by `regex`.
        let fancy = TokenPattern::from(r"\w+(?=!)").compile().unwrap();
        assert!(fancy.is_fancy());
        assert_eq!(fancy.find_tokens("hey you! go!").unwrap(), vec!["you", "go"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = TokenPattern::Basic("(".to_string()).compile().unwrap_err();
        assert!(matches!(err, UblibError::InvalidPattern { .. }));

        assert!(TokenPattern::from("(").compile().is_err());
    }
}
