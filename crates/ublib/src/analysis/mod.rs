//! # Text Analysis
//!
//! An [`Analyzer`] turns a raw document into the list of terms that
//! vectorizers count; it is built from [`AnalyzerOptions`].
//!
//! ## Example
//!
//! ```rust
//! use ublib::analysis::{AnalyzerOptions, StopWords};
//!
//! let analyzer = AnalyzerOptions::default()
//!     .with_stop_words(StopWords::English)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(analyzer.analyze("The quick fox").unwrap(), vec!["quick", "fox"]);
//! ```

mod analyzer;
mod analyzer_options;
mod stop_words;
mod token_pattern;

#[doc(inline)]
pub use analyzer::*;
#[doc(inline)]
pub use analyzer_options::*;
#[doc(inline)]
pub use stop_words::*;
#[doc(inline)]
pub use token_pattern::*;
