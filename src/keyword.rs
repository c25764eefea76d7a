//! Keyword extraction and synonym-aware passage matching.
//!
//! The pipeline mirrors how a reader scans a passage for the answer to an
//! exam question:
//!
//! ```text
//! question → extractor → keywords (+ synonyms from the thesaurus)
//!                              ↓
//! passage  →            matcher → hits per keyword → analyzer statistics
//! ```
//!
//! # Examples
//!
//! ```
//! use examlens::keyword::MatchAnalyzer;
//!
//! let analyzer = MatchAnalyzer::default();
//! let result = analyzer
//!     .analyze(
//!         "The majority of energy was generated by electricity.",
//!         "Most fuel in the region was produced locally.",
//!     )
//!     .unwrap();
//!
//! assert_eq!(result.statistics.match_coverage, 75.0);
//! ```

pub mod analyzer;
pub mod extractor;
pub mod matcher;
pub mod thesaurus;

pub use analyzer::{AnalysisResult, MatchAnalyzer, MatchStatistics};
pub use extractor::{Keyword, KeywordExtraction, KeywordExtractor};
pub use matcher::{MatchRecord, MatchSet, MatchType, TextMatcher};
pub use thesaurus::Thesaurus;
