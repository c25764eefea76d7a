//! # examlens
//!
//! Language-exam practice tools built on a search-engine style text analysis
//! pipeline.
//!
//! ## Features
//!
//! - Word-level dictation comparison with categorised errors and HTML markup
//! - Keyword extraction from exam questions with part-of-speech filtering
//! - Synonym-aware keyword search in reading passages
//! - Built-in academic vocabulary thesaurus, replaceable by a JSON file
//!
//! ## Example
//!
//! ```
//! use examlens::service::ExamService;
//!
//! let service = ExamService::default();
//! let result = service
//!     .analyze_question_text_match(
//!         "The majority of energy was generated by electricity.",
//!         "Most fuel in the region was produced locally.",
//!     )
//!     .unwrap();
//!
//! assert_eq!(result.statistics.total_keywords, 4);
//! ```

pub mod analysis;
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod keyword;
pub mod service;
pub mod util;

pub mod prelude {
    pub use crate::compare::{ComparisonResult, ErrorCategory, ErrorRecord};
    pub use crate::config::ServiceConfig;
    pub use crate::error::{ExamLensError, Result};
    pub use crate::keyword::{AnalysisResult, KeywordExtraction, MatchSet, Thesaurus};
    pub use crate::service::ExamService;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
