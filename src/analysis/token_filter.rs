//! Token filter implementations.
//!
//! Filters receive a token stream and produce a new one. The keyword
//! extractor never drops tokens: filters mark the ones that are not retained
//! as stopped, so the extractor can report them as filtered words in their
//! original order.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Marks function words
//! - [`content::ContentWordFilter`] - Marks tokens that are not content words
//!
//! # Examples
//!
//! ```
//! use examlens::analysis::token_filter::Filter;
//! use examlens::analysis::token_filter::stop::StopFilter;
//! use examlens::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![Token::new("The", 0), Token::new("energy", 1)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert!(result[0].is_stopped());
//! assert!(!result[1].is_stopped());
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod content;
pub mod stop;

pub use content::ContentWordFilter;
pub use stop::StopFilter;
