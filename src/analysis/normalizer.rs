//! Text normalization pipelines.
//!
//! A [`Normalizer`] runs its char filters in order, trims the result and cuts
//! it into tokens. Two presets exist:
//!
//! - [`Normalizer::comparison`] - collapses whitespace and splits on
//!   whitespace only, so punctuation stays part of the word it touches
//! - [`Normalizer::extraction`] - additionally replaces punctuation (except
//!   hyphens) with spaces and cuts word runs
//!
//! Normalization never fails on input content.
//!
//! # Examples
//!
//! ```
//! use examlens::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::comparison();
//! assert_eq!(normalizer.normalize("  The cat\n sat. "), "the cat sat.");
//!
//! let normalizer = Normalizer::extraction();
//! assert_eq!(normalizer.clean("Why is it well-being?"), "Why is it well-being");
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Char filters followed by a tokenizer.
#[derive(Clone)]
pub struct Normalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field(
                "char_filters",
                &self.char_filters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl Normalizer {
    /// Create a normalizer with the given tokenizer and no char filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Normalizer {
            char_filters: Vec::new(),
            tokenizer,
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Whitespace collapsing + whitespace splitting.
    pub fn comparison() -> Self {
        Self::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::collapse_whitespace()))
    }

    /// Whitespace collapsing + punctuation stripping + word-run tokenizing.
    pub fn extraction() -> Self {
        Self::new(Arc::new(RegexTokenizer::default()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::collapse_whitespace()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::strip_punctuation()))
    }

    /// Run the char filters and trim, keeping the original casing.
    pub fn clean(&self, text: &str) -> String {
        let filtered = self
            .char_filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc));
        filtered.trim().to_string()
    }

    /// Cleaned and lowercased text.
    pub fn normalize(&self, text: &str) -> String {
        self.clean(text).to_lowercase()
    }

    /// Clean the text and cut it into tokens.
    ///
    /// Token offsets refer to the cleaned text.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let cleaned = self.clean(text);
        Ok(self.tokenizer.tokenize(&cleaned)?.collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_normalize() {
        let normalizer = Normalizer::comparison();
        assert_eq!(
            normalizer.normalize("\n The  Cat\t\tsat on\nthe mat. "),
            "the cat sat on the mat."
        );
        assert_eq!(normalizer.normalize("   "), "");
    }

    #[test]
    fn test_comparison_tokens_keep_punctuation_and_case() {
        let normalizer = Normalizer::comparison();
        let tokens = normalizer.tokenize("The cat.  Sat!").unwrap();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let normalized: Vec<&str> = tokens.iter().map(|t| t.normalized.as_str()).collect();
        assert_eq!(texts, vec!["The", "cat.", "Sat!"]);
        assert_eq!(normalized, vec!["the", "cat.", "sat!"]);
    }

    #[test]
    fn test_extraction_tokens() {
        let normalizer = Normalizer::extraction();
        let tokens = normalizer
            .tokenize("The majority of energy was generated by electricity.")
            .unwrap();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "The",
                "majority",
                "of",
                "energy",
                "was",
                "generated",
                "by",
                "electricity"
            ]
        );
    }

    #[test]
    fn test_extraction_splits_apostrophes() {
        let normalizer = Normalizer::extraction();
        let tokens = normalizer.tokenize("Don't stop (now)!").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Don", "t", "stop", "now"]);
    }
}
