//! Stop filter implementation.
//!
//! Marks function words (articles, conjunctions, common prepositions, be/have/do
//! forms, modals, demonstratives, pronouns) as stopped. Matching uses the
//! token's lowercase form.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English function-word list.
const DEFAULT_FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "by", "for", "with", "from", "to",
    "of", "as", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "shall",
    "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them",
];

/// Default function words as a HashSet.
pub static DEFAULT_FUNCTION_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_FUNCTION_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that marks function words as stopped.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with the default function-word list.
    pub fn new() -> Self {
        StopFilter {
            stop_words: Arc::new(DEFAULT_FUNCTION_WORDS_SET.clone()),
        }
    }

    /// Create a stop filter from a custom word list (matched lowercase).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopFilter {
            stop_words: Arc::new(
                words
                    .into_iter()
                    .map(|w| w.as_ref().to_lowercase())
                    .collect(),
            ),
        }
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word list is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let filtered = tokens
            .map(move |token| {
                if !token.is_stopped() && stop_words.contains(&token.normalized) {
                    token.stop()
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter_marks_function_words() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("The", 0),
            Token::new("majority", 1),
            Token::new("WAS", 2),
            Token::new("generated", 3),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 4);
        assert!(result[0].is_stopped());
        assert!(!result[1].is_stopped());
        assert!(result[2].is_stopped());
        assert!(!result[3].is_stopped());
    }

    #[test]
    fn test_default_list() {
        let filter = StopFilter::new();
        assert_eq!(filter.len(), 54);
        assert!(filter.is_stop_word("Them"));
        assert!(!filter.is_stop_word("energy"));
    }

    #[test]
    fn test_custom_words() {
        let filter = StopFilter::from_words(["Energy"]);
        assert!(filter.is_stop_word("energy"));
        assert!(!filter.is_stop_word("the"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
