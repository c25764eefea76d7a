//! Content-word filter.
//!
//! Marks a token as stopped unless it carries a content tag (noun, verb,
//! adjective, adverb), is longer than one character and is not purely
//! numeric. Untagged tokens are never content words.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only content words unstopped.
#[derive(Clone, Debug, Default)]
pub struct ContentWordFilter;

impl ContentWordFilter {
    /// Create a new content-word filter.
    pub fn new() -> Self {
        ContentWordFilter
    }

    /// Whether a token qualifies as a content word.
    pub fn is_content_word(token: &Token) -> bool {
        token.tag.is_some_and(|tag| tag.is_content())
            && token.char_len() > 1
            && !token.text.chars().all(char::is_numeric)
    }
}

impl Filter for ContentWordFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered = tokens
            .map(|token| {
                if token.is_stopped() || Self::is_content_word(&token) {
                    token
                } else {
                    token.stop()
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "content_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pos::PosTag;

    fn run(tokens: Vec<Token>) -> Vec<Token> {
        ContentWordFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect()
    }

    #[test]
    fn test_content_tags_pass() {
        let result = run(vec![
            Token::new("energy", 0).with_tag(PosTag::Noun),
            Token::new("generated", 1).with_tag(PosTag::VerbPastParticiple),
            Token::new("of", 2).with_tag(PosTag::Preposition),
        ]);

        assert!(!result[0].is_stopped());
        assert!(!result[1].is_stopped());
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_single_characters_and_numbers_are_stopped() {
        let result = run(vec![
            Token::new("x", 0).with_tag(PosTag::Noun),
            Token::new("2024", 1).with_tag(PosTag::Noun),
            Token::new("2024s", 2).with_tag(PosTag::PluralNoun),
        ]);

        assert!(result[0].is_stopped());
        assert!(result[1].is_stopped());
        assert!(!result[2].is_stopped());
    }

    #[test]
    fn test_untagged_tokens_are_stopped() {
        let result = run(vec![Token::new("energy", 0)]);
        assert!(result[0].is_stopped());
    }
}
