//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through the token
//! filters. It keeps the surface text exactly as it appeared in the input
//! and a lowercase copy used for every comparison.
//!
//! # Examples
//!
//! ```
//! use examlens::analysis::token::Token;
//!
//! let token = Token::with_offsets("Energy", 1, 13, 19);
//! assert_eq!(token.text, "Energy");
//! assert_eq!(token.normalized, "energy");
//! assert_eq!(token.start_offset, 13);
//! assert!(!token.is_stopped());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::pos::PosTag;

/// A single token cut from a piece of text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The token text with its original casing.
    pub text: String,

    /// Lowercase copy of `text`, used for comparison.
    pub normalized: String,

    /// The position of the token in the token stream (0-based).
    pub position: usize,

    /// The byte offset where this token starts in the tokenized text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the tokenized text.
    pub end_offset: usize,

    /// Part-of-speech tag, once a tagger has run.
    pub tag: Option<PosTag>,

    /// Whether a filter has marked this token as not retained.
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let text = text.into();
        Token {
            normalized: text.to_lowercase(),
            text,
            position,
            start_offset,
            end_offset,
            tag: None,
            stopped: false,
        }
    }

    /// Number of characters in the surface text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Attach a part-of-speech tag.
    pub fn with_tag(mut self, tag: PosTag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Replace the normalized form, leaving the surface text alone.
    pub fn with_normalized<S: Into<String>>(mut self, normalized: S) -> Self {
        self.normalized = normalized.into();
        self
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens, as produced by tokenizers and consumed by filters.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Join the surface text of a token slice with single spaces.
pub fn join_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_keeps_surface_and_lowercase() {
        let token = Token::new("The", 0);
        assert_eq!(token.text, "The");
        assert_eq!(token.normalized, "the");
        assert_eq!(token.char_len(), 3);
        assert_eq!(token.tag, None);
    }

    #[test]
    fn test_stop_and_tag() {
        let token = Token::new("was", 3).with_tag(PosTag::VerbPast).stop();
        assert!(token.is_stopped());
        assert_eq!(token.tag, Some(PosTag::VerbPast));
    }

    #[test]
    fn test_join_text() {
        let tokens = vec![Token::new("The", 0), Token::new("cat", 1)];
        assert_eq!(join_text(&tokens), "The cat");
        assert_eq!(join_text(&[]), "");
    }
}
