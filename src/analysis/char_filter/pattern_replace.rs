use std::sync::Arc;

use regex::Regex;

use super::CharFilter;
use crate::error::{ExamLensError, Result};

/// Whitespace runs, newlines included.
const WHITESPACE_RUN: &str = r"\s+";

/// Anything that is not a word character, whitespace or a hyphen.
const NON_WORD_EXCEPT_HYPHEN: &str = r"[^\w\s\-]";

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Arc<Regex>,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ExamLensError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(Self {
            pattern: Arc::new(regex),
            replacement: replacement.to_string(),
        })
    }

    /// Collapse whitespace runs into a single space.
    pub fn collapse_whitespace() -> Self {
        Self::new(WHITESPACE_RUN, " ").expect("whitespace pattern is valid")
    }

    /// Replace punctuation (everything but word characters, whitespace and
    /// hyphens) with a space.
    pub fn strip_punctuation() -> Self {
        Self::new(NON_WORD_EXCEPT_HYPHEN, " ").expect("punctuation pattern is valid")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
