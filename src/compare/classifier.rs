//! Error categorisation for mismatched transcript segments.
//!
//! Rules are applied in priority order:
//!
//! 1. near-identical spelling (`0.7 < ratio < 1.0`) → [`ErrorCategory::Spelling`]
//! 2. a known homophone pair → [`ErrorCategory::Spelling`]
//! 3. an article or preposition on either side → [`ErrorCategory::Grammar`]
//! 4. a dissimilar word (`ratio < 0.5`) → [`ErrorCategory::Vocabulary`]
//! 5. anything else → [`ErrorCategory::Listening`]

use std::fmt;
use std::sync::LazyLock;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::util::sequence::similarity_ratio;

/// Ratio above which a mismatch counts as a misspelling.
pub const SPELLING_MIN_RATIO: f64 = 0.7;

/// Ratio below which a mismatch counts as a different word.
pub const VOCABULARY_MAX_RATIO: f64 = 0.5;

/// Articles.
pub const ARTICLES: &[&str] = &["a", "an", "the"];

/// Prepositions.
pub const PREPOSITIONS: &[&str] = &["in", "on", "at", "by", "for", "with", "from", "to"];

static HOMOPHONES: LazyLock<AHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("their", "there"),
        ("they're", "there"),
        ("there", "their"),
        ("its", "it's"),
        ("it's", "its"),
        ("your", "you're"),
        ("you're", "your"),
        ("too", "to"),
        ("to", "too"),
        ("hear", "here"),
        ("here", "hear"),
    ]
    .into_iter()
    .collect()
});

/// Category of a transcript error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Spelling,
    Grammar,
    Vocabulary,
    Listening,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Spelling => "spelling",
            ErrorCategory::Grammar => "grammar",
            ErrorCategory::Vocabulary => "vocabulary",
            ErrorCategory::Listening => "listening",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `user` is a listed homophone of `correct`. Both must be lowercase.
pub fn is_homophone_of(user: &str, correct: &str) -> bool {
    HOMOPHONES.get(user).is_some_and(|&expected| expected == correct)
}

fn is_function_word(word: &str) -> bool {
    ARTICLES.contains(&word) || PREPOSITIONS.contains(&word)
}

/// Classify a replaced segment pair.
pub fn classify(user_segment: &str, correct_segment: &str) -> ErrorCategory {
    let user = user_segment.trim().to_lowercase();
    let correct = correct_segment.trim().to_lowercase();
    let ratio = similarity_ratio(&user, &correct);

    if ratio > SPELLING_MIN_RATIO && ratio < 1.0 {
        return ErrorCategory::Spelling;
    }

    if is_homophone_of(&user, &correct) {
        return ErrorCategory::Spelling;
    }

    if is_function_word(&user) || is_function_word(&correct) {
        return ErrorCategory::Grammar;
    }

    if ratio < VOCABULARY_MAX_RATIO {
        return ErrorCategory::Vocabulary;
    }

    ErrorCategory::Listening
}
