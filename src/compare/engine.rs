//! Transcript comparison: normalize, align, classify and render.

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::Normalizer;
use crate::analysis::token::{Token, join_text};
use crate::compare::aligner::{Opcode, OpcodeKind, align_tokens};
use crate::compare::classifier::{ErrorCategory, classify};
use crate::compare::render::RenderConfig;
use crate::error::{ExamLensError, Result};
use crate::util::round2;

/// A single transcription error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// What the user wrote; empty for omitted words.
    pub user_segment: String,
    /// What the reference says; empty for extra words.
    pub correct_segment: String,
    pub category: ErrorCategory,
    /// User-token index at which the error starts.
    pub position: usize,
}

/// Outcome of comparing a user transcript with a reference transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub user_html: String,
    pub reference_html: String,
    pub errors: Vec<ErrorRecord>,
    /// Percentage of reference tokens matched, rounded to 2 decimals.
    pub accuracy: f64,
    pub total_words_user: usize,
    pub total_words_reference: usize,
}

impl ComparisonResult {
    /// Number of errors in a given category.
    pub fn count(&self, category: ErrorCategory) -> usize {
        self.errors.iter().filter(|e| e.category == category).count()
    }

    pub fn is_perfect(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Compares transcripts word by word.
#[derive(Debug, Clone)]
pub struct TranscriptComparator {
    normalizer: Normalizer,
    render: RenderConfig,
}

impl Default for TranscriptComparator {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl TranscriptComparator {
    pub fn new(render: RenderConfig) -> Self {
        TranscriptComparator {
            normalizer: Normalizer::comparison(),
            render,
        }
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    /// Compare `user_text` against `reference_text`.
    ///
    /// Fails with a validation error when either side is blank.
    pub fn compare(&self, user_text: &str, reference_text: &str) -> Result<ComparisonResult> {
        if user_text.trim().is_empty() || reference_text.trim().is_empty() {
            return Err(ExamLensError::validation(
                "both user text and reference text are required",
            ));
        }

        let user = self.normalizer.tokenize(user_text)?;
        let reference = self.normalizer.tokenize(reference_text)?;
        let opcodes = align_tokens(&user, &reference);

        let mut user_parts = Vec::with_capacity(opcodes.len());
        let mut reference_parts = Vec::with_capacity(opcodes.len());
        let mut errors = Vec::new();

        for op in &opcodes {
            log::trace!("{:?} user={:?} reference={:?}", op.kind, op.user, op.reference);

            let user_segment = join_text(&user[op.user.clone()]);
            let correct_segment = join_text(&reference[op.reference.clone()]);

            match op.kind {
                OpcodeKind::Equal => {
                    user_parts.push(self.render.correct(&user_segment));
                    reference_parts.push(self.render.correct(&correct_segment));
                }
                OpcodeKind::Replace => {
                    let category = classify(&user_segment, &correct_segment);
                    user_parts.push(self.render.error(&user_segment, category));
                    reference_parts.push(self.render.correct(&correct_segment));
                    errors.push(ErrorRecord {
                        user_segment,
                        correct_segment,
                        category,
                        position: op.user.start,
                    });
                }
                OpcodeKind::Delete => {
                    user_parts.push(self.render.error(&user_segment, ErrorCategory::Listening));
                    errors.push(ErrorRecord {
                        user_segment,
                        correct_segment: String::new(),
                        category: ErrorCategory::Listening,
                        position: op.user.start,
                    });
                }
                OpcodeKind::Insert => {
                    reference_parts.push(self.render.correct(&correct_segment));
                    errors.push(ErrorRecord {
                        user_segment: String::new(),
                        correct_segment,
                        category: ErrorCategory::Listening,
                        position: op.user.start,
                    });
                }
            }
        }

        let accuracy = accuracy(&opcodes, reference.len());
        log::debug!(
            "compared {} user words against {} reference words: {} errors, accuracy {}",
            user.len(),
            reference.len(),
            errors.len(),
            accuracy
        );

        Ok(ComparisonResult {
            user_html: self.render.finish(&user_parts),
            reference_html: self.render.finish(&reference_parts),
            errors,
            accuracy,
            total_words_user: user.len(),
            total_words_reference: reference.len(),
        })
    }

    /// Tokens of a transcript as the comparator sees them.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        self.normalizer.tokenize(text)
    }
}

/// Share of reference tokens covered by `Equal` opcodes, as a percentage
/// rounded to 2 decimals. Zero for an empty reference.
pub fn accuracy(opcodes: &[Opcode], reference_len: usize) -> f64 {
    if reference_len == 0 {
        return 0.0;
    }

    let matched: usize = opcodes
        .iter()
        .filter(|op| op.kind == OpcodeKind::Equal)
        .map(Opcode::reference_len)
        .sum();

    round2(matched as f64 / reference_len as f64 * 100.0)
}
