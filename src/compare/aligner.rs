//! Minimal-edit alignment of two token sequences.
//!
//! The alignment is derived from Ratcliff/Obershelp matching blocks: matched
//! runs become `Equal` opcodes and every stretch between two runs becomes a single
//! `Replace`, `Delete` or `Insert`, depending on which sides it covers.
//!
//! # Examples
//!
//! ```
//! use examlens::compare::aligner::{align, OpcodeKind};
//!
//! let user = ["the", "cat", "sit", "on", "mat"];
//! let reference = ["the", "cat", "sat", "on", "the", "mat"];
//! let kinds: Vec<OpcodeKind> = align(&user, &reference).iter().map(|op| op.kind).collect();
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         OpcodeKind::Equal,
//!         OpcodeKind::Replace,
//!         OpcodeKind::Equal,
//!         OpcodeKind::Insert,
//!         OpcodeKind::Equal,
//!     ]
//! );
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::util::sequence::{MatchingBlock, matching_blocks};

/// How a user range relates to a reference range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpcodeKind {
    /// Both ranges are non-empty and identical.
    Equal,
    /// Both ranges are non-empty and differ.
    Replace,
    /// Extra user words; the reference range is empty.
    Delete,
    /// Omitted words; the user range is empty.
    Insert,
}

/// One alignment segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opcode {
    pub kind: OpcodeKind,
    /// Range into the user sequence.
    pub user: Range<usize>,
    /// Range into the reference sequence.
    pub reference: Range<usize>,
}

impl Opcode {
    fn new(kind: OpcodeKind, user: Range<usize>, reference: Range<usize>) -> Self {
        Opcode {
            kind,
            user,
            reference,
        }
    }

    /// Number of user elements covered.
    pub fn user_len(&self) -> usize {
        self.user.len()
    }

    /// Number of reference elements covered.
    pub fn reference_len(&self) -> usize {
        self.reference.len()
    }
}

/// Align two sequences into an ordered, exhaustive opcode list.
///
/// Concatenating the user ranges in order yields `0..user.len()`; the same
/// holds for the reference ranges.
pub fn align<T: PartialEq>(user: &[T], reference: &[T]) -> Vec<Opcode> {
    let mut blocks = matching_blocks(user, reference);
    blocks.push(MatchingBlock {
        a_start: user.len(),
        b_start: reference.len(),
        len: 0,
    });

    let mut opcodes = Vec::with_capacity(blocks.len() * 2);
    let (mut i, mut j) = (0, 0);

    for block in blocks {
        let gap_kind = match (i < block.a_start, j < block.b_start) {
            (true, true) => Some(OpcodeKind::Replace),
            (true, false) => Some(OpcodeKind::Delete),
            (false, true) => Some(OpcodeKind::Insert),
            (false, false) => None,
        };
        if let Some(kind) = gap_kind {
            opcodes.push(Opcode::new(kind, i..block.a_start, j..block.b_start));
        }

        if block.len > 0 {
            opcodes.push(Opcode::new(
                OpcodeKind::Equal,
                block.a_start..block.a_start + block.len,
                block.b_start..block.b_start + block.len,
            ));
        }

        i = block.a_start + block.len;
        j = block.b_start + block.len;
    }

    opcodes
}

/// Align two token sequences by their lowercase forms.
pub fn align_tokens(user: &[Token], reference: &[Token]) -> Vec<Opcode> {
    let user_words: Vec<&str> = user.iter().map(|t| t.normalized.as_str()).collect();
    let reference_words: Vec<&str> = reference.iter().map(|t| t.normalized.as_str()).collect();
    align(&user_words, &reference_words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    fn assert_reconstructs(user: &[&str], reference: &[&str]) {
        let opcodes = align(user, reference);

        let mut user_cursor = 0;
        let mut reference_cursor = 0;
        for op in &opcodes {
            assert_eq!(op.user.start, user_cursor);
            assert_eq!(op.reference.start, reference_cursor);
            match op.kind {
                OpcodeKind::Equal => {
                    assert_eq!(&user[op.user.clone()], &reference[op.reference.clone()]);
                    assert!(op.user_len() > 0);
                }
                OpcodeKind::Replace => assert!(op.user_len() > 0 && op.reference_len() > 0),
                OpcodeKind::Delete => assert!(op.user_len() > 0 && op.reference_len() == 0),
                OpcodeKind::Insert => assert!(op.user_len() == 0 && op.reference_len() > 0),
            }
            user_cursor = op.user.end;
            reference_cursor = op.reference.end;
        }
        assert_eq!(user_cursor, user.len());
        assert_eq!(reference_cursor, reference.len());
    }

    #[test]
    fn test_identical_sequences() {
        let seq = words("the cat sat on the mat");
        let opcodes = align(&seq, &seq);
        assert_eq!(opcodes, vec![Opcode::new(OpcodeKind::Equal, 0..6, 0..6)]);
    }

    #[test]
    fn test_replace_and_insert() {
        let user = words("the cat sit on mat");
        let reference = words("the cat sat on the mat");
        let opcodes = align(&user, &reference);

        assert_eq!(
            opcodes,
            vec![
                Opcode::new(OpcodeKind::Equal, 0..2, 0..2),
                Opcode::new(OpcodeKind::Replace, 2..3, 2..3),
                Opcode::new(OpcodeKind::Equal, 3..4, 3..4),
                Opcode::new(OpcodeKind::Insert, 4..4, 4..5),
                Opcode::new(OpcodeKind::Equal, 4..5, 5..6),
            ]
        );
    }

    #[test]
    fn test_delete() {
        let user = words("the big cat");
        let reference = words("the cat");
        let opcodes = align(&user, &reference);

        assert_eq!(opcodes[1], Opcode::new(OpcodeKind::Delete, 1..2, 1..1));
    }

    #[test]
    fn test_one_side_empty() {
        let empty: Vec<&str> = Vec::new();
        let seq = words("only reference words");

        assert_eq!(
            align(&empty, &seq),
            vec![Opcode::new(OpcodeKind::Insert, 0..0, 0..3)]
        );
        assert_eq!(
            align(&seq, &empty),
            vec![Opcode::new(OpcodeKind::Delete, 0..3, 0..0)]
        );
        assert!(align(&empty, &empty).is_empty());
    }

    #[test]
    fn test_reconstruction() {
        let cases = [
            ("the cat sit on mat", "the cat sat on the mat"),
            ("a b c d e", "e d c b a"),
            ("one two three", "four five"),
            ("x y x y x", "y x y"),
            ("energy is power", "energy energy is is power power"),
            ("", "some words"),
        ];
        for (user, reference) in cases {
            assert_reconstructs(&words(user), &words(reference));
        }
    }

    #[test]
    fn test_deterministic() {
        let user = words("a b a b");
        let reference = words("b a b a");
        assert_eq!(align(&user, &reference), align(&user, &reference));
    }

    #[test]
    fn test_align_tokens_ignores_case() {
        let user = vec![Token::new("The", 0), Token::new("CAT", 1)];
        let reference = vec![Token::new("the", 0), Token::new("cat", 1)];
        let opcodes = align_tokens(&user, &reference);
        assert_eq!(opcodes, vec![Opcode::new(OpcodeKind::Equal, 0..2, 0..2)]);
    }
}
