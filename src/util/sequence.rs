//! Ratcliff/Obershelp sequence matching.
//!
//! Shared by the token aligner (over word sequences) and the error
//! classifier (over characters). Matching blocks are found by taking the
//! longest contiguous match and recursing on what lies to its left and to its
//! right. No elements are treated as junk.
//!
//! Memory use is linear in the length of the second sequence; time is
//! quadratic in the worst case.

/// A run of matching elements: `a[a_start..a_start + len] == b[b_start..b_start + len]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Longest matching block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among blocks of maximal length the one starting earliest in `a` wins, then
/// the one starting earliest in `b`. Returns a zero-length block at
/// `(alo, blo)` when nothing matches.
pub fn longest_match<T: PartialEq>(
    a: &[T],
    b: &[T],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> MatchingBlock {
    let mut best = MatchingBlock {
        a_start: alo,
        b_start: blo,
        len: 0,
    };
    if alo >= ahi || blo >= bhi {
        return best;
    }

    // prev[k + 1] = length of the match ending at a[i - 1], b[blo + k]
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];

    for i in alo..ahi {
        for k in 0..width {
            curr[k + 1] = if a[i] == b[blo + k] { prev[k] + 1 } else { 0 };
            let len = curr[k + 1];
            if len > best.len {
                best = MatchingBlock {
                    a_start: i + 1 - len,
                    b_start: blo + k + 1 - len,
                    len,
                };
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// All matching blocks of `a` and `b`, in increasing order, with adjacent
/// blocks merged.
pub fn matching_blocks<T: PartialEq>(a: &[T], b: &[T]) -> Vec<MatchingBlock> {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut found = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_match(a, b, alo, ahi, blo, bhi);
        if block.len == 0 {
            continue;
        }

        let (i, j, len) = (block.a_start, block.b_start, block.len);
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + len < ahi && j + len < bhi {
            pending.push((i + len, ahi, j + len, bhi));
        }
        found.push(block);
    }

    found.sort_by_key(|block| (block.a_start, block.b_start));

    let mut blocks: Vec<MatchingBlock> = Vec::with_capacity(found.len());
    for block in found {
        match blocks.last_mut() {
            Some(last)
                if last.a_start + last.len == block.a_start
                    && last.b_start + last.len == block.b_start =>
            {
                last.len += block.len;
            }
            _ => blocks.push(block),
        }
    }

    blocks
}

/// Total number of matched elements over all matching blocks.
pub fn matched_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    matching_blocks(a, b).iter().map(|block| block.len).sum()
}

/// Character-level similarity ratio `2·M / (|a| + |b|)` in `[0, 1]`,
/// where `M` is the number of characters covered by matching blocks.
/// Two empty strings are identical (1.0).
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();

    if total == 0 {
        return 1.0;
    }

    2.0 * matched_len(&a_chars, &b_chars) as f64 / total as f64
}
