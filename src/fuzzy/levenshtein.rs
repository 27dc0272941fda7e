// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//!
//! Transpositions count as one edit (optimal string alignment), so "branhc"
//! is one edit from "branch". Plain Levenshtein would charge two, and a
//! single-edit budget would miss the most common typo there is.

/// Are these strings within `max` edits of each other?
///
/// Bounded optimal-string-alignment distance with two early exits:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If every cell in a DP row exceeds `max`, abandon the DP
///
/// Note that exit 2 checks two rows back as well, since a transposition can
/// reach across one row.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Early-exit: length difference is a lower bound on edit distance
    if a.len().abs_diff(b.len()) > max {
        return false;
    }
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len()) <= max;
    }

    let width = b.len() + 1;
    let mut before: Vec<usize> = vec![usize::MAX; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr: Vec<usize> = vec![0; width];

    for i in 1..=a.len() {
        curr[0] = i;
        let mut min_row = curr[0];

        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(before[j - 2].saturating_add(1));
            }
            curr[j] = best;
            min_row = min_row.min(best);
        }

        // Early-exit: nothing in this row (or the one before, which a
        // transposition could still use) is within budget
        let min_prev = prev.iter().copied().min().unwrap_or(usize::MAX);
        if min_row > max && min_prev > max {
            return false;
        }

        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()] <= max
}

/// Is `term` within `max` edits of `token`, or of some prefix of `token`?
///
/// This is the fuzzy counterpart to prefix matching: "templte" should still
/// find "templates" even though the full words are three edits apart. Only
/// prefixes within `max` chars of the term's length can qualify, so those are
/// the only ones checked.
pub fn prefix_within(term: &str, token: &str, max: usize) -> bool {
    if levenshtein_within(term, token, max) {
        return true;
    }
    let term_len = term.chars().count();
    let token_len = token.chars().count();
    let shortest = term_len.saturating_sub(max).max(1);
    let longest = (term_len + max).min(token_len.saturating_sub(1));

    (shortest..=longest).any(|len| {
        let cut = token
            .char_indices()
            .nth(len)
            .map_or(token.len(), |(offset, _)| offset);
        levenshtein_within(term, &token[..cut], max)
    })
}

/// Edit budget for a query term of the given length.
///
/// Short terms get no general slack: a one-edit match on a two-letter word is
/// noise. They still get [`transposed_prefix`].
pub fn edit_budget(term_len: usize) -> usize {
    match term_len {
        0..=3 => 0,
        4..=7 => 1,
        _ => 2,
    }
}

/// Are `a` and `b` the same except for one swapped pair of adjacent chars?
pub fn is_transposition(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() != b.len() {
        return false;
    }
    let Some(i) = a.iter().zip(&b).position(|(x, y)| x != y) else {
        return false;
    };
    i + 1 < a.len() && a[i] == b[i + 1] && a[i + 1] == b[i] && a[i + 2..] == b[i + 2..]
}

/// Is `term` one adjacent swap away from `token` or from its same-length prefix?
///
/// This is the only typo short terms are forgiven: "teh" finds "the", "fi"
/// finds "if", "ot" finds "other".
pub fn transposed_prefix(term: &str, token: &str) -> bool {
    let len = term.chars().count();
    if len < 2 {
        return false;
    }
    let cut = token
        .char_indices()
        .nth(len)
        .map_or(token.len(), |(offset, _)| offset);
    is_transposition(term, &token[..cut])
}
