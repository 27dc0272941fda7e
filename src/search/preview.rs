// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Context windows around a match.
//!
//! ```text
//! content   ...... [ ctx chars ][ query ][ ctx chars ] ......
//!                 ^ widened outward to word boundaries ^
//! preview   "..." + window + "..."
//! ```
//!
//! Widths are counted in chars, offsets in the result are bytes.

use crate::types::{Preview, NO_MATCH};
use crate::util::{find_case_insensitive, is_word_char};

pub const ELLIPSIS: &str = "...";

/// Build the preview of `content` for the raw `query`.
///
/// If the query does not occur in `content` (fuzzy hits), the preview is the
/// leading `2 * context_length` chars with no highlight.
pub fn preview(content: &str, query: &str, context_length: usize) -> Preview {
    let query = query.trim();
    let (start, end) = match find_case_insensitive(content, query) {
        Some((match_start, match_end)) => (
            back_chars(content, match_start, context_length),
            forward_chars(content, match_end, context_length),
        ),
        None => (0, forward_chars(content, 0, context_length.saturating_mul(2))),
    };
    let start = widen_back(content, start);
    let end = widen_forward(content, end);

    let mut text = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        text.push_str(ELLIPSIS);
    }
    text.push_str(&content[start..end]);
    if end < content.len() {
        text.push_str(ELLIPSIS);
    }

    let (match_start, match_end) = find_case_insensitive(&text, query)
        .map_or((NO_MATCH, NO_MATCH), |(s, e)| (s as i64, e as i64));
    Preview {
        text,
        match_start,
        match_end,
    }
}

/// Byte offset `n` chars before `from`, clamped to 0.
fn back_chars(text: &str, from: usize, n: usize) -> usize {
    if n == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(from, |(i, _)| i)
}

/// Byte offset `n` chars after `from`, clamped to the end.
fn forward_chars(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| from + i)
}

fn widen_back(text: &str, mut start: usize) -> usize {
    while let Some(c) = text[..start].chars().next_back() {
        if !is_word_char(c) {
            break;
        }
        start -= c.len_utf8();
    }
    start
}

fn widen_forward(text: &str, mut end: usize) -> usize {
    while let Some(c) = text[end..].chars().next() {
        if !is_word_char(c) {
            break;
        }
        end += c.len_utf8();
    }
    end
}
