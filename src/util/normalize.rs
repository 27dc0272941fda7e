// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and word tokenization.
//!
//! Both the index and the query go through the same `tokenize`, so whatever
//! folding happens here happens symmetrically: "Café" in a heading matches a
//! query for "cafe", and the other way around.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// - "café" → "cafe"
/// - "naïve" → "naive"
/// - "NewNoteTitle" → "newnotetitle"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks (Unicode category Mn) in the common diacritic blocks.
#[cfg(feature = "unicode-normalization")]
pub(crate) fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// JavaScript's `\w`, extended to Unicode letters and digits.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A normalized word and its ordinal position in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub term: String,
    pub position: u32,
}

/// Split text into normalized word tokens.
///
/// Words are maximal runs of alphanumeric characters. Underscores and
/// punctuation separate words, so `new_note` and `new-note` both yield
/// `new` and `note`.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(normalize)
        .filter(|term| !term.is_empty())
        .enumerate()
        .map(|(position, term)| Token {
            term,
            position: position as u32,
        })
        .collect()
}

/// Query terms: tokenized, deduplicated, in first-seen order.
pub fn query_terms(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for token in tokenize(query) {
        if !terms.contains(&token.term) {
            terms.push(token.term);
        }
    }
    terms
}

/// Escape angle brackets so extracted text can't be read back as markup.
pub fn escape_angle_brackets(text: &str) -> String {
    if !text.contains(['<', '>']) {
        return text.to_string();
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Replace every quote character with a plain apostrophe.
pub fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '"' | '`' => '\'',
            _ => c,
        })
        .collect()
}

/// Byte range of the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Compares char by char on lowercase forms, so the returned range is always
/// valid for slicing `haystack` even when lowercasing would change byte lengths.
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return None;
    }

    for (start, _) in haystack.char_indices() {
        let mut rest = haystack[start..].char_indices();
        let mut end = start;
        let mut matched = true;
        for expected in &needle {
            match rest.next() {
                Some((offset, actual)) if chars_eq_ignore_case(actual, *expected) => {
                    end = start + offset + actual.len_utf8();
                }
                _ => {
                    matched = false;
                    break;
                }
            }
        }
        if matched {
            return Some((start, end));
        }
    }
    None
}

#[inline]
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Conditional  Tags"), "conditional tags");
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize("café"), "cafe");
        assert_eq!(normalize("naïve"), "naive");
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = tokenize("Use <% if %> to branch-output.");
        let terms: Vec<&str> = tokens.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["use", "if", "to", "branch", "output"]);
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("  -- !! ").is_empty());
    }

    #[test]
    fn test_query_terms_dedup() {
        assert_eq!(query_terms("Copy copy paste"), vec!["copy", "paste"]);
    }

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(escape_angle_brackets("<% if %>"), "&lt;% if %&gt;");
        assert_eq!(escape_angle_brackets("plain"), "plain");
    }

    #[test]
    fn test_normalize_quotes() {
        assert_eq!(normalize_quotes(r#"a "b" `c` 'd'"#), "a 'b' 'c' 'd'");
    }

    #[test]
    fn test_find_case_insensitive() {
        assert_eq!(find_case_insensitive("Use IF to Branch", "branch"), Some((10, 16)));
        assert_eq!(find_case_insensitive("abc", "abd"), None);
        assert_eq!(find_case_insensitive("abc", ""), None);
    }

    #[test]
    fn test_find_case_insensitive_multibyte() {
        let text = "Ünïcode ÉCOLE";
        let (start, end) = find_case_insensitive(text, "école").unwrap();
        assert_eq!(&text[start..end], "ÉCOLE");
    }

    #[test]
    fn test_is_word_char() {
        assert!(is_word_char('a'));
        assert!(is_word_char('_'));
        assert!(is_word_char('9'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('-'));
    }
}
