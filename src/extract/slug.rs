// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heading anchors: slugify with a duplicate counter.
//!
//! The second "Overview" on a page becomes `overview-2`. A `Slugger` is
//! scoped to one document. Create a new one (or `reset`) per page, or anchors
//! start colliding across pages in whatever order the walker visits them.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

#[cfg(feature = "unicode-normalization")]
use crate::util::normalize::is_combining_mark;

/// Turn heading text into a URL fragment.
///
/// camelCase words are split ("newNoteTitle" → "new-note-title"), `&`
/// becomes "and", diacritics are folded, and every run of other characters
/// collapses to a single dash.
pub fn slugify(text: &str) -> String {
    let spaced = decamelize(&text.replace('&', " and "));

    #[cfg(feature = "unicode-normalization")]
    let folded: String = spaced.nfd().filter(|c| !is_combining_mark(*c)).collect();
    #[cfg(not(feature = "unicode-normalization"))]
    let folded = spaced;

    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;
    for c in folded.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Insert a space at camelCase word boundaries.
///
/// `aB` → `a B`, and `ABCd` → `AB Cd` (acronym followed by a word).
fn decamelize(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}

/// Slug generator with per-document duplicate tracking.
#[derive(Debug, Default)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unique slug for `text`, or `None` if the text has no slug-able characters.
    pub fn slug(&mut self, text: &str) -> Option<String> {
        let base = slugify(text);
        if base.is_empty() {
            return None;
        }

        let seen = self.occurrences.entry(base.clone()).or_insert(0);
        let mut n = *seen;
        *seen += 1;

        loop {
            let candidate = if n == 0 {
                base.clone()
            } else {
                format!("{}-{}", base, n + 1)
            };
            if self.issued.insert(candidate.clone()) {
                return Some(candidate);
            }
            n += 1;
        }
    }

    pub fn reset(&mut self) {
        self.occurrences.clear();
        self.issued.clear();
    }
}
