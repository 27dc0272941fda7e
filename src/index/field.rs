// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A per-field inverted index over a sorted vocabulary.
//!
//! `terms` is sorted and deduplicated, and `postings[i]` belongs to
//! `terms[i]`. Sorting is what makes prefix lookup a binary search: every
//! term sharing a prefix sits in one contiguous run.
//!
//! ```text
//! terms     ["branch", "branches", "conditional", "output", "tags"]
//!                 │          │
//! postings  [[(3, 4)], [(7, 0)], ...]      (entry ordinal, first position)
//! ```

use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::util::tokenize;

/// One entry containing a term, with the term's first token position there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub entry: u32,
    pub position: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIndex {
    terms: Vec<String>,
    postings: Vec<Vec<Posting>>,
}

impl FieldIndex {
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn term(&self, id: usize) -> &str {
        &self.terms[id]
    }

    pub fn postings(&self, id: usize) -> &[Posting] {
        &self.postings[id]
    }

    /// Vocabulary id of an exact term.
    pub fn find(&self, term: &str) -> Option<usize> {
        self.terms
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }

    /// Vocabulary ids of every term starting with `prefix`.
    pub fn prefix_range(&self, prefix: &str) -> Range<usize> {
        let start = self.terms.partition_point(|t| t.as_str() < prefix);
        let len = self.terms[start..].partition_point(|t| t.starts_with(prefix));
        start..start + len
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn posting_count(&self) -> usize {
        self.postings.iter().map(Vec::len).sum()
    }

    /// Structural checks for an index that came from outside the process.
    pub(crate) fn validate(&self, field: &str, entry_count: usize) -> Result<(), String> {
        if self.terms.len() != self.postings.len() {
            return Err(format!(
                "{field}: {} terms but {} posting lists",
                self.terms.len(),
                self.postings.len()
            ));
        }
        if let Some(pair) = self.terms.windows(2).find(|w| w[0] >= w[1]) {
            return Err(format!(
                "{field}: vocabulary not sorted at {:?} / {:?}",
                pair[0], pair[1]
            ));
        }
        for (term, postings) in self.terms.iter().zip(&self.postings) {
            if postings.is_empty() {
                return Err(format!("{field}: term {term:?} has no postings"));
            }
            if postings.windows(2).any(|w| w[0].entry >= w[1].entry) {
                return Err(format!("{field}: postings of {term:?} not ascending"));
            }
            if let Some(p) = postings.iter().find(|p| p.entry as usize >= entry_count) {
                return Err(format!(
                    "{field}: term {term:?} references entry {} of {entry_count}",
                    p.entry
                ));
            }
        }
        Ok(())
    }
}

/// Accumulates tokens per entry, then freezes into a `FieldIndex`.
#[derive(Debug, Default)]
pub struct FieldIndexBuilder {
    terms: BTreeMap<String, Vec<Posting>>,
}

impl FieldIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `text` for `entry`. Entries must arrive in ascending order.
    pub fn add(&mut self, entry: u32, text: &str) {
        for token in tokenize(text) {
            let postings = self.terms.entry(token.term).or_default();
            // only the first occurrence per entry is kept
            if postings.last().map(|p| p.entry) != Some(entry) {
                postings.push(Posting {
                    entry,
                    position: token.position,
                });
            }
        }
    }

    pub fn finish(self) -> FieldIndex {
        let (terms, postings) = self.terms.into_iter().unzip();
        FieldIndex { terms, postings }
    }
}
