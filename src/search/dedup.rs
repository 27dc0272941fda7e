// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication.
//!
//! The same section can surface twice: once from the title field and once
//! from the content field, or as two entries that render identically (a
//! page's root entry next to its auxiliary catch-all). What the user sees is
//! the title, page title, and preview, so that is the key.
//!
//! **Invariant**: no two results share `(title, page_title, preview text,
//! match_start, match_end)`. The first occurrence wins, so title-field hits
//! survive over their content-field twins.

use std::collections::HashSet;

use crate::types::SearchResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ResultKey {
    title: String,
    page_title: Option<String>,
    preview_text: Option<String>,
    match_start: Option<i64>,
    match_end: Option<i64>,
}

impl ResultKey {
    fn of(result: &SearchResult) -> Self {
        Self {
            title: result.title.clone(),
            page_title: result.page_title.clone(),
            preview_text: result.preview.as_ref().map(|p| p.text.clone()),
            match_start: result.preview.as_ref().map(|p| p.match_start),
            match_end: result.preview.as_ref().map(|p| p.match_end),
        }
    }
}

/// Order-preserving, first-wins deduplication.
#[derive(Debug, Default)]
pub struct ResultDeduper {
    seen: HashSet<ResultKey>,
    results: Vec<SearchResult>,
}

impl ResultDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `result` unless an equivalent one was already kept.
    pub fn push(&mut self, result: SearchResult) -> bool {
        if self.seen.insert(ResultKey::of(&result)) {
            self.results.push(result);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }
}

/// Deduplicate, then stable-sort title matches first.
pub fn finalize(results: impl IntoIterator<Item = SearchResult>, limit: usize) -> Vec<SearchResult> {
    let mut deduper = ResultDeduper::new();
    for result in results {
        deduper.push(result);
    }
    let mut results = deduper.into_results();
    results.sort_by_key(|r| !r.is_title_match);
    results.truncate(limit);
    results
}
