// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query engine: where the index pays off.
//!
//! ```text
//! query ─▶ terms ─▶ tiers (strict → suggest → threshold)
//!                     │ first tier with hits
//!                     ▼
//!          [title set] [content set] ─▶ previews ─▶ dedup ─▶ title-first sort
//! ```
//!
//! `Searcher::search` never fails. Internal errors are logged and turn into an
//! empty result list, because a search box that throws is worse than one that
//! shows nothing.

pub mod dedup;
pub mod preview;
pub mod tiered;

pub use dedup::{finalize, ResultDeduper};
pub use preview::preview;
pub use tiered::{search_tiers, ResultSet, Tier};

use crate::error::SearchError;
use crate::index::SearchIndex;
use crate::types::{MatchField, SearchResult};
use crate::util::query_terms;

pub const DEFAULT_LIMIT: usize = 100;
pub const DEFAULT_CONTEXT_LENGTH: usize = 100;
/// Longest accepted query, in bytes.
pub const MAX_QUERY_BYTES: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Cap on each result set and on the final list.
    pub limit: usize,
    /// Chars of context on each side of a match in the preview.
    pub context_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            context_length: DEFAULT_CONTEXT_LENGTH,
        }
    }
}

impl SearchOptions {
    /// Defaults, with the preview context the index was built with.
    pub fn for_index(index: &SearchIndex) -> Self {
        Self {
            context_length: index.context_length,
            ..Self::default()
        }
    }
}

/// Read-only query handle over a built index.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    index: &'a SearchIndex,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a SearchIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a SearchIndex {
        self.index
    }

    /// Run a query. Errors are logged and yield an empty list.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        match self.try_search(query, options) {
            Ok(results) => results,
            Err(e) => {
                tracing::error!(error = %e, "search failed");
                Vec::new()
            }
        }
    }

    pub fn try_search(&self, query: &str, options: &SearchOptions) -> Result<Vec<SearchResult>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        if query.len() > MAX_QUERY_BYTES {
            return Err(SearchError::QueryTooLong {
                len: query.len(),
                max: MAX_QUERY_BYTES,
            });
        }

        let terms = query_terms(query);
        let Some((tier, sets)) = search_tiers(self.index, &terms, options.limit) else {
            tracing::debug!(query, "no results in any tier");
            return Ok(Vec::new());
        };

        let mut results = Vec::new();
        for set in &sets {
            for hit in &set.hits {
                results.push(self.result_for(set.field, hit.ordinal, query, options)?);
            }
        }
        let results = finalize(results, options.limit);
        tracing::debug!(query, tier = tier.as_str(), results = results.len(), "search complete");
        Ok(results)
    }

    fn result_for(
        &self,
        field: MatchField,
        ordinal: u32,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResult, SearchError> {
        let entry = self
            .index
            .entry(ordinal)
            .ok_or(SearchError::DanglingPosting {
                field: field.as_str(),
                ordinal,
                len: self.index.len(),
            })?;
        Ok(SearchResult {
            url: entry.key.clone(),
            title: entry.title.clone(),
            page_title: entry.page_title.clone(),
            preview: Some(preview(&entry.content, query, options.context_length)),
            is_title_match: field == MatchField::Title,
        })
    }
}
