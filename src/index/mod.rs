// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: sections in, queryable entries out.
//!
//! Every section of every document becomes one `IndexEntry`, addressed by its
//! ordinal. Two field indexes sit over the entries: `title` sees only the
//! section title, `content` sees the title plus body. They are queried
//! independently so a title hit can outrank a body hit.

mod field;
mod persist;

pub use field::*;
pub use persist::*;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::search::DEFAULT_CONTEXT_LENGTH;
use crate::types::{Document, IndexEntry, MatchField, Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    pub entries: Vec<IndexEntry>,
    pub title: FieldIndex,
    pub content: FieldIndex,
    /// Preview context the site was built with. Searches default to it.
    #[serde(default = "default_context_length")]
    pub context_length: usize,
}

fn default_context_length() -> usize {
    DEFAULT_CONTEXT_LENGTH
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            title: FieldIndex::default(),
            content: FieldIndex::default(),
            context_length: DEFAULT_CONTEXT_LENGTH,
        }
    }
}

impl SearchIndex {
    /// Build an index over `documents`, in document then section order.
    pub fn build(documents: &[Document]) -> Self {
        let mut builder = IndexBuilder::new();
        for doc in documents {
            builder.add_document(doc);
        }
        builder.finish()
    }

    pub fn with_context_length(mut self, context_length: usize) -> Self {
        self.context_length = context_length;
        self
    }

    pub fn field(&self, field: MatchField) -> &FieldIndex {
        match field {
            MatchField::Title => &self.title,
            MatchField::Content => &self.content,
        }
    }

    pub fn entry(&self, ordinal: u32) -> Option<&IndexEntry> {
        self.entries.get(ordinal as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        let pages: BTreeSet<&str> = self.entries.iter().map(|e| e.url.as_str()).collect();
        IndexStats {
            entries: self.entries.len(),
            pages: pages.len(),
            anchored: self.entries.iter().filter(|e| e.anchor.is_some()).count(),
            title_terms: self.title.len(),
            content_terms: self.content.len(),
            postings: self.title.posting_count() + self.content.posting_count(),
        }
    }
}

/// Summary numbers for `docsift inspect` and build logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub entries: usize,
    pub pages: usize,
    pub anchored: usize,
    pub title_terms: usize,
    pub content_terms: usize,
    pub postings: usize,
}

/// Flatten one section into an entry.
///
/// `page_title` is the title of the page's first section, attached only to
/// anchored entries.
pub fn entry_for(url: &str, section: &Section, page_title: Option<&str>) -> Result<IndexEntry, IndexError> {
    let key = match &section.anchor {
        Some(anchor) => format!("{url}#{anchor}"),
        None => url.to_string(),
    };
    if section.title.trim().is_empty() {
        return Err(IndexError::EmptyTitle { key });
    }
    if let Some(anchor) = &section.anchor {
        if anchor.is_empty() || anchor.contains(|c: char| c.is_whitespace() || c == '#') {
            return Err(IndexError::InvalidAnchor {
                key,
                anchor: anchor.clone(),
            });
        }
    }
    Ok(IndexEntry {
        key,
        url: url.to_string(),
        anchor: section.anchor.clone(),
        title: section.title.clone(),
        content: section.content(),
        page_title: section
            .anchor
            .as_ref()
            .and_then(|_| page_title.map(str::to_string)),
    })
}

/// Incremental index construction.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    entries: Vec<IndexEntry>,
    title: FieldIndexBuilder,
    content: FieldIndexBuilder,
    rejected: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, doc: &Document) {
        let page_title = doc.sections.first().map(|s| s.title.as_str());
        for section in &doc.sections {
            match entry_for(&doc.url, section, page_title) {
                Ok(entry) => self.push(entry),
                Err(e) => {
                    self.rejected += 1;
                    tracing::warn!(error = %e, "skipping index entry");
                }
            }
        }
    }

    fn push(&mut self, entry: IndexEntry) {
        let ordinal = self.entries.len() as u32;
        self.title.add(ordinal, &entry.title);
        self.content.add(ordinal, &entry.content);
        self.entries.push(entry);
    }

    /// Entries rejected so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn finish(self) -> SearchIndex {
        tracing::debug!(
            entries = self.entries.len(),
            rejected = self.rejected,
            "built search index"
        );
        SearchIndex {
            entries: self.entries,
            title: self.title.finish(),
            content: self.content.finish(),
            context_length: DEFAULT_CONTEXT_LENGTH,
        }
    }
}
