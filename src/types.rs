// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! A `Document` is one page. The extractor cuts it into `Section`s, the
//! builder flattens each section into an `IndexEntry`, and the query engine
//! hands back `SearchResult`s. Entries never point back at documents: only
//! flattened strings survive, so the index serializes on its own.
//!
//! # Invariants
//!
//! - **Section**: only depth 1-2 headings open a section. Anchors are unique
//!   within a document.
//! - **IndexEntry**: `content` starts with `title`, followed by every body
//!   paragraph in order, newline-joined. `page_title` is set iff `anchor` is.
//! - **Preview**: `match_start`/`match_end` are byte offsets into `text` on
//!   char boundaries, or both `-1`.

use serde::{Deserialize, Serialize};

/// One content page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Canonical path. The root page is `/`.
    pub url: String,
    pub raw_text: String,
    pub sections: Vec<Section>,
}

/// A heading plus the prose that follows it, up to the next depth 1-2 heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    /// URL fragment. `None` for the page's own title section.
    pub anchor: Option<String>,
    pub body: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>, anchor: Option<String>) -> Self {
        Self {
            title: title.into(),
            anchor,
            body: Vec::new(),
        }
    }

    /// Title and body joined by newlines. This is what the content field indexes.
    pub fn content(&self) -> String {
        let mut content = String::with_capacity(
            self.title.len() + self.body.iter().map(|p| p.len() + 1).sum::<usize>(),
        );
        content.push_str(&self.title);
        for paragraph in &self.body {
            content.push('\n');
            content.push_str(paragraph);
        }
        content
    }
}

/// One row of the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    /// `url` or `url#anchor`.
    pub key: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    pub title: String,
    pub content: String,
    /// Title of the owning page, only on anchored (sub-page) entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
}

/// Externally supplied question/answer content for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxiliaryRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// Which field index produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Title,
    Content,
}

impl MatchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchField::Title => "title",
            MatchField::Content => "content",
        }
    }
}

/// Marker for "no highlight" in `Preview`.
pub const NO_MATCH: i64 = -1;

/// A context window around the match, ready for highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub text: String,
    pub match_start: i64,
    pub match_end: i64,
}

impl Preview {
    /// The highlighted slice, if any.
    pub fn highlighted(&self) -> Option<&str> {
        if self.match_start < 0 || self.match_end < self.match_start {
            return None;
        }
        self.text
            .get(self.match_start as usize..self.match_end as usize)
    }
}

/// What the UI renders for one hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
    pub is_title_match: bool,
}
