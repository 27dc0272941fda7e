// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Memoized section extraction, keyed by content path.
//!
//! A hit requires the raw text to be byte-for-byte what was extracted last
//! time. No hashing, no mtimes: equality is the only check that can't lie.
//! The cache can be persisted as JSON between builds; a cache file that
//! fails to load is simply treated as empty.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extract::extract_sections;
use crate::types::Section;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedPage {
    raw_text: String,
    sections: Vec<Section>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCache {
    pages: BTreeMap<String, CachedPage>,
    #[serde(skip)]
    hits: usize,
    #[serde(skip)]
    misses: usize,
}

impl SectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a persisted cache. Missing or unreadable files give an empty cache.
    pub fn load(path: &Path) -> Self {
        let Ok(bytes) = fs::read(path) else {
            return Self::new();
        };
        match serde_json::from_slice(&bytes) {
            Ok(cache) => cache,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable section cache");
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec(self)?;
        fs::write(path, bytes).map_err(|source| Error::WriteIndex {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Sections for `raw_text`, if the cache holds exactly this text for `key`.
    pub fn get(&mut self, key: &str, raw_text: &str) -> Option<Vec<Section>> {
        match self.pages.get(key) {
            Some(page) if page.raw_text == raw_text => {
                self.hits += 1;
                Some(page.sections.clone())
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, raw_text: impl Into<String>, sections: Vec<Section>) {
        self.pages.insert(
            key.into(),
            CachedPage {
                raw_text: raw_text.into(),
                sections,
            },
        );
    }

    /// Cached sections, extracting (and remembering) on a miss.
    pub fn sections_for(&mut self, key: &str, raw_text: &str) -> Vec<Section> {
        if let Some(sections) = self.get(key, raw_text) {
            return sections;
        }
        let sections = extract_sections(raw_text);
        self.insert(key, raw_text, sections.clone());
        sections
    }

    /// Drop entries for pages that no longer exist.
    pub fn retain_keys<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) {
        let keep: std::collections::HashSet<&str> = keys.into_iter().collect();
        self.pages.retain(|key, _| keep.contains(key.as_str()));
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
