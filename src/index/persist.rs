// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing index files.
//!
//! The index is written twice: once under a content-hashed name
//! (`search-index-{crc32}.json`) for cache-busting, and once as
//! `search-index.json` for consumers that need a fixed path.

use std::fs;
use std::path::{Path, PathBuf};

use super::SearchIndex;
use crate::error::{Error, Result};

pub const STABLE_INDEX_FILE: &str = "search-index.json";

/// Paths written by `write_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFiles {
    pub hashed: PathBuf,
    pub stable: PathBuf,
    pub bytes: usize,
}

pub fn hashed_file_name(bytes: &[u8]) -> String {
    format!("search-index-{:08x}.json", crc32fast::hash(bytes))
}

impl SearchIndex {
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parse and validate a serialized index.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let index: SearchIndex =
            serde_json::from_slice(bytes).map_err(|e| Error::CorruptIndex(e.to_string()))?;
        index.validate().map_err(Error::CorruptIndex)?;
        Ok(index)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&bytes)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.context_length == 0 {
            return Err("contextLength must be positive".to_string());
        }
        self.title.validate("title", self.entries.len())?;
        self.content.validate("content", self.entries.len())?;
        for (ordinal, entry) in self.entries.iter().enumerate() {
            let expected = match &entry.anchor {
                Some(anchor) => format!("{}#{}", entry.url, anchor),
                None => entry.url.clone(),
            };
            if entry.key != expected {
                return Err(format!("entry {ordinal}: key {:?} does not match url and anchor", entry.key));
            }
        }
        Ok(())
    }

    /// Write the hashed and stable index files into `output_dir`.
    pub fn write(&self, output_dir: &Path) -> Result<IndexFiles> {
        let bytes = self.to_json()?;
        fs::create_dir_all(output_dir).map_err(|source| Error::WriteIndex {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let hashed = output_dir.join(hashed_file_name(&bytes));
        let stable = output_dir.join(STABLE_INDEX_FILE);
        for path in [&hashed, &stable] {
            fs::write(path, &bytes).map_err(|source| Error::WriteIndex {
                path: path.clone(),
                source,
            })?;
        }
        Ok(IndexFiles {
            hashed,
            stable,
            bytes: bytes.len(),
        })
    }
}
