// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for building and querying the index.
//!
//! Three severities, three types. `Error` stops a build. `IndexError` costs
//! you one entry and a warning in the log. `SearchError` never leaves the
//! query engine: `Searcher::search` turns it into an empty result list.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal build and load errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("content root {path} is not a readable directory")]
    ContentRoot { path: PathBuf },

    #[error("failed to read content page {path}: {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config, index, or auxiliary source that is not a content page.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("failed to write {path}: {source}")]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt index: {0}")]
    CorruptIndex(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Rejection of a single index entry. The builder logs these and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("entry {key} has an empty title")]
    EmptyTitle { key: String },

    #[error("entry {key} has an anchor that is not a valid fragment: {anchor:?}")]
    InvalidAnchor { key: String, anchor: String },
}

/// Query-time failure. Absorbed by `Searcher::search`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{field} posting references entry {ordinal}, index has {len} entries")]
    DanglingPosting {
        field: &'static str,
        ordinal: u32,
        len: usize,
    },

    #[error("query is {len} bytes, limit is {max}")]
    QueryTooLong { len: usize, max: usize },
}
