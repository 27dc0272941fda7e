// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Section-level search for MDX documentation sites.
//!
//! Pages are cut into sections at their h1/h2 headings, each section becomes
//! one index entry, and queries come back as deep links with a highlighted
//! preview.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────┐   ┌────────────┐   ┌──────────┐
//! │  build/  │──▶│ extract/  │──▶│   index/   │──▶│ search/  │
//! │ (walker, │   │ (tree,    │   │ (entries,  │   │ (tiers,  │
//! │  cache,  │   │  slugger) │   │  fields,   │   │  preview,│
//! │  merger) │   │           │   │  JSON)     │   │  dedup)  │
//! └──────────┘   └───────────┘   └────────────┘   └──────────┘
//!                                       ▲               │
//!                     fuzzy/ ───────────┴─── scoring/ ◀─┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docsift::{build::document_from_text, SearchIndex, SearchOptions, Searcher};
//!
//! let doc = document_from_text(
//!     "/templating-tags",
//!     "# Templating Tags\n\n## Conditional Tags\n\nUse <% if %> to branch output.\n",
//! );
//! let index = SearchIndex::build(&[doc]);
//! let results = Searcher::new(&index).search("branch", &SearchOptions::default());
//! assert_eq!(results[0].url, "/templating-tags#conditional-tags");
//! ```

pub mod build;
pub mod error;
pub mod extract;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;

pub use build::{run_build, BuildConfig, BuildOptions, BuildReport};
pub use error::{Error, IndexError, Result, SearchError};
pub use extract::extract_sections;
pub use index::{IndexStats, SearchIndex};
pub use search::{SearchOptions, Searcher};
pub use types::{AuxiliaryRecord, Document, IndexEntry, MatchField, Preview, SearchResult, Section};
