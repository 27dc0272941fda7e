// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Three subcommands: `index` to build an index from a content tree, `search`
//! to query one, and `inspect` to print what's inside.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Section-level search index builder for MDX documentation",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a search index from a directory of MDX pages
    Index {
        /// Content root to walk. Overrides `contentRoot` from the config
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Output directory for the index files
        #[arg(short, long)]
        output: PathBuf,

        /// Path to docsift.json
        ///
        /// Binds auxiliary question/answer sources to pages and overrides
        /// the content layout (extension, page file name).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Section cache file, reused across builds
        #[arg(long)]
        cache: Option<PathBuf>,
    },

    /// Search an index and display results
    Search {
        /// Path to search-index.json
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Characters of context on each side of a match
        ///
        /// Defaults to the `contextLength` the index was built with.
        #[arg(long)]
        context: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print entry, page and vocabulary statistics of an index
    Inspect {
        /// Path to search-index.json
        file: PathBuf,
    },
}
