// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The build pipeline.
//!
//! ```text
//! content root ─▶ walker ─▶ extractor (cached) ─▶ auxiliary merger ─▶ index ─▶ JSON files
//! ```
//!
//! Everything before the index is per-page and runs in parallel under the
//! `parallel` feature. The index itself is built sequentially in walker
//! order, so entry ordinals are stable across runs.

pub mod auxiliary;
pub mod cache;
pub mod config;
pub mod document;
pub mod parallel;
pub mod walker;

use std::path::PathBuf;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

pub use auxiliary::{AuxiliaryBinding, AuxiliaryMerger};
pub use cache::SectionCache;
pub use config::BuildConfig;
pub use document::{document_from_text, load_document};
pub use walker::{url_for, walk_content, ContentLayout, SourceFile};

use crate::error::{Error, Result};
use crate::index::{IndexFiles, SearchIndex};
use crate::types::Document;

/// Inputs of one `docsift index` run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub content_root: PathBuf,
    pub output_dir: PathBuf,
    pub config: BuildConfig,
    /// Persisted section cache, read before and written after the build.
    pub cache_path: Option<PathBuf>,
}

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub documents: usize,
    pub entries: usize,
    pub files: IndexFiles,
    pub cache_hits: usize,
    pub cache_misses: usize,
}

#[cfg(feature = "parallel")]
fn create_progress_bar(len: usize) -> ProgressBar {
    if !atty::is(atty::Stream::Stderr) {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸");
    ProgressBar::new(len as u64).with_style(style).with_prefix("Extracting")
}

/// Apply auxiliary content to every bound page.
///
/// Works on copies, so the documents handed in (and the section cache
/// behind them) stay exactly as extracted.
pub fn merge_auxiliary(documents: &[Document], merger: &AuxiliaryMerger) -> Vec<Document> {
    documents
        .iter()
        .map(|doc| Document {
            url: doc.url.clone(),
            raw_text: doc.raw_text.clone(),
            sections: merger.apply(&doc.url, doc.sections.clone()),
        })
        .collect()
}

/// Bound auxiliary pages that no walked document has.
pub fn unmatched_pages<'a>(merger: &'a AuxiliaryMerger, documents: &[Document]) -> Vec<&'a str> {
    if merger.is_empty() {
        return Vec::new();
    }
    let matched = documents.iter().filter(|d| merger.is_bound(&d.url)).count();
    if matched == merger.len() {
        return Vec::new();
    }
    merger
        .pages()
        .into_iter()
        .filter(|page| !documents.iter().any(|d| d.url == *page))
        .collect()
}

/// Load and extract every file, merge auxiliary content, and index it.
pub fn build_index(
    files: &[SourceFile],
    cache: &mut SectionCache,
    merger: &AuxiliaryMerger,
) -> Result<(Vec<Document>, SearchIndex)> {
    #[cfg(feature = "parallel")]
    let documents = {
        let progress = create_progress_bar(files.len());
        let documents = parallel::load_documents_with_progress(files, cache, &progress)?;
        progress.finish_and_clear();
        documents
    };
    #[cfg(not(feature = "parallel"))]
    let documents = parallel::load_documents_with_progress(files, cache)?;

    let merged = merge_auxiliary(&documents, merger);
    let index = SearchIndex::build(&merged);
    Ok((merged, index))
}

/// Run the whole pipeline and write the index files.
pub fn run_build(options: &BuildOptions) -> Result<BuildReport> {
    let layout = options.config.layout();
    let files = walk_content(&options.content_root, &layout)?;
    tracing::info!(
        root = %options.content_root.display(),
        files = files.len(),
        "discovered content files"
    );

    let mut cache = match &options.cache_path {
        Some(path) => SectionCache::load(path),
        None => SectionCache::new(),
    };
    let merger = AuxiliaryMerger::load(&options.config.auxiliary, &options.config.base_dir);

    let (documents, index) = build_index(&files, &mut cache, &merger)?;
    let index = index.with_context_length(options.config.context_length);
    let files_written = index.write(&options.output_dir)?;
    tracing::info!(
        entries = index.len(),
        path = %files_written.hashed.display(),
        bytes = files_written.bytes,
        "wrote search index"
    );

    if let Some(path) = &options.cache_path {
        cache.retain_keys(files.iter().map(|f| f.relative.as_str()));
        if let Err(e) = cache.save(path) {
            tracing::warn!(error = %e, "could not save section cache");
        }
    }

    for page in unmatched_pages(&merger, &documents) {
        tracing::warn!(page, "auxiliary page not found under content root");
    }

    Ok(BuildReport {
        documents: documents.len(),
        entries: index.len(),
        files: files_written,
        cache_hits: cache.hits(),
        cache_misses: cache.misses(),
    })
}

impl BuildOptions {
    /// Options from a config, with an optional content root override.
    pub fn new(config: BuildConfig, content_root: Option<PathBuf>, output_dir: PathBuf) -> Result<Self> {
        let content_root = content_root
            .or_else(|| config.content_root.clone())
            .ok_or_else(|| Error::Config {
                path: config.base_dir.clone(),
                message: "no content root given".to_string(),
            })?;
        Ok(Self {
            content_root,
            output_dir,
            config,
            cache_path: None,
        })
    }

    pub fn with_cache(mut self, path: Option<PathBuf>) -> Self {
        self.cache_path = path;
        self
    }
}
