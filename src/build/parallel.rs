// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading.
//!
//! Reading files and parsing markdown are independent per page. Rayon reads
//! every file, the cache is consulted on the calling thread, and only the
//! misses are extracted in parallel. `par_iter().collect()` keeps input order,
//! so the documents come out in walker order exactly as a sequential run
//! would produce them.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::cache::SectionCache;
use super::document::{load_document, read_source};
use super::walker::SourceFile;
use crate::error::Result;
use crate::extract::extract_sections;
use crate::types::Document;

/// Load every file sequentially.
pub fn load_documents(files: &[SourceFile], cache: &mut SectionCache) -> Result<Vec<Document>> {
    files.iter().map(|file| load_document(file, cache)).collect()
}

/// Load every file in parallel, reporting progress.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    files: &[SourceFile],
    cache: &mut SectionCache,
    progress: &ProgressBar,
) -> Result<Vec<Document>> {
    let counter = AtomicUsize::new(0);
    let total = files.len();

    let texts = files
        .par_iter()
        .map(read_source)
        .collect::<Result<Vec<String>>>()?;

    let cached: Vec<Option<_>> = files
        .iter()
        .zip(&texts)
        .map(|(file, text)| cache.get(&file.relative, text))
        .collect();

    let documents: Vec<Document> = files
        .par_iter()
        .zip(texts.into_par_iter())
        .zip(cached.into_par_iter())
        .map(|((file, raw_text), hit)| {
            let sections = hit.unwrap_or_else(|| extract_sections(&raw_text));

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Document {
                url: file.url.clone(),
                raw_text,
                sections,
            }
        })
        .collect();

    for (file, doc) in files.iter().zip(&documents) {
        cache.insert(file.relative.as_str(), doc.raw_text.as_str(), doc.sections.clone());
    }
    Ok(documents)
}

/// Sequential fallback.
#[cfg(not(feature = "parallel"))]
pub fn load_documents_with_progress(
    files: &[SourceFile],
    cache: &mut SectionCache,
) -> Result<Vec<Document>> {
    load_documents(files, cache)
}
