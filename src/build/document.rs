// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;

use super::cache::SectionCache;
use super::walker::SourceFile;
use crate::error::{Error, Result};
use crate::extract::extract_sections;
use crate::types::Document;

/// Read a content file. Failure is fatal for the build.
pub fn read_source(file: &SourceFile) -> Result<String> {
    fs::read_to_string(&file.path).map_err(|source| Error::ReadDocument {
        path: file.path.clone(),
        source,
    })
}

/// Read and extract one page, going through the cache.
pub fn load_document(file: &SourceFile, cache: &mut SectionCache) -> Result<Document> {
    let raw_text = read_source(file)?;
    let sections = cache.sections_for(&file.relative, &raw_text);
    tracing::debug!(url = %file.url, sections = sections.len(), "extracted document");
    Ok(Document {
        url: file.url.clone(),
        raw_text,
        sections,
    })
}

/// Extract a page without a cache.
pub fn document_from_text(url: impl Into<String>, raw_text: impl Into<String>) -> Document {
    let raw_text = raw_text.into();
    let sections = extract_sections(&raw_text);
    Document {
        url: url.into(),
        raw_text,
        sections,
    }
}
