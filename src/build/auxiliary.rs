// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Question/answer records merged into a page's sections.
//!
//! Some pages render content that never appears in their own source file (the
//! FAQ page renders a component fed from a data file). Each record becomes an
//! anchored section so a query can deep-link to the exact question, and one
//! trailing catch-all section keeps the page itself reachable by a query
//! like "faq".
//!
//! Records are consumed as structured JSON. A bad record costs that record
//! and a warning. A bad source file costs the records, not the build.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{AuxiliaryRecord, Section};
use crate::util::normalize_quotes;

pub const DEFAULT_CATCH_ALL_TITLE: &str = "Frequently Asked Questions (FAQ)";
pub const DEFAULT_CATCH_ALL_BODY: &str = "FAQ page containing common questions and answers";

/// Binds a page URL to a JSON file of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuxiliaryBinding {
    pub page: String,
    pub source: PathBuf,
    #[serde(default = "default_catch_all_title")]
    pub catch_all_title: String,
    #[serde(default = "default_catch_all_body")]
    pub catch_all_body: String,
}

fn default_catch_all_title() -> String {
    DEFAULT_CATCH_ALL_TITLE.to_string()
}

fn default_catch_all_body() -> String {
    DEFAULT_CATCH_ALL_BODY.to_string()
}

impl AuxiliaryBinding {
    pub fn new(page: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            page: page.into(),
            source: source.into(),
            catch_all_title: default_catch_all_title(),
            catch_all_body: default_catch_all_body(),
        }
    }
}

/// Why a record was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordProblem {
    MissingId,
    MissingQuestion,
    MissingAnswer,
    /// Whitespace or `#` in the id would break the URL fragment.
    InvalidId,
}

impl std::fmt::Display for RecordProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            RecordProblem::MissingId => "missing id",
            RecordProblem::MissingQuestion => "missing question",
            RecordProblem::MissingAnswer => "missing answer",
            RecordProblem::InvalidId => "id is not a valid URL fragment",
        };
        f.write_str(reason)
    }
}

pub fn check_record(record: &AuxiliaryRecord) -> std::result::Result<(), RecordProblem> {
    let id = record.id.trim();
    if id.is_empty() {
        return Err(RecordProblem::MissingId);
    }
    if id.contains(|c: char| c.is_whitespace() || c == '#') {
        return Err(RecordProblem::InvalidId);
    }
    if record.question.trim().is_empty() {
        return Err(RecordProblem::MissingQuestion);
    }
    if record.answer.trim().is_empty() {
        return Err(RecordProblem::MissingAnswer);
    }
    Ok(())
}

/// Read a record source file.
pub fn load_records(path: &Path) -> Result<Vec<AuxiliaryRecord>> {
    let bytes = fs::read(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Append one section per valid record, then the catch-all section.
///
/// Returns the number of records merged.
pub fn merge_records(
    sections: &mut Vec<Section>,
    records: &[AuxiliaryRecord],
    binding: &AuxiliaryBinding,
) -> usize {
    let mut merged = 0;
    for (position, record) in records.iter().enumerate() {
        if let Err(problem) = check_record(record) {
            tracing::warn!(
                page = %binding.page,
                position,
                id = %record.id,
                %problem,
                "skipping auxiliary record"
            );
            continue;
        }
        sections.push(Section {
            title: normalize_quotes(record.question.trim()),
            anchor: Some(record.id.trim().to_string()),
            body: vec![normalize_quotes(record.answer.trim())],
        });
        merged += 1;
    }

    sections.push(Section {
        title: binding.catch_all_title.clone(),
        anchor: None,
        body: vec![binding.catch_all_body.clone()],
    });
    merged
}

/// All bindings of a build, with their records loaded once up front.
#[derive(Debug, Default)]
pub struct AuxiliaryMerger {
    pages: HashMap<String, (AuxiliaryBinding, Vec<AuxiliaryRecord>)>,
}

impl AuxiliaryMerger {
    /// Load every binding's source. Relative sources resolve against `base`.
    pub fn load(bindings: &[AuxiliaryBinding], base: &Path) -> Self {
        let mut pages = HashMap::new();
        for binding in bindings {
            let path = if binding.source.is_absolute() {
                binding.source.clone()
            } else {
                base.join(&binding.source)
            };
            let records = match load_records(&path) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(page = %binding.page, error = %e, "could not load auxiliary records");
                    Vec::new()
                }
            };
            pages.insert(binding.page.clone(), (binding.clone(), records));
        }
        Self { pages }
    }

    /// Build a merger from records already in memory.
    pub fn from_records(entries: Vec<(AuxiliaryBinding, Vec<AuxiliaryRecord>)>) -> Self {
        Self {
            pages: entries
                .into_iter()
                .map(|(binding, records)| (binding.page.clone(), (binding, records)))
                .collect(),
        }
    }

    /// Sections of `url` with its auxiliary records merged in, if it has any.
    pub fn apply(&self, url: &str, mut sections: Vec<Section>) -> Vec<Section> {
        if let Some((binding, records)) = self.pages.get(url) {
            let merged = merge_records(&mut sections, records, binding);
            tracing::debug!(page = url, merged, "merged auxiliary records");
        }
        sections
    }

    /// Bound page URLs, sorted.
    pub fn pages(&self) -> Vec<&str> {
        let mut pages: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        pages.sort_unstable();
        pages
    }

    pub fn is_bound(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
