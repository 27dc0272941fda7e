// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Always compiled but hidden from documentation.

#![doc(hidden)]

use std::fs;
use std::io;
use std::path::Path;

use crate::index::SearchIndex;
use crate::types::{Document, Section};

/// A section with the given body paragraphs.
pub fn make_section(title: &str, anchor: Option<&str>, body: &[&str]) -> Section {
    Section {
        title: title.to_string(),
        anchor: anchor.map(str::to_string),
        body: body.iter().map(|p| p.to_string()).collect(),
    }
}

/// A document whose sections are given directly, skipping extraction.
pub fn make_document(url: &str, sections: Vec<Section>) -> Document {
    Document {
        url: url.to_string(),
        raw_text: String::new(),
        sections,
    }
}

/// Write `(relative path, text)` pairs under `root`, creating directories.
pub fn write_content_tree(root: &Path, files: &[(&str, &str)]) -> io::Result<()> {
    for (relative, text) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, text)?;
    }
    Ok(())
}

/// A small site: a home page, a tags page with anchored sections, and a
/// guide, indexed directly.
pub fn sample_index() -> SearchIndex {
    SearchIndex::build(&[
        make_document("/", vec![make_section("Introduction", None, &["Welcome to the docs."])]),
        make_document(
            "/templating-tags",
            vec![
                make_section("Templating Tags", None, &["Tags are the building blocks of templates."]),
                make_section(
                    "Conditional Tags",
                    Some("conditional-tags"),
                    &["Use &lt;% if %&gt; to branch output."],
                ),
                make_section("Loop Tags", Some("loop-tags"), &["Repeat a block for every item."]),
            ],
        ),
        make_document(
            "/guide/installation",
            vec![
                make_section("Installation", None, &["Install the plugin from the community store."]),
                make_section("Configuration", Some("configuration"), &["Set the template folder."]),
            ],
        ),
    ])
}
