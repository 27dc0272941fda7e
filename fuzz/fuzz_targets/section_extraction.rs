// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for MDX section extraction.
//!
//! Half-open JSX, stray braces, unterminated fences, frontmatter without an
//! end marker: extraction has to survive all of it and still hand the index
//! builder something well-formed.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

use docsift::build::SectionCache;
use docsift::{extract_sections, Document, SearchIndex};

fuzz_target!(|source: &str| {
    let sections = extract_sections(source);

    // INVARIANT 1: anchors are unique and never empty
    let mut anchors = HashSet::new();
    for section in &sections {
        if let Some(anchor) = &section.anchor {
            assert!(!anchor.is_empty());
            assert!(anchors.insert(anchor.clone()), "duplicate anchor {anchor}");
        }
        // INVARIANT 2: stored text is escaped
        assert!(!section.title.contains('<') && !section.title.contains('>'));
        for paragraph in &section.body {
            assert!(!paragraph.contains('<') && !paragraph.contains('>'));
        }
    }

    // INVARIANT 3: extraction is deterministic, cached or not
    let mut cache = SectionCache::new();
    assert_eq!(cache.sections_for("f.mdx", source), sections);
    assert_eq!(cache.sections_for("f.mdx", source), sections);

    // INVARIANT 4: whatever the builder keeps survives a save and reload
    let doc = Document {
        url: "/fuzz".to_string(),
        raw_text: source.to_string(),
        sections,
    };
    let index = SearchIndex::build(&[doc]);
    let bytes = index.to_json().expect("serialize");
    assert_eq!(SearchIndex::from_json(&bytes).expect("reload"), index);
});
