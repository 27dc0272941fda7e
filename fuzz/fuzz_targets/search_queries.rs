// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary bytes go in as the query. The searcher must never panic, every
//! highlight must slice its preview cleanly, and title matches must come first.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

use docsift::testing::sample_index;
use docsift::{SearchIndex, SearchOptions, Searcher};

fuzz_target!(|query: &[u8]| {
    static INDEX: OnceLock<SearchIndex> = OnceLock::new();
    let index = INDEX.get_or_init(sample_index);

    let query = String::from_utf8_lossy(query);
    let options = SearchOptions {
        limit: 20,
        context_length: 40,
    };
    let results = Searcher::new(index).search(&query, &options);

    // INVARIANT 1: limit is respected
    assert!(results.len() <= options.limit);

    // INVARIANT 2: highlights are either absent or valid slices
    for result in &results {
        if let Some(preview) = &result.preview {
            if preview.match_start >= 0 {
                assert!(preview.highlighted().is_some(), "bad highlight: {:?}", preview);
            } else {
                assert_eq!(preview.match_end, -1);
            }
        }
    }

    // INVARIANT 3: title matches precede content matches
    if let Some(first_content) = results.iter().position(|r| !r.is_title_match) {
        assert!(results[first_content..].iter().all(|r| !r.is_title_match));
    }

    // INVARIANT 4: no duplicate renderings
    let mut seen = HashSet::new();
    for r in &results {
        assert!(seen.insert((&r.title, &r.page_title, &r.preview)));
    }
});
