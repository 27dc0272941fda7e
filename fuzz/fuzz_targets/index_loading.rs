// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for loading untrusted index files.
//!
//! `from_json` either rejects the bytes or returns an index that every query
//! can run against without tripping over a dangling posting.

#![no_main]

use libfuzzer_sys::fuzz_target;

use docsift::search::MAX_QUERY_BYTES;
use docsift::{SearchIndex, SearchOptions, Searcher};

fuzz_target!(|bytes: &[u8]| {
    let Ok(index) = SearchIndex::from_json(bytes) else {
        return;
    };
    let searcher = Searcher::new(&index);
    let terms = index.title.terms().iter().chain(index.content.terms());
    for term in terms.filter(|t| t.len() <= MAX_QUERY_BYTES).take(16) {
        searcher
            .try_search(term, &SearchOptions::default())
            .expect("validated index produced a query error");
    }
});
