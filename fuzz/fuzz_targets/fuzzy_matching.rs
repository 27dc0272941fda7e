// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded edit distance.
//!
//! Checks the bounded check against properties any edit distance has:
//! identity, symmetry, and monotonicity in the bound.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use docsift::fuzzy::{levenshtein_within, prefix_within};

#[derive(Debug, Arbitrary)]
struct Input {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: Input| {
    let a: String = input.a.chars().take(32).collect();
    let b: String = input.b.chars().take(32).collect();
    let max = (input.max % 4) as usize;

    // INVARIANT 1: identity
    assert!(levenshtein_within(&a, &a, 0));

    // INVARIANT 2: symmetry
    assert_eq!(levenshtein_within(&a, &b, max), levenshtein_within(&b, &a, max));

    // INVARIANT 3: a larger bound never rejects what a smaller one accepted
    if levenshtein_within(&a, &b, max) {
        assert!(levenshtein_within(&a, &b, max + 1));
        // INVARIANT 4: prefix matching is at least as permissive
        assert!(prefix_within(&a, &b, max));
    }
});
