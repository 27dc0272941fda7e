// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bounded edit distance.
//!
//! The vocabulary of a documentation site is a few thousand words, so the
//! suggest tier scans it linearly with a bounded DP per term. No automaton.

mod levenshtein;

pub use levenshtein::*;
