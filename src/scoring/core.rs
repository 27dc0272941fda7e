// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-entry hit accumulation.
//!
//! A query runs term by term. Each term produces at most one `TermMatch` per
//! entry (the best one), and `HitSet` folds those into one `Hit` per entry.
//!
//! # Key Invariant: Coverage Dominance
//!
//! ```text
//! matched_terms  >  quality  >  position  >  ordinal
//! ```
//!
//! `quality` is the sum of per-term weights, so it can never make up for a
//! missing term: that comparison happens first.

use std::collections::BTreeMap;

/// How well a single term matched a token. Ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchQuality {
    /// Within the edit budget, or contained inside a longer token.
    Fuzzy,
    /// Term is a proper prefix of the token.
    Prefix,
    /// Term equals the token.
    Exact,
}

impl MatchQuality {
    pub fn weight(self) -> u32 {
        match self {
            MatchQuality::Exact => EXACT_WEIGHT,
            MatchQuality::Prefix => PREFIX_WEIGHT,
            MatchQuality::Fuzzy => FUZZY_WEIGHT,
        }
    }
}

pub const EXACT_WEIGHT: u32 = 3;
pub const PREFIX_WEIGHT: u32 = 2;
pub const FUZZY_WEIGHT: u32 = 1;

/// Best match of one term in one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermMatch {
    pub quality: MatchQuality,
    pub position: u32,
}

impl TermMatch {
    /// Keep the better quality, and on a tie, the earlier position.
    pub fn improve(&mut self, other: TermMatch) {
        if other.quality > self.quality
            || (other.quality == self.quality && other.position < self.position)
        {
            *self = other;
        }
    }
}

/// One entry's aggregated match against the whole query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub ordinal: u32,
    pub matched_terms: usize,
    pub quality: u32,
    /// Earliest token position over all matched terms.
    pub position: u32,
}

/// Best match per entry for a single term.
pub type TermMatches = BTreeMap<u32, TermMatch>;

pub fn record(matches: &mut TermMatches, ordinal: u32, m: TermMatch) {
    matches
        .entry(ordinal)
        .and_modify(|best| best.improve(m))
        .or_insert(m);
}

/// Accumulates per-term matches into hits.
#[derive(Debug, Default)]
pub struct HitSet {
    hits: BTreeMap<u32, Hit>,
}

impl HitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_term(&mut self, matches: &TermMatches) {
        for (&ordinal, m) in matches {
            let hit = self.hits.entry(ordinal).or_insert(Hit {
                ordinal,
                matched_terms: 0,
                quality: 0,
                position: u32::MAX,
            });
            hit.matched_terms += 1;
            hit.quality += m.quality.weight();
            hit.position = hit.position.min(m.position);
        }
    }

    /// Hits matching at least `min_terms` terms, in ordinal order.
    pub fn into_hits(self, min_terms: usize) -> Vec<Hit> {
        self.hits
            .into_values()
            .filter(|hit| hit.matched_terms >= min_terms.max(1))
            .collect()
    }
}
