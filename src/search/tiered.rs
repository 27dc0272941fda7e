// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three-tier fallback: strict → suggest → threshold.
//!
//! Each tier is strictly more lenient than the one before. The first tier
//! that finds anything wins, so a query with an exact match never sees fuzzy
//! noise, and a typo still finds something.
//!
//! | Tier      | Semantics | Term matches token when...                      |
//! |-----------|-----------|--------------------------------------------------|
//! | Strict    | AND       | term is a prefix of the token                    |
//! | Suggest   | OR        | ...or within `edit_budget` of the token or its prefix |
//! | Threshold | OR        | ...or within budget + 1, or contained in the token |
//!
//! Terms shorter than four characters get no edit budget in Suggest, and
//! terms shorter than three get none in Threshold either. Both tiers still
//! forgive a single adjacent swap in any term of two or more characters.

use crate::fuzzy::{edit_budget, prefix_within, transposed_prefix};
use crate::index::{FieldIndex, SearchIndex};
use crate::scoring::ranking::rank;
use crate::scoring::{record, Hit, HitSet, MatchQuality, TermMatch, TermMatches};
use crate::types::MatchField;

/// Minimum term length (in chars) for infix matching in the threshold tier.
pub const MIN_INFIX_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Strict,
    Suggest,
    Threshold,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Strict, Tier::Suggest, Tier::Threshold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Strict => "strict",
            Tier::Suggest => "suggest",
            Tier::Threshold => "threshold",
        }
    }

    /// Edits allowed for a term of `len` chars.
    pub fn budget(&self, len: usize) -> usize {
        match self {
            Tier::Strict => 0,
            Tier::Suggest => edit_budget(len),
            Tier::Threshold if len < MIN_INFIX_LEN => 0,
            Tier::Threshold => edit_budget(len) + 1,
        }
    }

    /// Whether an entry must match every term.
    pub fn requires_all_terms(&self) -> bool {
        matches!(self, Tier::Strict)
    }
}

/// Ranked hits of one field under one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub field: MatchField,
    pub hits: Vec<Hit>,
}

/// Best match of `term` in every entry of `field`.
pub fn match_term(field: &FieldIndex, term: &str, tier: Tier) -> TermMatches {
    let mut matches = TermMatches::new();
    let mut add = |id: usize, quality: MatchQuality| {
        for posting in field.postings(id) {
            record(
                &mut matches,
                posting.entry,
                TermMatch {
                    quality,
                    position: posting.position,
                },
            );
        }
    };

    let prefixed = field.prefix_range(term);
    for id in prefixed.clone() {
        let quality = if field.term(id) == term {
            MatchQuality::Exact
        } else {
            MatchQuality::Prefix
        };
        add(id, quality);
    }
    if tier == Tier::Strict {
        return matches;
    }

    let len = term.chars().count();
    let budget = tier.budget(len);
    let infix = tier == Tier::Threshold && len >= MIN_INFIX_LEN;
    // A nonzero budget already covers swaps
    let swap = budget == 0 && len >= 2;
    if budget == 0 && !infix && !swap {
        return matches;
    }
    for id in (0..field.len()).filter(|id| !prefixed.contains(id)) {
        let token = field.term(id);
        let fuzzy = (budget > 0 && prefix_within(term, token, budget))
            || (swap && transposed_prefix(term, token))
            || (infix && token.contains(term));
        if fuzzy {
            add(id, MatchQuality::Fuzzy);
        }
    }
    matches
}

/// Run one tier against one field.
pub fn search_field(index: &SearchIndex, field: MatchField, terms: &[String], tier: Tier, limit: usize) -> ResultSet {
    let field_index = index.field(field);
    let mut hits = HitSet::new();
    for term in terms {
        hits.add_term(&match_term(field_index, term, tier));
    }
    let min_terms = if tier.requires_all_terms() { terms.len() } else { 1 };
    ResultSet {
        field,
        hits: rank(hits.into_hits(min_terms), limit),
    }
}

/// Walk the tiers until one produces a hit in either field.
///
/// Returns the winning tier and its non-empty result sets, title first.
pub fn search_tiers(index: &SearchIndex, terms: &[String], limit: usize) -> Option<(Tier, Vec<ResultSet>)> {
    if terms.is_empty() || limit == 0 {
        return None;
    }
    for tier in Tier::ALL {
        let sets: Vec<ResultSet> = [MatchField::Title, MatchField::Content]
            .into_iter()
            .map(|field| search_field(index, field, terms, tier, limit))
            .filter(|set| !set.hits.is_empty())
            .collect();
        tracing::debug!(tier = tier.as_str(), sets = sets.len(), "ran search tier");
        if !sets.is_empty() {
            return Some((tier, sets));
        }
    }
    None
}
