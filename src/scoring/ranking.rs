// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering within a result set.

use std::cmp::Ordering;

use super::Hit;

/// Compare two hits for ranking. `Less` means `a` ranks first.
///
/// Sort order:
/// 1. **Matched terms**, more first
/// 2. **Quality**, higher first (exact > prefix > fuzzy)
/// 3. **Position**, earliest token first
/// 4. **Ordinal**, so equal hits keep document order
pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    b.matched_terms
        .cmp(&a.matched_terms)
        .then_with(|| b.quality.cmp(&a.quality))
        .then_with(|| a.position.cmp(&b.position))
        .then_with(|| a.ordinal.cmp(&b.ordinal))
}

/// Sort hits by rank and keep the top `limit`.
pub fn rank(mut hits: Vec<Hit>, limit: usize) -> Vec<Hit> {
    hits.sort_by(compare_hits);
    hits.truncate(limit);
    hits
}
