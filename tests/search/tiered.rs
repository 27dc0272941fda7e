//! Tier fallback: strict, then suggest, then threshold.

use docsift::search::{search_tiers, Tier};
use docsift::util::query_terms;
use docsift::SearchIndex;

use crate::common::{make_document, make_section, sample_index, search, urls};

fn tier_for(index: &SearchIndex, query: &str) -> Option<Tier> {
    search_tiers(index, &query_terms(query), 100).map(|(tier, _)| tier)
}

#[test]
fn test_exact_and_prefix_stay_strict() {
    let index = sample_index();
    assert_eq!(tier_for(&index, "branch"), Some(Tier::Strict));
    assert_eq!(tier_for(&index, "bran"), Some(Tier::Strict));
    assert_eq!(tier_for(&index, "conditional tags"), Some(Tier::Strict));
}

#[test]
fn test_transposition_falls_to_suggest() {
    let index = sample_index();
    assert_eq!(tier_for(&index, "branhc"), Some(Tier::Suggest));
    let results = search(&index, "branhc");
    assert!(urls(&results).contains(&"/templating-tags#conditional-tags"));
}

#[test]
fn test_strict_requires_every_term() {
    let index = sample_index();
    // "branch" and "installation" never share an entry
    assert_ne!(tier_for(&index, "branch installation"), Some(Tier::Strict));
    let results = search(&index, "branch installation");
    let found = urls(&results);
    assert!(found.contains(&"/templating-tags#conditional-tags"));
    assert!(found.contains(&"/guide/installation"));
}

#[test]
fn test_infix_only_in_threshold() {
    let index = SearchIndex::build(&[make_document(
        "/fm",
        vec![make_section("Frontmatter", None, &["Read frontmatter fields."])],
    )]);
    assert_eq!(tier_for(&index, "matter"), Some(Tier::Threshold));
}

#[test]
fn test_short_transposition_falls_to_suggest() {
    let index = SearchIndex::build(&[
        make_document("/syntax", vec![make_section("Syntax", None, &["the tag syntax"])]),
        make_document("/blocks", vec![make_section("Blocks", None, &["use if blocks"])]),
    ]);
    assert_eq!(tier_for(&index, "teh"), Some(Tier::Suggest));
    assert_eq!(urls(&search(&index, "teh")), vec!["/syntax"]);
    assert_eq!(tier_for(&index, "fi"), Some(Tier::Suggest));
    assert_eq!(urls(&search(&index, "fi")), vec!["/blocks"]);
}

#[test]
fn test_short_terms_get_no_fuzz() {
    let index = sample_index();
    // "xq" is not a prefix of any token, nor a swap of one
    assert_eq!(tier_for(&index, "xq"), None);
    assert!(search(&index, "xq").is_empty());
}

#[test]
fn test_nonsense_finds_nothing() {
    let index = sample_index();
    assert!(search(&index, "qwzxv").is_empty());
}
