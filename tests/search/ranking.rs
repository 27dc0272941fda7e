//! Ordering of the final result list.

use docsift::{SearchIndex, SearchOptions, Searcher};

use crate::common::{make_document, make_section, search};

#[test]
fn test_title_matches_precede_content_matches() {
    let index = SearchIndex::build(&[
        make_document("/a", vec![make_section("Overview", None, &["templates everywhere"])]),
        make_document("/b", vec![make_section("Templates", None, &["the basics"])]),
        make_document("/c", vec![make_section("Usage", None, &["more templates"])]),
    ]);
    let results = search(&index, "templates");
    let flags: Vec<bool> = results.iter().map(|r| r.is_title_match).collect();
    assert_eq!(flags, vec![true, false, false]);
    assert_eq!(results[0].url, "/b");
}

#[test]
fn test_exact_before_prefix() {
    let index = SearchIndex::build(&[
        make_document("/prefix", vec![make_section("Templates", None, &[])]),
        make_document("/exact", vec![make_section("Template", None, &[])]),
    ]);
    let results = search(&index, "template");
    assert_eq!(results[0].url, "/exact");
    assert_eq!(results[1].url, "/prefix");
}

#[test]
fn test_more_terms_before_fewer() {
    let index = SearchIndex::build(&[
        make_document("/one", vec![make_section("Loop", None, &["repeat items"])]),
        make_document("/both", vec![make_section("Loop", None, &["repeat output items"])]),
    ]);
    // "outptu" is a typo, so suggest (OR) runs and coverage decides
    let results = search(&index, "repeat outptu");
    assert_eq!(results[0].url, "/both");
}

#[test]
fn test_document_order_breaks_ties() {
    let docs: Vec<_> = (0..5)
        .map(|i| make_document(&format!("/p{i}"), vec![make_section(&format!("Guide {i}"), None, &[])]))
        .collect();
    let index = SearchIndex::build(&docs);
    let results = Searcher::new(&index).search("guide", &SearchOptions::default());
    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["/p0", "/p1", "/p2", "/p3", "/p4"]);
}
