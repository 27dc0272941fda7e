//! Results that render identically collapse to one.

use docsift::SearchIndex;

use crate::common::{make_document, make_section, search};

#[test]
fn test_identical_entries_collapse() {
    let index = SearchIndex::build(&[
        make_document("/a", vec![make_section("Setup", None, &["Install the plugin."])]),
        make_document("/b", vec![make_section("Setup", None, &["Install the plugin."])]),
    ]);
    let results = search(&index, "plugin");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "/a");
}

#[test]
fn test_title_hit_absorbs_content_twin() {
    let index = SearchIndex::build(&[make_document(
        "/a",
        vec![make_section("Plugin Setup", None, &["Install it."])],
    )]);
    let results = search(&index, "plugin");
    assert_eq!(results.len(), 1);
    assert!(results[0].is_title_match);
}

#[test]
fn test_different_page_titles_stay_distinct() {
    let index = SearchIndex::build(&[
        make_document(
            "/a",
            vec![make_section("A", None, &[]), make_section("Setup", Some("setup"), &["Install."])],
        ),
        make_document(
            "/b",
            vec![make_section("B", None, &[]), make_section("Setup", Some("setup"), &["Install."])],
        ),
    ]);
    let results = search(&index, "install");
    assert_eq!(results.len(), 2);
}
