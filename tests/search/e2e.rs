//! End-to-end queries against an index built from MDX sources.

use docsift::build::document_from_text;
use docsift::{SearchIndex, SearchOptions, Searcher};

use crate::common::{search, urls, TAGS_PAGE};

fn tags_index() -> SearchIndex {
    SearchIndex::build(&[
        document_from_text("/", "# Templater\n\nA template language.\n"),
        document_from_text("/templating-tags", TAGS_PAGE),
    ])
}

#[test]
fn test_branch_returns_conditional_tags() {
    let index = tags_index();
    let results = search(&index, "branch");
    assert_eq!(results.len(), 1);

    let hit = &results[0];
    assert_eq!(hit.url, "/templating-tags#conditional-tags");
    assert_eq!(hit.title, "Conditional Tags");
    assert_eq!(hit.page_title.as_deref(), Some("Templating Tags"));
    assert!(!hit.is_title_match);
    let preview = hit.preview.as_ref().unwrap();
    assert!(preview.text.contains("branch output"));
    assert_eq!(preview.highlighted(), Some("branch"));
}

#[test]
fn test_paragraph_text_finds_its_page() {
    let index = tags_index();
    let results = search(&index, "Repeat a block for every item");
    assert!(urls(&results).contains(&"/templating-tags#loop-tags"));
}

#[test]
fn test_results_serialize_for_the_ui() {
    let index = tags_index();
    let results = Searcher::new(&index).search("branch", &SearchOptions::default());
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["url"], "/templating-tags#conditional-tags");
    assert_eq!(json[0]["pageTitle"], "Templating Tags");
    assert_eq!(json[0]["isTitleMatch"], false);
    assert!(json[0]["preview"]["matchStart"].is_i64());
}

#[test]
fn test_whitespace_query_is_empty() {
    assert!(search(&tags_index(), " \n\t ").is_empty());
}
