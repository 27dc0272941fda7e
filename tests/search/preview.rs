//! Preview windows around matches.

use docsift::search::preview;
use docsift::types::NO_MATCH;

#[test]
fn test_match_at_start_has_no_leading_ellipsis() {
    let content = format!("branch {}", "word ".repeat(60));
    let p = preview(&content, "branch", 20);
    assert!(!p.text.starts_with("..."));
    assert!(p.text.ends_with("..."));
    assert_eq!(p.match_start, 0);
}

#[test]
fn test_match_near_end_has_no_trailing_ellipsis() {
    let content = format!("{}final branch", "word ".repeat(60));
    let p = preview(&content, "branch", 20);
    assert!(p.text.starts_with("..."));
    assert!(!p.text.ends_with("..."));
    assert_eq!(p.highlighted(), Some("branch"));
}

#[test]
fn test_window_never_cuts_words() {
    let content = "internationalization localization globalization branch accessibility";
    let p = preview(content, "branch", 5);
    assert_eq!(p.text, "...globalization branch accessibility");
}

#[test]
fn test_fuzzy_hit_gets_leading_window() {
    let p = preview("Use it to branch output.", "branhc", 100);
    assert_eq!(p.text, "Use it to branch output.");
    assert_eq!((p.match_start, p.match_end), (NO_MATCH, NO_MATCH));
}

#[test]
fn test_multi_word_query_highlighted_as_phrase() {
    let p = preview("Templating Tags\nUse it to branch output.", "branch output", 100);
    assert_eq!(p.highlighted(), Some("branch output"));
}
