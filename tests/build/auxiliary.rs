//! Auxiliary question/answer content merged at build time.

use docsift::build::auxiliary::{AuxiliaryMerger, DEFAULT_CATCH_ALL_BODY, DEFAULT_CATCH_ALL_TITLE};
use docsift::build::AuxiliaryBinding;
use docsift::extract_sections;
use std::fs;
use tempfile::TempDir;

use crate::common::{FAQ_PAGE, FAQ_RECORDS, FAQ_URL};

fn merger_with(records: &str) -> (TempDir, AuxiliaryMerger) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("faq.json"), records).unwrap();
    let merger = AuxiliaryMerger::load(&[AuxiliaryBinding::new(FAQ_URL, "faq.json")], dir.path());
    (dir, merger)
}

#[test]
fn test_faq_sections_after_page_sections() {
    let (_dir, merger) = merger_with(FAQ_RECORDS);
    let sections = merger.apply(FAQ_URL, extract_sections(FAQ_PAGE));

    let anchors: Vec<Option<&str>> = sections.iter().map(|s| s.anchor.as_deref()).collect();
    // page title, one valid record (the id-less one is skipped), catch-all
    assert_eq!(anchors, vec![None, Some("copying-a-template"), None]);
    assert_eq!(sections[1].title, "How do I copy/paste a template?");
    assert_eq!(sections[2].title, DEFAULT_CATCH_ALL_TITLE);
    assert_eq!(sections[2].body, vec![DEFAULT_CATCH_ALL_BODY]);
}

#[test]
fn test_unparsable_source_still_adds_catch_all() {
    let (_dir, merger) = merger_with("export const faqData = [");
    let sections = merger.apply(FAQ_URL, extract_sections(FAQ_PAGE));
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1].title, DEFAULT_CATCH_ALL_TITLE);
}

#[test]
fn test_custom_catch_all() {
    let mut binding = AuxiliaryBinding::new(FAQ_URL, "unused.json");
    binding.catch_all_title = "Help".to_string();
    binding.catch_all_body = "Common questions".to_string();
    let merger = AuxiliaryMerger::from_records(vec![(binding, vec![])]);
    let sections = merger.apply(FAQ_URL, vec![]);
    assert_eq!(sections[0].title, "Help");
    assert_eq!(sections[0].body, vec!["Common questions"]);
}
