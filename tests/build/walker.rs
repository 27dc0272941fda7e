//! Content discovery and URL derivation.

use docsift::build::{walk_content, ContentLayout};
use docsift::Error;
use tempfile::TempDir;

use crate::common::write_content_tree;

#[test]
fn test_walk_finds_nested_pages_sorted() {
    let dir = TempDir::new().unwrap();
    write_content_tree(
        dir.path(),
        &[
            ("zeta/page.mdx", "# Z"),
            ("page.mdx", "# Root"),
            ("alpha/beta/gamma/page.mdx", "# Deep"),
            ("alpha/notes.mdx", "# Notes"),
            ("alpha/readme.md", "# Ignored"),
        ],
    )
    .unwrap();

    let files = walk_content(dir.path(), &ContentLayout::default()).unwrap();
    let urls: Vec<&str> = files.iter().map(|f| f.url.as_str()).collect();
    assert_eq!(urls, vec!["/alpha/beta/gamma", "/alpha/notes", "/", "/zeta"]);
}

#[test]
fn test_custom_layout() {
    let dir = TempDir::new().unwrap();
    write_content_tree(dir.path(), &[("guide/index.md", "# G"), ("guide/faq.md", "# F")]).unwrap();
    let layout = ContentLayout {
        extension: "md".to_string(),
        page_file: "index.md".to_string(),
    };
    let files = walk_content(dir.path(), &layout).unwrap();
    let urls: Vec<&str> = files.iter().map(|f| f.url.as_str()).collect();
    assert_eq!(urls, vec!["/guide/faq", "/guide"]);
}

#[test]
fn test_missing_root_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = walk_content(&dir.path().join("nope"), &ContentLayout::default()).unwrap_err();
    assert!(matches!(err, Error::ContentRoot { .. }));
}

#[test]
fn test_empty_root_is_fine() {
    let dir = TempDir::new().unwrap();
    assert!(walk_content(dir.path(), &ContentLayout::default()).unwrap().is_empty());
}
