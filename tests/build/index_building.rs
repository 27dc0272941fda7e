//! Index construction and persistence.

use docsift::build::document_from_text;
use docsift::{Error, SearchIndex};

use crate::common::{make_document, make_section, TAGS_PAGE};

#[test]
fn test_entries_follow_document_then_section_order() {
    let index = SearchIndex::build(&[
        document_from_text("/templating-tags", TAGS_PAGE),
        document_from_text("/other", "# Other\n\n## Part\n"),
    ]);
    let keys: Vec<&str> = index.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "/templating-tags",
            "/templating-tags#conditional-tags",
            "/templating-tags#loop-tags",
            "/other",
            "/other#part",
        ]
    );
}

#[test]
fn test_page_title_only_on_anchored_entries() {
    let index = SearchIndex::build(&[document_from_text("/templating-tags", TAGS_PAGE)]);
    assert_eq!(index.entries[0].page_title, None);
    for entry in &index.entries[1..] {
        assert_eq!(entry.page_title.as_deref(), Some("Templating Tags"));
    }
}

#[test]
fn test_bad_entry_does_not_stop_build() {
    let index = SearchIndex::build(&[make_document(
        "/a",
        vec![
            make_section("A", None, &["fine"]),
            make_section("", Some("empty-title"), &["lost"]),
            make_section("B", Some("b"), &["kept"]),
        ],
    )]);
    assert_eq!(index.len(), 2);
    assert_eq!(index.entries[1].key, "/a#b");
}

#[test]
fn test_persisted_index_loads_identically() {
    let index = SearchIndex::build(&[document_from_text("/templating-tags", TAGS_PAGE)]);
    let dir = tempfile::tempdir().unwrap();
    let files = index.write(dir.path()).unwrap();
    assert_eq!(SearchIndex::read(&files.hashed).unwrap(), index);
    assert_eq!(SearchIndex::read(&files.stable).unwrap(), index);
}

#[test]
fn test_hash_changes_with_content() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let a = SearchIndex::build(&[document_from_text("/a", "# A\n")]).write(dir_a.path()).unwrap();
    let b = SearchIndex::build(&[document_from_text("/a", "# B\n")]).write(dir_b.path()).unwrap();
    assert_ne!(a.hashed.file_name(), b.hashed.file_name());
}

#[test]
fn test_truncated_file_is_corrupt() {
    let index = SearchIndex::build(&[document_from_text("/templating-tags", TAGS_PAGE)]);
    let bytes = index.to_json().unwrap();
    let err = SearchIndex::from_json(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, Error::CorruptIndex(_)));
}
