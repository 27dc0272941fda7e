//! End-to-end tests for the build workflow.

use docsift::build::{BuildConfig, BuildOptions, run_build};
use docsift::Error;
use std::fs;
use tempfile::TempDir;

use crate::common::{build, built_site_index, faq_config, search, site, urls, FAQ_URL};

#[test]
fn test_build_writes_hashed_and_stable_files() {
    let content = site();
    let out = TempDir::new().unwrap();
    let report = build(content.path(), out.path(), BuildConfig::default());

    assert_eq!(report.documents, 3);
    assert!(report.files.hashed.exists());
    assert!(out.path().join("search-index.json").exists());
    assert_eq!(
        fs::read(&report.files.hashed).unwrap(),
        fs::read(&report.files.stable).unwrap()
    );
}

#[test]
fn test_faq_record_is_queryable() {
    let index = built_site_index();
    let results = search(&index, "copy");
    assert!(
        urls(&results).contains(&"/debugging/frequently-asked-questions#copying-a-template"),
        "{:?}",
        urls(&results)
    );
}

#[test]
fn test_faq_page_reachable_by_catch_all() {
    let index = built_site_index();
    let results = search(&index, "faq");
    assert!(urls(&results).contains(&FAQ_URL));
}

#[test]
fn test_branch_query_deep_links() {
    let index = built_site_index();
    let results = search(&index, "branch");
    let hit = &results[0];
    assert_eq!(hit.url, "/templating-tags#conditional-tags");
    assert_eq!(hit.page_title.as_deref(), Some("Templating Tags"));
    assert!(!hit.is_title_match);
    assert!(hit.preview.as_ref().unwrap().text.contains("branch output"));
}

#[test]
fn test_cache_round_trip_gives_same_index() {
    let content = site();
    let cache_dir = TempDir::new().unwrap();
    let cache = cache_dir.path().join("sections.json");
    let config = faq_config(content.path());

    let run = |out: &TempDir| {
        let options = BuildOptions::new(config.clone(), Some(content.path().to_path_buf()), out.path().to_path_buf())
            .unwrap()
            .with_cache(Some(cache.clone()));
        run_build(&options).unwrap()
    };

    let out_a = TempDir::new().unwrap();
    let out_b = TempDir::new().unwrap();
    let first = run(&out_a);
    let second = run(&out_b);

    assert_eq!(first.cache_hits, 0);
    assert_eq!(second.cache_hits, 3);
    assert_eq!(
        fs::read(&first.files.stable).unwrap(),
        fs::read(&second.files.stable).unwrap()
    );
}

#[test]
fn test_unreadable_page_fails_build_with_path() {
    let content = site();
    let bad = content.path().join("broken.mdx");
    fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();
    let out = TempDir::new().unwrap();
    let options =
        BuildOptions::new(BuildConfig::default(), Some(content.path().to_path_buf()), out.path().to_path_buf())
            .unwrap();
    let err = run_build(&options).unwrap_err();
    assert!(matches!(err, Error::ReadDocument { .. }));
    assert!(err.to_string().contains("broken.mdx"));
}
