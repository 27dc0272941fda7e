//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use docsift::build::{run_build, BuildConfig, BuildOptions, BuildReport};
use docsift::{SearchIndex, SearchOptions, SearchResult, Searcher};
use tempfile::TempDir;

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{make_document, make_section, sample_index, write_content_tree};

// ============================================================================
// CONTENT FIXTURES
// ============================================================================

pub const HOME_PAGE: &str = "\
---
title: Home
---

# Templater

Templater is a template language for your notes.
";

pub const TAGS_PAGE: &str = "\
import { Callout } from '@/components/Callout'

export const metadata = { title: 'Templating Tags' }

# Templating Tags

Tags are the building blocks of every template.

## Conditional Tags

Use `<% if %>` to branch output.

<Callout type=\"note\">
Conditionals can be nested.
</Callout>

## Loop Tags

### Arrays

Repeat a block for every item in {props.items}.
";

pub const FAQ_PAGE: &str = "\
# Frequently Asked Questions

<FAQ items={faqData} />
";

pub const FAQ_RECORDS: &str = r#"[
  {"id": "copying-a-template", "question": "How do I copy/paste a template?", "answer": "There are three ways..."},
  {"id": "", "question": "Broken record", "answer": "No id."}
]"#;

pub const FAQ_URL: &str = "/debugging/frequently-asked-questions";

/// A content tree with a home page, a tags page, and an FAQ page.
pub fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_content_tree(
        dir.path(),
        &[
            ("page.mdx", HOME_PAGE),
            ("templating-tags/page.mdx", TAGS_PAGE),
            ("debugging/frequently-asked-questions/page.mdx", FAQ_PAGE),
        ],
    )
    .unwrap();
    dir
}

/// A config binding the FAQ page to `faq.json`, written next to it.
pub fn faq_config(dir: &Path) -> BuildConfig {
    fs::write(dir.join("faq.json"), FAQ_RECORDS).unwrap();
    let config_path = dir.join("docsift.json");
    fs::write(
        &config_path,
        format!(
            r#"{{"auxiliary": [{{"page": "{}", "source": "faq.json"}}]}}"#,
            FAQ_URL
        ),
    )
    .unwrap();
    BuildConfig::load(&config_path).unwrap()
}

/// Build `content` into `out` with the given config.
pub fn build(content: &Path, out: &Path, config: BuildConfig) -> BuildReport {
    let options =
        BuildOptions::new(config, Some(content.to_path_buf()), out.to_path_buf()).unwrap();
    run_build(&options).unwrap()
}

/// Build the standard site (with FAQ records) and load the result.
pub fn built_site_index() -> SearchIndex {
    let content = site();
    let out = TempDir::new().unwrap();
    let config = faq_config(content.path());
    let report = build(content.path(), out.path(), config);
    SearchIndex::read(&report.files.stable).unwrap()
}

pub fn search(index: &SearchIndex, query: &str) -> Vec<SearchResult> {
    Searcher::new(index).search(query, &SearchOptions::default())
}

pub fn urls(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.url.as_str()).collect()
}
