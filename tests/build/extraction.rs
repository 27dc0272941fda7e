//! Section extraction from realistic MDX pages.

use docsift::extract_sections;

use crate::common::{FAQ_PAGE, HOME_PAGE, TAGS_PAGE};

#[test]
fn test_frontmatter_is_not_a_heading() {
    let sections = extract_sections(HOME_PAGE);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Templater");
    assert_eq!(sections[0].anchor, None);
    assert_eq!(
        sections[0].body,
        vec!["Templater is a template language for your notes."]
    );
}

#[test]
fn test_tags_page_sections() {
    let sections = extract_sections(TAGS_PAGE);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Templating Tags", "Conditional Tags", "Loop Tags"]);

    let anchors: Vec<Option<&str>> = sections.iter().map(|s| s.anchor.as_deref()).collect();
    assert_eq!(anchors, vec![None, Some("conditional-tags"), Some("loop-tags")]);

    assert_eq!(sections[1].body[0], "Use &lt;% if %&gt; to branch output.");
    assert_eq!(sections[1].body[1], "Conditionals can be nested.");
    // h3 is folded into the body of the open h2
    assert_eq!(sections[2].body[0], "Arrays");
}

#[test]
fn test_esm_never_leaks_into_text() {
    let sections = extract_sections(TAGS_PAGE);
    for section in &sections {
        for paragraph in &section.body {
            assert!(!paragraph.contains("import"), "{paragraph}");
            assert!(!paragraph.contains("metadata"), "{paragraph}");
        }
    }
}

#[test]
fn test_component_only_page_has_bare_title() {
    let sections = extract_sections(FAQ_PAGE);
    assert_eq!(sections.len(), 1);
    assert!(sections[0].body.is_empty());
}

#[test]
fn test_duplicate_headings_get_counters() {
    let sections = extract_sections("# P\n\n## Overview\n\na\n\n## Overview\n\nb\n\n## Overview\n\nc\n");
    let anchors: Vec<&str> = sections.iter().filter_map(|s| s.anchor.as_deref()).collect();
    assert_eq!(anchors, vec!["overview", "overview-2", "overview-3"]);
}

#[test]
fn test_headingless_document_is_empty() {
    assert!(extract_sections("Just some prose.\n\nAnd more.\n").is_empty());
    assert!(extract_sections("").is_empty());
}

#[test]
fn test_slugger_is_per_document() {
    let first = extract_sections("# A\n\n## Setup\n");
    let second = extract_sections("# B\n\n## Setup\n");
    assert_eq!(first[1].anchor, second[1].anchor);
}

#[test]
fn test_wrapped_line_starting_with_import_is_kept() {
    let sections = extract_sections(
        "# Page\n\nYou can\nimport templates from a folder.\nThen run them.\n\nNext paragraph.\n",
    );
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].body.len(), 2);
    assert!(sections[0].body[0].contains("import templates from a folder."));
    assert!(sections[0].body[0].ends_with("Then run them."));
    assert_eq!(sections[0].body[1], "Next paragraph.");
}
