// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Section extraction: raw page text → ordered `Section`s.
//!
//! The rule is simple and the whole index depends on it:
//!
//! | Block          | Effect                                              |
//! |----------------|-----------------------------------------------------|
//! | `# h1`         | opens a section with no anchor (the page itself)    |
//! | `## h2`        | opens a section with a fresh anchor                 |
//! | `### h3` and up| appended to the open section's body                 |
//! | paragraph      | appended to the open section's body                 |
//!
//! Anything before the first heading has nowhere to go and is dropped.
//! All stored text is angle-bracket escaped; anchors are slugged from the
//! unescaped text so they match the ids the site renders.

mod slug;
mod tree;

pub use slug::{slugify, Slugger};
pub use tree::{flatten, parse, Block, Expression, Inline};

use crate::types::Section;
use crate::util::escape_angle_brackets;

/// Extract the sections of one document.
pub fn extract_sections(raw_text: &str) -> Vec<Section> {
    let mut visitor = SectionVisitor::new();
    for block in parse(raw_text) {
        visitor.visit(&block);
    }
    visitor.finish()
}

/// Folds blocks into sections. One per document: the slugger inside it is
/// what keeps anchors unique within a page.
#[derive(Debug, Default)]
pub struct SectionVisitor {
    slugger: Slugger,
    sections: Vec<Section>,
}

impl SectionVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(&mut self, block: &Block) {
        match block {
            Block::Heading { depth: 1, inlines } => {
                let text = flatten(inlines);
                self.sections
                    .push(Section::new(escape_angle_brackets(&text), None));
            }
            Block::Heading { depth: 2, inlines } => {
                let text = flatten(inlines);
                let anchor = self.slugger.slug(&text);
                self.sections
                    .push(Section::new(escape_angle_brackets(&text), anchor));
            }
            Block::Heading { inlines, .. } | Block::Paragraph { inlines } => {
                let text = flatten(inlines);
                if text.is_empty() {
                    return;
                }
                if let Some(section) = self.sections.last_mut() {
                    section.body.push(escape_angle_brackets(&text));
                }
            }
        }
    }

    pub fn finish(self) -> Vec<Section> {
        self.sections
    }
}
