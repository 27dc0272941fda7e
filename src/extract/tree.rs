// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! MDX source → a small closed tree of blocks.
//!
//! pulldown-cmark does the CommonMark parsing. On top of it this module
//! handles the three MDX-isms the indexer cares about:
//!
//! - ESM lines (`import`/`export`) are removed before parsing. An ESM block
//!   runs until the next blank line, same as in MDX.
//! - JSX tags are dropped and their text children kept. A flow-level JSX
//!   block is treated as a paragraph of whatever text is left.
//! - `{...}` spans become `Inline::Expression`. Object literals (`{{ a: 1 }}`)
//!   are tagged as such so flattening can leave them out.
//!
//! Code blocks and frontmatter never produce blocks.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// A block the section extractor cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { depth: u8, inlines: Vec<Inline> },
    Paragraph { inlines: Vec<Inline> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Expression(Expression),
}

/// An MDX `{...}` span, carrying the source between the outer braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Structured data, e.g. `{{ title: 'x' }}`. Never prose.
    Object(String),
    /// Any other expression. Flattens to its source text.
    Value(String),
}

impl Expression {
    fn classify(source: String) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with('{') && trimmed.ends_with('}') {
            Expression::Object(source)
        } else {
            Expression::Value(source)
        }
    }
}

/// Plain text of a run of inlines, with object expressions excluded.
pub fn flatten(inlines: &[Inline]) -> String {
    let mut text = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) => text.push_str(t),
            Inline::Expression(Expression::Value(source)) => text.push_str(source.trim()),
            Inline::Expression(Expression::Object(_)) => {}
        }
    }
    text.trim().to_string()
}

/// Parse MDX source into blocks, in document order.
pub fn parse(source: &str) -> Vec<Block> {
    let markdown = strip_esm(source);
    let mut options = Options::empty();
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(&markdown, options) {
        builder.push(event);
    }
    builder.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenKind {
    Heading(u8),
    Paragraph,
    /// Text directly inside a tight list item.
    ImplicitParagraph,
}

#[derive(Default)]
struct TreeBuilder {
    blocks: Vec<Block>,
    open: Option<(OpenKind, InlineScanner)>,
    code_depth: usize,
    metadata_depth: usize,
    html_block: Option<String>,
}

impl TreeBuilder {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if let Some(html) = self.html_block.as_mut() {
                    html.push_str(&text);
                } else if self.code_depth == 0 && self.metadata_depth == 0 {
                    self.scanner().push_text(&text);
                }
            }
            Event::Code(code) => self.scanner().push_code(&code),
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, scanner)) = self.open.as_mut() {
                    scanner.push_text("\n");
                }
            }
            Event::Html(html) => match self.html_block.as_mut() {
                Some(buffer) => buffer.push_str(&html),
                None => self.html_block = Some(html.into_string()),
            },
            // Inline JSX/HTML tags: drop the tag, the text children arrive as Text.
            Event::InlineHtml(_) => {}
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.close_implicit();
                self.open = Some((OpenKind::Heading(level as u8), InlineScanner::default()));
            }
            Tag::Paragraph => {
                self.close_implicit();
                self.open = Some((OpenKind::Paragraph, InlineScanner::default()));
            }
            Tag::Item => self.close_implicit(),
            Tag::CodeBlock(_) => {
                self.close_implicit();
                self.code_depth += 1;
            }
            Tag::MetadataBlock(_) => self.metadata_depth += 1,
            Tag::HtmlBlock => {
                self.close_implicit();
                self.html_block = Some(String::new());
            }
            Tag::List(_) | Tag::BlockQuote(_) => self.close_implicit(),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) | TagEnd::Paragraph => self.close(),
            TagEnd::Item => self.close_implicit(),
            TagEnd::CodeBlock => self.code_depth = self.code_depth.saturating_sub(1),
            TagEnd::MetadataBlock(_) => self.metadata_depth = self.metadata_depth.saturating_sub(1),
            TagEnd::HtmlBlock => {
                if let Some(html) = self.html_block.take() {
                    let mut scanner = InlineScanner::default();
                    scanner.push_text(&strip_tags(&html));
                    let inlines = scanner.finish();
                    if !flatten(&inlines).is_empty() {
                        self.blocks.push(Block::Paragraph { inlines });
                    }
                }
            }
            _ => {}
        }
    }

    /// The scanner of the open block. Text with no block open (tight list
    /// items) gets an implicit paragraph.
    fn scanner(&mut self) -> &mut InlineScanner {
        let (_, scanner) = self
            .open
            .get_or_insert_with(|| (OpenKind::ImplicitParagraph, InlineScanner::default()));
        scanner
    }

    fn close_implicit(&mut self) {
        if matches!(self.open, Some((OpenKind::ImplicitParagraph, _))) {
            self.close();
        }
    }

    fn close(&mut self) {
        let Some((kind, scanner)) = self.open.take() else {
            return;
        };
        let inlines = scanner.finish();
        match kind {
            OpenKind::Heading(depth) => self.blocks.push(Block::Heading { depth, inlines }),
            OpenKind::Paragraph | OpenKind::ImplicitParagraph => {
                if !flatten(&inlines).is_empty() {
                    self.blocks.push(Block::Paragraph { inlines });
                }
            }
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close();
        self.blocks
    }
}

/// Splits text into plain runs and balanced `{...}` expressions.
///
/// State persists across pushes because pulldown-cmark may split one
/// expression over several Text events.
#[derive(Default)]
struct InlineScanner {
    inlines: Vec<Inline>,
    text: String,
    expression: String,
    depth: usize,
}

impl InlineScanner {
    fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            match (c, self.depth) {
                ('{', 0) => {
                    self.flush_text();
                    self.depth = 1;
                }
                ('{', _) => {
                    self.depth += 1;
                    self.expression.push(c);
                }
                ('}', 1) => {
                    self.depth = 0;
                    let source = std::mem::take(&mut self.expression);
                    self.inlines
                        .push(Inline::Expression(Expression::classify(source)));
                }
                ('}', d) if d > 1 => {
                    self.depth -= 1;
                    self.expression.push(c);
                }
                (_, 0) => self.text.push(c),
                _ => self.expression.push(c),
            }
        }
    }

    /// Inline code is literal: braces inside it are not expressions.
    fn push_code(&mut self, code: &str) {
        if self.depth > 0 {
            self.expression.push_str(code);
        } else {
            self.text.push_str(code);
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.inlines.push(Inline::Text(std::mem::take(&mut self.text)));
        }
    }

    fn finish(mut self) -> Vec<Inline> {
        if self.depth > 0 {
            // Unbalanced: give the brace back as text.
            self.text.push('{');
            self.text.push_str(&self.expression);
        }
        self.flush_text();
        self.inlines
    }
}

/// Remove ESM statements (`import`/`export` blocks) outside code fences.
fn strip_esm(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut fence: Option<&str> = None;
    let mut in_esm = false;
    // ESM is only recognized where a new block may begin, never on a
    // paragraph continuation line.
    let mut block_start = true;

    for line in source.lines() {
        let trimmed = line.trim_start();
        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
                block_start = true;
            }
        } else if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            fence = Some(&trimmed[..3]);
        } else if in_esm {
            if line.trim().is_empty() {
                in_esm = false;
                block_start = true;
            }
            continue;
        } else if block_start && (line.starts_with("import ") || line.starts_with("export ")) {
            in_esm = true;
            continue;
        } else {
            block_start = ends_block(line);
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Does the line leave the next one at the start of a new block?
fn ends_block(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || (trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-'))
        || (trimmed.len() >= 3 && trimmed.chars().all(|c| c == '='))
}

/// Drop HTML comments and tags, keep the text between them.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open..];
        let close = if after.starts_with("<!--") {
            after.find("-->").map(|i| i + 3)
        } else {
            after.find('>').map(|i| i + 1)
        };
        match close {
            Some(len) => {
                out.push(' ');
                rest = &after[len..];
            }
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
