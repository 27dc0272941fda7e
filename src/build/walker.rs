// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content discovery: which files are pages, and what URL each one gets.
//!
//! The layout follows file-system routing. `guide/setup/page.mdx` serves
//! `/guide/setup`, a root `page.mdx` serves `/`, and any other `*.mdx`
//! file serves its path minus the extension.

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// How pages are laid out under the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLayout {
    /// Extension of content files, without the dot.
    pub extension: String,
    /// File name that stands for its directory (e.g. `page.mdx`).
    pub page_file: String,
}

impl Default for ContentLayout {
    fn default() -> Self {
        Self {
            extension: "mdx".to_string(),
            page_file: "page.mdx".to_string(),
        }
    }
}

/// A content file found under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Root-relative path with `/` separators. Stable cache key.
    pub relative: String,
    pub url: String,
}

/// Find every content file under `root`, sorted by path.
///
/// No depth limit. Unreadable directory entries are fatal: an index that
/// silently misses a subtree is worse than a failed build.
pub fn walk_content(root: &Path, layout: &ContentLayout) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(Error::ContentRoot {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
            Error::ReadDocument {
                path,
                source: e.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(layout.extension.as_str()) {
            continue;
        }
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        let relative = relative_string(rel);
        let url = url_for(&relative, layout);
        files.push(SourceFile {
            path: path.to_path_buf(),
            relative,
            url,
        });
    }

    tracing::debug!(root = %root.display(), count = files.len(), "discovered content files");
    Ok(files)
}

fn relative_string(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// URL of a root-relative content path.
///
/// ```
/// use docsift::build::{url_for, ContentLayout};
///
/// let layout = ContentLayout::default();
/// assert_eq!(url_for("page.mdx", &layout), "/");
/// assert_eq!(url_for("templating-tags/page.mdx", &layout), "/templating-tags");
/// assert_eq!(url_for("guide/intro.mdx", &layout), "/guide/intro");
/// ```
pub fn url_for(relative: &str, layout: &ContentLayout) -> String {
    let stripped = if relative == layout.page_file {
        ""
    } else if let Some(dir) = relative
        .strip_suffix(layout.page_file.as_str())
        .and_then(|rest| rest.strip_suffix('/'))
    {
        dir
    } else {
        relative
            .strip_suffix(layout.extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(relative)
    };
    format!("/{}", stripped)
}
