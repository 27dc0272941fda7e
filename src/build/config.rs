// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build configuration (`docsift.json`).
//!
//! Every field is optional. A missing config file is the same as `{}`.
//!
//! ```json
//! {
//!   "contentRoot": "src/app",
//!   "extension": "mdx",
//!   "pageFile": "page.mdx",
//!   "contextLength": 100,
//!   "auxiliary": [
//!     { "page": "/debugging/frequently-asked-questions", "source": "faq.json" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::auxiliary::AuxiliaryBinding;
use super::walker::ContentLayout;
use crate::error::{Error, Result};
use crate::search::DEFAULT_CONTEXT_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildConfig {
    #[serde(default)]
    pub content_root: Option<PathBuf>,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_page_file")]
    pub page_file: String,
    #[serde(default = "default_context_length")]
    pub context_length: usize,
    #[serde(default)]
    pub auxiliary: Vec<AuxiliaryBinding>,
    /// Directory relative paths resolve against. Set by `load`.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

fn default_extension() -> String {
    "mdx".to_string()
}

fn default_page_file() -> String {
    "page.mdx".to_string()
}

fn default_context_length() -> usize {
    DEFAULT_CONTEXT_LENGTH
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_root: None,
            extension: default_extension(),
            page_file: default_page_file(),
            context_length: default_context_length(),
            auxiliary: Vec::new(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl BuildConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self::from_json(&text, base_dir).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse config text. Relative paths resolve against `base_dir`.
    pub fn from_json(text: &str, base_dir: PathBuf) -> std::result::Result<Self, String> {
        let mut config: BuildConfig = serde_json::from_str(text).map_err(|e| e.to_string())?;
        config.base_dir = base_dir;
        config.validate()?;

        if let Some(root) = config.content_root.take() {
            config.content_root = Some(config.resolve(&root));
        }
        for binding in &mut config.auxiliary {
            binding.source = resolve_against(&config.base_dir, &binding.source);
        }
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err("extension must not be empty".to_string());
        }
        if self.page_file.contains(['/', '\\']) {
            return Err(format!("pageFile must be a file name, got {:?}", self.page_file));
        }
        if self.context_length == 0 {
            return Err("contextLength must be positive".to_string());
        }
        for binding in &self.auxiliary {
            if !binding.page.starts_with('/') {
                return Err(format!("auxiliary page {:?} must start with '/'", binding.page));
            }
        }
        Ok(())
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        resolve_against(&self.base_dir, path)
    }

    pub fn layout(&self) -> ContentLayout {
        ContentLayout {
            extension: self.extension.trim_start_matches('.').to_string(),
            page_file: self.page_file.clone(),
        }
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
