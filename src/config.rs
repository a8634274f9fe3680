//! Project configuration (`icons.toml`).
//!
//! All fields are optional; a missing config file yields the defaults, so the
//! tool works out of the box when run from the project root.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Project-level configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconsConfig {
    /// Project root holding the `packages/` tree
    pub root: PathBuf,
    /// Default attribution for icons added without `--author`
    pub author: String,
    /// Default license recorded in new metadata
    pub license: String,
    /// Class prefix for the CSS target and generated markup
    pub class_prefix: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            author: "Contributor".to_string(),
            license: "MIT".to_string(),
            class_prefix: "ph-icon".to_string(),
        }
    }
}

impl IconsConfig {
    /// Load configuration from the given path, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config `{}`", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config `{}`", path.display()))?;
        Ok(config)
    }

    /// `packages/core/icons` - the canonical asset tree
    pub fn icons_dir(&self) -> PathBuf {
        self.root.join("packages").join("core").join("icons")
    }

    /// `docs/` - catalog dump directory
    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }
}
