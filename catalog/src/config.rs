//! Configuration file support.
//!
//! Loads optional `techmentorlab.toml` from the project root.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::SiteInfo;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "techmentorlab.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Branding overrides; unset keys keep the built-in text
    pub site: SiteInfo,
    /// Catalog file (JSON or TOML) replacing the built-in catalog
    pub catalog: Option<PathBuf>,
    /// Static build settings
    pub build: BuildConfig,
    /// Directory the config was loaded from; relative paths resolve here
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// Settings for `techmentorlab build`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory for the rendered site
    pub out_dir: PathBuf,
    /// Year in the footer; current year when unset
    pub copyright_year: Option<i32>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            copyright_year: None,
        }
    }
}

impl SiteConfig {
    /// Load config from `techmentorlab.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<SiteConfig>(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        };
        config.base_dir = path.parent().map(Path::to_path_buf);
        config
    }

    /// Catalog path resolved against the config file's directory.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let path = self.catalog.as_ref()?;
        match &self.base_dir {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.clone()),
        }
    }

    /// The configured catalog, or the built-in one.
    ///
    /// Unlike the config file itself, a configured catalog that fails to
    /// load is an error.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match self.catalog_path() {
            Some(path) => Catalog::load_from_path(&path),
            None => Ok(Catalog::builtin().clone()),
        }
    }
}
