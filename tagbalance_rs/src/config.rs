//! Configuration file support for tagbalance.
//!
//! Loads optional `.tagscan/config.toml` from the working directory, or an
//! explicit path given with `--config`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::source::Window;
use crate::types::ColorMode;

pub const CONFIG_DIR: &str = ".tagscan";
pub const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TagscanConfig {
    /// Tag name used when `--token` is not given
    pub token: Option<String>,
    /// Color mode used when `--color` is not given
    pub color: Option<ColorMode>,
    /// Named line windows, e.g. one per `case` of a big switch
    pub windows: BTreeMap<String, NamedWindow>,
}

/// 1-based inclusive line range stored under a name.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NamedWindow {
    pub first: usize,
    pub last: usize,
}

impl TagscanConfig {
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load config from `.tagscan/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = Self::default_path(root);
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Every failure is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            windows = config.windows.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Resolve a named window to 0-based indices.
    pub fn window(&self, name: &str) -> Result<Window> {
        let named = self
            .windows
            .get(name)
            .ok_or_else(|| Error::UnknownWindow(name.to_string()))?;
        Window::from_line_numbers(named.first, named.last)
    }
}
