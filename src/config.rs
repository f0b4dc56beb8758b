//! User configuration for rendering.
//!
//! Every field has a default so an empty `{}` file (or no file at all) gives
//! the stock step documentation layout.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_DIR_NAME: &str = "stepdoc";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StepdocConfig {
    /// Language hint for opening code fences.
    pub fence_language: String,
    pub html: HtmlConfig,
    pub front_matter: FrontMatterConfig,
}

impl Default for StepdocConfig {
    fn default() -> Self {
        Self {
            fence_language: "shell".to_string(),
            html: HtmlConfig::default(),
            front_matter: FrontMatterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    pub title: String,
    pub stylesheet: String,
    pub wrapper_class: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title: "step command line documentation".to_string(),
            stylesheet: "/style.css".to_string(),
            wrapper_class: "wrapper markdown-body command".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrontMatterConfig {
    pub layout: String,
}

impl Default for FrontMatterConfig {
    fn default() -> Self {
        Self {
            layout: "auto-doc".to_string(),
        }
    }
}

/// `$XDG_CONFIG_HOME/stepdoc/config.json` (or the platform equivalent).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

pub fn load_config_file(path: &Path) -> Result<StepdocConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: StepdocConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    Ok(config)
}

/// Load the explicit config if given, else the default location if it
/// exists, else built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<StepdocConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    match default_config_path().filter(|path| path.is_file()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_config_file(&path)
        }
        None => Ok(StepdocConfig::default()),
    }
}
