//! Configuration loader
//!
//! Merges built-in defaults, `<config_dir>/image-search/config.toml` and
//! `IMAGE_SEARCH_*` environment variables (highest priority) with Figment.
//! The resulting [`Config`] is handed explicitly to the store, the scanner and
//! the collaborators; nothing reads it from global state afterwards.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

pub const APP_NAME: &str = "image-search";
pub const ENV_PREFIX: &str = "IMAGE_SEARCH_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the index database
    pub data_dir: PathBuf,
    pub db_filename: String,
    /// Allow-listed image extensions, with or without a leading dot
    pub extensions: Vec<String>,
    pub ocr_binary: String,
    pub ocr_language: Option<String>,
    /// Overrides the platform default opener command
    pub opener: Option<String>,
    /// Root scanned by `index` when no path is given
    pub sample_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local/share")
        });

        Self {
            data_dir: base.join(APP_NAME),
            db_filename: "index.db".to_string(),
            extensions: vec!["jpg".to_string(), "png".to_string()],
            ocr_binary: "tesseract".to_string(),
            ocr_language: None,
            opener: None,
            sample_root: PathBuf::from("samples"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(config_dir) = dirs::config_dir() {
            figment = figment.merge(Toml::file(config_dir.join(APP_NAME).join("config.toml")));
        }
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment
            .extract()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        if config.db_filename.trim().is_empty() {
            return Err(SearchError::Config("db_filename must not be empty".into()));
        }
        if config.extensions.is_empty() {
            return Err(SearchError::Config("extensions allow-list is empty".into()));
        }

        Ok(config)
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_filename)
    }
}
