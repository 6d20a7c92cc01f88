//! The allow-list filter: decides which files are worth handing to OCR.
//!
//! Extensions are normalized once (leading dot stripped, lowercased) and
//! compared against the lowercase `Path::extension()`, so `IMG.JPG` passes
//! and `x.notjpg` does not.

use std::collections::BTreeSet;
use std::path::Path;

pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied())
    }
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.extensions.contains(&ext.to_lowercase()),
            None => false,
        }
    }
}
