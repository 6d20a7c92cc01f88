//! OCR Text Extraction
//!
//! Extracts text from image files by running the `tesseract` CLI.
//! Output is normalized so that whitespace-only results count as "no text".

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Result, SearchError};

/// Anything that can turn an image file into text. An empty string means the
/// image was read fine but contained no text.
pub trait TextExtractor {
    fn extract(&self, image: &Path) -> Result<String>;
}

pub struct TesseractExtractor {
    binary: String,
    language: Option<String>,
}

impl Default for TesseractExtractor {
    fn default() -> Self {
        Self::new("tesseract", None)
    }
}

impl TesseractExtractor {
    pub fn new(binary: impl Into<String>, language: Option<String>) -> Self {
        Self { binary: binary.into(), language }
    }

    fn command(&self, image: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg(image).arg("stdout");
        if let Some(lang) = &self.language {
            cmd.arg("-l").arg(lang);
        }
        cmd.stdin(Stdio::null());
        cmd
    }
}

impl TextExtractor for TesseractExtractor {
    fn extract(&self, image: &Path) -> Result<String> {
        if !image.is_file() {
            return Err(SearchError::extraction(image, "not a readable file"));
        }

        let output = self
            .command(image)
            .output()
            .map_err(|e| SearchError::extraction(image, format!("failed to run {}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SearchError::extraction(
                image,
                format!("{} exited with {}: {}", self.binary, output.status, stderr.trim()),
            ));
        }

        Ok(normalize_ocr_text(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Trim every line and drop blank ones (tesseract pads pages with form feeds).
pub fn normalize_ocr_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
