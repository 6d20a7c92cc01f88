// FILE: src/engine/scanner.rs
use std::path::Path;

use walkdir::WalkDir;

use crate::engine::ocr::TextExtractor;
use crate::error::{Result, SearchError};
use crate::filter::ExtensionFilter;
use crate::storage::IndexStore;

/// What happened to a single accepted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Indexed,
    SkippedEmpty,
}

/// Tally of one scan. Every discovered regular file lands in exactly one of
/// the other four buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub discovered: usize,
    pub filtered_out: usize,
    pub indexed: usize,
    pub skipped_empty: usize,
    pub failed: usize,
}

pub struct Scanner<'a> {
    filter: &'a ExtensionFilter,
    extractor: &'a dyn TextExtractor,
    store: &'a mut dyn IndexStore,
}

impl<'a> Scanner<'a> {
    pub fn new(
        filter: &'a ExtensionFilter,
        extractor: &'a dyn TextExtractor,
        store: &'a mut dyn IndexStore,
    ) -> Self {
        Self { filter, extractor, store }
    }

    /// Walks `root` and indexes every allow-listed image under it.
    ///
    /// A file that OCR chokes on is logged and counted, the walk goes on.
    /// A failing store write ends the scan; entries committed before it stay.
    pub fn scan_folder(&mut self, root: &Path) -> Result<ScanReport> {
        let metadata = std::fs::metadata(root)
            .map_err(|e| SearchError::Traversal(format!("{}: {}", root.display(), e)))?;
        if !metadata.is_dir() {
            return Err(SearchError::Traversal(format!("{}: not a directory", root.display())));
        }

        tracing::info!("[Scanner] Scanning {}", root.display());
        let mut report = ScanReport::default();

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(SearchError::Traversal(format!("{}: {}", root.display(), e)));
                }
                Err(e) => {
                    tracing::warn!("[Scanner] Cannot read entry, skipping: {}", e);
                    continue;
                }
            };

            // is_file() follows a symlink for this entry only; the walk itself
            // never descends into linked directories.
            let path = entry.path();
            if !path.is_file() {
                if entry.path_is_symlink() {
                    tracing::debug!("[Scanner] Symlink does not resolve to a file, skipping: {}", path.display());
                }
                continue;
            }
            report.discovered += 1;

            if !self.filter.accepts(path) {
                tracing::trace!("[Scanner] Filtered out: {}", path.display());
                report.filtered_out += 1;
                continue;
            }

            match self.index_file(path) {
                Ok(FileOutcome::Indexed) => report.indexed += 1,
                Ok(FileOutcome::SkippedEmpty) => report.skipped_empty += 1,
                Err(SearchError::Extraction { path, reason }) => {
                    tracing::warn!("[Scanner] OCR failed for {}, skipping: {}", path, reason);
                    report.failed += 1;
                }
                Err(SearchError::InvalidPath(path)) => {
                    tracing::warn!("[Scanner] Path is not valid UTF-8, skipping: {}", path);
                    report.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "[Scanner] Done: {} files, {} indexed, {} without text, {} failed, {} filtered out",
            report.discovered,
            report.indexed,
            report.skipped_empty,
            report.failed,
            report.filtered_out
        );
        Ok(report)
    }

    /// OCR one file and commit the text, unless there is none.
    /// Paths that are not valid UTF-8 are refused rather than stored lossily.
    pub fn index_file(&mut self, path: &Path) -> Result<FileOutcome> {
        let path_str = path
            .to_str()
            .ok_or_else(|| SearchError::InvalidPath(path.to_string_lossy().to_string()))?;
        let fulltext = self.extractor.extract(path)?;

        if fulltext.trim().is_empty() {
            tracing::info!("No text found for {}", path_str);
            return Ok(FileOutcome::SkippedEmpty);
        }

        self.store.upsert(path_str, &fulltext)?;
        tracing::debug!("[Scanner] Indexed {}", path_str);
        Ok(FileOutcome::Indexed)
    }
}
