//! image-search: OCR-backed full-text index over image files
//!
//! - Storage (path -> extracted text, SQLite or in-memory)
//! - Engine (directory scan + OCR, search/pluck)
//! - Opener (hands a match to the desktop's default app)

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod opener;
pub mod storage;

pub use config::Config;
pub use engine::{FileOutcome, ScanReport, Scanner, Searcher, TesseractExtractor, TextExtractor};
pub use error::{Result, SearchError};
pub use filter::ExtensionFilter;
pub use opener::{FileOpener, SystemOpener};
pub use storage::{IndexStore, IndexedFile, MemoryStore, SqliteStore};
