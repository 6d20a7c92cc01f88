// FILE: src/storage/mod.rs
pub mod connection;
pub mod memory;
pub mod repository;

use serde::Serialize;

use crate::error::Result;

// Common exports
pub use connection::open_connection;
pub use memory::MemoryStore;
pub use repository::SqliteStore;

/// One indexed image: the path it was scanned at and the text OCR found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedFile {
    pub path: String,
    pub fulltext: String,
}

/// Durable mapping from path to extracted text.
///
/// Paths are unique: `upsert` replaces the text of an existing entry instead of
/// adding a second one. Empty or whitespace-only text is refused with
/// `EmptyText`. Every call goes straight to the backing store.
pub trait IndexStore {
    fn upsert(&mut self, path: &str, text: &str) -> Result<()>;

    fn list_all(&self) -> Result<Vec<IndexedFile>>;

    /// Paths whose text contains `query`, ignoring case. An empty query matches
    /// every entry.
    fn search(&self, query: &str) -> Result<Vec<String>>;

    fn len(&self) -> Result<u64>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
