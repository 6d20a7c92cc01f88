//! In-memory index store
//!
//! Same contract as [`SqliteStore`](crate::storage::SqliteStore), backed by an
//! ordered map. Used by tests and by callers that want a throwaway index.

use std::collections::BTreeMap;

use crate::error::{Result, SearchError};
use crate::storage::{IndexStore, IndexedFile};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexStore for MemoryStore {
    fn upsert(&mut self, path: &str, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(SearchError::EmptyText(path.to_string()));
        }
        self.entries.insert(path.to_string(), text.to_string());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<IndexedFile>> {
        Ok(self
            .entries
            .iter()
            .map(|(path, fulltext)| IndexedFile { path: path.clone(), fulltext: fulltext.clone() })
            .collect())
    }

    fn search(&self, query: &str) -> Result<Vec<String>> {
        let needle = query.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|(_, text)| text.to_lowercase().contains(&needle))
            .map(|(path, _)| path.clone())
            .collect())
    }

    fn len(&self) -> Result<u64> {
        Ok(self.entries.len() as u64)
    }
}
