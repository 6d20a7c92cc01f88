// FILE: src/engine/searcher.rs
use std::path::Path;

use crate::error::Result;
use crate::opener::FileOpener;
use crate::storage::IndexStore;

pub struct Searcher;

impl Searcher {
    /// Open the first file whose text matches `query`.
    /// Returns the opened path, or `None` without touching the opener.
    pub fn pluck(store: &dyn IndexStore, opener: &dyn FileOpener, query: &str) -> Result<Option<String>> {
        let first = store.search(query)?.into_iter().next();

        match &first {
            Some(path) => {
                tracing::info!("[Searcher] Opening {}", path);
                opener.open(Path::new(path));
            }
            None => tracing::info!("[Searcher] Nothing matches '{}'", query),
        }

        Ok(first)
    }
}
