// FILE: src/storage/repository.rs
use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::{Result, SearchError};
use crate::storage::connection::open_connection;
use crate::storage::{IndexStore, IndexedFile};

/// SQLite-backed index. Owns the single connection for the process lifetime.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = open_connection(db_path)?;
        let store = Self { conn };
        store
            .initialize()
            .map_err(|e| SearchError::StorageInit(format!("Cannot create schema: {}", e)))?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(r#"
            CREATE TABLE IF NOT EXISTS scanned_files (
                id INTEGER PRIMARY KEY,
                path TEXT NOT NULL UNIQUE,
                fulltext TEXT
            );
        "#)?;
        tracing::debug!("[Store] Ensured scanned_files table");
        Ok(())
    }
}

impl IndexStore for SqliteStore {
    fn upsert(&mut self, path: &str, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(SearchError::EmptyText(path.to_string()));
        }
        self.conn.execute(
            "INSERT INTO scanned_files (path, fulltext)
             VALUES (?1, ?2)
             ON CONFLICT(path) DO UPDATE SET fulltext = excluded.fulltext",
            params![path, text],
        )?;
        tracing::debug!("[Store] Upserted {}", path);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<IndexedFile>> {
        let mut stmt = self.conn.prepare(
            "SELECT path, COALESCE(fulltext, '') FROM scanned_files ORDER BY path"
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(IndexedFile { path: row.get(0)?, fulltext: row.get(1)? })
        })?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    fn search(&self, query: &str) -> Result<Vec<String>> {
        // instr() keeps % and _ literal, and returns 1 for an empty needle.
        let mut stmt = self.conn.prepare(
            "SELECT path FROM scanned_files
             WHERE instr(fold_case(fulltext), fold_case(?1)) > 0
             ORDER BY path"
        )?;
        let rows = stmt.query_map(params![query], |row| row.get::<_, String>(0))?;

        let mut paths = Vec::new();
        for path in rows {
            paths.push(path?);
        }
        tracing::debug!("[Store] Search '{}' matched {} files", query, paths.len());
        Ok(paths)
    }

    fn len(&self) -> Result<u64> {
        Ok(self.conn.query_row("SELECT COUNT(*) FROM scanned_files", [], |row| row.get(0))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(&dir.path().join("index.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_upsert_overwrites_in_place() {
        let (_dir, mut store) = open_temp();
        store.upsert("a.jpg", "Invoice #123").unwrap();
        store.upsert("a.jpg", "Invoice #999").unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(
            store.list_all().unwrap(),
            vec![IndexedFile { path: "a.jpg".into(), fulltext: "Invoice #999".into() }]
        );
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let (_dir, mut store) = open_temp();
        store.upsert("a.jpg", "same").unwrap();
        let before = store.list_all().unwrap();
        store.upsert("a.jpg", "same").unwrap();

        assert_eq!(store.list_all().unwrap(), before);
    }

    #[test]
    fn test_search_ignores_case() {
        let (_dir, mut store) = open_temp();
        store.upsert("a.jpg", "Invoice #123").unwrap();
        store.upsert("b.png", "Grocery list").unwrap();

        assert_eq!(store.search("INVOICE").unwrap(), vec!["a.jpg"]);
        assert_eq!(store.search("invoice #1").unwrap(), vec!["a.jpg"]);
        assert!(store.search("xyz").unwrap().is_empty());
    }

    #[test]
    fn test_search_treats_like_wildcards_literally() {
        let (_dir, mut store) = open_temp();
        store.upsert("a.jpg", "100% done").unwrap();
        store.upsert("b.jpg", "1000 done").unwrap();
        store.upsert("c.jpg", "snake_case").unwrap();
        store.upsert("d.jpg", "snakeXcase").unwrap();

        assert_eq!(store.search("0%").unwrap(), vec!["a.jpg"]);
        assert_eq!(store.search("e_c").unwrap(), vec!["c.jpg"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let (_dir, mut store) = open_temp();
        store.upsert("b.png", "two").unwrap();
        store.upsert("a.jpg", "one").unwrap();

        assert_eq!(store.search("").unwrap(), vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("index.db");
        {
            let mut store = SqliteStore::open(&db_path).unwrap();
            store.upsert("scan/receipt.png", "Total 42").unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(
            store.list_all().unwrap(),
            vec![IndexedFile { path: "scan/receipt.png".into(), fulltext: "Total 42".into() }]
        );
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let (_dir, mut store) = open_temp();
        store.upsert("kept.jpg", "Invoice #123").unwrap();

        for text in ["", "  \n\t "] {
            let err = store.upsert("e.jpg", text).unwrap_err();
            assert!(matches!(err, SearchError::EmptyText(ref p) if p == "e.jpg"));
        }
        let err = store.upsert("kept.jpg", "").unwrap_err();
        assert!(matches!(err, SearchError::EmptyText(_)));

        assert_eq!(
            store.list_all().unwrap(),
            vec![IndexedFile { path: "kept.jpg".into(), fulltext: "Invoice #123".into() }]
        );
    }

    #[test]
    fn test_rows_with_null_text_never_match() {
        let (_dir, store) = open_temp();
        store.conn
            .execute("INSERT INTO scanned_files (path, fulltext) VALUES ('legacy.jpg', NULL)", [])
            .unwrap();

        assert!(store.search("anything").unwrap().is_empty());
        assert_eq!(store.list_all().unwrap()[0].fulltext, "");
    }
}
