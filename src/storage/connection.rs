//! Database connection setup
//!
//! Opens the index database once per process: creates the data directory,
//! applies pragmas and registers the SQL helpers the repository relies on.

use std::path::Path;

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

use crate::error::{Result, SearchError};

/// SQL name of the Unicode-aware lowercase function. Builtin `lower()` only
/// folds ASCII.
pub const FOLD_CASE_FN: &str = "fold_case";

/// Open (creating if absent) the database at `db_path`.
///
/// Every failure along the way is reported as `StorageInit`.
pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let db_dir = db_path
        .parent()
        .ok_or_else(|| SearchError::StorageInit(format!("Invalid database path: {}", db_path.display())))?;

    if !db_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(db_dir).map_err(|e| {
            SearchError::StorageInit(format!("Cannot create {}: {}", db_dir.display(), e))
        })?;
    }

    let conn = Connection::open(db_path)
        .map_err(|e| SearchError::StorageInit(format!("Cannot open {}: {}", db_path.display(), e)))?;

    configure(&conn)
        .map_err(|e| SearchError::StorageInit(format!("Cannot configure {}: {}", db_path.display(), e)))?;

    tracing::info!("[Store] Database opened at: {}", db_path.display());
    Ok(conn)
}

fn configure(conn: &Connection) -> rusqlite::Result<()> {
    let mode: String = conn.pragma_update_and_check(None, "journal_mode", WAL, |row| row.get(0))?;
    tracing::debug!("[Store] journal_mode = {}", mode);
    conn.pragma_update(None, "synchronous", NORMAL)?;

    conn.create_scalar_function(
        FOLD_CASE_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )?;

    Ok(())
}

// SQL pragma constants
const WAL: &str = "WAL";
const NORMAL: &str = "NORMAL";
