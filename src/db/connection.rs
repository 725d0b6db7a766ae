use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::info;
use rusqlite::Connection;

use super::error::{PersistenceContext, StoreError, StoreResult};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".fruit-list";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "fruits.sqlite";

/// Open (or create) the SQLite file at `path` and make sure the `fruits` table
/// exists. Running this against an existing file keeps its rows, which is what
/// lets the list survive restarts.
pub fn open_store(path: &Path) -> StoreResult<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let conn = Connection::open(path).persist_context("open SQLite database")?;
    ensure_schema(&conn)?;
    info!("event=store_open path={}", path.display());
    Ok(conn)
}

/// Same schema as [`open_store`], backed by memory. Nothing outlives the
/// connection.
pub fn open_in_memory() -> StoreResult<Connection> {
    let conn = Connection::open_in_memory().persist_context("open in-memory database")?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Create the single table lazily. Names default to the empty string so a
/// row never carries a NULL name.
pub fn ensure_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS fruits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL DEFAULT ''
        )",
        [],
    )
    .persist_context("create fruits table")?;
    Ok(())
}

/// Directory under the user's home that holds the database and logs.
pub fn data_dir() -> StoreResult<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or(StoreError::HomeDirUnavailable)?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

/// Resolve the absolute path to the SQLite database inside the user's home.
pub fn default_db_path() -> StoreResult<PathBuf> {
    Ok(data_dir()?.join(DB_FILE_NAME))
}
