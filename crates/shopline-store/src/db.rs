//! Database connection management
//!
//! Resolves connection strings and opens configured SQLite connections

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Where a connection string points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Private in-memory database, discarded when the connection closes
    Memory,
    /// Database file on disk
    File(PathBuf),
}

/// Resolve a connection string
///
/// Accepts `:memory:`, `sqlite::memory:`, `sqlite://<path>`, `sqlite:<path>`
/// or a bare file path.
pub fn parse_url(url: &str) -> Location {
    let url = url.trim();
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);

    if rest == ":memory:" {
        Location::Memory
    } else {
        Location::File(PathBuf::from(rest))
    }
}

/// Open a SQLite database from a connection string
///
/// Missing parent directories of a file database are created.
pub fn open_url(url: &str) -> Result<Connection> {
    match parse_url(url) {
        Location::Memory => open_in_memory(),
        Location::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
            }
            open(&path)
        }
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection
pub fn configure(conn: &Connection) -> Result<()> {
    // Foreign keys are off by default in SQLite and must be enabled per connection
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_forms() {
        assert_eq!(parse_url(":memory:"), Location::Memory);
        assert_eq!(parse_url("sqlite::memory:"), Location::Memory);
        assert_eq!(
            parse_url("sqlite://data/shop.db"),
            Location::File(PathBuf::from("data/shop.db"))
        );
        assert_eq!(
            parse_url("sqlite:shop.db"),
            Location::File(PathBuf::from("shop.db"))
        );
        assert_eq!(
            parse_url("/var/lib/shop.db"),
            Location::File(PathBuf::from("/var/lib/shop.db"))
        );
    }

    #[test]
    fn test_configure_enables_foreign_keys() {
        let conn = open_in_memory().unwrap();
        configure(&conn).unwrap();

        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_open_url_creates_parent_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("shop.db");

        let conn = open_url(path.to_str().unwrap()).unwrap();
        drop(conn);

        assert!(path.exists());
    }
}
