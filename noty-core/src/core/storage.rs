//! String key/value store backing the page index.
//!
//! [`Storage`] behaves like browser local storage: string keys map to string
//! values, `set_item` overwrites, and missing keys read as `None`. The data
//! lives in a single SQLite file.

use crate::{NotyError, Result};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Creates (or initialises) a store at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    /// Opens an existing store at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NotyError::InvalidStore`] if the file does not contain the
    /// expected tables, or [`NotyError::Database`] if it is not SQLite at all.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        let table_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type='table'
             AND name IN ('local_storage', 'storage_meta')",
            [],
            |row| row.get(0),
        )?;

        if table_count != 2 {
            return Err(NotyError::InvalidStore(
                "Not a valid Noty store".to_string(),
            ));
        }

        Ok(Self { conn })
    }

    /// Opens the store at `path`, creating it first if the file does not exist.
    pub fn open_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            log::info!("creating new store at {}", path.display());
            Self::create(path)
        }
    }

    /// A transient store that disappears when dropped.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?", [key])?;
        Ok(())
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM local_storage ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM local_storage", [])?;
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
