//! SQLite-backed key-value store.
//!
//! All values live in one table:
//! `kv(key TEXT PRIMARY KEY, value TEXT NOT NULL)`.
//!
//! rusqlite::Connection isn't Sync, so it sits behind a Mutex and every call
//! runs on the blocking thread pool.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::debug;
use rusqlite::{Connection, OptionalExtension, params};

use super::KeyValueStore;
use crate::error::StoreError;

/// SQLite file name used inside the data directory.
pub const DB_FILE_NAME: &str = "comprar.db";

pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Open or create the database at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let conn = tokio::task::spawn_blocking(move || -> Result<Connection, StoreError> {
            let conn = Connection::open(&path)?;
            Self::init_schema(&conn)?;
            debug!("SqliteStore opened at {}", path.display());
            Ok(conn)
        })
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))??;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|e| StoreError::Backend(e.to_string()))?;
            f(&guard).map_err(StoreError::from)
        })
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let key = key.to_string();
        self.with_conn(move |conn| {
            conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
                .optional()
        })
        .await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let key = key.to_string();
        let value = value.to_string();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map(|_| ())
        })
        .await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let key = key.to_string();
        self.with_conn(move |conn| conn.execute("DELETE FROM kv WHERE key = ?1", params![key]).map(|_| ()))
            .await
    }
}
