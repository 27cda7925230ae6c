//! Database access for moonlog
//!
//! Connection-per-operation wrapper over SQLite. Every store call acquires
//! its own connection and releases it when the call returns; no connection
//! is held across operations or across a user prompt.

mod schema;
pub mod seed;

pub use schema::init_schema;

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle describing where the database lives.
///
/// Stores keep a reference to this and call [`Database::connection`] once
/// per operation. The in-memory variant names a shared-cache database and
/// holds one keeper connection open so the per-operation connections all
/// see the same data.
pub struct Database {
    uri: String,
    keeper: Option<Connection>,
}

impl Database {
    /// Open a file-backed database from a connection URL.
    ///
    /// Accepts `sqlite:path`, `sqlite://path`, or a bare filesystem path.
    /// Fails here rather than on the first menu action if the file cannot
    /// be opened.
    pub fn open(url: &str) -> Result<Self> {
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);

        let db = Self {
            uri: path.to_string(),
            keeper: None,
        };
        db.connection()?;
        Ok(db)
    }

    /// Create a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        // Unique name per handle so parallel tests don't share state.
        static NEXT: AtomicU64 = AtomicU64::new(0);
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        let uri = format!("file:moonlog-mem-{n}?mode=memory&cache=shared");

        let keeper = Connection::open_with_flags(&uri, Self::uri_flags())
            .context("Failed to create in-memory database")?;

        Ok(Self {
            uri,
            keeper: Some(keeper),
        })
    }

    /// Acquire a connection for a single operation.
    pub fn connection(&self) -> Result<Connection> {
        let conn = if self.keeper.is_some() {
            Connection::open_with_flags(&self.uri, Self::uri_flags())
        } else {
            Connection::open(&self.uri)
        };
        conn.with_context(|| format!("Failed to open database at {}", self.uri))
    }

    fn uri_flags() -> OpenFlags {
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
    }
}
