//! SQLite backend core implementation.
//!
//! Contains the SqliteRegistry struct, connection setup and the transaction
//! helper every mutating operation goes through.

use super::schema;
use crate::storage::registry::Result;
use crate::storage::StorageError;
use rusqlite::{Connection, ErrorCode, Transaction, TransactionBehavior};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// How long a writer waits for another connection's write lock before
/// logging and waiting again
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// SQLite-backed model registry.
///
/// Mutations run in `BEGIN IMMEDIATE` transactions: the write lock is taken
/// before the first read, so archive-then-promote sequences on the same
/// database are serialized, across handles and processes alike. A contending
/// writer waits for the lock in busy-timeout slices until it is free.
#[derive(Debug)]
pub struct SqliteRegistry {
    pub(crate) path: String,
    conn: Mutex<Connection>,
}

impl SqliteRegistry {
    /// Open or create a SQLite database at the given path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file (use ":memory:" for in-memory)
    pub fn open<P: AsRef<Path>>(path: P) -> std::result::Result<Self, StorageError> {
        Self::open_with_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Open with an explicit busy timeout
    pub fn open_with_timeout<P: AsRef<Path>>(
        path: P,
        busy_timeout: Duration,
    ) -> std::result::Result<Self, StorageError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let conn = if path_str == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path.as_ref())?
        };

        conn.busy_timeout(busy_timeout)?;
        schema::init_schema(&conn)?;

        tracing::debug!(path = %path_str, "registry store opened");
        Ok(Self { path: path_str, conn: Mutex::new(conn) })
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> std::result::Result<Self, StorageError> {
        Self::open(":memory:")
    }

    /// Get the database path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Close the store, surfacing any error from the final flush
    pub fn close(self) -> std::result::Result<(), StorageError> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|e| StorageError::Backend(format!("Failed to acquire connection lock: {e}")))?;
        conn.close().map_err(|(_, e)| StorageError::Sqlite(e))?;
        tracing::debug!(path = %self.path, "registry store closed");
        Ok(())
    }

    pub(crate) fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            StorageError::Backend(format!("Failed to acquire connection lock: {e}")).into()
        })
    }

    /// Run `f` in an immediate transaction; commit on `Ok`, roll back on `Err`.
    ///
    /// Never fails with `SQLITE_BUSY`: while another connection holds the
    /// write lock, the begin is retried after each busy-timeout wait.
    pub(crate) fn write_tx<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.lock_conn()?;
        let mut waits = 0u32;
        let tx = loop {
            match conn.transaction_with_behavior(TransactionBehavior::Immediate) {
                Ok(tx) => break tx,
                Err(e) if is_busy(&e) => {
                    waits += 1;
                    tracing::debug!(path = %self.path, waits, "write lock held elsewhere, still waiting");
                }
                Err(e) => return Err(e.into()),
            }
        };
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

fn is_busy(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == ErrorCode::DatabaseBusy
    )
}
