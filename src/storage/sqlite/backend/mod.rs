//! SQLite backend for the model registry.
//!
//! Local-first storage using SQLite with WAL mode and foreign keys.

pub(crate) mod schema;
mod sqlite_backend;

pub use sqlite_backend::{SqliteRegistry, DEFAULT_BUSY_TIMEOUT};
