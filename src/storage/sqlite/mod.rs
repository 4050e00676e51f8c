//! SQLite Backend for the Model Registry
//!
//! Sovereign, local-first storage using SQLite with WAL mode.
//!
//! # Example
//!
//! ```ignore
//! use model_registry::storage::{ModelRegistry, NewModel, SqliteRegistry};
//!
//! let registry = SqliteRegistry::open("./registry.db")?;
//! let model = registry.create_model(NewModel::new("bert", "nlp"))?;
//! ```

mod backend;
mod models;
mod rows;
mod traits_impl;
mod versions;

pub use backend::{SqliteRegistry, DEFAULT_BUSY_TIMEOUT};
