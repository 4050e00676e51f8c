//! Model registry
//!
//! A catalog of machine-learning models and their versions. Each version
//! moves through a `staging` / `production` / `archived` lifecycle, and a
//! model never has more than one production version: promoting a version to
//! production archives the previous one atomically.
//!
//! Two backends implement [`ModelRegistry`]: [`SqliteRegistry`] persists to a
//! SQLite file, [`InMemoryRegistry`] keeps everything behind a lock.
//!
//! ```no_run
//! use model_registry::{ModelRegistry, ModelStage, NewModel, NewVersion, SqliteRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SqliteRegistry::open("registry.db")?;
//! let bert = registry.create_model(NewModel::new("bert", "nlp").with_tag("transformer"))?;
//! let v1 = registry.create_version(bert.id, NewVersion::new("v1", "s3://models/bert/v1"))?;
//! registry.promote_version(v1.id, ModelStage::Production)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod storage;

pub use config::RegistryConfig;
pub use storage::{
    InMemoryRegistry, Metrics, Model, ModelKey, ModelPage, ModelQuery, ModelRegistry, ModelStage,
    ModelUpdate, ModelVersion, NewModel, NewVersion, RegistryError, SqliteRegistry, StorageError,
    VersionUpdate,
};
