//! Registry storage: attribute codec, entity store and backends.

pub mod codec;
mod error;
pub mod registry;
pub mod sqlite;

pub use codec::Metrics;
pub use error::{Result, StorageError};
pub use registry::{
    InMemoryRegistry, Model, ModelKey, ModelPage, ModelQuery, ModelRegistry, ModelStage,
    ModelUpdate, ModelVersion, NewModel, NewVersion, RegistryError, VersionUpdate,
};
pub use sqlite::SqliteRegistry;
