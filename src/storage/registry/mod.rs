//! Model Registry with a production-exclusive version lifecycle
//!
//! Models are named, team-owned entries with an ordered history of versions.
//! Each version sits in one stage: staging, production or archived.
//! Any stage may move to any other; entering production demotes the model's
//! current production version to archived in the same atomic step, so a model
//! never has more than one production version.
//!
//! # Example
//!
//! ```ignore
//! use model_registry::storage::registry::{ModelRegistry, ModelStage, NewModel, NewVersion};
//! use model_registry::storage::SqliteRegistry;
//!
//! let registry = SqliteRegistry::open_in_memory()?;
//! let bert = registry.create_model(NewModel::new("bert", "nlp"))?;
//! let v1 = registry.create_version(bert.id, NewVersion::new("v1", "s3://models/bert/1"))?;
//! registry.promote_version(v1.id, ModelStage::Production)?;
//! ```

mod error;
pub(crate) mod lifecycle;
mod memory;
mod model;
pub mod query;
mod stage;
mod traits;
mod version;

pub use error::{RegistryError, Result};
pub use lifecycle::production_count;
pub use memory::InMemoryRegistry;
pub use model::{Model, ModelKey, ModelUpdate, NewModel, MAX_NAME_LEN};
pub use query::{ModelPage, ModelQuery, DEFAULT_LIMIT};
pub use stage::ModelStage;
pub use traits::ModelRegistry;
pub use version::{ModelVersion, NewVersion, VersionUpdate, MAX_VERSION_LEN};
