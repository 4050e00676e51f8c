//! Model registry trait definition

use super::error::{RegistryError, Result};
use super::model::{Model, ModelKey, ModelUpdate, NewModel};
use super::query::{ModelPage, ModelQuery};
use super::stage::ModelStage;
use super::version::{ModelVersion, NewVersion, VersionUpdate};
use crate::storage::codec::Metrics;

/// Model registry operations.
///
/// Implementations are shared handles: every method takes `&self` and must
/// keep at most one production version per model under concurrent callers.
pub trait ModelRegistry: Send + Sync {
    /// Register a new model; `Conflict` if the name is taken
    fn create_model(&self, model: NewModel) -> Result<Model>;

    /// Get a model by id or name
    fn get_model(&self, key: &ModelKey) -> Result<Model>;

    /// Filtered, newest-first page of models
    fn list_models(&self, query: &ModelQuery) -> Result<ModelPage>;

    /// Partially update a model's description and tags
    fn update_model(&self, id: i64, update: ModelUpdate) -> Result<Model>;

    /// Delete a model and all of its versions
    fn delete_model(&self, id: i64) -> Result<()>;

    /// Create a version; a production version archives the current one
    fn create_version(&self, model_id: i64, version: NewVersion) -> Result<ModelVersion>;

    /// Get a version by id
    fn get_version(&self, id: i64) -> Result<ModelVersion>;

    /// All versions of a model, newest first
    fn list_versions(&self, model_id: i64) -> Result<Vec<ModelVersion>>;

    /// Most recently created version of a model in `stage`
    fn latest_version(&self, key: &ModelKey, stage: ModelStage) -> Result<ModelVersion>;

    /// Move a version to `stage`; entering production archives the others
    fn promote_version(&self, id: i64, stage: ModelStage) -> Result<ModelVersion>;

    /// Partially update a version's description and metrics
    fn update_version(&self, id: i64, update: VersionUpdate) -> Result<ModelVersion>;

    /// Merge metrics into a version, overwriting existing keys
    fn log_metrics(&self, id: i64, metrics: Metrics) -> Result<ModelVersion>;

    /// Delete a single version
    fn delete_version(&self, id: i64) -> Result<()>;

    /// Resolve a model typed by a user: an exact name match wins, otherwise
    /// an all-digit input is tried as an id
    fn lookup_model(&self, input: &str) -> Result<Model> {
        match self.get_model(&ModelKey::Name(input.to_string())) {
            Err(RegistryError::ModelNotFound(_)) => {}
            found => return found,
        }
        match input.parse::<i64>() {
            Ok(id) => self.get_model(&ModelKey::Id(id)),
            Err(_) => Err(RegistryError::ModelNotFound(input.to_string())),
        }
    }

    /// Current production version, if any
    fn production_version(&self, key: &ModelKey) -> Result<Option<ModelVersion>> {
        match self.latest_version(key, ModelStage::Production) {
            Ok(version) => Ok(Some(version)),
            Err(RegistryError::NoVersionInStage { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
