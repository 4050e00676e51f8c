//! ModelRegistry trait implementation for InMemoryRegistry

use chrono::Utc;

use super::super::error::{RegistryError, Result};
use super::super::lifecycle::archive_production;
use super::super::model::{Model, ModelKey, ModelUpdate, NewModel};
use super::super::query::{self, ModelPage, ModelQuery};
use super::super::stage::ModelStage;
use super::super::traits::ModelRegistry;
use super::super::version::{ModelVersion, NewVersion, VersionUpdate};
use super::registry::InMemoryRegistry;
use crate::storage::codec::Metrics;

impl ModelRegistry for InMemoryRegistry {
    fn create_model(&self, new: NewModel) -> Result<Model> {
        new.validate()?;
        let mut state = self.write_state()?;

        if state.models.values().any(|m| m.name == new.name) {
            return Err(RegistryError::Conflict(new.name));
        }

        let now = Utc::now();
        let model = Model {
            id: state.next_model_id(),
            name: new.name,
            team: new.team,
            description: new.description,
            tags: new.tags,
            created_at: now,
            updated_at: now,
        };
        state.models.insert(model.id, model.clone());

        tracing::debug!(model_id = model.id, name = %model.name, "model created");
        Ok(model)
    }

    fn get_model(&self, key: &ModelKey) -> Result<Model> {
        self.read_state()?.find_model(key).cloned()
    }

    fn list_models(&self, query: &ModelQuery) -> Result<ModelPage> {
        let state = self.read_state()?;
        Ok(query.apply(state.models.values().cloned()))
    }

    fn update_model(&self, id: i64, update: ModelUpdate) -> Result<Model> {
        let mut state = self.write_state()?;
        let model = state
            .models
            .get_mut(&id)
            .ok_or_else(|| RegistryError::ModelNotFound(id.to_string()))?;

        if !update.is_empty() {
            update.apply(model, Utc::now());
        }
        Ok(model.clone())
    }

    fn delete_model(&self, id: i64) -> Result<()> {
        let mut state = self.write_state()?;
        if state.models.remove(&id).is_none() {
            return Err(RegistryError::ModelNotFound(id.to_string()));
        }

        let before = state.versions.len();
        state.versions.retain(|_, v| v.model_id != id);
        tracing::debug!(model_id = id, versions = before - state.versions.len(), "model deleted");
        Ok(())
    }

    fn create_version(&self, model_id: i64, new: NewVersion) -> Result<ModelVersion> {
        new.validate()?;
        let mut state = self.write_state()?;
        state.find_model(&ModelKey::Id(model_id))?;

        let now = Utc::now();
        if new.stage.triggers_archival() {
            let archived = archive_production(state.versions.values_mut(), model_id, None, now);
            if archived > 0 {
                tracing::info!(model_id, archived, "archived previous production version");
            }
        }

        let id = state.next_version_id();
        let version = new.into_version(id, model_id, now);
        state.versions.insert(id, version.clone());

        tracing::debug!(model_id, version_id = id, stage = %version.stage, "version created");
        Ok(version)
    }

    fn get_version(&self, id: i64) -> Result<ModelVersion> {
        self.read_state()?.versions.get(&id).cloned().ok_or(RegistryError::VersionNotFound(id))
    }

    fn list_versions(&self, model_id: i64) -> Result<Vec<ModelVersion>> {
        let state = self.read_state()?;
        state.find_model(&ModelKey::Id(model_id))?;

        let mut versions: Vec<_> =
            state.versions.values().filter(|v| v.model_id == model_id).cloned().collect();
        query::sort_versions(&mut versions);
        Ok(versions)
    }

    fn latest_version(&self, key: &ModelKey, stage: ModelStage) -> Result<ModelVersion> {
        let state = self.read_state()?;
        let model = state.find_model(key)?;

        let candidates = state.versions.values().filter(|v| v.model_id == model.id);
        query::latest_in_stage(candidates, stage)
            .cloned()
            .ok_or_else(|| RegistryError::NoVersionInStage { model: model.name.clone(), stage })
    }

    fn promote_version(&self, id: i64, stage: ModelStage) -> Result<ModelVersion> {
        let mut state = self.write_state()?;
        let model_id = state.version_mut(id)?.model_id;

        let now = Utc::now();
        if stage.triggers_archival() {
            let archived = archive_production(state.versions.values_mut(), model_id, Some(id), now);
            if archived > 0 {
                tracing::info!(model_id, archived, "archived previous production version");
            }
        }

        let version = state.version_mut(id)?;
        let from = version.stage;
        version.stage = stage;
        version.updated_at = now;

        tracing::debug!(version_id = id, %from, to = %stage, "version stage changed");
        Ok(version.clone())
    }

    fn update_version(&self, id: i64, update: VersionUpdate) -> Result<ModelVersion> {
        let mut state = self.write_state()?;
        let version = state.version_mut(id)?;
        update.apply(version, Utc::now());
        Ok(version.clone())
    }

    fn log_metrics(&self, id: i64, metrics: Metrics) -> Result<ModelVersion> {
        let mut state = self.write_state()?;
        let version = state.version_mut(id)?;
        version.metrics.extend(metrics);
        version.updated_at = Utc::now();
        Ok(version.clone())
    }

    fn delete_version(&self, id: i64) -> Result<()> {
        let mut state = self.write_state()?;
        state.versions.remove(&id).map(|_| ()).ok_or(RegistryError::VersionNotFound(id))
    }
}
