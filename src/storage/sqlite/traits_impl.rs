//! ModelRegistry trait implementation for SqliteRegistry

use super::backend::SqliteRegistry;
use super::{models, versions};
use crate::storage::codec::Metrics;
use crate::storage::registry::{
    Model, ModelKey, ModelPage, ModelQuery, ModelRegistry, ModelStage, ModelUpdate, ModelVersion,
    NewModel, NewVersion, Result, VersionUpdate,
};

impl ModelRegistry for SqliteRegistry {
    fn create_model(&self, new: NewModel) -> Result<Model> {
        new.validate()?;
        let model = self.write_tx(|tx| models::insert_model(tx, new))?;
        tracing::debug!(model_id = model.id, name = %model.name, "model created");
        Ok(model)
    }

    fn get_model(&self, key: &ModelKey) -> Result<Model> {
        let conn = self.lock_conn()?;
        models::require_model(&conn, key)
    }

    fn list_models(&self, query: &ModelQuery) -> Result<ModelPage> {
        let conn = self.lock_conn()?;
        models::list_models(&conn, query)
    }

    fn update_model(&self, id: i64, update: ModelUpdate) -> Result<Model> {
        self.write_tx(|tx| models::update_model(tx, id, &update))
    }

    fn delete_model(&self, id: i64) -> Result<()> {
        let versions = self.write_tx(|tx| models::delete_model(tx, id))?;
        tracing::debug!(model_id = id, versions, "model deleted");
        Ok(())
    }

    fn create_version(&self, model_id: i64, new: NewVersion) -> Result<ModelVersion> {
        new.validate()?;
        self.write_tx(|tx| versions::create_version(tx, model_id, new))
    }

    fn get_version(&self, id: i64) -> Result<ModelVersion> {
        let conn = self.lock_conn()?;
        versions::require_version(&conn, id)
    }

    fn list_versions(&self, model_id: i64) -> Result<Vec<ModelVersion>> {
        let conn = self.lock_conn()?;
        versions::list_versions(&conn, model_id)
    }

    fn latest_version(&self, key: &ModelKey, stage: ModelStage) -> Result<ModelVersion> {
        let conn = self.lock_conn()?;
        versions::latest_version(&conn, key, stage)
    }

    fn promote_version(&self, id: i64, stage: ModelStage) -> Result<ModelVersion> {
        self.write_tx(|tx| versions::promote_version(tx, id, stage))
    }

    fn update_version(&self, id: i64, update: VersionUpdate) -> Result<ModelVersion> {
        self.write_tx(|tx| versions::update_version(tx, id, &update))
    }

    fn log_metrics(&self, id: i64, metrics: Metrics) -> Result<ModelVersion> {
        self.write_tx(|tx| versions::log_metrics(tx, id, metrics))
    }

    fn delete_version(&self, id: i64) -> Result<()> {
        self.write_tx(|tx| versions::delete_version(tx, id))
    }
}
