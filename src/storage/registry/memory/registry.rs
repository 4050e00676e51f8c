//! InMemoryRegistry struct and core methods

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::super::error::{RegistryError, Result};
use super::super::model::{Model, ModelKey};
use super::super::version::ModelVersion;
use crate::storage::StorageError;

/// Dataset guarded by the registry lock
#[derive(Debug, Default)]
pub(crate) struct RegistryState {
    pub(crate) models: BTreeMap<i64, Model>,
    pub(crate) versions: BTreeMap<i64, ModelVersion>,
    last_model_id: i64,
    last_version_id: i64,
}

impl RegistryState {
    pub(crate) fn next_model_id(&mut self) -> i64 {
        self.last_model_id += 1;
        self.last_model_id
    }

    pub(crate) fn next_version_id(&mut self) -> i64 {
        self.last_version_id += 1;
        self.last_version_id
    }

    pub(crate) fn find_model(&self, key: &ModelKey) -> Result<&Model> {
        let found = match key {
            ModelKey::Id(id) => self.models.get(id),
            ModelKey::Name(name) => self.models.values().find(|m| &m.name == name),
        };
        found.ok_or_else(|| RegistryError::ModelNotFound(key.to_string()))
    }

    pub(crate) fn version_mut(&mut self, id: i64) -> Result<&mut ModelVersion> {
        self.versions.get_mut(&id).ok_or(RegistryError::VersionNotFound(id))
    }
}

/// In-memory model registry.
///
/// One `RwLock` covers the whole dataset, so every lifecycle operation is
/// serialized against all other writers.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
}

impl InMemoryRegistry {
    /// Create a new in-memory registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered models
    pub fn models_count(&self) -> usize {
        self.read_state().map_or(0, |s| s.models.len())
    }

    /// Number of versions across all models
    pub fn versions_count(&self) -> usize {
        self.read_state().map_or(0, |s| s.versions.len())
    }

    pub(crate) fn read_state(&self) -> Result<RwLockReadGuard<'_, RegistryState>> {
        self.state.read().map_err(|e| {
            StorageError::Backend(format!("Failed to acquire read lock: {e}")).into()
        })
    }

    pub(crate) fn write_state(&self) -> Result<RwLockWriteGuard<'_, RegistryState>> {
        self.state.write().map_err(|e| {
            StorageError::Backend(format!("Failed to acquire write lock: {e}")).into()
        })
    }
}
