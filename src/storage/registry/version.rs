//! Model version metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{RegistryError, Result};
use super::stage::ModelStage;
use crate::storage::codec::Metrics;

/// Longest accepted version label, in characters
pub const MAX_VERSION_LEN: usize = 64;

/// One version of a registered model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelVersion {
    /// Registry-assigned identifier
    pub id: i64,
    /// Owning model
    pub model_id: i64,
    /// Caller-supplied label (not unique)
    pub version: String,
    /// Opaque storage location of the artifacts
    pub path: String,
    /// Current stage
    pub stage: ModelStage,
    /// Free-form metrics
    pub metrics: Metrics,
    /// Tags for organization
    pub tags: Vec<String>,
    /// Description
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a model version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewVersion {
    pub version: String,
    pub path: String,
    #[serde(default)]
    pub stage: ModelStage,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewVersion {
    /// Create a staging version
    pub fn new(version: &str, path: &str) -> Self {
        Self { version: version.to_string(), path: path.to_string(), ..Self::default() }
    }

    /// Set the initial stage
    pub fn with_stage(mut self, stage: ModelStage) -> Self {
        self.stage = stage;
        self
    }

    /// Add a metric
    pub fn with_metric(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metrics.insert(name.to_string(), value.into());
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    /// Set description
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(RegistryError::Validation("version label must not be empty".into()));
        }
        if self.version.chars().count() > MAX_VERSION_LEN {
            return Err(RegistryError::Validation(format!(
                "version label longer than {MAX_VERSION_LEN} characters"
            )));
        }
        if self.path.is_empty() {
            return Err(RegistryError::Validation("version path must not be empty".into()));
        }
        Ok(())
    }

    pub(crate) fn into_version(self, id: i64, model_id: i64, now: DateTime<Utc>) -> ModelVersion {
        ModelVersion {
            id,
            model_id,
            version: self.version,
            path: self.path,
            stage: self.stage,
            metrics: self.metrics,
            tags: self.tags,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a version's editable fields.
///
/// Same semantics as [`super::ModelUpdate`]: `Some` replaces wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionUpdate {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metrics: Option<Metrics>,
}

impl VersionUpdate {
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub(crate) fn apply(&self, version: &mut ModelVersion, now: DateTime<Utc>) {
        if let Some(description) = &self.description {
            version.description = Some(description.clone());
        }
        if let Some(metrics) = &self.metrics {
            version.metrics = metrics.clone();
        }
        version.updated_at = now;
    }
}
