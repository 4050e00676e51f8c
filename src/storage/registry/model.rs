//! Registered model metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{RegistryError, Result};

/// Longest accepted model name or team, in characters
pub const MAX_NAME_LEN: usize = 255;

/// A named model owned by a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Registry-assigned identifier
    pub id: i64,
    /// Unique model name
    pub name: String,
    /// Owning team
    pub team: String,
    /// Description
    pub description: Option<String>,
    /// Tags for filtering (membership only)
    pub tags: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Model {
    /// Whether `tag` is one of the model's tags
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Input for registering a model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewModel {
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewModel {
    /// Create a new model registration
    pub fn new(name: &str, team: &str) -> Self {
        Self { name: name.to_string(), team: team.to_string(), ..Self::default() }
    }

    /// Set description
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::Validation("model name must not be empty".into()));
        }
        if self.team.trim().is_empty() {
            return Err(RegistryError::Validation("team must not be empty".into()));
        }
        for (field, value) in [("model name", &self.name), ("team", &self.team)] {
            if value.chars().count() > MAX_NAME_LEN {
                return Err(RegistryError::Validation(format!(
                    "{field} longer than {MAX_NAME_LEN} characters"
                )));
            }
        }
        Ok(())
    }
}

/// Partial update of a model.
///
/// `None` leaves the stored value untouched; `Some` replaces it wholesale,
/// so `tags: Some(vec![])` clears the tag list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelUpdate {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl ModelUpdate {
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// True if the update names no field; backends then leave the model,
    /// including `updated_at`, untouched
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.tags.is_none()
    }

    /// Apply to an in-memory model, refreshing `updated_at`
    pub(crate) fn apply(&self, model: &mut Model, now: DateTime<Utc>) {
        if let Some(description) = &self.description {
            model.description = Some(description.clone());
        }
        if let Some(tags) = &self.tags {
            model.tags = tags.clone();
        }
        model.updated_at = now;
    }
}

/// Lookup key for a model: by id or by unique name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelKey {
    Id(i64),
    Name(String),
}

impl From<i64> for ModelKey {
    fn from(id: i64) -> Self {
        ModelKey::Id(id)
    }
}

impl From<&str> for ModelKey {
    fn from(name: &str) -> Self {
        ModelKey::Name(name.to_string())
    }
}

impl From<String> for ModelKey {
    fn from(name: String) -> Self {
        ModelKey::Name(name)
    }
}

impl std::fmt::Display for ModelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKey::Id(id) => write!(f, "{id}"),
            ModelKey::Name(name) => write!(f, "{name}"),
        }
    }
}
