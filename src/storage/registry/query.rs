//! Listing and lookup views over models and versions.
//!
//! Ordering is newest first: `created_at` descending, ties broken by the
//! higher id. Filters apply before the `skip`/`limit` window and `total`
//! counts the filtered set.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::model::Model;
use super::stage::ModelStage;
use super::version::ModelVersion;

/// Default page size for model listings
pub const DEFAULT_LIMIT: usize = 50;

/// Filter and window for `list_models`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelQuery {
    /// Exact team match
    pub team: Option<String>,
    /// Tag membership
    pub tag: Option<String>,
    pub skip: usize,
    pub limit: usize,
}

impl Default for ModelQuery {
    fn default() -> Self {
        Self { team: None, tag: None, skip: 0, limit: DEFAULT_LIMIT }
    }
}

impl ModelQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Whether `model` passes the team and tag filters
    pub fn matches(&self, model: &Model) -> bool {
        let team_ok = self.team.as_deref().map_or(true, |team| model.team == team);
        let tag_ok = self.tag.as_deref().map_or(true, |tag| model.has_tag(tag));
        team_ok && tag_ok
    }

    /// Filter, order and window a full model set
    pub fn apply<I>(&self, models: I) -> ModelPage
    where
        I: IntoIterator<Item = Model>,
    {
        let mut matched: Vec<Model> = models.into_iter().filter(|m| self.matches(m)).collect();
        matched.sort_by(newest_model_first);
        let total = matched.len();
        ModelPage { total, items: window(matched, self.skip, self.limit) }
    }
}

/// One page of a model listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPage {
    /// Number of models matching the filters, ignoring the window
    pub total: usize,
    pub items: Vec<Model>,
}

/// Take the `skip`/`limit` window of an already ordered list
pub fn window<T>(items: Vec<T>, skip: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(skip).take(limit).collect()
}

pub fn newest_model_first(a: &Model, b: &Model) -> Ordering {
    b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
}

pub fn newest_version_first(a: &ModelVersion, b: &ModelVersion) -> Ordering {
    b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
}

/// Sort versions newest first
pub fn sort_versions(versions: &mut [ModelVersion]) {
    versions.sort_by(newest_version_first);
}

/// Most recently created version in `stage`
pub fn latest_in_stage<'a, I>(versions: I, stage: ModelStage) -> Option<&'a ModelVersion>
where
    I: IntoIterator<Item = &'a ModelVersion>,
{
    versions.into_iter().filter(|v| v.stage == stage).min_by(|a, b| newest_version_first(a, b))
}
