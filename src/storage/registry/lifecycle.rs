//! Version lifecycle rules shared by the registry backends.
//!
//! Stages form a complete graph; the only guarded edge is entry into
//! production, which archives every other production version of the same
//! model in the same atomic step.

use chrono::{DateTime, Utc};

use super::stage::ModelStage;
use super::version::ModelVersion;

/// Archive every production version of `model_id` except `exclude`.
///
/// Returns the number of versions demoted.
pub(crate) fn archive_production<'a, I>(
    versions: I,
    model_id: i64,
    exclude: Option<i64>,
    now: DateTime<Utc>,
) -> usize
where
    I: IntoIterator<Item = &'a mut ModelVersion>,
{
    let mut archived = 0;
    for version in versions {
        if version.model_id == model_id
            && version.stage == ModelStage::Production
            && Some(version.id) != exclude
        {
            version.stage = ModelStage::Archived;
            version.updated_at = now;
            archived += 1;
        }
    }
    archived
}

/// Number of production versions per model in `versions`
pub fn production_count<'a, I>(versions: I, model_id: i64) -> usize
where
    I: IntoIterator<Item = &'a ModelVersion>,
{
    versions
        .into_iter()
        .filter(|v| v.model_id == model_id && v.stage == ModelStage::Production)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::registry::version::NewVersion;

    fn versions() -> Vec<ModelVersion> {
        let now = Utc::now();
        vec![
            NewVersion::new("v1", "/1").with_stage(ModelStage::Production).into_version(1, 10, now),
            NewVersion::new("v2", "/2").into_version(2, 10, now),
            NewVersion::new("v3", "/3").with_stage(ModelStage::Production).into_version(3, 20, now),
        ]
    }

    #[test]
    fn test_archive_production_scoped_to_model() {
        let mut versions = versions();
        let archived = archive_production(versions.iter_mut(), 10, None, Utc::now());

        assert_eq!(archived, 1);
        assert_eq!(versions[0].stage, ModelStage::Archived);
        assert_eq!(versions[1].stage, ModelStage::Staging);
        assert_eq!(versions[2].stage, ModelStage::Production);
    }

    #[test]
    fn test_archive_production_excludes_target() {
        let mut versions = versions();
        let archived = archive_production(versions.iter_mut(), 10, Some(1), Utc::now());

        assert_eq!(archived, 0);
        assert_eq!(versions[0].stage, ModelStage::Production);
    }

    #[test]
    fn test_production_count() {
        let versions = versions();
        assert_eq!(production_count(&versions, 10), 1);
        assert_eq!(production_count(&versions, 20), 1);
        assert_eq!(production_count(&versions, 30), 0);
    }
}
