//! Registry behaviour shared by every backend.
//!
//! `registry_suite!` expands the same tests once per `ModelRegistry`
//! implementation so the SQLite and in-memory stores stay interchangeable.

use model_registry::{
    InMemoryRegistry, ModelKey, ModelQuery, ModelRegistry, ModelStage, ModelUpdate, NewModel,
    NewVersion, RegistryError, SqliteRegistry, VersionUpdate,
};
use serde_json::json;

#[test]
fn test_backends_implement_trait() {
    fn assert_registry<R: ModelRegistry>() {}
    assert_registry::<InMemoryRegistry>();
    assert_registry::<SqliteRegistry>();
}

macro_rules! registry_suite {
    ($module:ident, $open:expr) => {
        mod $module {
            use super::*;

            fn open() -> impl ModelRegistry {
                $open
            }

            fn bert(registry: &impl ModelRegistry) -> i64 {
                registry
                    .create_model(NewModel::new("bert", "nlp").with_tag("nlp").with_tag("prod"))
                    .expect("operation should succeed")
                    .id
            }

            #[test]
            fn test_second_production_version_archives_first() {
                let registry = open();
                let model_id = bert(&registry);

                let v1 = registry
                    .create_version(model_id, NewVersion::new("v1", "/m/v1").with_stage(ModelStage::Production))
                    .expect("operation should succeed");
                let v2 = registry
                    .create_version(model_id, NewVersion::new("v2", "/m/v2").with_stage(ModelStage::Production))
                    .expect("operation should succeed");

                assert_eq!(registry.get_version(v1.id).unwrap().stage, ModelStage::Archived);
                assert_eq!(registry.get_version(v2.id).unwrap().stage, ModelStage::Production);

                let latest = registry.latest_version(&"bert".into(), ModelStage::Production).unwrap();
                assert_eq!(latest.id, v2.id);
            }

            #[test]
            fn test_delete_model_removes_versions() {
                let registry = open();
                let model_id = bert(&registry);
                let v1 = registry.create_version(model_id, NewVersion::new("v1", "/m/v1")).unwrap();
                let v2 = registry.create_version(model_id, NewVersion::new("v2", "/m/v2")).unwrap();

                registry.delete_model(model_id).unwrap();

                assert!(matches!(registry.list_versions(model_id), Err(RegistryError::ModelNotFound(_))));
                assert!(matches!(registry.get_version(v1.id), Err(RegistryError::VersionNotFound(_))));
                assert!(matches!(registry.get_version(v2.id), Err(RegistryError::VersionNotFound(id)) if id == v2.id));
                assert!(matches!(registry.get_model(&"bert".into()), Err(RegistryError::ModelNotFound(_))));
            }

            #[test]
            fn test_delete_missing_model() {
                let registry = open();
                assert!(matches!(registry.delete_model(404), Err(RegistryError::ModelNotFound(_))));
                assert!(matches!(registry.delete_version(404), Err(RegistryError::VersionNotFound(404))));
            }

            #[test]
            fn test_duplicate_model_name() {
                let registry = open();
                bert(&registry);
                let result = registry.create_model(NewModel::new("bert", "cv"));
                assert!(matches!(result, Err(RegistryError::Conflict(_))));
            }

            #[test]
            fn test_invalid_inputs_rejected() {
                let registry = open();
                assert!(matches!(registry.create_model(NewModel::new(" ", "nlp")), Err(RegistryError::Validation(_))));

                let model_id = bert(&registry);
                let result = registry.create_version(model_id, NewVersion::new("v1", ""));
                assert!(matches!(result, Err(RegistryError::Validation(_))));

                let result = registry.create_version(model_id, NewVersion::new(&"v".repeat(65), "/m"));
                assert!(matches!(result, Err(RegistryError::Validation(_))));
                let result = registry.create_model(NewModel::new(&"m".repeat(256), "nlp"));
                assert!(matches!(result, Err(RegistryError::Validation(_))));

                let result = registry.create_version(999, NewVersion::new("v1", "/m"));
                assert!(matches!(result, Err(RegistryError::ModelNotFound(_))));
            }

            #[test]
            fn test_partial_model_update() {
                let registry = open();
                let model_id = bert(&registry);

                let updated = registry.update_model(model_id, ModelUpdate::default().description("encoder")).unwrap();
                assert_eq!(updated.description.as_deref(), Some("encoder"));
                assert_eq!(updated.tags, vec!["nlp", "prod"]);
                assert!(updated.updated_at >= updated.created_at);

                let cleared = registry.update_model(model_id, ModelUpdate::default().tags(Vec::<String>::new())).unwrap();
                assert!(cleared.tags.is_empty());
                assert_eq!(cleared.description.as_deref(), Some("encoder"));

                assert_eq!(registry.get_model(&ModelKey::Id(model_id)).unwrap(), cleared);
            }

            #[test]
            fn test_empty_model_update_changes_nothing() {
                let registry = open();
                let model_id = bert(&registry);
                let before = registry.get_model(&ModelKey::Id(model_id)).unwrap();

                let after = registry.update_model(model_id, ModelUpdate::default()).unwrap();
                assert_eq!(after, before);
                assert_eq!(registry.get_model(&ModelKey::Id(model_id)).unwrap().updated_at, before.updated_at);

                assert!(matches!(registry.update_model(404, ModelUpdate::default()), Err(RegistryError::ModelNotFound(_))));
            }

            #[test]
            fn test_partial_version_update() {
                let registry = open();
                let model_id = bert(&registry);
                let v1 = registry
                    .create_version(model_id, NewVersion::new("v1", "/m").with_metric("accuracy", 0.9))
                    .unwrap();

                let updated = registry.update_version(v1.id, VersionUpdate::default().description("first cut")).unwrap();
                assert_eq!(updated.metrics["accuracy"], json!(0.9));
                assert_eq!(updated.stage, ModelStage::Staging);
                assert_eq!(updated.description.as_deref(), Some("first cut"));
            }

            #[test]
            fn test_log_metrics_merges() {
                let registry = open();
                let model_id = bert(&registry);
                let v1 = registry
                    .create_version(model_id, NewVersion::new("v1", "/m").with_metric("accuracy", 0.9).with_metric("f1", 0.8))
                    .unwrap();

                let metrics = [("accuracy".to_string(), json!(0.95)), ("loss".to_string(), json!(0.1))]
                    .into_iter()
                    .collect();
                let updated = registry.log_metrics(v1.id, metrics).unwrap();

                assert_eq!(updated.metrics["accuracy"], json!(0.95));
                assert_eq!(updated.metrics["f1"], json!(0.8));
                assert_eq!(updated.metrics["loss"], json!(0.1));
                assert_eq!(registry.get_version(v1.id).unwrap().metrics, updated.metrics);
            }

            #[test]
            fn test_tag_filter_is_exact_membership() {
                let registry = open();
                bert(&registry);
                registry.create_model(NewModel::new("resnet", "cv").with_tag("cv")).unwrap();

                let nlp = registry.list_models(&ModelQuery::new().tag("nlp")).unwrap();
                assert_eq!(nlp.total, 1);
                assert_eq!(nlp.items[0].name, "bert");

                assert_eq!(registry.list_models(&ModelQuery::new().tag("cv")).unwrap().items[0].name, "resnet");
                assert_eq!(registry.list_models(&ModelQuery::new().tag("nl")).unwrap().total, 0);
            }

            #[test]
            fn test_list_models_window_and_total() {
                let registry = open();
                for i in 0..5 {
                    let team = if i % 2 == 0 { "nlp" } else { "cv" };
                    registry.create_model(NewModel::new(&format!("m{i}"), team)).unwrap();
                }

                let page = registry.list_models(&ModelQuery::new().team("nlp").skip(1).limit(1)).unwrap();
                assert_eq!(page.total, 3);
                assert_eq!(page.items.len(), 1);
                assert_eq!(page.items[0].name, "m2");

                let all = registry.list_models(&ModelQuery::new()).unwrap();
                let names: Vec<_> = all.items.iter().map(|m| m.name.as_str()).collect();
                assert_eq!(names, vec!["m4", "m3", "m2", "m1", "m0"]);

                let past_end = registry.list_models(&ModelQuery::new().skip(10)).unwrap();
                assert_eq!(past_end.total, 5);
                assert!(past_end.items.is_empty());
            }

            #[test]
            fn test_list_versions_newest_first() {
                let registry = open();
                let model_id = bert(&registry);
                for label in ["v1", "v2", "v3"] {
                    registry.create_version(model_id, NewVersion::new(label, "/m")).unwrap();
                }

                let labels: Vec<_> = registry
                    .list_versions(model_id)
                    .unwrap()
                    .into_iter()
                    .map(|v| v.version)
                    .collect();
                assert_eq!(labels, vec!["v3", "v2", "v1"]);
            }

            #[test]
            fn test_promote_to_staging_is_idempotent() {
                let registry = open();
                let model_id = bert(&registry);
                let prod = registry
                    .create_version(model_id, NewVersion::new("v1", "/m").with_stage(ModelStage::Production))
                    .unwrap();
                let v2 = registry.create_version(model_id, NewVersion::new("v2", "/m")).unwrap();

                registry.promote_version(v2.id, ModelStage::Staging).unwrap();
                registry.promote_version(v2.id, ModelStage::Staging).unwrap();

                assert_eq!(registry.get_version(prod.id).unwrap(), prod);
                assert_eq!(registry.get_version(v2.id).unwrap().stage, ModelStage::Staging);
            }

            #[test]
            fn test_promote_archived_back_to_production() {
                let registry = open();
                let model_id = bert(&registry);
                let v1 = registry
                    .create_version(model_id, NewVersion::new("v1", "/m").with_stage(ModelStage::Production))
                    .unwrap();
                let v2 = registry
                    .create_version(model_id, NewVersion::new("v2", "/m").with_stage(ModelStage::Production))
                    .unwrap();

                let rolled_back = registry.promote_version(v1.id, ModelStage::Production).unwrap();
                assert_eq!(rolled_back.stage, ModelStage::Production);
                assert_eq!(registry.get_version(v2.id).unwrap().stage, ModelStage::Archived);
                assert_eq!(registry.production_version(&"bert".into()).unwrap().map(|v| v.id), Some(v1.id));
            }

            #[test]
            fn test_latest_version_in_stage() {
                let registry = open();
                let model_id = bert(&registry);
                let missing = registry.latest_version(&ModelKey::Id(model_id), ModelStage::Staging);
                assert!(matches!(missing, Err(RegistryError::NoVersionInStage { .. })));
                assert_eq!(registry.production_version(&ModelKey::Id(model_id)).unwrap(), None);

                registry.create_version(model_id, NewVersion::new("a", "/m")).unwrap();
                let b = registry.create_version(model_id, NewVersion::new("b", "/m")).unwrap();
                let latest = registry.latest_version(&ModelKey::Id(model_id), ModelStage::Staging).unwrap();
                assert_eq!(latest.id, b.id);

                let unknown = registry.latest_version(&"ghost".into(), ModelStage::Staging);
                assert!(matches!(unknown, Err(RegistryError::ModelNotFound(_))));
            }

            #[test]
            fn test_lookup_model_prefers_name_over_id() {
                let registry = open();
                let first = registry.create_model(NewModel::new("first", "nlp")).unwrap();
                let numeric = registry.create_model(NewModel::new(&first.id.to_string(), "nlp")).unwrap();

                assert_eq!(registry.lookup_model(&first.id.to_string()).unwrap().id, numeric.id);
                assert_eq!(registry.lookup_model(&numeric.id.to_string()).unwrap().id, numeric.id);
                assert_eq!(registry.lookup_model("first").unwrap().id, first.id);
                assert!(matches!(registry.lookup_model("ghost"), Err(RegistryError::ModelNotFound(_))));
                assert!(matches!(registry.lookup_model("404"), Err(RegistryError::ModelNotFound(_))));
            }

            #[test]
            fn test_version_labels_need_not_be_unique() {
                let registry = open();
                let model_id = bert(&registry);
                let a = registry.create_version(model_id, NewVersion::new("v1", "/a")).unwrap();
                let b = registry.create_version(model_id, NewVersion::new("v1", "/b")).unwrap();
                assert_ne!(a.id, b.id);
                assert_eq!(registry.list_versions(model_id).unwrap().len(), 2);
            }

            #[test]
            fn test_production_exclusive_over_many_operations() {
                let registry = open();
                let model_id = bert(&registry);
                let mut ids = Vec::new();
                for i in 0..6 {
                    let stage = if i % 2 == 0 { ModelStage::Production } else { ModelStage::Staging };
                    ids.push(registry.create_version(model_id, NewVersion::new(&format!("v{i}"), "/m").with_stage(stage)).unwrap().id);
                }
                for &id in ids.iter().rev() {
                    registry.promote_version(id, ModelStage::Production).unwrap();
                    let production = registry
                        .list_versions(model_id)
                        .unwrap()
                        .into_iter()
                        .filter(|v| v.stage == ModelStage::Production)
                        .count();
                    assert_eq!(production, 1);
                }
            }
        }
    };
}

registry_suite!(in_memory, InMemoryRegistry::new());
registry_suite!(sqlite, SqliteRegistry::open_in_memory().expect("in-memory database should open"));
