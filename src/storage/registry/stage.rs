//! Model version deployment stages

use serde::{Deserialize, Serialize};

/// Deployment stage of a model version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStage {
    /// Being tested/validated
    #[default]
    Staging,
    /// Deployed and serving traffic
    Production,
    /// Retired from active use
    Archived,
}

impl ModelStage {
    /// All stages in declaration order
    pub const ALL: [ModelStage; 3] = [ModelStage::Staging, ModelStage::Production, ModelStage::Archived];

    /// Whether entering `self` demotes the model's other production versions.
    pub fn triggers_archival(&self) -> bool {
        matches!(self, ModelStage::Production)
    }

    /// Storage / display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStage::Staging => "staging",
            ModelStage::Production => "production",
            ModelStage::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ModelStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "staging" => Ok(ModelStage::Staging),
            "production" | "prod" => Ok(ModelStage::Production),
            "archived" => Ok(ModelStage::Archived),
            _ => Err(format!("Unknown stage: {s}. Valid stages: staging, production, archived")),
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn stage_strategy() -> impl Strategy<Value = ModelStage> {
        prop::sample::select(ModelStage::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_as_str_parses_back(stage in stage_strategy()) {
            prop_assert_eq!(stage.as_str().parse::<ModelStage>().unwrap(), stage);
        }

        #[test]
        fn prop_display_matches_serde(stage in stage_strategy()) {
            let json = serde_json::to_string(&stage).unwrap();
            prop_assert_eq!(json, format!("\"{stage}\""));
        }
    }
}
