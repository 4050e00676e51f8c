//! Registry configuration
//!
//! Resolution order: defaults, then an optional YAML file, then the
//! `MODEL_REGISTRY_DB` environment variable, then the `--db` flag.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::{ConfigError, Result};
use crate::storage::{SqliteRegistry, StorageError};

/// Environment variable overriding the database path
pub const DB_ENV_VAR: &str = "MODEL_REGISTRY_DB";

/// Store and listing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// SQLite database file, or ":memory:"
    pub database: PathBuf,
    /// Milliseconds per wait for a competing write lock; writers keep waiting
    pub busy_timeout_ms: u64,
    /// Page size when a listing doesn't ask for one
    pub default_limit: usize,
    /// Largest page a listing may request
    pub max_limit: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("./registry.db"),
            busy_timeout_ms: 5000,
            default_limit: 50,
            max_limit: 200,
        }
    }
}

impl RegistryConfig {
    /// Parse a YAML document; absent keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate a YAML config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::from_yaml_str(&yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration for a process
    pub fn resolve(config_file: Option<&Path>, db_override: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        if let Some(db) = db_override {
            config.database = db.to_path_buf();
        }
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db) = lookup(DB_ENV_VAR).filter(|v| !v.is_empty()) {
            self.database = PathBuf::from(db);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.as_os_str().is_empty() {
            return Err(ConfigError::invalid("database", "path must not be empty"));
        }
        if self.busy_timeout_ms == 0 {
            return Err(ConfigError::invalid("busy_timeout_ms", "must be > 0"));
        }
        if self.max_limit == 0 {
            return Err(ConfigError::invalid("max_limit", "must be > 0"));
        }
        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(ConfigError::invalid(
                "default_limit",
                &format!("must be in 1..={}", self.max_limit),
            ));
        }
        Ok(())
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Page size for a listing request, checked against `max_limit`
    pub fn page_limit(&self, requested: Option<usize>) -> Result<usize> {
        match requested {
            None => Ok(self.default_limit),
            Some(n) if (1..=self.max_limit).contains(&n) => Ok(n),
            Some(n) => Err(ConfigError::invalid(
                "limit",
                &format!("{n} is outside 1..={}", self.max_limit),
            )),
        }
    }

    /// Open the configured store
    pub fn open_registry(&self) -> std::result::Result<SqliteRegistry, StorageError> {
        SqliteRegistry::open_with_timeout(&self.database, self.busy_timeout())
    }
}
