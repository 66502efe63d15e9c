use super::{
    ordering::OrderingConfig, schedule::ScheduleConfig, table::TableConfig,
    traits::ConfigSection,
};
use crate::error::DiningError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix for environment overrides, e.g. `DINING__ORDERING__TRIALS=250`.
pub const ENV_PREFIX: &str = "DINING";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seed for the search's random source; entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub table: TableConfig,
    pub ordering: OrderingConfig,
    pub schedule: ScheduleConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), DiningError> {
        self.table.validate()?;
        self.ordering.validate()?;
        self.schedule.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DiningError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        config.validate()?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    /// Loads defaults, then the optional file, then `DINING__*` environment
    /// variables, each layer overriding the previous one.
    pub fn load_layered<P: AsRef<Path>>(&self, path: Option<P>) -> Result<(), DiningError> {
        self.load_layers(path, None)
    }

    /// Same as [`load_layered`](Self::load_layered) with an explicit set of
    /// environment variables instead of the process environment.
    pub fn load_layered_with_env<P: AsRef<Path>>(
        &self,
        path: Option<P>,
        env: HashMap<String, String>,
    ) -> Result<(), DiningError> {
        self.load_layers(path, Some(env))
    }

    fn load_layers<P: AsRef<Path>>(
        &self,
        path: Option<P>,
        env: Option<HashMap<String, String>>,
    ) -> Result<(), DiningError> {
        let mut builder = ::config::Config::builder()
            .add_source(::config::Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path.as_ref()).required(true));
        }

        let environment = ::config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(env.map(|vars| vars.into_iter().collect()));

        let config: AppConfig = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!("Loaded layered configuration: {:?}", config);

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DiningError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies `f` and keeps the result only if it still validates.
    pub fn update<F>(&self, f: F) -> Result<(), DiningError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
