use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub print_edges: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RandomConfig {
    pub enabled: bool,
    pub num_nodes: usize,
    pub num_controllable: usize,
    pub num_contingent: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub scenario: ScenarioConfig,
    pub random: RandomConfig,
}

/// Loads configuration from `crates/runner/Config.toml` and `DC_RUNNER_*`
/// environment variable overrides.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path.join("crates").join("runner").join("Config.toml");

    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    load_config_from(&config_file_path)
}

/// Loads configuration from an explicit path, split out from
/// [`load_config`] so tests can point it at a temporary file.
pub fn load_config_from(path: &std::path::Path) -> Result<Config, Error> {
    let s = ConfigLoader::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("DC_RUNNER")
                .try_parsing(true)
                .separator("_"),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
