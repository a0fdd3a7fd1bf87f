use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::models::observation::Observation;

#[derive(Deserialize)]
pub struct Files {
    pub model_file: String,
}

#[derive(Deserialize)]
pub struct Chart {
    pub width: usize,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub general: General,
    pub files: Files,
    pub controls: Observation,
    pub chart: Chart,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)
        .map_err(|e| ConfigError(format!("can't read {}: {}", config_path, e)))?;

    parse_config(&toml)
}

/// Parses and checks configuration from a TOML string
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.chart.width == 0 {
        return Err(ConfigError::from("chart width must be greater than zero"));
    }
    if config.files.model_file.is_empty() {
        return Err(ConfigError::from("model file path is empty"));
    }

    Ok(config)
}
