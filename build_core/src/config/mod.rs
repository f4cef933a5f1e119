//! Configuration and data loading from TOML / JSON files

mod constants;

pub use constants::{
    default_constants, AffinityConstants, EngineConstants, PropagationConstants, PropagationLevel,
    SharpnessMultipliers, SharpnessTable, SHARPNESS_TIERS,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported data file extension: {0}")]
    UnsupportedFormat(String),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate engine constants from a TOML file
pub fn load_constants(path: &Path) -> Result<EngineConstants, ConfigError> {
    let constants: EngineConstants = load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Load a JSON file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: T = serde_json::from_str(&content)?;
    Ok(value)
}

/// Load a data file, picking the parser from the file extension
pub fn load_data_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => load_toml(path),
        Some("json") => load_json(path),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
