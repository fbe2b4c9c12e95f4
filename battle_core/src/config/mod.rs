//! Configuration loading from TOML files

mod cards;
mod constants;
mod field_events;
mod packs;

pub use cards::{default_catalog, load_catalog, parse_catalog};
pub use constants::{AiConstants, BattleConstants, DifficultyConstants, EnhancementConstants};
pub use field_events::{default_field_events, load_field_events, parse_field_events};
pub use packs::{default_pack_table, load_pack_table, parse_pack_table};

use crate::gacha::PackType;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
///
/// These indicate bad data or a programming error, never a game condition.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
    #[error("Unknown pack type: {0}")]
    UnknownPackType(String),
    #[error("No pack info configured for {0:?}")]
    MissingPackInfo(PackType),
    #[error("Unknown field effect tag: {0}")]
    UnknownFieldEffect(String),
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
