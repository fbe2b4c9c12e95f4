//! Card catalog loading

use super::ConfigError;
use crate::card::{CardCatalog, TacticCard, WarriorCard};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Container for card definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub warriors: Vec<WarriorCard>,
    #[serde(default)]
    pub tactics: Vec<TacticCard>,
}

impl CatalogConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for warrior in &self.warriors {
            if !seen.insert(warrior.id.clone()) {
                return Err(ConfigError::ValidationError(format!("duplicate card id {}", warrior.id)));
            }
            if warrior.hp <= 0 {
                return Err(ConfigError::ValidationError(format!("warrior {} must have positive hp", warrior.id)));
            }
            if warrior.attack < 0 || warrior.defense < 0 {
                return Err(ConfigError::ValidationError(format!(
                    "warrior {} has negative attack or defense",
                    warrior.id
                )));
            }
        }
        for tactic in &self.tactics {
            if !seen.insert(tactic.id.clone()) {
                return Err(ConfigError::ValidationError(format!("duplicate card id {}", tactic.id)));
            }
        }
        Ok(())
    }

    fn into_catalog(self) -> Result<CardCatalog, ConfigError> {
        self.validate()?;
        Ok(CardCatalog::from_parts(self.warriors, self.tactics))
    }
}

/// Load a card catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<CardCatalog, ConfigError> {
    let config: CatalogConfig = super::load_toml(path)?;
    config.into_catalog()
}

/// Load a card catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<CardCatalog, ConfigError> {
    let config: CatalogConfig = super::parse_toml(content)?;
    config.into_catalog()
}

/// Get the built-in card catalog
pub fn default_catalog() -> CardCatalog {
    let toml = include_str!("../../config/cards.toml");
    parse_catalog(toml).unwrap_or_else(|e| {
        warn!("built-in card catalog failed to load: {}", e);
        CardCatalog::new()
    })
}
