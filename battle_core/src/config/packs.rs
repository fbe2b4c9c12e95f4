//! Pack table loading

use super::ConfigError;
use crate::gacha::{GradeRates, PackInfo, PackTable, PackType};
use crate::types::Grade;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One `[[packs]]` entry as written in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackEntry {
    pub pack_type: String,
    pub card_count: usize,
    pub guaranteed_grade: Grade,
    pub rates: GradeRates,
}

/// Container for pack entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacksConfig {
    #[serde(rename = "packs")]
    pub packs: Vec<PackEntry>,
}

impl PacksConfig {
    fn into_table(self) -> Result<PackTable, ConfigError> {
        let mut table = PackTable::new();
        for entry in self.packs {
            let pack_type: PackType = entry.pack_type.parse()?;
            let info = PackInfo {
                card_count: entry.card_count,
                guaranteed_grade: entry.guaranteed_grade,
                rates: entry.rates,
            };
            info.validate()?;
            table.insert(pack_type, info);
        }
        Ok(table)
    }
}

/// Load a pack table from a TOML file
pub fn load_pack_table(path: &Path) -> Result<PackTable, ConfigError> {
    let config: PacksConfig = super::load_toml(path)?;
    config.into_table()
}

/// Load a pack table from a TOML string
pub fn parse_pack_table(content: &str) -> Result<PackTable, ConfigError> {
    let config: PacksConfig = super::parse_toml(content)?;
    config.into_table()
}

/// Get the default pack table
pub fn default_pack_table() -> PackTable {
    pack_table_or_standard(include_str!("../../config/packs.toml"))
}

fn pack_table_or_standard(toml: &str) -> PackTable {
    parse_pack_table(toml).unwrap_or_else(|e| {
        warn!("built-in pack table failed to load: {}", e);
        PackTable::standard()
    })
}
