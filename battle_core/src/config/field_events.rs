//! Field event catalog loading

use super::ConfigError;
use crate::battle::{BattleFieldEvent, FieldEffect};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One `[[events]]` entry; the effect stays a raw tag until validated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEventEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub effect: String,
}

/// Container for field event entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEventsConfig {
    #[serde(rename = "events")]
    pub events: Vec<FieldEventEntry>,
}

impl FieldEventsConfig {
    fn into_events(self) -> Result<Vec<BattleFieldEvent>, ConfigError> {
        self.events
            .into_iter()
            .map(|entry| {
                let effect: FieldEffect = entry.effect.parse()?;
                Ok(BattleFieldEvent::new(entry.name, entry.description, effect))
            })
            .collect()
    }
}

/// Load field events from a TOML file
pub fn load_field_events(path: &Path) -> Result<Vec<BattleFieldEvent>, ConfigError> {
    let config: FieldEventsConfig = super::load_toml(path)?;
    config.into_events()
}

/// Load field events from a TOML string
pub fn parse_field_events(content: &str) -> Result<Vec<BattleFieldEvent>, ConfigError> {
    let config: FieldEventsConfig = super::parse_toml(content)?;
    config.into_events()
}

/// Get the built-in ten-event catalog
pub fn default_field_events() -> Vec<BattleFieldEvent> {
    field_events_or_fallback(include_str!("../../config/field_events.toml"))
}

fn field_events_or_fallback(toml: &str) -> Vec<BattleFieldEvent> {
    parse_field_events(toml).unwrap_or_else(|e| {
        warn!("built-in field events failed to load: {}", e);
        vec![BattleFieldEvent::new(
            "Open Plains",
            "Nothing but grass between the armies.",
            FieldEffect::AllAttackPlus1,
        )]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Faction;

    #[test]
    fn test_parse_field_events() {
        let toml = r#"
[[events]]
name = "Red Cliffs"
description = "The east wind feeds the flames."
effect = "fire_boost"

[[events]]
name = "Wu Waters"
effect = "faction_bonus:wu"
"#;

        let events = parse_field_events(toml).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].effect, FieldEffect::FireBoost);
        assert_eq!(events[1].effect, FieldEffect::FactionBonus(Faction::Wu));
        assert!(events[1].description.is_empty());
    }

    #[test]
    fn test_malformed_tag_surfaces() {
        let toml = r#"
[[events]]
name = "Typo"
effect = "fire_bost"
"#;
        match parse_field_events(toml) {
            Err(ConfigError::UnknownFieldEffect(tag)) => assert_eq!(tag, "fire_bost"),
            other => panic!("expected UnknownFieldEffect, got {:?}", other),
        }
    }

    #[test]
    fn test_default_catalog_has_all_ten_effects() {
        let events = default_field_events();
        assert_eq!(events.len(), 10);
        let mut tags: Vec<String> = events.iter().map(|e| e.effect.tag()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), 10);
    }

    #[test]
    fn test_broken_data_falls_back() {
        let events = field_events_or_fallback("[[events]]\nname = \"Swamp\"\neffect = \"quicksand\"\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].effect, FieldEffect::AllAttackPlus1);
    }
}
