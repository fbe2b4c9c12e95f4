//! Battle balance constants

use serde::{Deserialize, Serialize};

/// Tunable battle constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConstants {
    #[serde(default)]
    pub enhancement: EnhancementConstants,
    #[serde(default)]
    pub difficulty: DifficultyConstants,
    #[serde(default)]
    pub ai: AiConstants,
    /// Turn cap used when combat options do not set one
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
}

impl Default for BattleConstants {
    fn default() -> Self {
        BattleConstants {
            enhancement: EnhancementConstants::default(),
            difficulty: DifficultyConstants::default(),
            ai: AiConstants::default(),
            max_turns: default_max_turns(),
        }
    }
}

impl BattleConstants {
    /// Parse constants from TOML; missing fields take their defaults
    pub fn from_toml(content: &str) -> Result<Self, super::ConfigError> {
        super::parse_toml(content)
    }
}

fn default_max_turns() -> u32 {
    50
}

/// Stat growth per enhancement level of an owned warrior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementConstants {
    #[serde(default = "default_attack_per_level")]
    pub attack_per_level: i32,
    /// One defense point every this many levels
    #[serde(default = "default_defense_level_step")]
    pub defense_level_step: u32,
    #[serde(default = "default_hp_per_level")]
    pub hp_per_level: i32,
}

impl Default for EnhancementConstants {
    fn default() -> Self {
        EnhancementConstants {
            attack_per_level: 1,
            defense_level_step: 2,
            hp_per_level: 2,
        }
    }
}

fn default_attack_per_level() -> i32 {
    1
}
fn default_defense_level_step() -> u32 {
    2
}
fn default_hp_per_level() -> i32 {
    2
}

impl EnhancementConstants {
    /// (attack, defense, hp) bonus for `level`
    pub fn bonus(&self, level: u32) -> (i32, i32, i32) {
        let defense = if self.defense_level_step == 0 {
            0
        } else {
            clamp_i32(level / self.defense_level_step)
        };
        let level = clamp_i32(level);
        (
            level.saturating_mul(self.attack_per_level),
            defense,
            level.saturating_mul(self.hp_per_level),
        )
    }
}

fn clamp_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Enemy scaling keyed to the player's accumulated wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConstants {
    /// One attack point every this many wins
    #[serde(default = "default_attack_every_wins")]
    pub attack_every_wins: u32,
    /// One defense point every this many wins
    #[serde(default = "default_defense_every_wins")]
    pub defense_every_wins: u32,
    #[serde(default = "default_hp_per_win")]
    pub hp_per_win: i32,
}

impl Default for DifficultyConstants {
    fn default() -> Self {
        DifficultyConstants {
            attack_every_wins: 2,
            defense_every_wins: 3,
            hp_per_win: 1,
        }
    }
}

fn default_attack_every_wins() -> u32 {
    2
}
fn default_defense_every_wins() -> u32 {
    3
}
fn default_hp_per_win() -> i32 {
    1
}

impl DifficultyConstants {
    /// (attack, defense, hp) bonus for an enemy after `wins` victories
    pub fn bonus(&self, wins: u32) -> (i32, i32, i32) {
        let step = |every: u32| if every == 0 { 0 } else { clamp_i32(wins / every) };
        (
            step(self.attack_every_wins),
            step(self.defense_every_wins),
            clamp_i32(wins).saturating_mul(self.hp_per_win),
        )
    }
}

/// Enemy tactic policy thresholds
///
/// Placeholder balance values, tune freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConstants {
    /// Heal when an ally's hp ratio drops below this
    #[serde(default = "default_heal_threshold")]
    pub heal_threshold: f64,
    /// Turns during which setup tactics are preferred
    #[serde(default = "default_early_turns")]
    pub early_turns: u32,
    /// Alive opponents needed before area tactics are preferred
    #[serde(default = "default_aoe_min_targets")]
    pub aoe_min_targets: usize,
}

impl Default for AiConstants {
    fn default() -> Self {
        AiConstants {
            heal_threshold: 0.4,
            early_turns: 2,
            aoe_min_targets: 2,
        }
    }
}

fn default_heal_threshold() -> f64 {
    0.4
}
fn default_early_turns() -> u32 {
    2
}
fn default_aoe_min_targets() -> usize {
    2
}
