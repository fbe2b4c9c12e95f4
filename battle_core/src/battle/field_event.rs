//! Battlefield events - one battle-wide modifier chosen at setup

use crate::config::ConfigError;
use crate::types::{Faction, Lane};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of field modifiers, written as tags in data files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldEffect {
    /// Fire tactics deal no damage
    NoFire,
    FrontDefensePlus2,
    AllDefensePlus1,
    AllAttackPlus1,
    /// +1 attack for warriors of the faction
    FactionBonus(Faction),
    /// Front lanes cannot attack on turn 1
    SkipFrontFirstTurn,
    /// Fire tactics deal double damage
    FireBoost,
    /// Ambush grants a second evasion
    AmbushBoost,
    /// +1 attack for the side with more warriors standing
    MoraleBonus,
    /// Back lane attack -2, never below 1
    BackAttackMinus2,
}

const FACTION_BONUS_PREFIX: &str = "faction_bonus:";

impl FieldEffect {
    /// Flat defense bonus for a warrior standing in `lane`
    pub fn defense_bonus(&self, lane: Lane) -> i32 {
        match self {
            FieldEffect::FrontDefensePlus2 if lane == Lane::Front => 2,
            FieldEffect::AllDefensePlus1 => 1,
            _ => 0,
        }
    }

    /// Flat attack bonus for a warrior of `faction`
    pub fn attack_bonus(&self, faction: Faction) -> i32 {
        match self {
            FieldEffect::AllAttackPlus1 => 1,
            FieldEffect::FactionBonus(f) if *f == faction => 1,
            _ => 0,
        }
    }

    /// Attack after the lane penalty, if any
    pub fn apply_lane_penalty(&self, lane: Lane, attack: i32) -> i32 {
        match self {
            FieldEffect::BackAttackMinus2 if lane == Lane::Back => attack.saturating_sub(2).max(1),
            _ => attack,
        }
    }

    /// Amount a fire tactic actually deals
    pub fn fire_amount(&self, amount: i32) -> i32 {
        match self {
            FieldEffect::NoFire => 0,
            FieldEffect::FireBoost => amount.saturating_mul(2),
            _ => amount,
        }
    }

    pub fn tag(&self) -> String {
        match self {
            FieldEffect::NoFire => "no_fire".to_string(),
            FieldEffect::FrontDefensePlus2 => "front_defense_plus_2".to_string(),
            FieldEffect::AllDefensePlus1 => "all_defense_plus_1".to_string(),
            FieldEffect::AllAttackPlus1 => "all_attack_plus_1".to_string(),
            FieldEffect::FactionBonus(f) => format!("{}{}", FACTION_BONUS_PREFIX, f.name()),
            FieldEffect::SkipFrontFirstTurn => "skip_front_first_turn".to_string(),
            FieldEffect::FireBoost => "fire_boost".to_string(),
            FieldEffect::AmbushBoost => "ambush_boost".to_string(),
            FieldEffect::MoraleBonus => "morale_bonus".to_string(),
            FieldEffect::BackAttackMinus2 => "back_attack_minus_2".to_string(),
        }
    }
}

impl FromStr for FieldEffect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if let Some(faction) = tag.strip_prefix(FACTION_BONUS_PREFIX) {
            return Faction::parse(faction)
                .map(FieldEffect::FactionBonus)
                .ok_or_else(|| ConfigError::UnknownFieldEffect(s.to_string()));
        }
        match tag {
            "no_fire" => Ok(FieldEffect::NoFire),
            "front_defense_plus_2" => Ok(FieldEffect::FrontDefensePlus2),
            "all_defense_plus_1" => Ok(FieldEffect::AllDefensePlus1),
            "all_attack_plus_1" => Ok(FieldEffect::AllAttackPlus1),
            "skip_front_first_turn" => Ok(FieldEffect::SkipFrontFirstTurn),
            "fire_boost" => Ok(FieldEffect::FireBoost),
            "ambush_boost" => Ok(FieldEffect::AmbushBoost),
            "morale_bonus" => Ok(FieldEffect::MoraleBonus),
            "back_attack_minus_2" => Ok(FieldEffect::BackAttackMinus2),
            _ => Err(ConfigError::UnknownFieldEffect(s.to_string())),
        }
    }
}

impl TryFrom<String> for FieldEffect {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldEffect> for String {
    fn from(effect: FieldEffect) -> Self {
        effect.tag()
    }
}

impl fmt::Display for FieldEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

/// A named field event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleFieldEvent {
    pub name: String,
    pub description: String,
    pub effect: FieldEffect,
}

impl BattleFieldEvent {
    pub fn new(name: impl Into<String>, description: impl Into<String>, effect: FieldEffect) -> Self {
        BattleFieldEvent {
            name: name.into(),
            description: description.into(),
            effect,
        }
    }
}
