//! Core types shared by the card, gacha and battle modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable identifier of a card definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        CardId(s.to_string())
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        CardId(s)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Battle lane, in targeting priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Front,
    Mid,
    Back,
}

impl Lane {
    /// All lanes, front first
    pub fn all() -> &'static [Lane] {
        &[Lane::Front, Lane::Mid, Lane::Back]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Lane::Front => "front",
            Lane::Mid => "mid",
            Lane::Back => "back",
        }
    }
}

/// Which side of the battle a warrior or tactic belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Card rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    Common = 1,
    Rare = 2,
    Hero = 3,
    Legend = 4,
}

impl Grade {
    /// All grades, rarest first (the order gacha bands are walked in)
    pub fn rarest_first() -> &'static [Grade] {
        &[Grade::Legend, Grade::Hero, Grade::Rare, Grade::Common]
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grade::Common => "common",
            Grade::Rare => "rare",
            Grade::Hero => "hero",
            Grade::Legend => "legend",
        }
    }
}

impl TryFrom<u8> for Grade {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Grade::Common),
            2 => Ok(Grade::Rare),
            3 => Ok(Grade::Hero),
            4 => Ok(Grade::Legend),
            other => Err(format!("grade must be 1-4, got {}", other)),
        }
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.value()
    }
}

/// Warrior allegiance, used by faction field events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Wei,
    Shu,
    Wu,
    Neutral,
}

impl Faction {
    pub fn name(&self) -> &'static str {
        match self {
            Faction::Wei => "wei",
            Faction::Shu => "shu",
            Faction::Wu => "wu",
            Faction::Neutral => "neutral",
        }
    }

    pub fn parse(s: &str) -> Option<Faction> {
        match s.to_ascii_lowercase().as_str() {
            "wei" => Some(Faction::Wei),
            "shu" => Some(Faction::Shu),
            "wu" => Some(Faction::Wu),
            "neutral" => Some(Faction::Neutral),
            _ => None,
        }
    }
}
