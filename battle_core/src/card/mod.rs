//! Card definitions - warriors, tactics and their static catalog

mod catalog;
mod owned;

pub use catalog::CardCatalog;
pub use owned::{Deck, DeckError, DeckSlot, OwnedCard, OwnedCollection};

use crate::types::{CardId, Faction, Grade, Lane};
use serde::{Deserialize, Serialize};

/// A card definition, either a warrior or a tactic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Warrior(WarriorCard),
    Tactic(TacticCard),
}

impl Card {
    pub fn id(&self) -> &CardId {
        match self {
            Card::Warrior(w) => &w.id,
            Card::Tactic(t) => &t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Card::Warrior(w) => &w.name,
            Card::Tactic(t) => &t.name,
        }
    }

    pub fn grade(&self) -> Grade {
        match self {
            Card::Warrior(w) => w.grade,
            Card::Tactic(t) => t.grade,
        }
    }

    pub fn as_warrior(&self) -> Option<&WarriorCard> {
        match self {
            Card::Warrior(w) => Some(w),
            Card::Tactic(_) => None,
        }
    }

    pub fn as_tactic(&self) -> Option<&TacticCard> {
        match self {
            Card::Tactic(t) => Some(t),
            Card::Warrior(_) => None,
        }
    }
}

/// A combatant card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarriorCard {
    pub id: CardId,
    pub name: String,
    pub grade: Grade,
    pub attack: i32,
    pub defense: i32,
    pub hp: i32,
    /// Default lane when a deck slot does not choose one
    #[serde(default = "default_lane")]
    pub lane: Lane,
    #[serde(default = "default_faction")]
    pub faction: Faction,
}

fn default_lane() -> Lane {
    Lane::Front
}

fn default_faction() -> Faction {
    Faction::Neutral
}

/// A one-shot battle card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticCard {
    pub id: CardId,
    pub name: String,
    pub grade: Grade,
    pub effect: TacticEffect,
}

/// Closed set of tactic effects with their parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TacticEffect {
    /// Flat damage to the opposing forecast target
    Damage { amount: i32 },
    /// Flat damage that field events can double or negate
    Fire { amount: i32 },
    /// Heal the most wounded ally
    Heal { amount: i32 },
    /// Stat bonus for allies in a lane, or every lane when `lane` is absent
    Buff {
        #[serde(default)]
        attack: i32,
        #[serde(default)]
        defense: i32,
        #[serde(default)]
        lane: Option<Lane>,
    },
    /// Force enemy attacks onto the sturdiest ally
    Taunt { turns: i32 },
    /// Hit the first `hits` opponents in lane order
    Chain { amount: i32, hits: u32 },
    /// Hit every alive opponent
    Rockfall { amount: i32 },
    /// Arm the next-targeted ally to strike back
    Counter { amount: i32, turns: i32 },
    /// Team-wide evasion
    Ambush { turns: i32 },
}

/// Discriminator of [`TacticEffect`], used in actions and AI ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TacticKind {
    Damage,
    Fire,
    Heal,
    Buff,
    Taunt,
    Chain,
    Rockfall,
    Counter,
    Ambush,
}

impl TacticEffect {
    pub fn kind(&self) -> TacticKind {
        match self {
            TacticEffect::Damage { .. } => TacticKind::Damage,
            TacticEffect::Fire { .. } => TacticKind::Fire,
            TacticEffect::Heal { .. } => TacticKind::Heal,
            TacticEffect::Buff { .. } => TacticKind::Buff,
            TacticEffect::Taunt { .. } => TacticKind::Taunt,
            TacticEffect::Chain { .. } => TacticKind::Chain,
            TacticEffect::Rockfall { .. } => TacticKind::Rockfall,
            TacticEffect::Counter { .. } => TacticKind::Counter,
            TacticEffect::Ambush { .. } => TacticKind::Ambush,
        }
    }

    /// Headline number of the effect (damage, heal, bonus or duration)
    pub fn magnitude(&self) -> i32 {
        match self {
            TacticEffect::Damage { amount }
            | TacticEffect::Fire { amount }
            | TacticEffect::Heal { amount }
            | TacticEffect::Chain { amount, .. }
            | TacticEffect::Rockfall { amount }
            | TacticEffect::Counter { amount, .. } => *amount,
            TacticEffect::Buff { attack, defense, .. } => attack + defense,
            TacticEffect::Taunt { turns } | TacticEffect::Ambush { turns } => *turns,
        }
    }
}
