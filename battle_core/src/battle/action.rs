//! BattleAction - narration records produced by the engine

use super::field_event::FieldEffect;
use super::state::BattlePhase;
use super::status::StatusKind;
use crate::card::TacticKind;
use crate::types::{CardId, Lane, Side};
use serde::{Deserialize, Serialize};

/// Where a warrior stands, enough for a renderer to find it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarriorRef {
    pub side: Side,
    pub lane: Lane,
    pub card_id: CardId,
}

/// A warrior touched by a tactic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TacticTarget {
    pub warrior: WarriorRef,
    /// Damage dealt, hp healed, or stat points granted
    pub amount: i32,
    pub hp_after: i32,
}

/// One resolved engine effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleAction {
    Attack {
        turn: u32,
        attacker: WarriorRef,
        target: WarriorRef,
        damage: i32,
        target_hp: i32,
        killed: bool,
    },
    /// The target's evasion negated the hit
    Evaded {
        turn: u32,
        attacker: WarriorRef,
        target: WarriorRef,
    },
    /// A counter status struck back at the attacker
    Counter {
        turn: u32,
        source: WarriorRef,
        target: WarriorRef,
        damage: i32,
        target_hp: i32,
        killed: bool,
    },
    TacticCast {
        turn: u32,
        side: Side,
        card_id: CardId,
        name: String,
        kind: TacticKind,
        magnitude: i32,
        targets: Vec<TacticTarget>,
    },
    StatusExpired {
        turn: u32,
        warrior: WarriorRef,
        kind: StatusKind,
    },
    FieldEventNote {
        turn: u32,
        name: String,
        description: String,
        effect: FieldEffect,
    },
    BattleEnd {
        turn: u32,
        phase: BattlePhase,
    },
}

impl BattleAction {
    pub fn turn(&self) -> u32 {
        match self {
            BattleAction::Attack { turn, .. }
            | BattleAction::Evaded { turn, .. }
            | BattleAction::Counter { turn, .. }
            | BattleAction::TacticCast { turn, .. }
            | BattleAction::StatusExpired { turn, .. }
            | BattleAction::FieldEventNote { turn, .. }
            | BattleAction::BattleEnd { turn, .. } => *turn,
        }
    }

    pub fn is_battle_end(&self) -> bool {
        matches!(self, BattleAction::BattleEnd { .. })
    }
}
