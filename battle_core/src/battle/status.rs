//! Status effects on battle warriors

use serde::{Deserialize, Serialize};

/// Kind of status a warrior can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Forces opposing attacks onto this warrior
    Taunt,
    /// Negates the next incoming hit
    Evasion,
    /// Strikes back at the next attacker
    Counter,
}

/// A timed status on one warrior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Turn cycles remaining; removed once this reaches 0
    pub turns_left: i32,
    /// Counter damage, unused by the other kinds
    #[serde(default)]
    pub magnitude: i32,
}

impl StatusEffect {
    pub fn taunt(turns: i32) -> Self {
        StatusEffect {
            kind: StatusKind::Taunt,
            turns_left: turns,
            magnitude: 0,
        }
    }

    pub fn evasion(turns: i32) -> Self {
        StatusEffect {
            kind: StatusKind::Evasion,
            turns_left: turns,
            magnitude: 0,
        }
    }

    pub fn counter(amount: i32, turns: i32) -> Self {
        StatusEffect {
            kind: StatusKind::Counter,
            turns_left: turns,
            magnitude: amount,
        }
    }

    pub fn is_active(&self) -> bool {
        self.turns_left > 0
    }
}

/// Add a status, respecting stacking rules
///
/// Evasion stacks, one hit negated per entry. Taunt and counter refresh the
/// existing entry to the longer duration and the newer magnitude.
pub fn apply_status(effects: &mut Vec<StatusEffect>, effect: StatusEffect) {
    if !effect.is_active() {
        return;
    }
    match effect.kind {
        StatusKind::Evasion => effects.push(effect),
        StatusKind::Taunt | StatusKind::Counter => {
            if let Some(existing) = effects.iter_mut().find(|e| e.kind == effect.kind) {
                existing.turns_left = existing.turns_left.max(effect.turns_left);
                existing.magnitude = effect.magnitude;
            } else {
                effects.push(effect);
            }
        }
    }
}

pub fn has_status(effects: &[StatusEffect], kind: StatusKind) -> bool {
    effects.iter().any(|e| e.kind == kind && e.is_active())
}

/// Remove and return the first active status of `kind`
pub fn consume_status(effects: &mut Vec<StatusEffect>, kind: StatusKind) -> Option<StatusEffect> {
    let pos = effects.iter().position(|e| e.kind == kind && e.is_active())?;
    Some(effects.remove(pos))
}

/// Advance every status by one turn cycle
///
/// Returns the kinds that expired, in list order.
pub fn tick_statuses(effects: &mut Vec<StatusEffect>) -> Vec<StatusKind> {
    for effect in effects.iter_mut() {
        effect.turns_left -= 1;
    }

    let expired = effects
        .iter()
        .filter(|e| !e.is_active())
        .map(|e| e.kind)
        .collect();

    effects.retain(|e| e.is_active());

    expired
}
