//! Enemy tactic selection

use crate::battle::{BattleState, FieldEffect};
use crate::card::{TacticEffect, TacticKind};
use crate::config::AiConstants;
use crate::types::Side;

/// Thresholds steering [`select_ai_tactic_with`]
///
/// The defaults are placeholder balance values.
#[derive(Debug, Clone, PartialEq)]
pub struct AiPolicy {
    pub heal_threshold: f64,
    pub early_turns: u32,
    pub aoe_min_targets: usize,
}

impl Default for AiPolicy {
    fn default() -> Self {
        AiPolicy::from(&AiConstants::default())
    }
}

impl From<&AiConstants> for AiPolicy {
    fn from(constants: &AiConstants) -> Self {
        AiPolicy {
            heal_threshold: constants.heal_threshold,
            early_turns: constants.early_turns,
            aoe_min_targets: constants.aoe_min_targets,
        }
    }
}

const SETUP_ORDER: [TacticKind; 4] = [TacticKind::Taunt, TacticKind::Buff, TacticKind::Ambush, TacticKind::Counter];
const AREA_ORDER: [TacticKind; 2] = [TacticKind::Rockfall, TacticKind::Chain];

/// Hand index the enemy should play now, with the default policy
pub fn select_ai_tactic(state: &BattleState) -> Option<usize> {
    select_ai_tactic_with(state, &AiPolicy::default())
}

/// Hand index the enemy should play now
///
/// First matching rule wins, ties go to the lowest hand index:
/// 1. an ally below the heal threshold: heal
/// 2. turns 1 to `early_turns`: taunt, buff, ambush, counter
/// 3. enough alive opponents: rockfall, chain
/// 4. the strongest damage or fire tactic (fire is skipped when negated)
pub fn select_ai_tactic_with(state: &BattleState, policy: &AiPolicy) -> Option<usize> {
    let hand = state.tactics(Side::Enemy);
    if state.is_over() || hand.is_empty() {
        return None;
    }
    let first_of = |kind: TacticKind| hand.iter().position(|t| t.effect.kind() == kind);

    let wounded = state
        .warriors(Side::Enemy)
        .iter()
        .any(|w| w.is_alive && w.hp_ratio() < policy.heal_threshold);
    if wounded {
        if let Some(index) = first_of(TacticKind::Heal) {
            return Some(index);
        }
    }

    if state.turn_number <= policy.early_turns {
        if let Some(index) = SETUP_ORDER.iter().find_map(|kind| first_of(*kind)) {
            return Some(index);
        }
    }

    if state.alive_count(Side::Player) >= policy.aoe_min_targets {
        if let Some(index) = AREA_ORDER.iter().find_map(|kind| first_of(*kind)) {
            return Some(index);
        }
    }

    let field = state.field_effect();
    let mut best: Option<(usize, i32)> = None;
    for (index, tactic) in hand.iter().enumerate() {
        let amount = match tactic.effect {
            TacticEffect::Damage { amount } => amount,
            TacticEffect::Fire { .. } if field == Some(FieldEffect::NoFire) => continue,
            TacticEffect::Fire { amount } => field.map_or(amount, |e| e.fire_amount(amount)),
            _ => continue,
        };
        if best.map_or(true, |(_, top)| amount > top) {
            best = Some((index, amount));
        }
    }
    best.map(|(index, _)| index)
}
