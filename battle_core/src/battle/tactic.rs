//! Tactic application - play one card from a side's hand

use super::action::{BattleAction, TacticTarget};
use super::field_event::FieldEffect;
use super::state::BattleState;
use super::status::{apply_status, StatusEffect};
use super::targeting::{alive_in_lane_order, get_forecast_target};
use crate::card::TacticEffect;
use crate::types::Side;
use log::debug;

/// Result of [`apply_tactic`]
#[derive(Debug, Clone, PartialEq)]
pub struct TacticOutcome {
    pub state: BattleState,
    /// `None` when nothing was played
    pub action: Option<BattleAction>,
}

/// Play the tactic at `index` in `side`'s hand
///
/// An index outside the hand, or a battle that is already over, returns the
/// state unchanged with no action. Otherwise the card leaves the hand, its
/// effect resolves, the action is appended to the log and the phase is
/// re-evaluated.
pub fn apply_tactic(state: &BattleState, side: Side, index: usize) -> TacticOutcome {
    let mut next = state.clone();
    let action = cast_tactic(&mut next, side, index);
    match action {
        Some(action) => {
            next.log.push(action.clone());
            TacticOutcome {
                state: next,
                action: Some(action),
            }
        }
        None => TacticOutcome {
            state: state.clone(),
            action: None,
        },
    }
}

/// Resolve a tactic in place without touching the log
pub(crate) fn cast_tactic(state: &mut BattleState, side: Side, index: usize) -> Option<BattleAction> {
    if state.is_over() || index >= state.tactics(side).len() {
        return None;
    }

    let card = state.tactics_mut(side).remove(index);
    let field = state.field_effect();
    let opponent = side.opponent();

    let mut magnitude = card.effect.magnitude();
    let targets = match card.effect {
        TacticEffect::Damage { amount } => strike_forecast(state, opponent, amount),
        TacticEffect::Fire { amount } => {
            magnitude = field.map_or(amount, |e| e.fire_amount(amount));
            strike_forecast(state, opponent, magnitude)
        }
        TacticEffect::Heal { amount } => heal_most_wounded(state, side, amount),
        TacticEffect::Buff { attack, defense, lane } => {
            let mut targets = Vec::new();
            for warrior in state.warriors_mut(side).iter_mut() {
                if !warrior.is_alive || lane.map_or(false, |l| l != warrior.lane) {
                    continue;
                }
                warrior.current_attack = warrior.current_attack.saturating_add(attack);
                warrior.current_defense = warrior.current_defense.saturating_add(defense);
                targets.push(TacticTarget {
                    warrior: warrior.reference(side),
                    amount: attack + defense,
                    hp_after: warrior.hp,
                });
            }
            targets
        }
        TacticEffect::Taunt { turns } => {
            let sturdiest = alive_in_lane_order(state.warriors(side))
                .into_iter()
                .fold(None::<usize>, |best, i| match best {
                    Some(b) if state.warriors(side)[b].current_defense >= state.warriors(side)[i].current_defense => {
                        Some(b)
                    }
                    _ => Some(i),
                });
            grant_status(state, side, sturdiest, StatusEffect::taunt(turns))
        }
        TacticEffect::Chain { amount, hits } => {
            let indices: Vec<usize> = alive_in_lane_order(state.warriors(opponent))
                .into_iter()
                .take(hits as usize)
                .collect();
            strike_all(state, opponent, &indices, amount)
        }
        TacticEffect::Rockfall { amount } => {
            let indices = alive_in_lane_order(state.warriors(opponent));
            strike_all(state, opponent, &indices, amount)
        }
        TacticEffect::Counter { amount, turns } => {
            let guarded = get_forecast_target(state.warriors(side));
            grant_status(state, side, guarded, StatusEffect::counter(amount, turns))
        }
        TacticEffect::Ambush { turns } => {
            let layers = if field == Some(FieldEffect::AmbushBoost) { 2 } else { 1 };
            let mut targets = Vec::new();
            for warrior in state.warriors_mut(side).iter_mut().filter(|w| w.is_alive) {
                for _ in 0..layers {
                    apply_status(&mut warrior.status_effects, StatusEffect::evasion(turns));
                }
                targets.push(TacticTarget {
                    warrior: warrior.reference(side),
                    amount: layers,
                    hp_after: warrior.hp,
                });
            }
            targets
        }
    };

    debug!(
        "turn {}: {:?} casts {} ({:?}) on {} target(s)",
        state.turn_number,
        side,
        card.name,
        card.effect.kind(),
        targets.len()
    );
    state.refresh_phase();

    Some(BattleAction::TacticCast {
        turn: state.turn_number,
        side,
        card_id: card.id,
        name: card.name,
        kind: card.effect.kind(),
        magnitude,
        targets,
    })
}

fn strike_forecast(state: &mut BattleState, target_side: Side, amount: i32) -> Vec<TacticTarget> {
    match get_forecast_target(state.warriors(target_side)) {
        Some(index) => strike_all(state, target_side, &[index], amount),
        None => Vec::new(),
    }
}

fn strike_all(state: &mut BattleState, target_side: Side, indices: &[usize], amount: i32) -> Vec<TacticTarget> {
    let warriors = state.warriors_mut(target_side);
    let mut targets = Vec::with_capacity(indices.len());
    for &i in indices {
        if let Some(warrior) = warriors.get_mut(i) {
            let dealt = warrior.take_damage(amount);
            targets.push(TacticTarget {
                warrior: warrior.reference(target_side),
                amount: dealt,
                hp_after: warrior.hp,
            });
        }
    }
    targets
}

fn heal_most_wounded(state: &mut BattleState, side: Side, amount: i32) -> Vec<TacticTarget> {
    let warriors = state.warriors_mut(side);
    let most_wounded = alive_in_lane_order(warriors)
        .into_iter()
        .fold(None::<usize>, |best, i| match best {
            Some(b) if warriors[b].hp_ratio() <= warriors[i].hp_ratio() => Some(b),
            _ => Some(i),
        });
    let Some(index) = most_wounded else {
        return Vec::new();
    };
    let warrior = &mut warriors[index];
    let healed = warrior.heal(amount);
    vec![TacticTarget {
        warrior: warrior.reference(side),
        amount: healed,
        hp_after: warrior.hp,
    }]
}

fn grant_status(state: &mut BattleState, side: Side, index: Option<usize>, status: StatusEffect) -> Vec<TacticTarget> {
    let Some(warrior) = index.and_then(|i| state.warriors_mut(side).get_mut(i)) else {
        return Vec::new();
    };
    let amount = status.magnitude.max(status.turns_left);
    apply_status(&mut warrior.status_effects, status);
    vec![TacticTarget {
        warrior: warrior.reference(side),
        amount,
        hp_after: warrior.hp,
    }]
}
