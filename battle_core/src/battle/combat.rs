//! Combat resolution - the turn-cycle state machine

use super::action::BattleAction;
use super::state::{BattlePhase, BattleState};
use super::status::{consume_status, tick_statuses, StatusKind};
use super::tactic::cast_tactic;
use super::targeting::{attack_damage, effective_attack, effective_defense, get_attacker, get_forecast_target};
use crate::ai::{select_ai_tactic_with, AiPolicy};
use crate::config::BattleConstants;
use crate::types::Side;
use log::{debug, info};

/// Knobs for [`resolve_combat`]
#[derive(Debug, Clone, PartialEq)]
pub struct CombatOptions {
    /// Turn cycles to run in this call; `None` runs to the end
    pub turns: Option<u32>,
    /// The battle is a draw once this turn number is reached
    pub max_turns: u32,
    /// Whether the enemy may play one tactic per cycle
    pub enemy_tactics: bool,
    pub ai: AiPolicy,
}

impl Default for CombatOptions {
    fn default() -> Self {
        Self::from_constants(&BattleConstants::default())
    }
}

impl CombatOptions {
    pub fn from_constants(constants: &BattleConstants) -> Self {
        CombatOptions {
            turns: None,
            max_turns: constants.max_turns,
            enemy_tactics: true,
            ai: AiPolicy::from(&constants.ai),
        }
    }

    /// Run at most `turns` cycles per call
    pub fn stepping(turns: u32) -> Self {
        CombatOptions {
            turns: Some(turns),
            ..Self::default()
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn without_enemy_tactics(mut self) -> Self {
        self.enemy_tactics = false;
        self
    }
}

/// Result of [`resolve_combat`]
#[derive(Debug, Clone, PartialEq)]
pub struct CombatOutcome {
    pub state: BattleState,
    /// Actions produced by this call only, oldest first
    pub actions: Vec<BattleAction>,
}

/// Advance a battle by whole turn cycles
///
/// Each cycle:
/// 1. Increments the turn number; turn 1 notes the active field event
/// 2. Lets the enemy play one tactic (if enabled)
/// 3. The player's attacker strikes, then the enemy's if the battle goes on
/// 4. Ticks every status effect and prunes the expired ones
///
/// Stops on a terminal phase, after `options.turns` cycles, or at
/// `options.max_turns` which ends the battle in a draw. A state that is
/// already over comes back unchanged with no actions.
pub fn resolve_combat(state: &BattleState, options: &CombatOptions) -> CombatOutcome {
    if state.is_over() {
        return CombatOutcome {
            state: state.clone(),
            actions: Vec::new(),
        };
    }

    let mut next = state.clone();
    let mut actions = Vec::new();

    next.refresh_phase();
    if next.is_over() {
        end_battle(&mut next, &mut actions);
        return CombatOutcome { state: next, actions };
    }

    let mut cycles = 0;
    while !next.is_over() {
        if next.turn_number >= options.max_turns {
            next.phase = BattlePhase::Draw;
            end_battle(&mut next, &mut actions);
            break;
        }
        if options.turns.map_or(false, |limit| cycles >= limit) {
            break;
        }

        cycles += 1;
        run_cycle(&mut next, options, &mut actions);

        if !next.is_over() && next.turn_number >= options.max_turns {
            next.phase = BattlePhase::Draw;
        }
        if next.is_over() {
            end_battle(&mut next, &mut actions);
        }
    }

    CombatOutcome { state: next, actions }
}

fn record(state: &mut BattleState, actions: &mut Vec<BattleAction>, action: BattleAction) {
    state.log.push(action.clone());
    actions.push(action);
}

fn end_battle(state: &mut BattleState, actions: &mut Vec<BattleAction>) {
    info!("battle over on turn {}: {:?}", state.turn_number, state.phase);
    let action = BattleAction::BattleEnd {
        turn: state.turn_number,
        phase: state.phase,
    };
    record(state, actions, action);
}

fn run_cycle(state: &mut BattleState, options: &CombatOptions, actions: &mut Vec<BattleAction>) {
    state.turn_number += 1;
    let turn = state.turn_number;

    if turn == 1 {
        if let Some(event) = state.field_event.clone() {
            record(
                state,
                actions,
                BattleAction::FieldEventNote {
                    turn,
                    name: event.name,
                    description: event.description,
                    effect: event.effect,
                },
            );
        }
    }

    if options.enemy_tactics {
        if let Some(index) = select_ai_tactic_with(state, &options.ai) {
            if let Some(action) = cast_tactic(state, Side::Enemy, index) {
                record(state, actions, action);
            }
        }
    }

    for side in [Side::Player, Side::Enemy] {
        if state.is_over() {
            return;
        }
        side_attacks(state, side, turn, actions);
        state.refresh_phase();
    }

    if state.is_over() {
        return;
    }

    for side in [Side::Player, Side::Enemy] {
        for i in 0..state.warriors(side).len() {
            let expired = tick_statuses(&mut state.warriors_mut(side)[i].status_effects);
            for kind in expired {
                let warrior = state.warriors(side)[i].reference(side);
                record(state, actions, BattleAction::StatusExpired { turn, warrior, kind });
            }
        }
    }
}

fn side_attacks(state: &mut BattleState, side: Side, turn: u32, actions: &mut Vec<BattleAction>) {
    let opponent = side.opponent();
    let Some(attacker_index) = get_attacker(state.warriors(side), turn, state.field_effect()) else {
        debug!("turn {}: {:?} has no warrior able to attack", turn, side);
        return;
    };
    let Some(target_index) = get_forecast_target(state.warriors(opponent)) else {
        return;
    };

    let attacker = state.warriors(side)[attacker_index].reference(side);
    let target = state.warriors(opponent)[target_index].reference(opponent);

    let evaded = consume_status(
        &mut state.warriors_mut(opponent)[target_index].status_effects,
        StatusKind::Evasion,
    );
    if evaded.is_some() {
        debug!("turn {}: {} evades {}", turn, target.card_id, attacker.card_id);
        record(state, actions, BattleAction::Evaded { turn, attacker, target });
        return;
    }

    let damage = attack_damage(
        effective_attack(state, side, attacker_index),
        effective_defense(state, opponent, target_index),
    );
    let defender = &mut state.warriors_mut(opponent)[target_index];
    defender.take_damage(damage);
    let target_hp = defender.hp;
    let killed = !defender.is_alive;
    let counter = if killed {
        None
    } else {
        consume_status(&mut defender.status_effects, StatusKind::Counter)
    };

    debug!(
        "turn {}: {} hits {} for {} ({} hp left)",
        turn, attacker.card_id, target.card_id, damage, target_hp
    );
    record(
        state,
        actions,
        BattleAction::Attack {
            turn,
            attacker: attacker.clone(),
            target: target.clone(),
            damage,
            target_hp,
            killed,
        },
    );

    if let Some(counter) = counter {
        let striker = &mut state.warriors_mut(side)[attacker_index];
        let dealt = striker.take_damage(counter.magnitude);
        let striker_hp = striker.hp;
        let striker_killed = !striker.is_alive;
        debug!("turn {}: {} counters {} for {}", turn, target.card_id, attacker.card_id, dealt);
        record(
            state,
            actions,
            BattleAction::Counter {
                turn,
                source: target,
                target: attacker,
                damage: dealt,
                target_hp: striker_hp,
                killed: striker_killed,
            },
        );
    }
}
