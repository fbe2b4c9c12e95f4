//! Battle engine - setup, turn resolution and tactics
//!
//! All operations are pure value transformations: they take `&BattleState`
//! and hand back a fresh state plus the actions that produced it.

mod action;
mod combat;
mod field_event;
mod init;
mod state;
mod status;
mod tactic;
mod targeting;

pub use action::{BattleAction, TacticTarget, WarriorRef};
pub use combat::{resolve_combat, CombatOptions, CombatOutcome};
pub use field_event::{BattleFieldEvent, FieldEffect};
pub use init::{init_battle, BattleOptions, EnemyFormation};
pub use state::{BattlePhase, BattleState, BattleWarrior};
pub use status::{apply_status, consume_status, has_status, tick_statuses, StatusEffect, StatusKind};
pub use tactic::{apply_tactic, TacticOutcome};
pub use targeting::{
    alive_in_lane_order, attack_damage, effective_attack, effective_defense, get_attacker, get_first_alive,
    get_forecast_target,
};
