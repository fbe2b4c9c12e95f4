//! battle_core - Lane battle engine and pack opening for a warrior card game
//!
//! This library provides:
//! - Cards: warrior and tactic definitions, owned cards and decks
//! - Gacha: pack opening with guaranteed grades and rate tables
//! - Battle: setup, turn-cycle combat, tactics, status effects and field events
//! - AI: the enemy's tactic selection policy
//! - GameRng: the injected random source every draw goes through

pub mod ai;
pub mod battle;
pub mod card;
pub mod config;
pub mod gacha;
pub mod prelude;
pub mod rng;
pub mod types;

// Re-export core types for convenience
pub use ai::{select_ai_tactic, select_ai_tactic_with, AiPolicy};
pub use battle::{
    apply_tactic, init_battle, resolve_combat, BattleAction, BattleFieldEvent, BattleOptions, BattlePhase,
    BattleState, BattleWarrior, CombatOptions, CombatOutcome, EnemyFormation, FieldEffect, StatusEffect,
    StatusKind, TacticOutcome, WarriorRef,
};
pub use card::{Card, CardCatalog, Deck, DeckError, OwnedCard, OwnedCollection, TacticCard, TacticEffect, WarriorCard};
pub use config::{default_catalog, default_field_events, default_pack_table, ConfigError};
pub use gacha::{open_pack, open_pack_default, PackInfo, PackTable, PackType};
pub use rng::{create_seeded_random, DefaultRandom, GameRng, SeededRandom};
pub use types::{CardId, Faction, Grade, Lane, Side};
