//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::types::{CardId, Faction, Grade, Lane, Side};

// Cards
pub use crate::card::{Card, CardCatalog, Deck, OwnedCollection, TacticCard, TacticEffect, WarriorCard};

// Gacha
pub use crate::gacha::{open_pack, PackTable, PackType};

// Battle
pub use crate::battle::{
    apply_tactic, init_battle, resolve_combat, BattleAction, BattleOptions, BattlePhase, BattleState, CombatOptions,
};
pub use crate::ai::select_ai_tactic;

// Randomness
pub use crate::rng::{DefaultRandom, GameRng, SeededRandom};

// Config
pub use crate::config::{default_catalog, default_field_events, default_pack_table, BattleConstants};
