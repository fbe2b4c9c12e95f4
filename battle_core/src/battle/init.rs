//! Battle setup - formations, enemy scaling and the field event draw

use super::field_event::BattleFieldEvent;
use super::state::{BattleState, BattleWarrior};
use crate::card::{CardCatalog, Deck, OwnedCollection, TacticCard};
use crate::config::{default_field_events, BattleConstants};
use crate::rng::GameRng;
use crate::types::{CardId, Lane};
use log::{info, warn};
use std::collections::HashSet;

/// How the enemy side is assembled
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EnemyFormation {
    /// The player's own warriors and tactics at enhancement 0
    #[default]
    Mirror,
    /// A fixed opponent deck, also at enhancement 0
    Deck(Deck),
}

/// Setup flags for [`init_battle`]
#[derive(Debug, Clone, PartialEq)]
pub struct BattleOptions {
    /// When false no field event is drawn
    pub field_events_enabled: bool,
    /// Use this event instead of drawing one
    pub forced_event: Option<BattleFieldEvent>,
    pub enemy: EnemyFormation,
    pub constants: BattleConstants,
    /// Catalog the event is drawn from
    pub field_events: Vec<BattleFieldEvent>,
}

impl Default for BattleOptions {
    fn default() -> Self {
        BattleOptions {
            field_events_enabled: true,
            forced_event: None,
            enemy: EnemyFormation::Mirror,
            constants: BattleConstants::default(),
            field_events: default_field_events(),
        }
    }
}

impl BattleOptions {
    pub fn without_field_events(mut self) -> Self {
        self.field_events_enabled = false;
        self
    }

    pub fn with_forced_event(mut self, event: BattleFieldEvent) -> Self {
        self.forced_event = Some(event);
        self
    }

    pub fn with_enemy(mut self, enemy: EnemyFormation) -> Self {
        self.enemy = enemy;
        self
    }

    pub fn with_constants(mut self, constants: BattleConstants) -> Self {
        self.constants = constants;
        self
    }
}

/// Build the opening state of a battle
///
/// Player warriors get their enhancement bonus from `owned`; the enemy gets
/// the difficulty bonus for `wins`. Deck entries that do not resolve to a
/// warrior, and second warriors in an occupied lane, are skipped. The only
/// randomness is the field event draw through `rng`.
pub fn init_battle(
    deck: &Deck,
    owned: &OwnedCollection,
    wins: u32,
    catalog: &CardCatalog,
    options: &BattleOptions,
    rng: &mut impl GameRng,
) -> BattleState {
    let enhancement = &options.constants.enhancement;
    let player_warriors = build_formation(deck, catalog, |id| enhancement.bonus(owned.level_of(id)));

    let enemy_deck = match &options.enemy {
        EnemyFormation::Mirror => deck,
        EnemyFormation::Deck(enemy) => enemy,
    };
    let difficulty = options.constants.difficulty.bonus(wins);
    let enemy_warriors = build_formation(enemy_deck, catalog, |_| difficulty);

    let mut state = BattleState::new(player_warriors, enemy_warriors);
    state.player_tactics = build_hand(deck, catalog);
    state.enemy_tactics = build_hand(enemy_deck, catalog);
    state.wins = wins;
    state.field_event = draw_field_event(options, rng);

    info!(
        "battle start: {} vs {} warriors, wins {}, field event {}",
        state.player_warriors.len(),
        state.enemy_warriors.len(),
        wins,
        state.field_event.as_ref().map_or("none", |e| e.name.as_str())
    );
    state
}

fn build_formation(
    deck: &Deck,
    catalog: &CardCatalog,
    bonus_for: impl Fn(&CardId) -> (i32, i32, i32),
) -> Vec<BattleWarrior> {
    let mut lanes: HashSet<Lane> = HashSet::new();
    let mut warriors = Vec::new();

    for slot in &deck.warriors {
        let Some(card) = catalog.warrior(&slot.card_id) else {
            warn!("deck {}: {} is not a known warrior, skipped", deck.name, slot.card_id);
            continue;
        };
        let lane = slot.lane.unwrap_or(card.lane);
        if !lanes.insert(lane) {
            warn!("deck {}: lane {} already taken, {} skipped", deck.name, lane.name(), slot.card_id);
            continue;
        }
        warriors.push(BattleWarrior::from_card(card, lane, bonus_for(&slot.card_id)));
    }

    warriors.sort_by_key(|w| w.lane);
    warriors
}

fn build_hand(deck: &Deck, catalog: &CardCatalog) -> Vec<TacticCard> {
    deck.tactics
        .iter()
        .filter_map(|id| {
            let tactic = catalog.tactic(id).cloned();
            if tactic.is_none() {
                warn!("deck {}: {} is not a known tactic, skipped", deck.name, id);
            }
            tactic
        })
        .collect()
}

fn draw_field_event(options: &BattleOptions, rng: &mut impl GameRng) -> Option<BattleFieldEvent> {
    if !options.field_events_enabled {
        return None;
    }
    if let Some(event) = &options.forced_event {
        return Some(event.clone());
    }
    rng.random_pick(&options.field_events).cloned()
}
