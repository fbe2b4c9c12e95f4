//! Batch simulations over packs and battles

use battle_core::gacha::grade_histogram;
use battle_core::{
    init_battle, open_pack, resolve_combat, BattleOptions, BattlePhase, Card, CardCatalog, CombatOptions,
    ConfigError, Deck, GameRng, Grade, Lane, OwnedCard, OwnedCollection, PackTable, PackType,
};

/// Tactics put in a generated starter deck
const STARTER_TACTICS: usize = 3;

/// Grade distribution over many opened packs
#[derive(Debug, Clone, PartialEq)]
pub struct DropRateSimulation {
    pub pack_type: PackType,
    pub packs_opened: u32,
    /// Cards pulled per grade, indexed by grade value - 1
    pub cards_by_grade: [usize; 4],
    pub total_cards: usize,
    /// Packs missing their guaranteed grade (only with empty pools)
    pub guarantee_misses: u32,
}

impl DropRateSimulation {
    /// Open `samples` packs and tally the grades
    pub fn run(
        pack_type: PackType,
        catalog: &CardCatalog,
        packs: &PackTable,
        samples: u32,
        rng: &mut impl GameRng,
    ) -> Result<Self, ConfigError> {
        let guaranteed = packs
            .get(pack_type)
            .map(|info| info.guaranteed_grade)
            .ok_or(ConfigError::MissingPackInfo(pack_type))?;

        let mut result = DropRateSimulation {
            pack_type,
            packs_opened: 0,
            cards_by_grade: [0; 4],
            total_cards: 0,
            guarantee_misses: 0,
        };

        for _ in 0..samples {
            let cards = open_pack(pack_type, catalog, packs, rng)?;
            let histogram = grade_histogram(&cards);
            for (total, count) in result.cards_by_grade.iter_mut().zip(histogram) {
                *total += count;
            }
            if histogram[(guaranteed.value() - 1) as usize] == 0 {
                result.guarantee_misses += 1;
            }
            result.total_cards += cards.len();
            result.packs_opened += 1;
        }

        Ok(result)
    }

    /// Percent of pulled cards that were `grade`
    pub fn share(&self, grade: Grade) -> f64 {
        if self.total_cards > 0 {
            self.cards_by_grade[(grade.value() - 1) as usize] as f64 / self.total_cards as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Average cards per pack
    pub fn avg_pack_size(&self) -> f64 {
        if self.packs_opened > 0 {
            self.total_cards as f64 / self.packs_opened as f64
        } else {
            0.0
        }
    }
}

/// Outcomes of many battles with the same deck
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WinRateSimulation {
    pub battles: u32,
    pub player_wins: u32,
    pub enemy_wins: u32,
    pub draws: u32,
    pub total_turns: u64,
}

impl WinRateSimulation {
    /// Fight `battles` battles, each with its own field event drawn from `rng`
    pub fn run(
        deck: &Deck,
        owned: &OwnedCollection,
        catalog: &CardCatalog,
        wins: u32,
        options: &BattleOptions,
        combat: &CombatOptions,
        battles: u32,
        rng: &mut impl GameRng,
    ) -> Self {
        let mut result = WinRateSimulation::default();

        for _ in 0..battles {
            let state = init_battle(deck, owned, wins, catalog, options, rng);
            let outcome = resolve_combat(&state, combat);
            match outcome.state.phase {
                BattlePhase::PlayerWon => result.player_wins += 1,
                BattlePhase::EnemyWon => result.enemy_wins += 1,
                BattlePhase::Draw | BattlePhase::Ongoing => result.draws += 1,
            }
            result.total_turns += u64::from(outcome.state.turn_number);
            result.battles += 1;
        }

        result
    }

    /// Player win rate in percent
    pub fn win_rate(&self) -> f64 {
        if self.battles > 0 {
            self.player_wins as f64 / self.battles as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn avg_turns(&self) -> f64 {
        if self.battles > 0 {
            self.total_turns as f64 / self.battles as f64
        } else {
            0.0
        }
    }
}

/// A deck of the strongest warrior per default lane plus a few tactics,
/// with every card in it owned at enhancement 0
pub fn starter_deck(catalog: &CardCatalog) -> (Deck, OwnedCollection) {
    let mut deck = Deck::new("starter");

    for lane in Lane::all() {
        let best = catalog
            .cards()
            .iter()
            .filter_map(Card::as_warrior)
            .filter(|w| w.lane == *lane)
            .max_by_key(|w| (w.grade, w.attack + w.defense));
        if let Some(warrior) = best {
            deck = deck.with_warrior(warrior.id.clone(), *lane);
        }
    }

    for tactic in catalog.cards().iter().filter_map(Card::as_tactic).take(STARTER_TACTICS) {
        deck = deck.with_tactic(tactic.id.clone());
    }

    let owned = deck_owned(&deck);
    (deck, owned)
}

/// Ownership of exactly the cards a deck names
pub fn deck_owned(deck: &Deck) -> OwnedCollection {
    let ids = deck.warriors.iter().map(|slot| slot.card_id.clone()).chain(deck.tactics.iter().cloned());
    OwnedCollection::from_cards(ids.map(OwnedCard::new).collect())
}
