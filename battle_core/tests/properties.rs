// Property-based tests for the RNG, pack opening and battle invariants
use battle_core::battle::FieldEffect;
use battle_core::gacha::contains_grade;
use battle_core::types::{Faction, Grade};
use battle_core::{
    apply_tactic, default_catalog, open_pack, resolve_combat, BattlePhase, BattleState, BattleWarrior,
    CombatOptions, GameRng, Lane, PackTable, PackType, SeededRandom, Side, WarriorCard,
};
use proptest::prelude::*;

fn warrior(id: &str, lane: Lane, attack: i32, defense: i32, hp: i32) -> BattleWarrior {
    let card = WarriorCard {
        id: id.into(),
        name: id.to_string(),
        grade: Grade::Common,
        attack,
        defense,
        hp,
        lane,
        faction: Faction::Neutral,
    };
    BattleWarrior::from_card(&card, lane, (0, 0, 0))
}

fn lane_of(i: usize) -> Lane {
    Lane::all()[i % 3]
}

fn side_strategy() -> impl Strategy<Value = Vec<(i32, i32, i32)>> {
    prop::collection::vec((0i32..12, 0i32..8, 1i32..30), 0..=3)
}

fn formation(prefix: &str, stats: &[(i32, i32, i32)]) -> Vec<BattleWarrior> {
    stats
        .iter()
        .enumerate()
        .map(|(i, (a, d, hp))| warrior(&format!("{}{}", prefix, i), lane_of(i), *a, *d, *hp))
        .collect()
}

proptest! {
    #[test]
    fn proptest_same_seed_same_stream(seed in any::<u32>()) {
        let mut a = SeededRandom::new(seed);
        let mut b = SeededRandom::new(seed);
        for _ in 0..64 {
            let x = a.next();
            prop_assert!((0.0..1.0).contains(&x));
            prop_assert_eq!(x.to_bits(), b.next().to_bits());
        }
    }

    #[test]
    fn proptest_random_int_in_bounds(seed in any::<u32>(), max in 1usize..1000) {
        let mut rng = SeededRandom::new(seed);
        for _ in 0..32 {
            prop_assert!(rng.random_int(max) < max);
        }
    }

    #[test]
    fn proptest_packs_full_and_guaranteed(seed in any::<u32>(), pack_index in 0usize..4) {
        let catalog = default_catalog();
        let packs = PackTable::standard();
        let pack_type = PackType::all()[pack_index];
        let info = packs.get(pack_type).unwrap();
        let cards = open_pack(pack_type, &catalog, &packs, &mut SeededRandom::new(seed)).unwrap();
        prop_assert_eq!(cards.len(), info.card_count);
        prop_assert!(contains_grade(&cards, info.guaranteed_grade));
    }

    #[test]
    fn proptest_hp_stays_clamped(
        max_hp in 1i32..60,
        ops in prop::collection::vec((any::<bool>(), -5i32..40), 0..30)
    ) {
        let mut w = warrior("w", Lane::Front, 3, 1, max_hp);
        for (is_damage, amount) in ops {
            if is_damage {
                w.take_damage(amount);
            } else {
                w.heal(amount);
            }
            prop_assert!(w.hp >= 0 && w.hp <= w.max_hp);
            prop_assert_eq!(w.is_alive, w.hp > 0);
        }
    }

    #[test]
    fn proptest_battles_terminate_with_valid_state(
        player in side_strategy(),
        enemy in side_strategy(),
        max_turns in 1u32..60
    ) {
        let state = BattleState::new(formation("p", &player), formation("e", &enemy));
        let outcome = resolve_combat(&state, &CombatOptions::default().with_max_turns(max_turns));
        prop_assert!(outcome.state.phase.is_terminal());
        prop_assert!(outcome.state.turn_number <= max_turns);
        for w in outcome.state.player_warriors.iter().chain(&outcome.state.enemy_warriors) {
            prop_assert!(w.hp >= 0 && w.hp <= w.max_hp);
            prop_assert_eq!(w.is_alive, w.hp > 0);
        }
    }

    #[test]
    fn proptest_empty_side_loses_at_once(stats in prop::collection::vec((0i32..12, 0i32..8, 1i32..30), 1..=3)) {
        let alive = formation("w", &stats);
        let player_won = resolve_combat(&BattleState::new(alive.clone(), Vec::new()), &CombatOptions::default());
        prop_assert_eq!(player_won.state.phase, BattlePhase::PlayerWon);
        prop_assert_eq!(player_won.state.turn_number, 0);

        let enemy_won = resolve_combat(&BattleState::new(Vec::new(), alive), &CombatOptions::default());
        prop_assert_eq!(enemy_won.state.phase, BattlePhase::EnemyWon);

        let draw = resolve_combat(&BattleState::new(Vec::new(), Vec::new()), &CombatOptions::default());
        prop_assert_eq!(draw.state.phase, BattlePhase::Draw);
    }

    #[test]
    fn proptest_out_of_range_tactic_is_noop(index in 0usize..50) {
        let catalog = default_catalog();
        let mut state = BattleState::new(formation("p", &[(3, 1, 10)]), formation("e", &[(3, 1, 10)]));
        state.player_tactics = catalog
            .cards()
            .iter()
            .filter_map(|c| c.as_tactic().cloned())
            .take(3)
            .collect();
        let hand_size = state.player_tactics.len();
        let outcome = apply_tactic(&state, Side::Player, index);
        if index >= hand_size {
            prop_assert!(outcome.action.is_none());
            prop_assert_eq!(outcome.state, state);
        } else {
            prop_assert!(outcome.action.is_some());
            prop_assert_eq!(outcome.state.player_tactics.len(), hand_size - 1);
        }
    }

    #[test]
    fn proptest_back_lane_penalty_floor(attack in 0i32..20) {
        let effect = FieldEffect::BackAttackMinus2;
        let penalised = effect.apply_lane_penalty(Lane::Back, attack);
        prop_assert!(penalised >= 1);
        prop_assert_eq!(penalised, (attack - 2).max(1));
        prop_assert_eq!(effect.apply_lane_penalty(Lane::Front, attack), attack);
    }
}
