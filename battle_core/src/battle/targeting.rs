//! Lane-priority targeting and effective stats

use super::field_event::FieldEffect;
use super::state::{BattleState, BattleWarrior};
use super::status::StatusKind;
use crate::types::{Lane, Side};

/// Index of the first alive warrior in lane order (front, mid, back)
pub fn get_first_alive(warriors: &[BattleWarrior]) -> Option<usize> {
    warriors
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_alive)
        .min_by_key(|(_, w)| w.lane)
        .map(|(i, _)| i)
}

/// Index of the warrior an attack would hit
///
/// An alive taunting warrior is forced ahead of lane order; otherwise this is
/// [`get_first_alive`].
pub fn get_forecast_target(warriors: &[BattleWarrior]) -> Option<usize> {
    warriors
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_alive && w.has_status(StatusKind::Taunt))
        .min_by_key(|(_, w)| w.lane)
        .map(|(i, _)| i)
        .or_else(|| get_first_alive(warriors))
}

/// Alive warrior indices sorted front to back
pub fn alive_in_lane_order(warriors: &[BattleWarrior]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..warriors.len()).filter(|&i| warriors[i].is_alive).collect();
    indices.sort_by_key(|&i| warriors[i].lane);
    indices
}

/// Index of the warrior that attacks for its side this turn
///
/// Under `skip_front_first_turn` the front lane sits out turn 1.
pub fn get_attacker(warriors: &[BattleWarrior], turn: u32, field: Option<FieldEffect>) -> Option<usize> {
    let skip_front = turn == 1 && field == Some(FieldEffect::SkipFrontFirstTurn);
    warriors
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_alive && !(skip_front && w.lane == Lane::Front))
        .min_by_key(|(_, w)| w.lane)
        .map(|(i, _)| i)
}

/// Attack of `state.warriors(side)[index]` after field modifiers
pub fn effective_attack(state: &BattleState, side: Side, index: usize) -> i32 {
    let Some(warrior) = state.warriors(side).get(index) else {
        return 0;
    };
    let Some(effect) = state.field_effect() else {
        return warrior.current_attack;
    };

    let mut attack = warrior.current_attack.saturating_add(effect.attack_bonus(warrior.faction));
    if effect == FieldEffect::MoraleBonus && state.alive_count(side) > state.alive_count(side.opponent()) {
        attack = attack.saturating_add(1);
    }
    effect.apply_lane_penalty(warrior.lane, attack)
}

/// Defense of `state.warriors(side)[index]` after field modifiers
pub fn effective_defense(state: &BattleState, side: Side, index: usize) -> i32 {
    let Some(warrior) = state.warriors(side).get(index) else {
        return 0;
    };
    let bonus = state.field_effect().map_or(0, |e| e.defense_bonus(warrior.lane));
    warrior.current_defense.saturating_add(bonus)
}

/// Damage of a basic attack, never below 1
pub fn attack_damage(attack: i32, defense: i32) -> i32 {
    attack.saturating_sub(defense).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::field_event::BattleFieldEvent;
    use crate::battle::status::StatusEffect;
    use crate::card::WarriorCard;
    use crate::types::{Faction, Grade};

    fn warrior(id: &str, lane: Lane, attack: i32) -> BattleWarrior {
        let card = WarriorCard {
            id: id.into(),
            name: id.to_string(),
            grade: Grade::Common,
            attack,
            defense: 2,
            hp: 10,
            lane,
            faction: Faction::Wei,
        };
        BattleWarrior::from_card(&card, lane, (0, 0, 0))
    }

    fn kill(w: &mut BattleWarrior) {
        w.take_damage(w.max_hp);
    }

    #[test]
    fn test_first_alive_follows_lane_order_not_vec_order() {
        let mut warriors = vec![warrior("b", Lane::Back, 3), warrior("m", Lane::Mid, 3), warrior("f", Lane::Front, 3)];
        assert_eq!(get_first_alive(&warriors), Some(2));
        kill(&mut warriors[2]);
        assert_eq!(get_first_alive(&warriors), Some(1));
        kill(&mut warriors[1]);
        kill(&mut warriors[0]);
        assert_eq!(get_first_alive(&warriors), None);
    }

    #[test]
    fn test_taunt_forces_target() {
        let mut warriors = vec![warrior("f", Lane::Front, 3), warrior("b", Lane::Back, 3)];
        assert_eq!(get_forecast_target(&warriors), Some(0));
        warriors[1].status_effects.push(StatusEffect::taunt(1));
        assert_eq!(get_forecast_target(&warriors), Some(1));
        kill(&mut warriors[1]);
        assert_eq!(get_forecast_target(&warriors), Some(0));
    }

    #[test]
    fn test_skip_front_first_turn() {
        let warriors = vec![warrior("f", Lane::Front, 3), warrior("m", Lane::Mid, 3)];
        let field = Some(FieldEffect::SkipFrontFirstTurn);
        assert_eq!(get_attacker(&warriors, 1, field), Some(1));
        assert_eq!(get_attacker(&warriors, 2, field), Some(0));
        assert_eq!(get_attacker(&warriors, 1, None), Some(0));
        assert_eq!(get_attacker(&warriors[..1], 1, field), None);
    }

    #[test]
    fn test_effective_stats_with_field() {
        let mut state = BattleState::new(
            vec![warrior("f", Lane::Front, 5), warrior("b", Lane::Back, 2)],
            vec![warrior("e", Lane::Front, 4)],
        );
        assert_eq!(effective_attack(&state, Side::Player, 0), 5);
        assert_eq!(effective_defense(&state, Side::Player, 0), 2);

        state.field_event = Some(BattleFieldEvent::new("Pass", "", FieldEffect::FrontDefensePlus2));
        assert_eq!(effective_defense(&state, Side::Player, 0), 4);
        assert_eq!(effective_defense(&state, Side::Player, 1), 2);

        state.field_event = Some(BattleFieldEvent::new("Valley", "", FieldEffect::BackAttackMinus2));
        assert_eq!(effective_attack(&state, Side::Player, 1), 1);
        assert_eq!(effective_attack(&state, Side::Player, 0), 5);

        state.field_event = Some(BattleFieldEvent::new("Banner", "", FieldEffect::MoraleBonus));
        assert_eq!(effective_attack(&state, Side::Player, 0), 6);
        assert_eq!(effective_attack(&state, Side::Enemy, 0), 4);

        state.field_event = Some(BattleFieldEvent::new("Wei", "", FieldEffect::FactionBonus(Faction::Wei)));
        assert_eq!(effective_attack(&state, Side::Enemy, 0), 5);
    }

    #[test]
    fn test_attack_damage_floor() {
        assert_eq!(attack_damage(5, 2), 3);
        assert_eq!(attack_damage(3, 3), 1);
        assert_eq!(attack_damage(1, 9), 1);
    }
}
