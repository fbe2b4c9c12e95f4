//! BattleState - the aggregate root of one battle

use super::action::{BattleAction, WarriorRef};
use super::field_event::{BattleFieldEvent, FieldEffect};
use super::status::{has_status, StatusEffect, StatusKind};
use crate::card::{TacticCard, WarriorCard};
use crate::types::{CardId, Faction, Lane, Side};
use serde::{Deserialize, Serialize};

/// A warrior's runtime state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleWarrior {
    pub card_id: CardId,
    pub name: String,
    pub faction: Faction,
    pub lane: Lane,
    pub current_attack: i32,
    pub current_defense: i32,
    /// Always within [0, max_hp]
    pub hp: i32,
    pub max_hp: i32,
    /// Mirrors `hp > 0`
    pub is_alive: bool,
    #[serde(default)]
    pub status_effects: Vec<StatusEffect>,
}

impl BattleWarrior {
    /// Build from a card with flat (attack, defense, hp) bonuses
    pub fn from_card(card: &WarriorCard, lane: Lane, bonus: (i32, i32, i32)) -> Self {
        let (attack, defense, hp) = bonus;
        let max_hp = card.hp.saturating_add(hp).max(1);
        BattleWarrior {
            card_id: card.id.clone(),
            name: card.name.clone(),
            faction: card.faction,
            lane,
            current_attack: card.attack.saturating_add(attack).max(0),
            current_defense: card.defense.saturating_add(defense).max(0),
            hp: max_hp,
            max_hp,
            is_alive: true,
            status_effects: Vec::new(),
        }
    }

    /// Lose up to `amount` hp; returns the hp actually lost
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.set_hp(self.hp - amount.max(0));
        before - self.hp
    }

    /// Regain up to `amount` hp if alive; returns the hp actually gained
    pub fn heal(&mut self, amount: i32) -> i32 {
        if !self.is_alive {
            return 0;
        }
        let before = self.hp;
        self.set_hp(self.hp.saturating_add(amount.max(0)));
        self.hp - before
    }

    fn set_hp(&mut self, hp: i32) {
        self.hp = hp.clamp(0, self.max_hp);
        self.is_alive = self.hp > 0;
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp as f64
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        has_status(&self.status_effects, kind)
    }

    pub fn reference(&self, side: Side) -> WarriorRef {
        WarriorRef {
            side,
            lane: self.lane,
            card_id: self.card_id.clone(),
        }
    }
}

/// Battle lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattlePhase {
    Ongoing,
    PlayerWon,
    EnemyWon,
    Draw,
}

impl BattlePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattlePhase::Ongoing)
    }
}

/// Full state of one battle
///
/// Engine operations take `&BattleState` and return a new value; a state held
/// by the caller is never changed behind their back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub player_warriors: Vec<BattleWarrior>,
    pub enemy_warriors: Vec<BattleWarrior>,
    pub player_tactics: Vec<TacticCard>,
    pub enemy_tactics: Vec<TacticCard>,
    pub field_event: Option<BattleFieldEvent>,
    pub turn_number: u32,
    pub wins: u32,
    /// Every action produced so far, oldest first
    #[serde(default)]
    pub log: Vec<BattleAction>,
    pub phase: BattlePhase,
}

impl BattleState {
    /// A state at turn 0 with the phase derived from the formations
    pub fn new(player_warriors: Vec<BattleWarrior>, enemy_warriors: Vec<BattleWarrior>) -> Self {
        let mut state = BattleState {
            player_warriors,
            enemy_warriors,
            player_tactics: Vec::new(),
            enemy_tactics: Vec::new(),
            field_event: None,
            turn_number: 0,
            wins: 0,
            log: Vec::new(),
            phase: BattlePhase::Ongoing,
        };
        state.refresh_phase();
        state
    }

    pub fn warriors(&self, side: Side) -> &[BattleWarrior] {
        match side {
            Side::Player => &self.player_warriors,
            Side::Enemy => &self.enemy_warriors,
        }
    }

    pub fn warriors_mut(&mut self, side: Side) -> &mut Vec<BattleWarrior> {
        match side {
            Side::Player => &mut self.player_warriors,
            Side::Enemy => &mut self.enemy_warriors,
        }
    }

    pub fn tactics(&self, side: Side) -> &[TacticCard] {
        match side {
            Side::Player => &self.player_tactics,
            Side::Enemy => &self.enemy_tactics,
        }
    }

    pub fn tactics_mut(&mut self, side: Side) -> &mut Vec<TacticCard> {
        match side {
            Side::Player => &mut self.player_tactics,
            Side::Enemy => &mut self.enemy_tactics,
        }
    }

    pub fn alive_count(&self, side: Side) -> usize {
        self.warriors(side).iter().filter(|w| w.is_alive).count()
    }

    pub fn field_effect(&self) -> Option<FieldEffect> {
        self.field_event.as_ref().map(|e| e.effect)
    }

    /// Phase implied by the formations; a terminal phase is kept as is
    pub fn evaluate_phase(&self) -> BattlePhase {
        if self.phase.is_terminal() {
            return self.phase;
        }
        match (self.alive_count(Side::Player), self.alive_count(Side::Enemy)) {
            (0, 0) => BattlePhase::Draw,
            (0, _) => BattlePhase::EnemyWon,
            (_, 0) => BattlePhase::PlayerWon,
            _ => BattlePhase::Ongoing,
        }
    }

    pub fn refresh_phase(&mut self) {
        self.phase = self.evaluate_phase();
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnhancementConstants;
    use crate::types::Grade;

    fn card(hp: i32) -> WarriorCard {
        WarriorCard {
            id: "w".into(),
            name: "W".to_string(),
            grade: Grade::Common,
            attack: 4,
            defense: 2,
            hp,
            lane: Lane::Front,
            faction: Faction::Wu,
        }
    }

    #[test]
    fn test_from_card_applies_bonus() {
        let warrior = BattleWarrior::from_card(&card(10), Lane::Mid, (2, 1, 4));
        assert_eq!(warrior.current_attack, 6);
        assert_eq!(warrior.current_defense, 3);
        assert_eq!(warrior.hp, 14);
        assert_eq!(warrior.max_hp, 14);
        assert_eq!(warrior.lane, Lane::Mid);
        assert!(warrior.is_alive);
    }

    #[test]
    fn test_from_card_saturates_huge_bonus() {
        let bonus = EnhancementConstants::default().bonus(2_000_000_000);
        let w = BattleWarrior::from_card(&card(10), Lane::Front, bonus);
        assert_eq!(w.max_hp, i32::MAX);
        assert_eq!(w.hp, i32::MAX);
        assert_eq!(w.current_attack, 2_000_000_004);
        assert_eq!(w.current_defense, 1_000_000_002);
        assert!(w.is_alive);
    }

    #[test]
    fn test_hp_clamped_both_ways() {
        let mut warrior = BattleWarrior::from_card(&card(10), Lane::Front, (0, 0, 0));
        assert_eq!(warrior.heal(5), 0);
        assert_eq!(warrior.hp, 10);

        assert_eq!(warrior.take_damage(4), 4);
        assert_eq!(warrior.heal(10), 4);
        assert_eq!(warrior.hp, 10);

        assert_eq!(warrior.take_damage(25), 10);
        assert_eq!(warrior.hp, 0);
        assert!(!warrior.is_alive);
        assert_eq!(warrior.heal(3), 0);
    }

    #[test]
    fn test_phase_from_formations() {
        let alive = BattleWarrior::from_card(&card(5), Lane::Front, (0, 0, 0));
        let mut dead = alive.clone();
        dead.take_damage(99);

        assert_eq!(BattleState::new(vec![alive.clone()], vec![alive.clone()]).phase, BattlePhase::Ongoing);
        assert_eq!(BattleState::new(vec![alive.clone()], vec![dead.clone()]).phase, BattlePhase::PlayerWon);
        assert_eq!(BattleState::new(vec![], vec![alive]).phase, BattlePhase::EnemyWon);
        assert_eq!(BattleState::new(vec![dead], vec![]).phase, BattlePhase::Draw);
    }
}
