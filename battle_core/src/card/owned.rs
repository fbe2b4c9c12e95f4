//! Player progression - owned cards and decks

use super::{Card, CardCatalog};
use crate::types::{CardId, Lane};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Ownership record for one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedCard {
    pub card_id: CardId,
    #[serde(default)]
    pub enhancement_level: u32,
}

impl OwnedCard {
    pub fn new(card_id: CardId) -> Self {
        OwnedCard {
            card_id,
            enhancement_level: 0,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.enhancement_level = level;
        self
    }
}

/// The player's owned-card pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnedCollection {
    cards: Vec<OwnedCard>,
}

impl OwnedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<OwnedCard>) -> Self {
        OwnedCollection { cards }
    }

    pub fn cards(&self) -> &[OwnedCard] {
        &self.cards
    }

    pub fn get(&self, id: &CardId) -> Option<&OwnedCard> {
        self.cards.iter().find(|c| &c.card_id == id)
    }

    pub fn owns(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }

    /// Enhancement level of an owned card, 0 when not owned
    pub fn level_of(&self, id: &CardId) -> u32 {
        self.get(id).map(|c| c.enhancement_level).unwrap_or(0)
    }

    /// Record pack results; returns the ids that were not owned before
    pub fn grant(&mut self, cards: &[Card]) -> Vec<CardId> {
        let mut added = Vec::new();
        for card in cards {
            if !self.owns(card.id()) {
                self.cards.push(OwnedCard::new(card.id().clone()));
                added.push(card.id().clone());
            }
        }
        added
    }
}

/// Deck validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("card {0} is not owned")]
    NotOwned(CardId),
    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),
    #[error("card {0} is not a warrior")]
    NotAWarrior(CardId),
    #[error("card {0} is not a tactic")]
    NotATactic(CardId),
    #[error("lane {0:?} is assigned more than once")]
    DuplicateLane(Lane),
}

/// A warrior placed in a lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSlot {
    pub card_id: CardId,
    /// Lane override; the card's default lane is used when absent
    #[serde(default)]
    pub lane: Option<Lane>,
}

impl DeckSlot {
    pub fn new(card_id: impl Into<CardId>, lane: Lane) -> Self {
        DeckSlot {
            card_id: card_id.into(),
            lane: Some(lane),
        }
    }
}

/// Named battle selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    #[serde(default)]
    pub warriors: Vec<DeckSlot>,
    #[serde(default)]
    pub tactics: Vec<CardId>,
}

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        Deck {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_warrior(mut self, card_id: impl Into<CardId>, lane: Lane) -> Self {
        self.warriors.push(DeckSlot::new(card_id, lane));
        self
    }

    pub fn with_tactic(mut self, card_id: impl Into<CardId>) -> Self {
        self.tactics.push(card_id.into());
        self
    }

    /// Check the deck only references owned cards and uses each lane once
    pub fn validate(&self, owned: &OwnedCollection, catalog: &CardCatalog) -> Result<(), DeckError> {
        let mut lanes = HashSet::new();
        for slot in &self.warriors {
            let card = catalog
                .get(&slot.card_id)
                .ok_or_else(|| DeckError::UnknownCard(slot.card_id.clone()))?;
            let warrior = card
                .as_warrior()
                .ok_or_else(|| DeckError::NotAWarrior(slot.card_id.clone()))?;
            if !owned.owns(&slot.card_id) {
                return Err(DeckError::NotOwned(slot.card_id.clone()));
            }
            let lane = slot.lane.unwrap_or(warrior.lane);
            if !lanes.insert(lane) {
                return Err(DeckError::DuplicateLane(lane));
            }
        }

        for id in &self.tactics {
            let card = catalog.get(id).ok_or_else(|| DeckError::UnknownCard(id.clone()))?;
            if card.as_tactic().is_none() {
                return Err(DeckError::NotATactic(id.clone()));
            }
            if !owned.owns(id) {
                return Err(DeckError::NotOwned(id.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{TacticCard, TacticEffect, WarriorCard};
    use crate::types::{Faction, Grade};

    fn catalog() -> CardCatalog {
        let warrior = |id: &str, lane| WarriorCard {
            id: id.into(),
            name: id.to_string(),
            grade: Grade::Common,
            attack: 4,
            defense: 2,
            hp: 10,
            lane,
            faction: Faction::Shu,
        };
        CardCatalog::from_parts(
            vec![warrior("w_front", Lane::Front), warrior("w_back", Lane::Back)],
            vec![TacticCard {
                id: "t_heal".into(),
                name: "Heal".to_string(),
                grade: Grade::Common,
                effect: TacticEffect::Heal { amount: 4 },
            }],
        )
    }

    fn owned_all() -> OwnedCollection {
        OwnedCollection::from_cards(vec![
            OwnedCard::new("w_front".into()),
            OwnedCard::new("w_back".into()).with_level(2),
            OwnedCard::new("t_heal".into()),
        ])
    }

    #[test]
    fn test_valid_deck() {
        let deck = Deck::new("main")
            .with_warrior("w_front", Lane::Front)
            .with_warrior("w_back", Lane::Back)
            .with_tactic("t_heal");
        assert_eq!(deck.validate(&owned_all(), &catalog()), Ok(()));
    }

    #[test]
    fn test_duplicate_lane_rejected() {
        let deck = Deck::new("main")
            .with_warrior("w_front", Lane::Mid)
            .with_warrior("w_back", Lane::Mid);
        assert_eq!(
            deck.validate(&owned_all(), &catalog()),
            Err(DeckError::DuplicateLane(Lane::Mid))
        );
    }

    #[test]
    fn test_default_lane_counts_for_uniqueness() {
        let mut deck = Deck::new("main").with_warrior("w_front", Lane::Back);
        deck.warriors.push(DeckSlot {
            card_id: "w_back".into(),
            lane: None,
        });
        assert_eq!(
            deck.validate(&owned_all(), &catalog()),
            Err(DeckError::DuplicateLane(Lane::Back))
        );
    }

    #[test]
    fn test_unowned_card_rejected() {
        let owned = OwnedCollection::from_cards(vec![OwnedCard::new("w_front".into())]);
        let deck = Deck::new("main").with_tactic("t_heal");
        assert_eq!(
            deck.validate(&owned, &catalog()),
            Err(DeckError::NotOwned("t_heal".into()))
        );
    }

    #[test]
    fn test_wrong_card_kind_rejected() {
        let deck = Deck::new("main").with_warrior("t_heal", Lane::Front);
        assert_eq!(
            deck.validate(&owned_all(), &catalog()),
            Err(DeckError::NotAWarrior("t_heal".into()))
        );
    }

    #[test]
    fn test_grant_adds_only_new_cards() {
        let catalog = catalog();
        let mut owned = OwnedCollection::from_cards(vec![OwnedCard::new("w_front".into()).with_level(3)]);
        let pulled: Vec<Card> = catalog.cards().to_vec();

        let added = owned.grant(&pulled);
        assert_eq!(added, vec![CardId::from("w_back"), CardId::from("t_heal")]);
        assert_eq!(owned.cards().len(), 3);
        assert_eq!(owned.level_of(&"w_front".into()), 3);
        assert_eq!(owned.level_of(&"w_back".into()), 0);

        assert!(owned.grant(&pulled).is_empty());
    }
}
