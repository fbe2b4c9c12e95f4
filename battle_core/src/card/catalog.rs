//! CardCatalog - the static, read-only card definitions

use super::{Card, TacticCard, WarriorCard};
use crate::types::{CardId, Grade};
use std::collections::HashMap;

/// All known card definitions, warriors first, in definition order
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: HashMap<CardId, usize>,
}

impl CardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from warrior and tactic definitions
    pub fn from_parts(warriors: Vec<WarriorCard>, tactics: Vec<TacticCard>) -> Self {
        let mut catalog = Self::new();
        for warrior in warriors {
            catalog.insert(Card::Warrior(warrior));
        }
        for tactic in tactics {
            catalog.insert(Card::Tactic(tactic));
        }
        catalog
    }

    /// Add a card; a later card with the same id replaces the earlier one
    pub fn insert(&mut self, card: Card) {
        if let Some(&pos) = self.index.get(card.id()) {
            self.cards[pos] = card;
        } else {
            self.index.insert(card.id().clone(), self.cards.len());
            self.cards.push(card);
        }
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).map(|&pos| &self.cards[pos])
    }

    pub fn warrior(&self, id: &CardId) -> Option<&WarriorCard> {
        self.get(id).and_then(Card::as_warrior)
    }

    pub fn tactic(&self, id: &CardId) -> Option<&TacticCard> {
        self.get(id).and_then(Card::as_tactic)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Every card of `grade`, in catalog order
    pub fn pool(&self, grade: Grade) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.grade() == grade).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
