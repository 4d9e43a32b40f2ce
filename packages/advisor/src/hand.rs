use serde::{Deserialize, Serialize};

use crate::card::{value_of, CardInput};

/// Calculate the best total of a hand, counting aces as 1 only while the hand is over 21
pub fn hand_total(cards: &[CardInput]) -> u32 {
    let mut total = 0u32;
    let mut aces = 0;

    for card in cards {
        total = total.saturating_add(u32::from(value_of(card)));
        if card.is_ace() {
            aces += 1;
        }
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// Exactly two cards of equal point value (so K and 10 pair up)
pub fn is_pair(cards: &[CardInput]) -> bool {
    cards.len() == 2 && value_of(&cards[0]) == value_of(&cards[1])
}

pub fn has_ace(cards: &[CardInput]) -> bool {
    cards.iter().any(CardInput::is_ace)
}

/// Any ace with a total of 21 or less. Deliberately loose: a hand whose aces
/// were all counted down still reports soft.
pub fn is_soft(cards: &[CardInput]) -> bool {
    has_ace(cards) && hand_total(cards) <= 21
}

pub fn is_busted(cards: &[CardInput]) -> bool {
    hand_total(cards) > 21
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    pub cards: Vec<CardInput>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from raw symbols, keeping unrecognized ones.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Self {
        Self {
            cards: symbols.iter().map(|s| CardInput::parse(s.as_ref())).collect(),
        }
    }

    pub fn add_card(&mut self, card: impl Into<CardInput>) {
        self.cards.push(card.into());
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total(&self) -> u32 {
        hand_total(&self.cards)
    }

    pub fn is_pair(&self) -> bool {
        is_pair(&self.cards)
    }

    pub fn has_ace(&self) -> bool {
        has_ace(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn values(&self) -> Vec<u8> {
        self.cards.iter().map(value_of).collect()
    }
}

impl From<Vec<CardInput>> for Hand {
    fn from(cards: Vec<CardInput>) -> Self {
        Self { cards }
    }
}
