use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AdviceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// The thirteen ranks in the order a picker offers them.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Blackjack point value. Aces count 11 here; hand totals soften them.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            _ => 10, // Ten, Jack, Queen, King
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = AdviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.to_uppercase();
        Rank::ALL
            .iter()
            .copied()
            .find(|rank| rank.symbol() == symbol)
            .ok_or_else(|| AdviceError::UnrecognizedRank(s.to_string()))
    }
}

/// A card as selected by the caller: either a known rank or whatever
/// string came in (an empty string means nothing was selected).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardInput {
    Rank(Rank),
    Unrecognized(String),
}

impl CardInput {
    /// Never fails; anything that is not a rank is kept as `Unrecognized`.
    pub fn parse(s: &str) -> Self {
        match s.parse::<Rank>() {
            Ok(rank) => CardInput::Rank(rank),
            Err(_) => CardInput::Unrecognized(s.to_string()),
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            CardInput::Rank(rank) => Some(*rank),
            CardInput::Unrecognized(_) => None,
        }
    }

    pub fn is_ace(&self) -> bool {
        self.rank() == Some(Rank::Ace)
    }

    pub fn is_recognized(&self) -> bool {
        self.rank().is_some()
    }
}

impl From<Rank> for CardInput {
    fn from(rank: Rank) -> Self {
        CardInput::Rank(rank)
    }
}

impl fmt::Display for CardInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardInput::Rank(rank) => write!(f, "{rank}"),
            CardInput::Unrecognized(raw) => write!(f, "{raw:?}"),
        }
    }
}

// Card fields travel as plain symbol strings.
impl Serialize for CardInput {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CardInput::Rank(rank) => serializer.serialize_str(rank.symbol()),
            CardInput::Unrecognized(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for CardInput {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CardInput::parse(&raw))
    }
}

/// Point value of a card; unrecognized input is worth 0.
pub fn value_of(card: &CardInput) -> u8 {
    card.rank().map_or(0, |rank| rank.value())
}

/// Same as [`value_of`] for a raw symbol.
pub fn value_of_symbol(symbol: &str) -> u8 {
    value_of(&CardInput::parse(symbol))
}
