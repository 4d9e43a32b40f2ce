mod card;
mod error;
mod hand;
mod probability;
mod strategy;

pub use card::{value_of, value_of_symbol, CardInput, Rank};
pub use error::AdviceError;
pub use hand::{has_ace, hand_total, is_busted, is_pair, is_soft, Hand};
pub use probability::{dealer_bust_probability, player_bust_probability, NEXT_CARD_VALUES};
pub use strategy::{assess, compute_advice, AdviceRequest, Assessment, DecisionStep, Recommendation};
