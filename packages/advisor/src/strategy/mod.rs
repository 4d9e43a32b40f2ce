use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{value_of, CardInput};
use crate::hand::{has_ace, hand_total, is_pair, is_soft, Hand};
use crate::probability::{dealer_bust_probability, player_bust_probability};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Hit,
    Stand,
    #[serde(rename = "Double Down")]
    DoubleDown,
    Split,
    #[serde(rename = "Cash Out")]
    CashOut,
    #[serde(rename = "Consider Cashing Out")]
    ConsiderCashingOut,
}

impl Recommendation {
    pub const ALL: [Recommendation; 6] = [
        Recommendation::Hit,
        Recommendation::Stand,
        Recommendation::DoubleDown,
        Recommendation::Split,
        Recommendation::CashOut,
        Recommendation::ConsiderCashingOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Hit => "Hit",
            Recommendation::Stand => "Stand",
            Recommendation::DoubleDown => "Double Down",
            Recommendation::Split => "Split",
            Recommendation::CashOut => "Cash Out",
            Recommendation::ConsiderCashingOut => "Consider Cashing Out",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule of the decision tree produced the recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStep {
    CashOut,
    DoubleDown,
    Pair,
    HitStand,
    CashOutOverride,
}

/// One decision request. Nothing is kept between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub dealer_card: CardInput,
    pub player_cards: Hand,
    #[serde(default)]
    pub cashout_available: bool,
}

impl AdviceRequest {
    pub fn new(dealer_card: CardInput, player_cards: Hand, cashout_available: bool) -> Self {
        Self {
            dealer_card,
            player_cards,
            cashout_available,
        }
    }

    pub fn from_symbols<S: AsRef<str>>(dealer: &str, player: &[S], cashout_available: bool) -> Self {
        Self::new(CardInput::parse(dealer), Hand::from_symbols(player), cashout_available)
    }
}

/// The recommendation plus every quantity the decision was based on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub recommendation: Recommendation,
    pub step: DecisionStep,
    pub dealer_value: u8,
    pub player_total: u32,
    pub player_card_count: usize,
    pub is_pair: bool,
    pub has_ace: bool,
    pub is_soft: bool,
    pub player_bust_probability: f64,
    pub dealer_bust_probability: f64,
    pub expected_player_win_probability: f64,
    pub expected_dealer_win_probability: f64,
}

impl Assessment {
    pub fn headline(&self) -> String {
        format!("Recommended Action: {}", self.recommendation)
    }
}

/// Recommend a play for the dealer upcard, player cards and cash-out availability
pub fn compute_advice(dealer_card: &CardInput, player_cards: &[CardInput], cashout_available: bool) -> Recommendation {
    evaluate(dealer_card, player_cards, cashout_available).recommendation
}

/// Like [`compute_advice`], keeping the intermediate numbers
pub fn assess(request: &AdviceRequest) -> Assessment {
    evaluate(&request.dealer_card, &request.player_cards.cards, request.cashout_available)
}

fn evaluate(dealer_card: &CardInput, player_cards: &[CardInput], cashout_available: bool) -> Assessment {
    let dealer_value = value_of(dealer_card);
    let player_total = hand_total(player_cards);
    let player_bust = player_bust_probability(player_total);
    let dealer_bust = dealer_bust_probability(dealer_value);

    let mut assessment = Assessment {
        recommendation: Recommendation::Hit,
        step: DecisionStep::HitStand,
        dealer_value,
        player_total,
        player_card_count: player_cards.len(),
        is_pair: is_pair(player_cards),
        has_ace: has_ace(player_cards),
        is_soft: is_soft(player_cards),
        player_bust_probability: player_bust,
        dealer_bust_probability: dealer_bust,
        expected_player_win_probability: 1.0 - player_bust,
        expected_dealer_win_probability: 1.0 - dealer_bust,
    };

    let pair_value = player_cards.first().map_or(0, value_of);
    let (recommendation, step) = decide(&assessment, pair_value, cashout_available);
    log::debug!(
        "dealer={dealer_card} total={player_total} cashout={cashout_available} -> {recommendation} ({step:?})"
    );

    assessment.recommendation = recommendation;
    assessment.step = step;
    assessment
}

fn decide(a: &Assessment, pair_value: u8, cashout_available: bool) -> (Recommendation, DecisionStep) {
    if cashout_available && a.expected_player_win_probability < a.expected_dealer_win_probability {
        return (Recommendation::CashOut, DecisionStep::CashOut);
    }

    if a.player_card_count == 2 && should_double(a.player_total, a.dealer_value, a.has_ace) {
        return (Recommendation::DoubleDown, DecisionStep::DoubleDown);
    }

    let (recommendation, step) = if a.is_pair {
        (pair_play(pair_value, a.dealer_value), DecisionStep::Pair)
    } else {
        (hit_or_stand(a), DecisionStep::HitStand)
    };

    match cashout_override(recommendation, cashout_available, a.player_bust_probability) {
        Some(overridden) => (overridden, DecisionStep::CashOutOverride),
        None => (recommendation, step),
    }
}

/// Two-card doubling table, soft when the hand holds an ace
fn should_double(total: u32, dealer: u8, has_ace: bool) -> bool {
    if has_ace {
        match total {
            17 | 18 => (3..=6).contains(&dealer),
            13..=16 => (4..=6).contains(&dealer),
            _ => false,
        }
    } else {
        match total {
            11 => dealer != 11,
            10 => (2..=9).contains(&dealer),
            9 => (3..=6).contains(&dealer),
            _ => false,
        }
    }
}

fn pair_play(pair_value: u8, dealer: u8) -> Recommendation {
    match pair_value {
        // Always split aces and 8s
        8 | 11 => Recommendation::Split,
        // Never split 10s or 5s
        10 | 5 => Recommendation::Stand,
        9 => {
            if dealer == 7 || dealer >= 10 {
                Recommendation::Stand
            } else {
                Recommendation::Split
            }
        }
        _ => {
            if (2..=7).contains(&pair_value) && (2..=7).contains(&dealer) {
                Recommendation::Split
            } else {
                Recommendation::Hit
            }
        }
    }
}

fn hit_or_stand(a: &Assessment) -> Recommendation {
    if a.player_total >= 17 {
        Recommendation::Stand
    } else if a.player_total <= 11 {
        Recommendation::Hit
    } else if a.dealer_value >= 7 {
        if a.player_bust_probability < 0.5 {
            Recommendation::Hit
        } else {
            Recommendation::Stand
        }
    } else if a.dealer_bust_probability > 0.4 {
        Recommendation::Stand
    } else {
        Recommendation::Hit
    }
}

/// A risky hit becomes a cash-out suggestion when cashing out is on the table
fn cashout_override(
    recommendation: Recommendation,
    cashout_available: bool,
    player_bust_probability: f64,
) -> Option<Recommendation> {
    if cashout_available && recommendation == Recommendation::Hit && player_bust_probability > 0.5 {
        Some(Recommendation::ConsiderCashingOut)
    } else {
        None
    }
}
