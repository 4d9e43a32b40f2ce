/// Representative next-card values used for the player bust estimate.
/// Not a live shoe: every value is weighted equally.
pub const NEXT_CARD_VALUES: [u32; 10] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Dealer bust chance indexed by upcard value. Values 0 and 1 never
/// come from a recognized card and map to 0.
const DEALER_BUST_BY_UPCARD: [f64; 12] = [
    0.0, 0.0, // unused
    0.35, // 2
    0.37, // 3
    0.40, // 4
    0.42, // 5
    0.42, // 6
    0.26, // 7
    0.24, // 8
    0.23, // 9
    0.21, // 10
    0.11, // Ace
];

/// Dealer bust probability for an upcard value; 0 outside 2..=11
pub fn dealer_bust_probability(dealer_value: u8) -> f64 {
    DEALER_BUST_BY_UPCARD
        .get(usize::from(dealer_value))
        .copied()
        .unwrap_or(0.0)
}

/// Share of [`NEXT_CARD_VALUES`] that would push `player_total` past 21
pub fn player_bust_probability(player_total: u32) -> f64 {
    let busting = NEXT_CARD_VALUES
        .iter()
        .filter(|&&value| player_total.saturating_add(value) > 21)
        .count();
    busting as f64 / NEXT_CARD_VALUES.len() as f64
}
