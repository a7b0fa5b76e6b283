//! Deck construction and shuffling.

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards per suit.
pub const SUIT_SIZE: usize = 13;

/// Build all 52 cards face-down, suit-major then rank-minor
/// (A♠ … K♠, A♥ … K♥, A♦ … K♦, A♣ … K♣).
#[must_use]
pub fn build_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
        .collect()
}

/// Build a fresh deck and shuffle it.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = build_deck();
    rng.shuffle(&mut deck);
    deck
}
