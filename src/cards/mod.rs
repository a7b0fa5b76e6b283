//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Color`: closed enums with order and color mapping
//! - `Card`: identity plus face-up/face-down orientation
//! - `build_deck` / `shuffled_deck`: deck construction and a seeded shuffle

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{build_deck, shuffled_deck, DECK_SIZE, SUIT_SIZE};
