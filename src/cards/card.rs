//! Card identity and orientation.
//!
//! A `Card` is an immutable `(Suit, Rank)` identity plus a mutable
//! `face_up` flag. Suits and ranks are closed enums, so the rules never
//! compare strings or look values up in tables.
//!
//! ```
//! use klondike_engine::cards::{Card, Rank, Suit};
//!
//! let queen = Card::new(Rank::Queen, Suit::Heart);
//! let king = Card::new(Rank::King, Suit::Spade);
//!
//! assert!(queen.is_red());
//! assert_ne!(queen.color(), king.color());
//! assert_eq!(queen.rank().next(), Some(Rank::King));
//! ```

use serde::{Deserialize, Serialize};

/// Card color. Tableau runs must alternate colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The four suits, in foundation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// All suits in foundation order (♠, ♥, ♦, ♣).
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// Color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Heart | Suit::Diamond => Color::Red,
            Suit::Spade | Suit::Club => Color::Black,
        }
    }

    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self.color(), Color::Red)
    }

    /// Index of the foundation pile reserved for this suit.
    #[must_use]
    pub const fn foundation_index(self) -> usize {
        match self {
            Suit::Spade => 0,
            Suit::Heart => 1,
            Suit::Diamond => 2,
            Suit::Club => 3,
        }
    }

    /// Suit assigned to a foundation pile, `None` past the fourth pile.
    #[must_use]
    pub fn for_foundation(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }
}

/// Card rank, Ace low.
///
/// Discriminants are the rank values (Ace = 1 … King = 13), so the derived
/// ordering is the rank order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
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
    /// All ranks from Ace to King.
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

    /// Numeric value, 1 for Ace through 13 for King.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank with the given value (1..=13).
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[usize::from(value) - 1]),
            _ => None,
        }
    }

    /// The next rank up, `None` for King.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }

    /// The next rank down, `None` for Ace.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        Self::from_value(self.value() - 1)
    }

    /// Short label as printed on the card corner.
    #[must_use]
    pub const fn label(self) -> &'static str {
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
}

/// A playing card.
///
/// Equality includes orientation; use [`Card::same_identity`] to compare
/// only suit and rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Return this card turned face-up.
    #[must_use]
    pub const fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Return this card turned face-down.
    #[must_use]
    pub const fn face_down(mut self) -> Self {
        self.face_up = false;
        self
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Set the orientation.
    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Compare suit and rank, ignoring orientation.
    #[must_use]
    pub fn same_identity(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Identity with orientation normalized, for set membership checks.
    #[must_use]
    pub const fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    /// True if `self` may sit directly on `below` in a tableau run:
    /// opposite color and exactly one rank lower.
    #[must_use]
    pub fn stacks_on(&self, below: &Card) -> bool {
        self.color() != below.color() && below.rank.prev() == Some(self.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
