//! Addressing cards and piles on the board.
//!
//! A presentation layer names what the player picked up with a `CardRef`
//! (zone, pile, index within the pile) and where it was dropped with a
//! `PileRef` (zone, pile). Stock and waste are single piles, addressed as
//! pile 0.

use serde::{Deserialize, Serialize};

/// The four board zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down draw pile.
    Stock,
    /// Face-up discard pile fed by the stock.
    Waste,
    /// One of four suit piles built Ace to King.
    Foundation,
    /// One of the seven playing columns.
    Tableau,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Stock => "stock",
            Zone::Waste => "waste",
            Zone::Foundation => "foundation",
            Zone::Tableau => "tableau",
        };
        f.write_str(name)
    }
}

/// A specific pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileRef {
    pub zone: Zone,
    pub pile: usize,
}

impl PileRef {
    #[must_use]
    pub const fn new(zone: Zone, pile: usize) -> Self {
        Self { zone, pile }
    }

    #[must_use]
    pub const fn waste() -> Self {
        Self::new(Zone::Waste, 0)
    }

    #[must_use]
    pub const fn foundation(pile: usize) -> Self {
        Self::new(Zone::Foundation, pile)
    }

    #[must_use]
    pub const fn tableau(pile: usize) -> Self {
        Self::new(Zone::Tableau, pile)
    }

    /// Reference to the card at `index` within this pile.
    #[must_use]
    pub const fn card(self, index: usize) -> CardRef {
        CardRef {
            zone: self.zone,
            pile: self.pile,
            index,
        }
    }
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.zone, self.pile)
    }
}

/// A specific card position: pile plus index from the bottom (0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRef {
    pub zone: Zone,
    pub pile: usize,
    pub index: usize,
}

impl CardRef {
    #[must_use]
    pub const fn new(zone: Zone, pile: usize, index: usize) -> Self {
        Self { zone, pile, index }
    }

    #[must_use]
    pub const fn waste(index: usize) -> Self {
        Self::new(Zone::Waste, 0, index)
    }

    #[must_use]
    pub const fn tableau(pile: usize, index: usize) -> Self {
        Self::new(Zone::Tableau, pile, index)
    }

    /// The pile this card sits in.
    #[must_use]
    pub const fn pile_ref(self) -> PileRef {
        PileRef::new(self.zone, self.pile)
    }
}

impl std::fmt::Display for CardRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]#{}", self.zone, self.pile, self.index)
    }
}
