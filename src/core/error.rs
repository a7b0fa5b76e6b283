//! Error types.
//!
//! Every rejected operation comes back as a `MoveRejected` value and leaves
//! the board untouched. `BoardError` reports why a hand-built board breaks
//! an invariant.

use super::location::{CardRef, PileRef, Zone};
use crate::cards::Card;

/// Why a move failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    /// Pile index outside the zone.
    NoSuchPile(PileRef),
    /// Card index past the end of a non-empty pile.
    NoSuchCard(CardRef),
    /// Cards cannot be picked up from this zone.
    SourceZone(Zone),
    /// Cards cannot be dropped onto this zone.
    TargetZone(Zone),
    /// Only the top card of the pile may be moved this way.
    NotTopCard(CardRef),
    /// The selected card is face-down.
    FaceDownCard(CardRef),
    /// Source and target are the same pile.
    SamePile(PileRef),
    /// A run of several cards cannot go to a foundation.
    RunToFoundation { len: usize },
    /// The card's suit does not belong on this foundation.
    WrongSuit { card: Card, foundation: usize },
    /// An empty foundation only accepts an Ace.
    NeedsAce(Card),
    /// An empty tableau pile only accepts a King.
    NeedsKing(Card),
    /// The tableau target's top card is face-down.
    FaceDownTarget(PileRef),
    /// Wrong rank (or, on the tableau, same color) for the target's top card.
    OutOfSequence { card: Card, onto: Card },
    /// The tableau pile's top card is already face-up.
    AlreadyFaceUp(usize),
    /// The waste can only be turned over once the stock is empty.
    StockNotEmpty,
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::NoSuchPile(pile) => write!(f, "no such pile {pile}"),
            InvalidMove::NoSuchCard(card) => write!(f, "no card at {card}"),
            InvalidMove::SourceZone(zone) => write!(f, "cannot move cards out of the {zone}"),
            InvalidMove::TargetZone(zone) => write!(f, "cannot drop cards onto the {zone}"),
            InvalidMove::NotTopCard(card) => write!(f, "{card} is not the top card"),
            InvalidMove::FaceDownCard(card) => write!(f, "card at {card} is face-down"),
            InvalidMove::SamePile(pile) => write!(f, "{pile} is both source and target"),
            InvalidMove::RunToFoundation { len } => {
                write!(f, "a run of {len} cards cannot go to a foundation")
            }
            InvalidMove::WrongSuit { card, foundation } => {
                write!(f, "{card} does not belong on foundation {foundation}")
            }
            InvalidMove::NeedsAce(card) => write!(f, "empty foundation needs an Ace, got {card}"),
            InvalidMove::NeedsKing(card) => write!(f, "empty tableau pile needs a King, got {card}"),
            InvalidMove::FaceDownTarget(pile) => write!(f, "top card of {pile} is face-down"),
            InvalidMove::OutOfSequence { card, onto } => write!(f, "{card} cannot go on {onto}"),
            InvalidMove::AlreadyFaceUp(pile) => {
                write!(f, "top card of tableau pile {pile} is already face-up")
            }
            InvalidMove::StockNotEmpty => f.write_str("the stock still has cards"),
        }
    }
}

/// A rejected engine operation. Nothing was mutated and no history was
/// recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejected {
    /// The move breaks a placement rule.
    InvalidMove(InvalidMove),
    /// The source zone or pile has no cards.
    EmptySource(Zone),
    /// The game is already won.
    IllegalStateTransition,
}

impl From<InvalidMove> for MoveRejected {
    fn from(reason: InvalidMove) -> Self {
        MoveRejected::InvalidMove(reason)
    }
}

impl std::fmt::Display for MoveRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejected::InvalidMove(reason) => write!(f, "invalid move: {reason}"),
            MoveRejected::EmptySource(zone) => write!(f, "nothing to take from the {zone}"),
            MoveRejected::IllegalStateTransition => f.write_str("the game is already won"),
        }
    }
}

impl std::error::Error for MoveRejected {}

/// A board that breaks a zone invariant or card conservation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The board does not hold exactly 52 cards.
    CardCount(usize),
    /// The same card appears twice.
    DuplicateCard(Card),
    /// A stock card is face-up.
    StockFaceUp(Card),
    /// A waste card is face-down.
    WasteFaceDown(Card),
    /// A foundation is not `A, 2, 3, …` of its own suit, all face-up.
    FoundationOrder { foundation: usize, card: Card },
    /// A face-down tableau card sits above a face-up one.
    FaceDownOverFaceUp { pile: usize, card: Card },
    /// The face-up part of a tableau pile is not an alternating descending run.
    BrokenRun { pile: usize, card: Card },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::CardCount(n) => write!(f, "board holds {n} cards, expected 52"),
            BoardError::DuplicateCard(card) => write!(f, "{card} appears more than once"),
            BoardError::StockFaceUp(card) => write!(f, "stock card {card} is face-up"),
            BoardError::WasteFaceDown(card) => write!(f, "waste card {card} is face-down"),
            BoardError::FoundationOrder { foundation, card } => {
                write!(f, "{card} is out of order on foundation {foundation}")
            }
            BoardError::FaceDownOverFaceUp { pile, card } => {
                write!(f, "face-down {card} sits above a face-up card on tableau pile {pile}")
            }
            BoardError::BrokenRun { pile, card } => {
                write!(f, "{card} breaks the face-up run on tableau pile {pile}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
