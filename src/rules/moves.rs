//! Move representation.
//!
//! A `Move` is a fully validated state transition: the validator turns a
//! player's request (draw, drag from A to B, double-click, flip) into one of
//! these variants, and the executor applies it. Pile indices are already
//! checked against the board by the time a `Move` exists.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::zones::Run;

/// A validated move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Turn the stock top onto the waste.
    Draw,
    /// Turn the waste back over into the stock.
    Recycle,
    /// Top waste card onto a tableau pile.
    WasteToTableau { to: usize },
    /// Top waste card onto its foundation.
    WasteToFoundation { foundation: usize },
    /// Cards `start..` of one tableau pile onto another.
    TableauToTableau { from: usize, start: usize, to: usize },
    /// Top card of a tableau pile onto its foundation.
    TableauToFoundation { from: usize, foundation: usize },
    /// Turn a face-down tableau top card face-up.
    FlipTableau { pile: usize },
}

impl Move {
    /// Tableau pile this move lifts cards from, if any.
    ///
    /// The executor auto-flips the new top of this pile afterwards.
    #[must_use]
    pub fn tableau_source(&self) -> Option<usize> {
        match *self {
            Move::TableauToTableau { from, .. } | Move::TableauToFoundation { from, .. } => {
                Some(from)
            }
            _ => None,
        }
    }

    /// True for moves that put a card on a foundation.
    #[must_use]
    pub fn is_to_foundation(&self) -> bool {
        matches!(
            self,
            Move::WasteToFoundation { .. } | Move::TableauToFoundation { .. }
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Draw => f.write_str("draw"),
            Move::Recycle => f.write_str("recycle"),
            Move::WasteToTableau { to } => write!(f, "waste -> tableau[{to}]"),
            Move::WasteToFoundation { foundation } => write!(f, "waste -> foundation[{foundation}]"),
            Move::TableauToTableau { from, start, to } => {
                write!(f, "tableau[{from}]#{start} -> tableau[{to}]")
            }
            Move::TableauToFoundation { from, foundation } => {
                write!(f, "tableau[{from}] -> foundation[{foundation}]")
            }
            Move::FlipTableau { pile } => write!(f, "flip tableau[{pile}]"),
        }
    }
}

/// What applying a move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move applied.
    pub mv: Move,

    /// Cards that changed pile, bottom first. Empty for flips and
    /// recycles.
    pub moved: Run,

    /// Tableau card turned face-up by this move, manual or automatic.
    pub flipped: Option<Card>,

    /// Score deltas in the order they apply. The session floors the score
    /// at zero after each one.
    pub deltas: SmallVec<[i32; 2]>,
}

impl MoveOutcome {
    #[must_use]
    pub fn new(mv: Move) -> Self {
        Self {
            mv,
            moved: Run::new(),
            flipped: None,
            deltas: SmallVec::new(),
        }
    }

    /// Sum of the deltas, before any flooring.
    #[must_use]
    pub fn raw_delta(&self) -> i32 {
        self.deltas.iter().sum()
    }
}
