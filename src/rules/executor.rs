//! Move execution.
//!
//! `apply` re-checks a move against the board, performs it, auto-flips the
//! newly exposed tableau card and reports the score deltas it earned. It
//! does not touch score, move count or history; the session owns those.

use crate::core::{MoveRejected, Scoring};
use crate::zones::Board;

use super::moves::{Move, MoveOutcome};
use super::validator::check_move;

/// Apply a move to the board.
///
/// A move that is not legal on this exact board is rejected and the board
/// is left unchanged.
pub fn apply(board: &mut Board, mv: Move, scoring: &Scoring) -> Result<MoveOutcome, MoveRejected> {
    check_move(board, mv)?;
    let mut outcome = MoveOutcome::new(mv);

    match mv {
        Move::Draw => {
            outcome.moved.extend(board.draw_to_waste());
        }
        Move::Recycle => {
            board.recycle_waste();
            outcome.deltas.push(scoring.recycle_stock);
        }
        Move::WasteToTableau { to } => {
            outcome.moved.extend(board.pop_waste());
            board.push_tableau(to, outcome.moved.iter().copied());
            outcome.deltas.push(scoring.waste_to_tableau);
        }
        Move::WasteToFoundation { foundation } => {
            if let Some(card) = board.pop_waste() {
                board.push_foundation(foundation, card);
                outcome.moved.push(card);
            }
            outcome.deltas.push(scoring.waste_to_foundation);
        }
        Move::TableauToTableau { from, start, to } => {
            outcome.moved = board.take_run(from, start);
            board.push_tableau(to, outcome.moved.iter().copied());
        }
        Move::TableauToFoundation { from, foundation } => {
            let len = board.tableau_pile(from).map_or(0, |pile| pile.len());
            outcome.moved = board.take_run(from, len.saturating_sub(1));
            if let Some(&card) = outcome.moved.first() {
                board.push_foundation(foundation, card);
            }
            outcome.deltas.push(scoring.tableau_to_foundation);
        }
        Move::FlipTableau { pile } => {
            outcome.flipped = board.flip_tableau_top(pile);
            outcome.deltas.push(scoring.flip_card);
        }
    }

    if let Some(from) = mv.tableau_source() {
        auto_flip(board, from, scoring, &mut outcome);
    }

    Ok(outcome)
}

/// Turn up the new top of a pile that just lost cards.
///
/// The flip scores ahead of the move that exposed it.
fn auto_flip(board: &mut Board, pile: usize, scoring: &Scoring, outcome: &mut MoveOutcome) {
    if let Some(card) = board.flip_tableau_top(pile) {
        outcome.flipped = Some(card);
        outcome.deltas.insert(0, scoring.flip_card);
    }
}
