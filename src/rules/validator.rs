//! Move validation.
//!
//! Everything here reads the board and never mutates it. The two placement
//! predicates (`can_drop_on_foundation`, `can_drop_on_tableau`) are the
//! rules of Klondike; the `plan_*` functions resolve a player request
//! against the board and either produce a `Move` or say why not.

use crate::cards::{Card, Rank, Suit};
use crate::core::{CardRef, InvalidMove, MoveRejected, PileRef, Zone};
use crate::zones::Board;

use super::moves::Move;

/// Check whether `card` may land on a foundation.
///
/// The foundation must belong to the card's suit; an empty one takes only
/// an Ace, otherwise the card must be one rank above the top.
pub fn check_foundation_drop(board: &Board, card: &Card, foundation: usize) -> Result<(), InvalidMove> {
    let pile = board
        .foundation(foundation)
        .ok_or(InvalidMove::NoSuchPile(PileRef::foundation(foundation)))?;

    if Suit::for_foundation(foundation) != Some(card.suit()) {
        return Err(InvalidMove::WrongSuit {
            card: *card,
            foundation,
        });
    }

    match pile.last() {
        None if card.rank() == Rank::Ace => Ok(()),
        None => Err(InvalidMove::NeedsAce(*card)),
        Some(top) if top.rank().next() == Some(card.rank()) => Ok(()),
        Some(top) => Err(InvalidMove::OutOfSequence {
            card: *card,
            onto: *top,
        }),
    }
}

/// Check whether `card` may land on a tableau pile.
///
/// An empty pile takes only a King. Otherwise the top must be face-up, of
/// the other color, and one rank above the card.
pub fn check_tableau_drop(board: &Board, card: &Card, pile: usize) -> Result<(), InvalidMove> {
    let target = PileRef::tableau(pile);
    let cards = board.tableau_pile(pile).ok_or(InvalidMove::NoSuchPile(target))?;

    match cards.last() {
        None if card.rank() == Rank::King => Ok(()),
        None => Err(InvalidMove::NeedsKing(*card)),
        Some(top) if !top.is_face_up() => Err(InvalidMove::FaceDownTarget(target)),
        Some(top) if card.stacks_on(top) => Ok(()),
        Some(top) => Err(InvalidMove::OutOfSequence {
            card: *card,
            onto: *top,
        }),
    }
}

/// True if `card` may land on foundation `foundation`.
#[must_use]
pub fn can_drop_on_foundation(board: &Board, card: &Card, foundation: usize) -> bool {
    check_foundation_drop(board, card, foundation).is_ok()
}

/// True if `card` may land on tableau pile `pile`.
#[must_use]
pub fn can_drop_on_tableau(board: &Board, card: &Card, pile: usize) -> bool {
    check_tableau_drop(board, card, pile).is_ok()
}

/// A resolved pick-up: where the lifted cards come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lift {
    Waste,
    Tableau { pile: usize, start: usize },
}

/// Resolve a source position into the cards it lifts.
///
/// Returns the lift, the first (bottom) card of the lifted run and the run
/// length.
fn resolve_source(board: &Board, source: CardRef) -> Result<(Lift, Card, usize), MoveRejected> {
    let cards = match source.zone {
        Zone::Stock | Zone::Foundation => {
            return Err(InvalidMove::SourceZone(source.zone).into());
        }
        Zone::Waste | Zone::Tableau => board
            .pile(source.pile_ref())
            .ok_or(InvalidMove::NoSuchPile(source.pile_ref()))?,
    };

    if cards.is_empty() {
        return Err(MoveRejected::EmptySource(source.zone));
    }
    let card = *cards.get(source.index).ok_or(InvalidMove::NoSuchCard(source))?;
    if !card.is_face_up() {
        return Err(InvalidMove::FaceDownCard(source).into());
    }

    let len = cards.len() - source.index;
    let lift = match source.zone {
        Zone::Waste if len != 1 => return Err(InvalidMove::NotTopCard(source).into()),
        Zone::Waste => Lift::Waste,
        _ => Lift::Tableau {
            pile: source.pile,
            start: source.index,
        },
    };

    Ok((lift, card, len))
}

/// Resolve a drag from `source` to `target` into a move.
///
/// A tableau source lifts every card from `source.index` to the top of the
/// pile. The run goes to a tableau pile if its first card may, and to a
/// foundation only as a single card.
pub fn plan_move(board: &Board, source: CardRef, target: PileRef) -> Result<Move, MoveRejected> {
    let (lift, card, len) = resolve_source(board, source)?;

    match target.zone {
        Zone::Stock | Zone::Waste => Err(InvalidMove::TargetZone(target.zone).into()),
        Zone::Foundation => {
            if len != 1 {
                return Err(InvalidMove::RunToFoundation { len }.into());
            }
            check_foundation_drop(board, &card, target.pile)?;
            Ok(match lift {
                Lift::Waste => Move::WasteToFoundation {
                    foundation: target.pile,
                },
                Lift::Tableau { pile, .. } => Move::TableauToFoundation {
                    from: pile,
                    foundation: target.pile,
                },
            })
        }
        Zone::Tableau => {
            if let Lift::Tableau { pile, .. } = lift {
                if pile == target.pile {
                    return Err(InvalidMove::SamePile(target).into());
                }
            }
            check_tableau_drop(board, &card, target.pile)?;
            Ok(match lift {
                Lift::Waste => Move::WasteToTableau { to: target.pile },
                Lift::Tableau { pile, start } => Move::TableauToTableau {
                    from: pile,
                    start,
                    to: target.pile,
                },
            })
        }
    }
}

/// Resolve a double-click on a card into a move to its suit's foundation.
///
/// Only the top card of the waste or of a tableau pile qualifies.
pub fn plan_auto_send(board: &Board, source: CardRef) -> Result<Move, MoveRejected> {
    let (_, card, len) = resolve_source(board, source)?;
    if len != 1 {
        return Err(InvalidMove::NotTopCard(source).into());
    }
    plan_move(board, source, PileRef::foundation(card.suit().foundation_index()))
}

/// Resolve a click on the stock: draw if it has cards, otherwise recycle
/// the waste.
pub fn plan_draw(board: &Board) -> Result<Move, MoveRejected> {
    if !board.stock().is_empty() {
        Ok(Move::Draw)
    } else if !board.waste().is_empty() {
        Ok(Move::Recycle)
    } else {
        Err(MoveRejected::EmptySource(Zone::Stock))
    }
}

/// Resolve a click on a tableau pile's face-down top card.
pub fn plan_flip(board: &Board, pile: usize) -> Result<Move, MoveRejected> {
    let cards = board
        .tableau_pile(pile)
        .ok_or(InvalidMove::NoSuchPile(PileRef::tableau(pile)))?;

    match cards.last() {
        None => Err(MoveRejected::EmptySource(Zone::Tableau)),
        Some(top) if top.is_face_up() => Err(InvalidMove::AlreadyFaceUp(pile).into()),
        Some(_) => Ok(Move::FlipTableau { pile }),
    }
}

/// Check that an already built `Move` is legal on this board.
///
/// A `Move` may have been planned against another state or assembled by
/// hand; this re-derives it from the same request and rejects it unless
/// the board still allows exactly that move.
pub fn check_move(board: &Board, mv: Move) -> Result<(), MoveRejected> {
    let waste_top = || CardRef::waste(board.waste().len().saturating_sub(1));

    let planned = match mv {
        Move::Draw | Move::Recycle => plan_draw(board)?,
        Move::WasteToTableau { to } => plan_move(board, waste_top(), PileRef::tableau(to))?,
        Move::WasteToFoundation { foundation } => {
            plan_move(board, waste_top(), PileRef::foundation(foundation))?
        }
        Move::TableauToTableau { from, start, to } => {
            plan_move(board, CardRef::tableau(from, start), PileRef::tableau(to))?
        }
        Move::TableauToFoundation { from, foundation } => {
            let top = board
                .tableau_pile(from)
                .map_or(0, |pile| pile.len().saturating_sub(1));
            plan_move(board, CardRef::tableau(from, top), PileRef::foundation(foundation))?
        }
        Move::FlipTableau { pile } => plan_flip(board, pile)?,
    };

    match (mv, planned) {
        (requested, planned) if requested == planned => Ok(()),
        (Move::Recycle, _) => Err(InvalidMove::StockNotEmpty.into()),
        _ => Err(MoveRejected::EmptySource(Zone::Stock)),
    }
}
