//! The board: stock, waste, foundations and tableau.
//!
//! `Board` owns every card in play and enforces where cards may live:
//! - stock cards are face-down, top = last
//! - waste cards are face-up, top = most recently drawn
//! - foundation `i` holds `A, 2, 3, …` of `Suit::for_foundation(i)`
//! - each tableau pile is a face-down prefix followed by a face-up run that
//!   alternates color and descends in rank
//!
//! Reads are public. The primitive mutations (pop, push, flip, recycle) are
//! crate-private; only the move executor calls them, after validation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Rank, Suit, DECK_SIZE, SUIT_SIZE};
use crate::core::{BoardError, CardRef, PileRef, Zone};

/// Number of tableau piles.
pub const N_TABLEAU: usize = 7;
/// Number of foundation piles.
pub const N_FOUNDATIONS: usize = 4;
/// Cards dealt to the tableau (1 + 2 + … + 7).
pub const DEALT_TO_TABLEAU: usize = N_TABLEAU * (N_TABLEAU + 1) / 2;

/// A run of tableau cards lifted as one unit. Never longer than a suit.
pub type Run = SmallVec<[Card; SUIT_SIZE]>;

/// The four zones of a Klondike layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: [Vec<Card>; N_FOUNDATIONS],
    tableau: [Vec<Card>; N_TABLEAU],
}

impl Board {
    fn empty() -> Self {
        Self {
            stock: Vec::new(),
            waste: Vec::new(),
            foundations: std::array::from_fn(|_| Vec::new()),
            tableau: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Deal a shuffled deck into the opening layout.
    ///
    /// Column `c` walks rows `c..7`, appending one card to each pile; the
    /// card is face-up only when `row == c`, so every pile ends with exactly
    /// one face-up card. The 24 cards left over become the stock, face-down,
    /// in deck order.
    #[must_use]
    pub fn deal(deck: Vec<Card>) -> Self {
        debug_assert_eq!(deck.len(), DECK_SIZE);

        let mut board = Self::empty();
        let mut cards = deck.into_iter();

        for col in 0..N_TABLEAU {
            for row in col..N_TABLEAU {
                if let Some(mut card) = cards.next() {
                    card.set_face_up(row == col);
                    board.tableau[row].push(card);
                }
            }
        }

        board.stock = cards.map(Card::face_down).collect();
        board
    }

    /// Assemble a board from explicit piles, checking every invariant.
    ///
    /// Used to start a session from a known position.
    pub fn from_parts(
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundations: [Vec<Card>; N_FOUNDATIONS],
        tableau: [Vec<Card>; N_TABLEAU],
    ) -> Result<Self, BoardError> {
        let board = Self {
            stock,
            waste,
            foundations,
            tableau,
        };
        board.check_invariants()?;
        Ok(board)
    }

    // === Reads ===

    /// Stock, bottom first. The last card is drawn next.
    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// Waste, oldest first. The last card is playable.
    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    #[must_use]
    pub fn foundations(&self) -> &[Vec<Card>; N_FOUNDATIONS] {
        &self.foundations
    }

    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&[Card]> {
        self.foundations.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn tableau(&self) -> &[Vec<Card>; N_TABLEAU] {
        &self.tableau
    }

    #[must_use]
    pub fn tableau_pile(&self, index: usize) -> Option<&[Card]> {
        self.tableau.get(index).map(Vec::as_slice)
    }

    /// Cards of any pile, `None` if the pile index is out of range.
    #[must_use]
    pub fn pile(&self, pile: PileRef) -> Option<&[Card]> {
        match pile.zone {
            Zone::Stock => (pile.pile == 0).then_some(self.stock.as_slice()),
            Zone::Waste => (pile.pile == 0).then_some(self.waste.as_slice()),
            Zone::Foundation => self.foundation(pile.pile),
            Zone::Tableau => self.tableau_pile(pile.pile),
        }
    }

    /// The card at a position, if there is one.
    #[must_use]
    pub fn card_at(&self, at: CardRef) -> Option<&Card> {
        self.pile(at.pile_ref())?.get(at.index)
    }

    /// Cards on all four foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    /// Cards on the board across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundation_count()
            + self.tableau.iter().map(Vec::len).sum::<usize>()
    }

    /// All four foundations hold a full suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == SUIT_SIZE)
    }

    /// Every card on the board, in zone order.
    pub fn iter_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten())
    }

    // === Invariants ===

    /// Check card conservation and every zone invariant.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        let count = self.card_count();
        if count != DECK_SIZE {
            return Err(BoardError::CardCount(count));
        }

        let mut seen: FxHashSet<(Suit, Rank)> = FxHashSet::default();
        for card in self.iter_cards() {
            if !seen.insert(card.identity()) {
                return Err(BoardError::DuplicateCard(*card));
            }
        }

        if let Some(card) = self.stock.iter().find(|c| c.is_face_up()) {
            return Err(BoardError::StockFaceUp(*card));
        }
        if let Some(card) = self.waste.iter().find(|c| !c.is_face_up()) {
            return Err(BoardError::WasteFaceDown(*card));
        }

        for (foundation, pile) in self.foundations.iter().enumerate() {
            let suit = Suit::for_foundation(foundation);
            for (card, rank) in pile.iter().zip(Rank::ALL) {
                if Some(card.suit()) != suit || card.rank() != rank || !card.is_face_up() {
                    return Err(BoardError::FoundationOrder {
                        foundation,
                        card: *card,
                    });
                }
            }
        }

        for (pile, cards) in self.tableau.iter().enumerate() {
            let first_up = cards.iter().position(Card::is_face_up).unwrap_or(cards.len());
            let run = &cards[first_up..];
            if let Some(card) = run.iter().find(|c| !c.is_face_up()) {
                return Err(BoardError::FaceDownOverFaceUp { pile, card: *card });
            }
            for pair in run.windows(2) {
                if !pair[1].stacks_on(&pair[0]) {
                    return Err(BoardError::BrokenRun {
                        pile,
                        card: pair[1],
                    });
                }
            }
        }

        Ok(())
    }

    // === Primitive mutations (executor only) ===

    /// Move the stock top to the waste, face-up.
    pub(crate) fn draw_to_waste(&mut self) -> Option<Card> {
        let card = self.stock.pop()?.face_up();
        self.waste.push(card);
        Some(card)
    }

    /// Turn the whole waste back into the stock, face-down.
    ///
    /// The waste is reversed so its oldest card becomes the stock top and
    /// the next pass draws in the same order as the last.
    pub(crate) fn recycle_waste(&mut self) -> usize {
        let moved = self.waste.len();
        self.stock = self.waste.drain(..).rev().map(Card::face_down).collect();
        moved
    }

    pub(crate) fn pop_waste(&mut self) -> Option<Card> {
        self.waste.pop()
    }

    /// Lift every card from `start` to the top of a tableau pile.
    pub(crate) fn take_run(&mut self, pile: usize, start: usize) -> Run {
        let cards = &mut self.tableau[pile];
        let start = start.min(cards.len());
        cards.drain(start..).collect()
    }

    pub(crate) fn push_tableau(&mut self, pile: usize, cards: impl IntoIterator<Item = Card>) {
        self.tableau[pile].extend(cards);
    }

    pub(crate) fn push_foundation(&mut self, foundation: usize, card: Card) {
        self.foundations[foundation].push(card);
    }

    /// Turn a tableau pile's top card face-up if it is face-down.
    ///
    /// Returns the flipped card, or `None` if nothing changed.
    pub(crate) fn flip_tableau_top(&mut self, pile: usize) -> Option<Card> {
        let top = self.tableau[pile].last_mut()?;
        if top.is_face_up() {
            return None;
        }
        top.set_face_up(true);
        Some(*top)
    }
}
