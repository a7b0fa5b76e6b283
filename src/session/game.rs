//! The game session.
//!
//! `GameSession` owns the board, the score, the move counter, the undo
//! history and the RNG used for deals. Every mutating entry point goes
//! through `commit`, which:
//!
//! 1. rejects the call if the game is already won
//! 2. lets the validator plan the move and the executor apply it
//!    (rejections touch nothing)
//! 3. pushes the pre-move snapshot onto the history
//! 4. adds the score deltas, flooring after each
//! 5. bumps the move counter and checks for the win

use log::{debug, info, trace};

use crate::cards::shuffled_deck;
use crate::core::{BoardError, CardRef, GameConfig, GameRng, MoveRejected, PileRef, Scoring};
use crate::history::{BoardSnapshot, History};
use crate::rules::{self, Move};
use crate::zones::Board;

use super::summary::{GameStatus, GameSummary};

/// A single game of Klondike and its bookkeeping.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    score: u32,
    move_count: u32,
    history: History,
    status: GameStatus,
    /// Wall-clock seconds reported by the host; not part of snapshots.
    elapsed_seconds: u64,
}

impl GameSession {
    /// Create a session and deal the first game.
    ///
    /// Uses `config.seed` for the deal RNG, or entropy if unset.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = GameRng::seeded_or_entropy(config.seed);
        let board = Board::deal(shuffled_deck(&mut rng));
        let history = History::new(config.history_capacity);
        info!("new game dealt (seed {})", rng.seed());

        Self {
            config,
            rng,
            board,
            score: 0,
            move_count: 0,
            history,
            status: GameStatus::InProgress,
            elapsed_seconds: 0,
        }
    }

    /// Create a session with default settings and a fixed deal seed.
    ///
    /// ```
    /// use klondike_engine::GameSession;
    ///
    /// let a = GameSession::with_seed(7);
    /// let b = GameSession::with_seed(7);
    /// assert_eq!(a.board(), b.board());
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default().with_seed(seed))
    }

    /// Start from a hand-built board.
    ///
    /// The board is checked again here since it may have been deserialized
    /// rather than built with `Board::from_parts`. A board that is already
    /// complete starts in the won state.
    pub fn from_board(board: Board, config: GameConfig) -> Result<Self, BoardError> {
        board.check_invariants()?;

        let rng = GameRng::seeded_or_entropy(config.seed);
        let status = if board.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        let history = History::new(config.history_capacity);

        Ok(Self {
            config,
            rng,
            board,
            score: 0,
            move_count: 0,
            history,
            status,
            elapsed_seconds: 0,
        })
    }

    // === Lifecycle ===

    /// Discard the current game and deal a fresh one.
    ///
    /// Always allowed, including after a win. Score, moves, elapsed time
    /// and history are reset.
    pub fn new_game(&mut self) -> BoardSnapshot {
        self.board = Board::deal(shuffled_deck(&mut self.rng));
        self.score = 0;
        self.move_count = 0;
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.elapsed_seconds = 0;
        info!("new game dealt");
        self.snapshot()
    }

    // === Moves ===

    /// Click on the stock: draw one card, or recycle the waste when the
    /// stock is empty.
    pub fn draw_stock(&mut self) -> Result<BoardSnapshot, MoveRejected> {
        let planned = rules::plan_draw(&self.board);
        self.commit(planned)
    }

    /// Drag the card at `source` (and everything above it) onto `target`.
    pub fn attempt_move(&mut self, source: CardRef, target: PileRef) -> Result<BoardSnapshot, MoveRejected> {
        let planned = rules::plan_move(&self.board, source, target);
        self.commit(planned)
    }

    /// Send a top card straight to its suit's foundation.
    pub fn auto_send_to_foundation(&mut self, source: CardRef) -> Result<BoardSnapshot, MoveRejected> {
        let planned = rules::plan_auto_send(&self.board, source);
        self.commit(planned)
    }

    /// Turn a face-down tableau top card face-up.
    pub fn flip_top_card(&mut self, pile: usize) -> Result<BoardSnapshot, MoveRejected> {
        let planned = rules::plan_flip(&self.board, pile);
        self.commit(planned)
    }

    /// Would `attempt_move(source, target)` be accepted right now?
    #[must_use]
    pub fn can_move(&self, source: CardRef, target: PileRef) -> bool {
        !self.status.is_terminal() && rules::plan_move(&self.board, source, target).is_ok()
    }

    /// Restore the state from before the last move.
    ///
    /// Returns `None` when there is nothing to undo or the game is won.
    /// Undo is not itself recorded, so it cannot be redone.
    pub fn undo(&mut self) -> Option<BoardSnapshot> {
        if self.status.is_terminal() {
            trace!("undo rejected: game is won");
            return None;
        }
        let previous = self.history.pop()?;
        debug!(
            "undo to move {} (score {}, {} left in history)",
            previous.move_count,
            previous.score,
            self.history.len()
        );
        self.board = previous.board;
        self.score = previous.score;
        self.move_count = previous.move_count;
        Some(self.snapshot())
    }

    /// Advance the elapsed-time counter by one second.
    ///
    /// Does nothing once the game is won, so the final time stays put.
    pub fn tick(&mut self) {
        if !self.status.is_terminal() {
            self.elapsed_seconds += 1;
        }
    }

    fn commit(&mut self, planned: Result<Move, MoveRejected>) -> Result<BoardSnapshot, MoveRejected> {
        if self.status.is_terminal() {
            trace!("rejected: game is won");
            return Err(MoveRejected::IllegalStateTransition);
        }
        let before = self.snapshot();
        let outcome = planned
            .and_then(|mv| rules::apply(&mut self.board, mv, &self.config.scoring))
            .map_err(|err| {
                trace!("rejected: {err}");
                err
            })?;
        self.history.push(before);
        let mv = outcome.mv;
        for &delta in &outcome.deltas {
            self.score = Scoring::apply(self.score, delta);
        }
        self.move_count += 1;

        match outcome.flipped {
            Some(card) => debug!("{mv}, flipped {card}, {:+} -> score {}", outcome.raw_delta(), self.score),
            None => debug!("{mv}, {:+} -> score {}", outcome.raw_delta(), self.score),
        }

        // Only a card reaching a foundation can complete the game.
        if mv.is_to_foundation() && self.board.is_won() {
            self.status = GameStatus::Won;
            info!(
                "game won: score {}, {} moves, {}s",
                self.score, self.move_count, self.elapsed_seconds
            );
        }

        Ok(self.snapshot())
    }

    // === Queries ===

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// The live board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the board and counters.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.board.clone(), self.score, self.move_count)
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            move_count: self.move_count,
            elapsed_seconds: self.elapsed_seconds,
            won: self.is_won(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the deal RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
