//! Klondike rules: validation and execution of moves.
//!
//! - `validator`: pure predicates, request resolution (`plan_*`) and `check_move`
//! - `executor`: re-checks and applies a move, auto-flips, reports score deltas
//! - `moves`: the `Move` vocabulary and `MoveOutcome`
//!
//! The split lets the session take its undo snapshot between planning and
//! applying, so a rejected request never leaves a history entry.

pub mod executor;
pub mod moves;
pub mod validator;

pub use executor::apply;
pub use moves::{Move, MoveOutcome};
pub use validator::{
    can_drop_on_foundation, can_drop_on_tableau, check_foundation_drop, check_move, check_tableau_drop,
    plan_auto_send, plan_draw, plan_flip, plan_move,
};
