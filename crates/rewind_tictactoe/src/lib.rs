//! Pure tic-tac-toe game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: the win evaluator ([`evaluate`]) and draw detection
//! - **Timeline**: board history, current move and list order ([`Timeline`])
//! - **Contracts / invariants**: move preconditions and timeline postconditions
//! - **View**: the pure [`render`] function every front end draws from
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Status, Timeline, render};
//!
//! let mut timeline = Timeline::new();
//! timeline.apply_move(4);
//! assert_eq!(render(&timeline).status(), &Status::NextPlayer(rewind_tictactoe::Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod order;
mod position;
mod rules;
mod timeline;
mod types;
mod view;

pub use action::{IgnoreReason, Intent, Transition};
pub use contracts::{Contract, LegalPlay, NoWinnerYet, PlayContract, SquareIsEmpty};
pub use invariants::{
    AlternatingMarksInvariant, CursorInBoundsInvariant, EmptyOriginInvariant, Invariant,
    InvariantSet, InvariantViolation, SingleStepInvariant, TimelineInvariants,
};
pub use order::SortOrder;
pub use position::Position;
pub use rules::{LINES, Verdict, check_winner, evaluate, is_draw, is_full};
pub use timeline::Timeline;
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView, MoveEntry, Status, jump_label, move_coordinates, move_list, render};
