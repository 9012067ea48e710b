//! First-class input and outcome types for the timeline.
//!
//! Inputs are domain events: they carry the user's intent and are
//! validated by the timeline before anything changes.

use super::Position;
use serde::{Deserialize, Serialize};

/// Something the player asked the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Intent {
    /// Place the next mark on a board index (0-8).
    #[display("play {}", _0)]
    Play(usize),
    /// Jump to a move in the history list.
    #[display("jump to move #{}", _0)]
    JumpTo(usize),
    /// Flip the move-list order.
    #[display("toggle sort order")]
    ToggleSort,
}

/// Why an input was absorbed without changing the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The board index is not in 0-8.
    #[display("Index {} is off the board", _0)]
    OffBoard(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board being played on already has a winner.
    #[display("Game is already won")]
    GameOver,

    /// The requested move is not in the history.
    #[display("Move #{} is not in the history of {} boards", requested, len)]
    UnknownMove {
        /// Requested history index.
        requested: usize,
        /// Current history length.
        len: usize,
    },

    /// A postcondition check rejected the candidate timeline.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

/// Result of feeding an input to the timeline.
///
/// Ignored inputs are not errors: the UI treats them as no-ops and the
/// reason exists for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The state changed.
    Applied,
    /// The input was a no-op.
    Ignored(IgnoreReason),
}

impl Transition {
    /// Whether the state changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }

    /// The reason the input was ignored, if it was.
    pub fn reason(&self) -> Option<&IgnoreReason> {
        match self {
            Transition::Applied => None,
            Transition::Ignored(reason) => Some(reason),
        }
    }
}

impl From<Result<(), IgnoreReason>> for Transition {
    fn from(result: Result<(), IgnoreReason>) -> Self {
        match result {
            Ok(()) => Transition::Applied,
            Err(reason) => Transition::Ignored(reason),
        }
    }
}
