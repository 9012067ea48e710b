//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board: the winner and the line that won.
///
/// Draws are not reported here; a verdict without a winner on a full
/// board is a draw, see [`is_draw`](super::is_draw).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Verdict {
    winner: Option<Player>,
    line: Option<[Position; 3]>,
}

impl Verdict {
    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<[Position; 3]> {
        self.line
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.line.is_some_and(|line| line.contains(&pos))
    }
}

/// Evaluates the board, returning the first completed line in [`LINES`] order.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Verdict {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Verdict {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    Verdict::default()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}
