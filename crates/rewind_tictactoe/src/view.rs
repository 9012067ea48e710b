//! Pure view model derived from a [`Timeline`].
//!
//! [`render`] is called after every input; front ends draw the returned
//! [`GameView`] and never read the timeline directly.

use super::order::SortOrder;
use super::{Player, Position, Square, Timeline};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Text of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// The displayed board has a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The displayed board is full without a line.
    #[display("It's a draw!")]
    Draw,
    /// Play continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One square of the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct CellView {
    position: Position,
    square: Square,
    winning: bool,
}

impl CellView {
    /// Mark text for the square, empty when unoccupied.
    pub fn mark(&self) -> &'static str {
        match self.square {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    move_number: usize,
    label: String,
    current: bool,
}

/// Everything a front end shows for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    status: Status,
    #[getter(skip)]
    toggle_label: &'static str,
    cells: [CellView; 9],
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Label of the sort toggle, naming the order it switches to.
    pub fn toggle_label(&self) -> &'static str {
        self.toggle_label
    }
}

/// Derives the view for the timeline's current state.
#[instrument(skip(timeline), fields(current_move = timeline.current_move()))]
pub fn render(timeline: &Timeline) -> GameView {
    let board = timeline.current_board();
    let verdict = timeline.verdict();

    let status = if let Some(winner) = verdict.winner() {
        Status::Winner(winner)
    } else if timeline.is_draw() {
        Status::Draw
    } else {
        Status::NextPlayer(timeline.next_player())
    };

    let cells = Position::ALL.map(|position| CellView {
        position,
        square: board.get(position),
        winning: verdict.is_winning_square(position),
    });

    let moves = move_list(timeline.history().len(), timeline.current_move(), timeline.sort_order());

    GameView {
        status,
        toggle_label: timeline.sort_order().toggle_label(),
        cells,
        moves,
    }
}

/// Builds the move list for `len` history entries in the given order.
pub fn move_list(len: usize, current_move: usize, order: SortOrder) -> Vec<MoveEntry> {
    order
        .arrange(len)
        .into_iter()
        .map(|move_number| {
            let current = move_number == current_move;
            let label = if current {
                format!("You are at move #{}", move_number)
            } else {
                jump_label(move_number)
            };
            MoveEntry {
                move_number,
                label,
                current,
            }
        })
        .collect()
}

/// Label of the jump control for a move.
///
/// Row and column come from the move number alone, not from the board.
pub fn jump_label(move_number: usize) -> String {
    match move_number {
        0 => "Go to game start".to_string(),
        m => {
            let (row, col) = move_coordinates(m);
            format!("Go to move #{} (row: {}, col: {})", m, row, col)
        }
    }
}

/// Row and column shown for move `m > 0`: `((m - 1) / 3, (m - 1) % 3)`.
pub fn move_coordinates(move_number: usize) -> (usize, usize) {
    let step = move_number.saturating_sub(1);
    (step / 3, step % 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_labels() {
        assert_eq!(jump_label(0), "Go to game start");
        assert_eq!(jump_label(1), "Go to move #1 (row: 0, col: 0)");
        assert_eq!(jump_label(5), "Go to move #5 (row: 1, col: 1)");
        assert_eq!(jump_label(9), "Go to move #9 (row: 2, col: 2)");
    }

    #[test]
    fn test_current_entry_is_inert_text() {
        let moves = move_list(3, 1, SortOrder::Ascending);
        assert_eq!(moves[1].label(), "You are at move #1");
        assert!(*moves[1].current());
        assert!(!*moves[0].current());
        assert_eq!(moves[2].label(), "Go to move #2 (row: 0, col: 1)");
    }

    #[test]
    fn test_descending_list_reverses_order() {
        let moves = move_list(3, 2, SortOrder::Descending);
        let numbers: Vec<usize> = moves.iter().map(|m| *m.move_number()).collect();
        assert_eq!(numbers, vec![2, 1, 0]);
        assert_eq!(moves[0].label(), "You are at move #2");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(Status::Draw.to_string(), "It's a draw!");
        assert_eq!(Status::NextPlayer(Player::X).to_string(), "Next player: X");
    }

    #[test]
    fn test_render_fresh_timeline() {
        let view = render(&Timeline::new());
        assert_eq!(view.status(), &Status::NextPlayer(Player::X));
        assert_eq!(view.toggle_label(), "Sort Descending");
        assert!(view.cells().iter().all(|c| c.mark().is_empty() && !c.winning()));
        assert_eq!(view.moves().len(), 1);
        assert_eq!(view.moves()[0].label(), "You are at move #0");
    }
}
