//! Keyboard mapping for the game screen.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// A keyboard command, before it is applied to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Play the square under the cursor.
    PlayCursor,
    /// Play a board index directly (0-8).
    PlaySquare(usize),
    /// Move the move-list selection up (-1) or down (+1).
    Select(isize),
    /// Jump to the selected move-list entry.
    JumpToSelected,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Flip the move-list order.
    ToggleSort,
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key press to a command for the focused panel.
pub fn command_for(key: KeyCode, focus: Focus) -> Option<Command> {
    match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Command::Quit),
        (KeyCode::Char('r'), _) => Some(Command::Restart),
        (KeyCode::Char('s'), _) => Some(Command::ToggleSort),
        (KeyCode::Tab | KeyCode::BackTab, _) => Some(Command::SwitchFocus),
        (KeyCode::Char(c @ '1'..='9'), _) => c
            .to_digit(10)
            .map(|digit| Command::PlaySquare(digit as usize - 1)),
        (
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right,
            Focus::Board,
        ) => Some(Command::MoveCursor(key)),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Command::PlayCursor),
        (KeyCode::Up, Focus::Moves) => Some(Command::Select(-1)),
        (KeyCode::Down, Focus::Moves) => Some(Command::Select(1)),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Moves) => Some(Command::JumpToSelected),
        _ => None,
    }
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
