//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Rect};
use rewind_tictactoe::Position;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

/// Regions of the game screen for a given terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Status line box.
    pub status: Rect,
    /// One rect per board square, in index order.
    pub cells: [Rect; 9],
    /// Sort-order toggle button.
    pub toggle: Rect,
    /// Move list box (bordered).
    pub moves: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the game screen regions.
    pub fn new(area: Rect) -> Self {
        let [title, body, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(BOARD_HEIGHT + 3),
            Constraint::Length(1),
        ])
        .areas(area);

        let [game, _, info] = Layout::horizontal([
            Constraint::Length(BOARD_WIDTH + 2),
            Constraint::Length(2),
            Constraint::Min(32),
        ])
        .areas(body);

        let status = Rect {
            height: game.height.min(3),
            ..game
        };

        let board_x = game.x.saturating_add(1);
        let board_y = game.y.saturating_add(3);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                board_x + CELL_WIDTH * pos.col() as u16,
                board_y + CELL_HEIGHT * pos.row() as u16,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area)
        });

        let [toggle, moves] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(info);

        Self {
            title,
            status,
            cells,
            toggle,
            moves,
            help,
        }
    }

    /// Board square under a terminal coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .iter()
            .copied()
            .find(|pos| contains(self.cells[pos.to_index()], column, row))
    }

    /// Whether a terminal coordinate hits the sort toggle.
    pub fn toggle_hit(&self, column: u16, row: u16) -> bool {
        contains(self.toggle, column, row)
    }

    /// Row of the move list (0 = first shown entry) under a terminal coordinate.
    pub fn move_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.moves_inner();
        contains(inner, column, row).then(|| usize::from(row - inner.y))
    }

    /// Number of move-list entries visible at once.
    pub fn visible_moves(&self) -> usize {
        usize::from(self.moves_inner().height)
    }

    fn moves_inner(&self) -> Rect {
        Rect {
            x: self.moves.x.saturating_add(1),
            y: self.moves.y.saturating_add(1),
            width: self.moves.width.saturating_sub(2),
            height: self.moves.height.saturating_sub(2),
        }
    }
}

/// Index of the first move-list entry shown, scrolled just far enough
/// that `selected` is the last visible row.
pub fn list_offset(selected: Option<usize>, visible: usize) -> usize {
    match selected {
        Some(selected) if visible > 0 && selected >= visible => selected + 1 - visible,
        _ => 0,
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(ratatui::layout::Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_cells_form_a_grid() {
        let layout = screen();
        let first = layout.cells[0];
        assert_eq!((first.width, first.height), (CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(layout.cells[1].x, first.x + CELL_WIDTH);
        assert_eq!(layout.cells[3].y, first.y + CELL_HEIGHT);
        assert_eq!(layout.cells[8].x, first.x + 2 * CELL_WIDTH);
    }

    #[test]
    fn test_cell_hit_testing() {
        let layout = screen();
        for pos in Position::ALL {
            let rect = layout.cells[pos.to_index()];
            assert_eq!(layout.cell_at(rect.x + 1, rect.y + 1), Some(pos));
        }
        assert_eq!(layout.cell_at(0, 0), None);
    }

    #[test]
    fn test_move_rows_are_inside_the_border() {
        let layout = screen();
        let x = layout.moves.x + 2;
        assert_eq!(layout.move_row_at(x, layout.moves.y), None);
        assert_eq!(layout.move_row_at(x, layout.moves.y + 1), Some(0));
        assert_eq!(layout.move_row_at(x, layout.moves.y + 4), Some(3));
    }

    #[test]
    fn test_list_offset_keeps_selection_visible() {
        assert_eq!(list_offset(None, 3), 0);
        assert_eq!(list_offset(Some(2), 3), 0);
        assert_eq!(list_offset(Some(3), 3), 1);
        assert_eq!(list_offset(Some(9), 9), 1);
        assert_eq!(list_offset(Some(4), 0), 0);
    }

    #[test]
    fn test_toggle_hit() {
        let layout = screen();
        assert!(layout.toggle_hit(layout.toggle.x + 1, layout.toggle.y + 1));
        assert!(!layout.toggle_hit(layout.cells[0].x, layout.cells[0].y));
    }
}
