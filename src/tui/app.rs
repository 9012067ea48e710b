//! Application state and input handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use rewind_tictactoe::{GameView, Intent, Position, SortOrder, Timeline, Transition, render};
use tracing::{debug, info, instrument};

use super::input::{Command, Focus, command_for, move_cursor};
use super::layout::{ScreenLayout, list_offset};

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the timeline; every input goes through [`App::handle_event`] and
/// the screen is redrawn from [`App::view`] afterwards.
#[derive(Debug)]
pub struct App {
    timeline: Timeline,
    cursor: Position,
    focus: Focus,
    selected: usize,
    screen: Rect,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument]
    pub fn new(order: SortOrder) -> Self {
        let timeline = Timeline::with_order(order);
        let mut app = Self {
            timeline,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            screen: Rect::default(),
        };
        app.select_current();
        app
    }

    /// The game timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The view for the current state.
    pub fn view(&self) -> GameView {
        render(&self.timeline)
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row in the shown move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Highlighted move-list row, shown only while the list has focus.
    pub fn list_selection(&self) -> Option<usize> {
        (self.focus == Focus::Moves).then_some(self.selected)
    }

    /// First move-list entry shown for a list box of `visible` rows.
    pub fn list_offset(&self, visible: usize) -> usize {
        list_offset(self.list_selection(), visible)
    }

    /// Records the terminal area used for the last draw.
    pub fn resize(&mut self, screen: Rect) {
        self.screen = screen;
    }

    /// Regions of the last drawn screen.
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.screen)
    }

    /// Handles one terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                Control::Continue
            }
            Event::Resize(width, height) => {
                self.resize(Rect::new(0, 0, width, height));
                Control::Continue
            }
            _ => Control::Continue,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }

        let Some(command) = command_for(key.code, self.focus) else {
            return Control::Continue;
        };
        debug!(?command, "Key command");

        match command {
            Command::Quit => {
                info!("User quit");
                return Control::Quit;
            }
            Command::Restart => self.restart(),
            Command::SwitchFocus => self.focus = self.focus.toggle(),
            Command::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::PlayCursor => {
                self.dispatch(Intent::Play(self.cursor.to_index()));
            }
            Command::PlaySquare(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.dispatch(Intent::Play(index));
            }
            Command::Select(delta) => {
                let last = self.timeline.history().len() - 1;
                self.selected = self.selected.saturating_add_signed(delta).min(last);
            }
            Command::JumpToSelected => self.jump_to_row(self.selected),
            Command::ToggleSort => {
                self.dispatch(Intent::ToggleSort);
            }
        }
        Control::Continue
    }

    /// Handles a mouse event; only left clicks act.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = self.layout();
        let (column, row) = (mouse.column, mouse.row);
        let offset = self.list_offset(layout.visible_moves());

        if let Some(pos) = layout.cell_at(column, row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.dispatch(Intent::Play(pos.to_index()));
        } else if layout.toggle_hit(column, row) {
            self.dispatch(Intent::ToggleSort);
        } else if let Some(list_row) = layout.move_row_at(column, row) {
            self.focus = Focus::Moves;
            self.jump_to_row(offset + list_row);
        }
    }

    /// Jumps to the move at `row` of the full move list, unless it is the
    /// current move or past the end.
    fn jump_to_row(&mut self, row: usize) {
        let view = self.view();
        let Some(entry) = view.moves().get(row) else {
            return;
        };
        self.selected = row;
        if *entry.current() {
            return;
        }
        self.dispatch(Intent::JumpTo(*entry.move_number()));
    }

    /// Applies an intent to the timeline and keeps the UI state in step.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Transition {
        let transition = self.timeline.apply(intent);
        if let Transition::Ignored(reason) = &transition {
            debug!(%intent, %reason, "Input ignored");
            return transition;
        }

        match intent {
            Intent::ToggleSort => {
                // Keep the same move selected after the list flips.
                let last = self.timeline.history().len() - 1;
                self.selected = last - self.selected.min(last);
            }
            Intent::Play(_) | Intent::JumpTo(_) => self.select_current(),
        }
        transition
    }

    /// Starts a new game, keeping the list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.timeline.restart();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.select_current();
    }

    fn select_current(&mut self) {
        let current = self.timeline.current_move();
        self.selected = match self.timeline.sort_order() {
            SortOrder::Ascending => current,
            SortOrder::Descending => self.timeline.history().len() - 1 - current,
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn sized_app() -> App {
        let mut app = App::default();
        app.resize(Rect::new(0, 0, 80, 24));
        app
    }

    #[test]
    fn test_enter_plays_under_cursor() {
        let mut app = sized_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        let board = app.timeline().current_board();
        assert!(!board.is_empty(Position::Center));
        assert!(!board.is_empty(Position::TopCenter));
        assert_eq!(app.timeline().current_move(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sized_app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Quit);
        assert_eq!(press(&mut app, KeyCode::Char('x')), Control::Continue);
    }

    #[test]
    fn test_clicking_a_cell_plays_it() {
        let mut app = sized_app();
        let rect = app.layout().cells[8];
        click(&mut app, rect.x + 3, rect.y + 1);

        assert!(!app.timeline().current_board().is_empty(Position::BottomRight));
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_clicking_a_move_jumps_there() {
        let mut app = sized_app();
        for code in ['1', '2', '3'] {
            press(&mut app, KeyCode::Char(code));
        }
        let moves = app.layout().moves;
        // Ascending: row 1 of the list is move #1.
        click(&mut app, moves.x + 2, moves.y + 2);

        assert_eq!(app.timeline().current_move(), 1);
        assert_eq!(app.timeline().history().len(), 4);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_clicking_toggle_flips_order_and_keeps_selection() {
        let mut app = sized_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selected(), 2);

        let toggle = app.layout().toggle;
        click(&mut app, toggle.x + 1, toggle.y + 1);

        assert_eq!(app.timeline().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected(), 0);
        assert_eq!(app.view().moves()[0].label(), "You are at move #2");
    }

    #[test]
    fn test_move_list_keyboard_navigation() {
        let mut app = sized_app();
        for code in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(code));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.timeline().current_move(), 1);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected(), 3);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut app = sized_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.timeline().history().len(), 1);
        assert_eq!(app.selected(), 0);
    }
}
