//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{CellView, GameView, Player, Square, Status};

use super::app::App;
use super::input::Focus;
use super::layout::ScreenLayout;

const HELP: &str = "arrows move  enter play  tab switch panel  s sort  r restart  q quit";

/// Draws the whole screen for the app's current view.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let view = app.view();

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_status(frame, layout.status, &view);
    for cell in view.cells() {
        let area = layout.cells[cell.position().to_index()];
        let under_cursor = app.focus() == Focus::Board && *cell.position() == app.cursor();
        draw_cell(frame, area, cell, under_cursor);
    }
    draw_toggle(frame, layout.toggle, view.toggle_label());
    draw_moves(frame, layout.moves, &view, app);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, layout.help);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView) {
    let color = match view.status() {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let status = Paragraph::new(view.status().to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, under_cursor: bool) {
    let mut style = match cell.square() {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if *cell.winning() {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(cell.mark(), style)))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

fn draw_toggle(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.current() {
                Style::default().add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(Color::Cyan)
            };
            ListItem::new(entry.label().as_str()).style(style)
        })
        .collect();

    let border = if app.focus() == Focus::Moves {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(Block::default().title("Moves").borders(Borders::ALL).border_style(border))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let visible = usize::from(area.height.saturating_sub(2));
    let mut state = ListState::default()
        .with_offset(app.list_offset(visible))
        .with_selected(app.list_selection());
    frame.render_stateful_widget(list, area, &mut state);
}
