//! Tic-tac-toe screen.

use super::input::move_cursor;
use super::{TerminalGuard, center_rect};
use crate::config::ArcadeConfig;
use crate::keymap::game_command;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{
    BoardDisplay, BoardView, CellView, FileStore, GameCommand, GameSession, Player, Position,
    ScoreTracker,
};
use tracing::{debug, info, instrument};

/// Holds the latest board view for drawing.
#[derive(Debug, Default)]
struct BoardScreen {
    view: Option<BoardView>,
}

impl BoardDisplay for BoardScreen {
    fn show(&mut self, view: &BoardView) {
        self.view = Some(view.clone());
    }
}

/// Runs the interactive board until `q` or Escape is pressed.
#[instrument(skip(config), fields(scores_dir = %config.scores_dir().display()))]
pub fn run_tictactoe(config: &ArcadeConfig) -> Result<()> {
    info!("Starting tic-tac-toe");
    let tracker = ScoreTracker::new(FileStore::new(config.scores_dir()));
    let mut guard = TerminalGuard::enter()?;
    let mut session = GameSession::new(BoardScreen::default(), tracker);
    let mut cursor = Position::Center;

    loop {
        guard
            .terminal()
            .draw(|frame| draw(frame, session.display(), cursor))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let command = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Ok(());
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameCommand::SelectCell(cursor.to_index())),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                cursor = move_cursor(cursor, key.code);
                None
            }
            code => game_command(code),
        };

        if let Some(command) = command {
            if let GameCommand::SelectCell(index) = command {
                cursor = Position::from_index(index).unwrap_or(cursor);
            }
            if let Err(err) = session.dispatch(command) {
                debug!(%err, "Ignoring rejected move");
            }
        }
    }
}

fn draw(frame: &mut Frame, screen: &BoardScreen, cursor: Position) {
    let Some(view) = &screen.view else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(5), // Status and scores
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], view, cursor);

    let status_style = match (view.active, view.current_player) {
        (false, _) if view.cells.iter().any(|c| c.winning) => {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        }
        (false, _) => Style::default().fg(Color::Yellow),
        (true, player) => player_style(player),
    };
    let mut lines = vec![Line::from(Span::styled(view.status.as_str(), status_style))];
    if let Some(announcement) = &view.announcement {
        lines.push(Line::from(announcement.as_str()));
    }
    lines.push(Line::from(format!(
        "X: {}   O: {}   Ties: {}",
        view.scores.x, view.scores.o, view.scores.ties
    )));
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let cursor_label = view
        .cells
        .get(cursor.to_index())
        .map_or("", |cell| cell.label.as_str());
    let help = Paragraph::new(format!(
        "{cursor_label} · 1-9 or arrows+Enter to move · r reset · q quit"
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);

        for (col, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let index = row * 3 + col;
            if let Some(cell) = view.cells.get(index) {
                draw_cell(frame, col_area, cell, index, cursor.to_index() == index);
            }
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }

    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, index: usize, selected: bool) {
    let (symbol, mut style) = match cell.mark {
        None => (format!("{}", index + 1), Style::default().fg(Color::DarkGray)),
        Some(player) => (player.to_string(), player_style(player)),
    };

    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if selected && cell.enabled {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
