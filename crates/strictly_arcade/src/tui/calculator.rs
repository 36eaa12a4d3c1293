//! Calculator screen.

use super::{TerminalGuard, center_rect};
use crate::config::ArcadeConfig;
use crate::keymap::calculator_command;
use crate::timer::ErrorClearTimers;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, Instant};
use strictly_calculator::{CalculatorDisplay, CalculatorSession, Operation, Readout};
use tracing::{info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

const KEYPAD: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

/// Holds the latest readout for drawing.
#[derive(Debug, Default)]
struct CalculatorScreen {
    readout: Option<Readout>,
}

impl CalculatorDisplay for CalculatorScreen {
    fn show(&mut self, readout: &Readout) {
        self.readout = Some(readout.clone());
    }
}

/// Runs the interactive calculator until `q` is pressed.
#[instrument(skip(config))]
pub fn run_calculator(config: &ArcadeConfig) -> Result<()> {
    info!("Starting calculator");
    let mut guard = TerminalGuard::enter()?;
    let mut session = CalculatorSession::new(CalculatorScreen::default());
    let mut timers = config.error_clear_delay().map(ErrorClearTimers::new);

    loop {
        guard
            .terminal()
            .draw(|frame| draw(frame, session.display()))?;

        let timeout = timers
            .as_ref()
            .and_then(ErrorClearTimers::next_deadline)
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(POLL_INTERVAL, |until| until.min(POLL_INTERVAL));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if key.code == KeyCode::Char('q') {
                info!("User quit");
                return Ok(());
            }

            if let Some(command) = calculator_command(key.code) {
                match timers.as_mut() {
                    Some(timers) => timers.dispatch(&mut session, command, Instant::now()),
                    None => session.dispatch(command),
                }
            }
        }

        if let Some(timers) = timers.as_mut() {
            timers.tick(&mut session, Instant::now());
        }
    }
}

fn draw(frame: &mut Frame, screen: &CalculatorScreen) {
    let Some(readout) = &screen.readout else {
        return;
    };

    let area = center_rect(frame.area(), 36, 16);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(4), // Display
            Constraint::Length(9), // Keypad
            Constraint::Length(2), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let current_style = if readout.error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let display = Paragraph::new(vec![
        Line::from(Span::styled(
            readout.previous.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(readout.current.as_str(), current_style)),
    ])
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(display, chunks[1]);

    let keypad: Vec<Line> = KEYPAD
        .iter()
        .flat_map(|row| [keypad_row(row, readout.pending), Line::default()])
        .collect();
    frame.render_widget(
        Paragraph::new(keypad).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Esc clear · Backspace delete · Enter = · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn keypad_row<'a>(keys: &[&'a str; 4], pending: Option<Operation>) -> Line<'a> {
    let spans: Vec<Span> = keys
        .iter()
        .map(|key| {
            let operation = key.chars().next().and_then(Operation::from_key);
            let label = operation.map_or(*key, |op| op.symbol());
            let style = match operation {
                Some(op) if Some(op) == pending => {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                }
                Some(_) => Style::default().fg(Color::Yellow),
                None => Style::default(),
            };
            Span::styled(format!("  {label}  "), style)
        })
        .collect();
    Line::from(spans)
}
