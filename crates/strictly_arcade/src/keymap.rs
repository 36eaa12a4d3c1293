//! Translation of raw key presses into engine commands.

use crossterm::event::KeyCode;
use derive_more::{Display, Error};
use strictly_calculator::{
    CalculatorCommand, CalculatorSession, EntryToken, Operation, Readout,
};
use strictly_tictactoe::GameCommand;
use tracing::{debug, instrument};

/// Maps a calculator key.
///
/// Digits, `.`, `+ - * /`, `=` or Enter, Escape (clear) and Backspace
/// (delete) are recognized.
#[instrument]
pub fn calculator_command(key: KeyCode) -> Option<CalculatorCommand> {
    match key {
        KeyCode::Enter => Some(CalculatorCommand::Equals),
        KeyCode::Esc => Some(CalculatorCommand::Clear),
        KeyCode::Backspace => Some(CalculatorCommand::Delete),
        KeyCode::Char('=') => Some(CalculatorCommand::Equals),
        KeyCode::Char(c) => {
            if let Some(token) = EntryToken::from_key(c) {
                Some(match token {
                    EntryToken::Digit(d) => CalculatorCommand::Digit(d),
                    EntryToken::Point => CalculatorCommand::Point,
                })
            } else {
                Operation::from_key(c).map(CalculatorCommand::Operator)
            }
        }
        _ => None,
    }
}

/// Maps a game key: `1`-`9` select cells 0-8, `r` resets.
#[instrument]
pub fn game_command(key: KeyCode) -> Option<GameCommand> {
    match key {
        KeyCode::Char('r' | 'R') => Some(GameCommand::Reset),
        KeyCode::Char(c @ '1'..='9') => {
            c.to_digit(10).map(|n| GameCommand::SelectCell(n as usize - 1))
        }
        _ => None,
    }
}

/// A key in a replayed sequence has no calculator binding.
#[derive(Debug, Clone, Display, Error)]
#[display("No calculator key for {:?} at position {}", key, index)]
pub struct UnmappedKey {
    /// The offending character.
    pub key: char,
    /// Character offset in the sequence.
    pub index: usize,
}

/// Feeds a typed key sequence to a fresh calculator and returns every
/// readout the display received, starting with the initial one.
/// Whitespace is ignored.
///
/// ```
/// use strictly_arcade::replay_calculator_keys;
///
/// let trail = replay_calculator_keys("2+3+4=").unwrap();
/// assert_eq!(trail.last().unwrap().current, "9");
/// ```
#[instrument]
pub fn replay_calculator_keys(sequence: &str) -> Result<Vec<Readout>, UnmappedKey> {
    let mut trail = Vec::new();
    {
        let mut session = CalculatorSession::new(|readout: &Readout| trail.push(readout.clone()));
        for (index, key) in sequence.chars().enumerate() {
            if key.is_whitespace() {
                continue;
            }
            let command =
                calculator_command(KeyCode::Char(key)).ok_or(UnmappedKey { key, index })?;
            debug!(?command, "Replaying key");
            session.dispatch(command);
        }
    }
    Ok(trail)
}
