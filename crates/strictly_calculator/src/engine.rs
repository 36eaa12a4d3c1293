//! Calculator engine: operand entry, pending operation and computation.

use super::error::CalcError;
use super::format::format_display;
use super::operation::Operation;
use super::session::Readout;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Results are rounded to this many decimal places.
const ROUNDING_SCALE: f64 = 1e10;

/// A single keystroke of operand entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryToken {
    /// A decimal digit (0-9).
    Digit(u8),
    /// The decimal point.
    Point,
}

impl EntryToken {
    /// Parses a digit or `.` key.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '.' => Some(Self::Point),
            _ => key.to_digit(10).map(|d| Self::Digit(d as u8)),
        }
    }

    fn as_char(self) -> Option<char> {
        match self {
            Self::Point => Some('.'),
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
        }
    }
}

/// Four-function calculator state machine.
///
/// The current operand is an edit buffer; it is parsed as `f64` only when a
/// pending operation is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    current_operand: String,
    previous_operand: String,
    pending_operation: Option<Operation>,
    awaiting_fresh_input: bool,
    error: Option<CalcError>,
}

impl Calculator {
    /// Creates a calculator in the cleared state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            pending_operation: None,
            awaiting_fresh_input: false,
            error: None,
        }
    }

    /// Returns the operand being typed.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Returns the operand captured by the pending operation, or `""`.
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// Returns the pending operation.
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }

    /// Returns true if the next digit overwrites the current operand.
    pub fn awaiting_fresh_input(&self) -> bool {
        self.awaiting_fresh_input
    }

    /// Returns the error currently shown, if any.
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    /// Appends a digit or decimal point to the current operand.
    ///
    /// A second `.` in the same operand is ignored, and a digit typed over a
    /// lone `"0"` replaces it.
    #[instrument(skip(self), fields(current = %self.current_operand))]
    pub fn append(&mut self, token: EntryToken) {
        let Some(key) = token.as_char() else {
            debug!(?token, "Ignoring out-of-range digit");
            return;
        };

        if self.awaiting_fresh_input {
            self.current_operand = "0".to_string();
            self.awaiting_fresh_input = false;
        }

        match token {
            EntryToken::Point if self.current_operand.contains('.') => return,
            EntryToken::Digit(_) if self.current_operand == "0" => {
                self.current_operand = key.to_string();
            }
            _ => self.current_operand.push(key),
        }

        self.error = None;
    }

    /// Selects the pending operation, folding any earlier one first.
    ///
    /// Does nothing while an error is shown. If folding the earlier operation
    /// fails, the calculator stays in the error state and `operation` is not
    /// recorded.
    #[instrument(skip(self), fields(current = %self.current_operand, previous = %self.previous_operand))]
    pub fn choose_operation(&mut self, operation: Operation) {
        if self.is_error_state() {
            debug!("Operation ignored in error state");
            return;
        }

        if !self.previous_operand.is_empty() && !self.awaiting_fresh_input {
            if let Err(err) = self.compute() {
                debug!(%err, "Chained computation failed");
                return;
            }
        }

        self.pending_operation = Some(operation);
        self.previous_operand = self.current_operand.clone();
        self.awaiting_fresh_input = true;
    }

    /// Applies the pending operation to the two operands.
    ///
    /// Returns `Ok(None)` without changing anything when no operation is
    /// pending or an operand does not parse. On failure the calculator enters
    /// its error state and the error is returned.
    #[instrument(skip(self), fields(previous = %self.previous_operand, current = %self.current_operand))]
    pub fn compute(&mut self) -> Result<Option<f64>, CalcError> {
        let (Ok(lhs), Ok(rhs)) = (
            self.previous_operand.parse::<f64>(),
            self.current_operand.parse::<f64>(),
        ) else {
            return Ok(None);
        };
        let Some(operation) = self.pending_operation else {
            return Ok(None);
        };

        if operation == Operation::Divide && rhs == 0.0 {
            return Err(self.show_error(CalcError::DivideByZero));
        }

        let value = operation.apply(lhs, rhs);
        if !value.is_finite() {
            return Err(self.show_error(CalcError::Overflow));
        }

        let value = round_result(value);
        debug!(lhs, rhs, %operation, value, "Computed result");

        self.current_operand = value.to_string();
        self.previous_operand.clear();
        self.pending_operation = None;
        self.awaiting_fresh_input = true;
        Ok(Some(value))
    }

    /// Removes the last character of the current operand.
    ///
    /// Does nothing right after a result or a freshly chosen operation.
    #[instrument(skip(self), fields(current = %self.current_operand))]
    pub fn delete_last_char(&mut self) {
        if self.awaiting_fresh_input {
            return;
        }

        if self.current_operand.len() <= 1 {
            self.current_operand = "0".to_string();
        } else {
            self.current_operand.pop();
        }
    }

    /// Resets every field to the initial state.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns true while an error is shown or the operand is not a number.
    pub fn is_error_state(&self) -> bool {
        self.error.is_some() || self.current_operand.parse::<f64>().is_err()
    }

    /// Renders the current state for a display.
    #[instrument(skip(self))]
    pub fn readout(&self) -> Readout {
        let current = match self.error {
            Some(err) => err.to_string(),
            None => format_display(&self.current_operand),
        };
        let previous = match self.pending_operation {
            Some(op) => format!("{} {}", format_display(&self.previous_operand), op.symbol()),
            None => String::new(),
        };
        Readout::new(current, previous, self.error.is_some(), self.pending_operation)
    }

    fn show_error(&mut self, err: CalcError) -> CalcError {
        debug!(%err, "Entering error state");
        self.error = Some(err);
        self.current_operand = "0".to_string();
        self.previous_operand.clear();
        self.pending_operation = None;
        self.awaiting_fresh_input = true;
        err
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounds to ten decimal places to hide binary floating-point noise.
fn round_result(value: f64) -> f64 {
    let scaled = value * ROUNDING_SCALE;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / ROUNDING_SCALE;
    // Normalize -0 so it displays as "0".
    if rounded == 0.0 { 0.0 } else { rounded }
}
