//! Command dispatch and display sink for the calculator.

use super::engine::{Calculator, EntryToken};
use super::operation::Operation;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A discrete input from a button or key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorCommand {
    /// Digit key (0-9).
    Digit(u8),
    /// Decimal point key.
    Point,
    /// Operator key.
    Operator(Operation),
    /// Equals key.
    Equals,
    /// Clear key.
    Clear,
    /// Delete (backspace) key.
    Delete,
}

/// What the display shows after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Readout {
    /// Formatted current operand, or the error message.
    pub current: String,
    /// Formatted previous operand followed by the operator symbol, or `""`.
    pub previous: String,
    /// True while an error message is shown.
    pub error: bool,
    /// The pending operation, used to highlight the active operator key.
    pub pending: Option<Operation>,
}

/// Receives a [`Readout`] after every calculator command.
pub trait CalculatorDisplay {
    /// Shows the readout.
    fn show(&mut self, readout: &Readout);
}

impl<F: FnMut(&Readout)> CalculatorDisplay for F {
    fn show(&mut self, readout: &Readout) {
        self(readout)
    }
}

/// An owned calculator wired to a display sink.
#[derive(Debug)]
pub struct CalculatorSession<D> {
    calculator: Calculator,
    display: D,
}

impl<D: CalculatorDisplay> CalculatorSession<D> {
    /// Creates a session and shows the initial readout.
    #[instrument(skip(display))]
    pub fn new(mut display: D) -> Self {
        let calculator = Calculator::new();
        display.show(&calculator.readout());
        Self {
            calculator,
            display,
        }
    }

    /// Returns the calculator.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the mutable calculator.
    pub fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }

    /// Returns the display sink.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Applies a command and pushes the new readout to the display.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: CalculatorCommand) {
        match command {
            CalculatorCommand::Digit(d) => self.calculator.append(EntryToken::Digit(d)),
            CalculatorCommand::Point => self.calculator.append(EntryToken::Point),
            CalculatorCommand::Operator(op) => self.calculator.choose_operation(op),
            CalculatorCommand::Equals => {
                if let Err(err) = self.calculator.compute() {
                    debug!(%err, "Computation failed");
                }
            }
            CalculatorCommand::Clear => self.calculator.clear(),
            CalculatorCommand::Delete => self.calculator.delete_last_char(),
        }
        self.refresh();
    }

    /// Pushes the current readout to the display without changing state.
    pub fn refresh(&mut self) {
        self.display.show(&self.calculator.readout());
    }
}
