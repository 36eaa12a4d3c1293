//! Calculator error types.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Arithmetic failure shown on the calculator display.
///
/// The display text is exactly the message the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum CalcError {
    /// The right operand of a division was zero.
    #[display("Cannot divide by zero")]
    DivideByZero,
    /// The result was not a finite number.
    #[display("Result is too large")]
    Overflow,
}
