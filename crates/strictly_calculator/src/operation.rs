//! Binary arithmetic operations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A pending binary operation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Operation {
    /// Addition.
    #[display("+")]
    Add,
    /// Subtraction.
    #[display("-")]
    Subtract,
    /// Multiplication.
    #[display("*")]
    Multiply,
    /// Division.
    #[display("/")]
    Divide,
}

impl Operation {
    /// Parses the ASCII operator key (`+`, `-`, `*`, `/`).
    #[instrument]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the symbol shown next to the previous operand.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{00D7}",
            Self::Divide => "\u{00F7}",
        }
    }

    /// Applies the operation without any checks.
    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}
