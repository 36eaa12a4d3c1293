//! Strictly Calculator - a four-function calculator as an owned state machine.
//!
//! The engine keeps operands as string edit buffers and only converts them to
//! `f64` when a pending operation is computed.
//!
//! # Architecture
//!
//! - **Engine**: [`Calculator`] owns the operand buffers and pending operation
//! - **Formatter**: [`format_display`] groups the integer part for display
//! - **Session**: [`CalculatorSession`] dispatches [`CalculatorCommand`]s and
//!   pushes a [`Readout`] into a [`CalculatorDisplay`] after every command
//!
//! # Example
//!
//! ```
//! use strictly_calculator::{Calculator, EntryToken, Operation};
//!
//! let mut calc = Calculator::new();
//! calc.append(EntryToken::Digit(6));
//! calc.choose_operation(Operation::Divide);
//! calc.append(EntryToken::Digit(3));
//! calc.compute().unwrap();
//! assert_eq!(calc.current_operand(), "2");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod format;
mod operation;
mod session;

pub use engine::{Calculator, EntryToken};
pub use error::CalcError;
pub use format::format_display;
pub use operation::Operation;
pub use session::{CalculatorCommand, CalculatorDisplay, CalculatorSession, Readout};
