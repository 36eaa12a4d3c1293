//! Delayed auto-clear of calculator error messages.
//!
//! Every error schedules its own clear. Timers are never cancelled, so a
//! timer left over from an earlier error can clear a newer error before its
//! own delay has elapsed.
//!
//! A firing timer only clears while the calculator is in its error state. A
//! stale timer therefore never wipes a value typed after the error; it only
//! races with a later error.

use std::time::{Duration, Instant};
use strictly_calculator::{CalculatorCommand, CalculatorDisplay, CalculatorSession};
use tracing::{debug, instrument};

/// Pending error-clear deadlines.
#[derive(Debug, Clone)]
pub struct ErrorClearTimers {
    delay: Duration,
    pending: Vec<Instant>,
}

impl ErrorClearTimers {
    /// Creates an empty timer set firing `delay` after each schedule.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Vec::new(),
        }
    }

    /// Schedules a clear `delay` after `now`.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, now: Instant) {
        self.pending.push(now + self.delay);
        debug!(pending = self.pending.len(), "Error clear scheduled");
    }

    /// Dispatches `command`, scheduling a clear if it moved the calculator
    /// into an error.
    #[instrument(skip(self, session))]
    pub fn dispatch<D: CalculatorDisplay>(
        &mut self,
        session: &mut CalculatorSession<D>,
        command: CalculatorCommand,
        now: Instant,
    ) {
        let was_error = session.calculator().error().is_some();
        session.dispatch(command);
        if !was_error && session.calculator().error().is_some() {
            self.schedule(now);
        }
    }

    /// Fires every timer due at `now`, returning how many fired.
    #[instrument(skip(self, session))]
    pub fn tick<D: CalculatorDisplay>(
        &mut self,
        session: &mut CalculatorSession<D>,
        now: Instant,
    ) -> usize {
        let fired = self.take_due(now);
        for _ in 0..fired {
            if session.calculator().is_error_state() {
                debug!("Auto-clearing error");
                session.calculator_mut().clear();
                session.refresh();
            }
        }
        fired
    }

    /// Removes and counts every timer due at `now`.
    pub fn take_due(&mut self, now: Instant) -> usize {
        let before = self.pending.len();
        self.pending.retain(|deadline| *deadline > now);
        before - self.pending.len()
    }

    /// Returns the earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().min().copied()
    }

    /// Returns the number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if no timer is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
