//! Tick scheduling for the game loop.
//!
//! `TickClock` replaces an implicit repeating-timer callback with explicit
//! start / stop / reschedule bookkeeping: the loop controller cancels the
//! pending tick before mutating state, and tests can inspect scheduling
//! without wall-clock delays. The clock only tracks the next deadline;
//! waiting happens through [`wait_for`], which owns its deadline copy and
//! so can sit in a select! arm next to handlers that mutate the clock.

use std::time::Duration;
use tokio::time::{Instant, sleep_until};

pub struct TickClock {
    deadline: Option<Instant>,
    period: Duration,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self {
            deadline: None,
            period,
        }
    }

    /// Arm the clock; the first tick is due one full period from now
    pub fn start(&mut self) {
        self.deadline = Some(Instant::now() + self.period);
    }

    /// Cancel the pending tick. State mutated after this call can never be
    /// hit by a stale tick.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Change the period; a running clock is re-armed on the new cadence
    pub fn reschedule(&mut self, period: Duration) {
        self.period = period;
        if self.deadline.is_some() {
            self.start();
        }
    }

    /// Record that the pending tick fired and arm the next one
    pub fn mark_fired(&mut self) {
        if self.deadline.is_some() {
            self.deadline = Some(Instant::now() + self.period);
        }
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

/// Completes at the given deadline; pends forever when there is none
pub async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
