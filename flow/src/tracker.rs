//! Order progress indicator.
//!
//! Read-only: the status is fixed when orders are derived from seed data, and
//! no transition function is offered here.

use agromarket_core::OrderStatus;
use serde::Serialize;

pub const STEP_COUNT: usize = OrderStatus::STEPS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackerStep {
    pub status: OrderStatus,
    pub label: &'static str,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tracker {
    current: OrderStatus,
}

impl Tracker {
    pub fn new(current: OrderStatus) -> Self {
        Self { current }
    }

    pub fn current(&self) -> OrderStatus {
        self.current
    }

    pub fn current_step(&self) -> usize {
        self.current.step()
    }

    /// Steps up to and including the current one are done.
    pub fn steps(&self) -> [TrackerStep; STEP_COUNT] {
        OrderStatus::STEPS.map(|status| TrackerStep {
            status,
            label: status.label(),
            done: status <= self.current,
        })
    }

    /// Fill ratio of the progress bar, 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        self.current_step() as f64 / (STEP_COUNT - 1) as f64
    }
}

impl From<OrderStatus> for Tracker {
    fn from(status: OrderStatus) -> Self {
        Self::new(status)
    }
}
