//! Testimonial Rotator
//!
//! A single index into a fixed, non-empty sequence of testimonials.
//! `next` and `prev` wrap in both directions, and exactly one testimonial
//! is active at any time.
//!
//! [`AutoAdvance`] is the repeating timer that drives `next`. It does not
//! touch the rotator: it posts [`Tick`]s to the host's event queue, and
//! the host applies them one at a time like any other page event. Manual
//! navigation does not reschedule it. The task stops when the handle is
//! stopped or dropped.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_types::Testimonial;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::error::RotatorError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialRotator {
    index: usize,
    count: usize,
}

impl TestimonialRotator {
    pub fn new(count: usize) -> Result<Self, RotatorError> {
        if count == 0 {
            return Err(RotatorError::NoTestimonials);
        }
        Ok(Self { index: 0, count })
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Advance to `(index + 1) mod N`.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        debug!(index = self.index, "Next testimonial");
        self.index
    }

    /// Step back to `(index - 1 + N) mod N`.
    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.count - 1) % self.count;
        debug!(index = self.index, "Previous testimonial");
        self.index
    }

    /// Jump straight to a testimonial.
    pub fn show(&mut self, index: usize) -> Result<usize, RotatorError> {
        if index >= self.count {
            return Err(RotatorError::OutOfRange {
                index,
                len: self.count,
            });
        }
        self.index = index;
        Ok(self.index)
    }

    /// Active flag per testimonial; exactly one is set.
    pub fn active_flags(&self) -> Vec<bool> {
        (0..self.count).map(|i| i == self.index).collect()
    }

    pub fn view(&self, testimonials: &[Testimonial]) -> TestimonialView {
        TestimonialView {
            index: self.index,
            count: self.count,
            active: testimonials.get(self.index).cloned(),
        }
    }
}

/// The testimonial currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialView {
    pub index: usize,
    pub count: usize,
    pub active: Option<Testimonial>,
}

/// One firing of the auto-advance timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub seq: u64,
}

/// Cancellable repeating task that posts a [`Tick`] every `period`.
///
/// The first tick fires one full period after spawning.
#[derive(Debug)]
pub struct AutoAdvance {
    handle: JoinHandle<()>,
    period: Duration,
}

impl AutoAdvance {
    pub fn spawn(period: Duration, tx: mpsc::Sender<Tick>) -> Self {
        info!(period_ms = period.as_millis() as u64, "Starting testimonial auto-advance");

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut seq = 0u64;
            loop {
                interval.tick().await;
                seq += 1;
                if tx.send(Tick { seq }).await.is_err() {
                    debug!("Tick receiver dropped, stopping auto-advance");
                    break;
                }
            }
        });

        Self { handle, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(&self) {
        if self.is_running() {
            info!("Stopping testimonial auto-advance");
        }
        self.handle.abort();
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
