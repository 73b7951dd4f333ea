//! Wall-clock level countdown
//!
//! The timer owns a deadline computed at creation. Pausing records the pause
//! instant; resuming shifts the deadline forward by the paused span, so the
//! countdown resumes un-shortened. Every operation has an `*_at` variant
//! taking an explicit `Instant` so tests can fabricate time instead of
//! sleeping.

use std::time::{Duration, Instant};

/// Countdown the player has to beat
#[derive(Debug, Clone)]
pub struct Timer {
    deadline: Instant,
    paused_at: Option<Instant>,
}

impl Timer {
    /// Start a countdown of the given duration now
    pub fn new(duration: Duration) -> Self {
        Self::starting_at(Instant::now(), duration)
    }

    /// Start a countdown of the given duration at an explicit instant
    pub fn starting_at(now: Instant, duration: Duration) -> Self {
        Self {
            deadline: now + duration,
            paused_at: None,
        }
    }

    /// Freeze the countdown. A second pause without a resume is a no-op.
    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    pub fn pause_at(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Resume the countdown, pushing the deadline out by the paused span
    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    pub fn play_at(&mut self, now: Instant) {
        if let Some(paused) = self.paused_at.take() {
            self.deadline += now.saturating_duration_since(paused);
        }
    }

    /// Seconds until expiry; negative once the timer has run out.
    /// While paused this reads from the pause instant and does not decrease.
    pub fn remaining(&self) -> f64 {
        self.remaining_at(Instant::now())
    }

    pub fn remaining_at(&self, now: Instant) -> f64 {
        let reference = self.paused_at.unwrap_or(now);
        match self.deadline.checked_duration_since(reference) {
            Some(left) => left.as_secs_f64(),
            None => -reference.duration_since(self.deadline).as_secs_f64(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining() < 0.0
    }

    /// Remaining time as "M:SS" for the HUD; clamps at 0:00
    pub fn display(&self) -> String {
        self.display_at(Instant::now())
    }

    pub fn display_at(&self, now: Instant) -> String {
        let left = self.remaining_at(now).max(0.0) as u64;
        format!("{}:{:02}", left / 60, left % 60)
    }
}
