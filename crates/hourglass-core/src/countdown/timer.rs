//! Countdown timer implementation.
//!
//! The countdown is a host-ticked state machine. It does not use internal
//! threads - the host owns the one-second tick source and calls `tick()`
//! once per elapsed second while the countdown runs.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Point-in-time read of the countdown. Pure, no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub remaining_secs: u64,
    pub running: bool,
}

/// A single one-second countdown, armed with a duration by the session
/// controller and decremented by the host's tick source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountdownTimer {
    remaining_secs: u64,
    running: bool,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        CountdownSnapshot {
            remaining_secs: self.remaining_secs,
            running: self.running,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Arm with a fresh duration. A zero duration arms an already-expired
    /// countdown: not running, and no tick will ever fire for it.
    pub fn arm(&mut self, total_secs: u64) {
        self.remaining_secs = total_secs;
        self.running = total_secs > 0;
    }

    /// Advance one second. No-op while stopped. Yields `CountdownCompleted`
    /// exactly once, on the tick that reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
            tracing::debug!("countdown completed");
            return Some(Event::CountdownCompleted { at: Utc::now() });
        }
        None
    }

    /// Stop without touching the remaining time.
    pub fn cancel(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::CountdownCancelled {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }
}
