//! Countdown state for the warmup and cooldown timers.
//!
//! The countdown itself is pure state; the one-second ticks are produced by
//! `adapters::timer::CountdownTicker` and applied by the session owner.

use serde::Serialize;

/// Default warmup length (15 minutes).
pub const WARMUP_SECS: u32 = 15 * 60;

/// Default cooldown length (10 minutes).
pub const COOLDOWN_SECS: u32 = 10 * 60;

/// Which of the two session timers a tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    Warmup,
    Cooldown,
}

/// A seconds counter that only decrements once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    total_secs: u32,
    remaining_secs: u32,
    started: bool,
}

impl Countdown {
    /// Creates a stopped countdown.
    pub fn new(total_secs: u32) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
            started: false,
        }
    }

    /// Starts the countdown. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Decrements by one second. Returns true if the value changed.
    pub fn tick(&mut self) -> bool {
        if !self.started || self.remaining_secs == 0 {
            return false;
        }
        self.remaining_secs -= 1;
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    /// Remaining time as `m:ss`.
    pub fn formatted(&self) -> String {
        format!("{}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}
