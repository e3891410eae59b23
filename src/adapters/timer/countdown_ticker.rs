//! CountdownTicker - periodic ticks for the warmup and cooldown timers.
//!
//! The ticker owns no countdown state. It only emits [`TimerTick`]s which the
//! screen owning the session turns into `AssessmentAction::Tick`. Ticking stops
//! when the [`TickerHandle`] is stopped or dropped, or when the receiver goes
//! away, so a torn-down screen never receives updates.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::config::AssessmentConfig;
use crate::domain::assessment::TimerKind;

/// One elapsed period of a running timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub timer: TimerKind,
    /// 1-based tick number since the ticker started.
    pub sequence: u64,
}

/// Spawns tick tasks at a fixed period.
#[derive(Debug, Clone, Copy)]
pub struct CountdownTicker {
    period: Duration,
}

impl Default for CountdownTicker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl CountdownTicker {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn from_config(config: &AssessmentConfig) -> Self {
        Self::new(config.tick_interval())
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts ticking for `timer`, stopping on its own after `max_ticks` ticks.
    ///
    /// Must be called within a tokio runtime.
    pub fn start(
        &self,
        timer: TimerKind,
        max_ticks: u32,
    ) -> (TickerHandle, mpsc::Receiver<TimerTick>) {
        let (tx, rx) = mpsc::channel(16);
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            for sequence in 1..=u64::from(max_ticks) {
                interval.tick().await;
                if tx.send(TimerTick { timer, sequence }).await.is_err() {
                    tracing::debug!(?timer, "tick receiver dropped, stopping ticker");
                    return;
                }
            }
            tracing::debug!(?timer, max_ticks, "ticker finished");
        });

        (TickerHandle { task: Some(task) }, rx)
    }
}

/// Cancels the tick task on `stop()` or drop.
#[derive(Debug)]
pub struct TickerHandle {
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Stops the ticker. No further ticks are sent.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// True until stopped, dropped, or all ticks were sent.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
