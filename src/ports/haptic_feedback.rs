//! HapticFeedback port - fire-and-forget device feedback.
//!
//! Implementations must never fail the caller; delivery problems are theirs to
//! swallow (and log).

/// Strength of an impact pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticStyle {
    Light,
    Medium,
}

/// Outcome notification pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticNotification {
    Success,
    Error,
}

/// Device haptics.
pub trait HapticFeedback: Send + Sync {
    /// Plays an impact pulse.
    fn impact(&self, style: HapticStyle);

    /// Plays a notification pattern.
    fn notify(&self, notification: HapticNotification);
}
