//! HapticFeedback adapters without a device.

use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::{HapticFeedback, HapticNotification, HapticStyle};

/// A recorded haptic signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticEvent {
    Impact(HapticStyle),
    Notify(HapticNotification),
}

/// Discards every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn impact(&self, _style: HapticStyle) {}

    fn notify(&self, _notification: HapticNotification) {}
}

/// Records every signal for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingHaptics {
    events: Arc<Mutex<Vec<HapticEvent>>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals received, in order.
    pub fn events(&self) -> Vec<HapticEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of impacts of the given style.
    pub fn impact_count(&self, style: HapticStyle) -> usize {
        self.events()
            .iter()
            .filter(|e| **e == HapticEvent::Impact(style))
            .count()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn record(&self, event: HapticEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl HapticFeedback for RecordingHaptics {
    fn impact(&self, style: HapticStyle) {
        self.record(HapticEvent::Impact(style));
    }

    fn notify(&self, notification: HapticNotification) {
        self.record(HapticEvent::Notify(notification));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let haptics = RecordingHaptics::new();
        haptics.impact(HapticStyle::Light);
        haptics.notify(HapticNotification::Success);
        haptics.impact(HapticStyle::Light);

        assert_eq!(
            haptics.events(),
            vec![
                HapticEvent::Impact(HapticStyle::Light),
                HapticEvent::Notify(HapticNotification::Success),
                HapticEvent::Impact(HapticStyle::Light),
            ]
        );
        assert_eq!(haptics.impact_count(HapticStyle::Light), 2);
        assert_eq!(haptics.impact_count(HapticStyle::Medium), 0);
    }
}
