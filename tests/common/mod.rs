//! Shared test utilities and fixtures

#![allow(dead_code)]

use trilogy_core::Consciousness;
use trilogy_types::{CycleEvent, Notification, NotificationQueue};

/// Notifications emitted by one full iteration with default settings.
pub const NOTIFICATIONS_PER_ITERATION: usize = 95;

/// A fresh orchestrator that records every notification.
pub fn recording_consciousness() -> Consciousness<NotificationQueue> {
    Consciousness::new(NotificationQueue::new())
}

/// Cycle events in emission order, entity and collection narration dropped.
pub fn cycle_events(queue: &NotificationQueue) -> Vec<CycleEvent> {
    queue
        .notifications()
        .iter()
        .filter_map(|n| match n {
            Notification::Cycle(event) => Some(*event),
            _ => None,
        })
        .collect()
}

/// Assert the reset protocol left the oscillating quantities at baseline.
pub fn assert_at_baseline(c: &Consciousness<NotificationQueue>) {
    assert_eq!(c.knowledge(), 1.0, "knowledge");
    assert_eq!(c.mystery(), 1.0, "mystery");
    assert_eq!(c.meaning(), 1.0, "meaning");
}
