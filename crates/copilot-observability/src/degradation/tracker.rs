//! Record every degradation event raised by the embedding and generation chains.

use chrono::Utc;
use copilot_core::models::DegradationEvent;
use serde::{Deserialize, Serialize};

/// A tracked degradation event with a per-tracker sequence number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub sequence: u64,
    pub event: DegradationEvent,
}

/// Collects degradation events until they are drained for reporting.
#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
    next_sequence: u64,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new degradation event.
    pub fn record(&mut self, event: DegradationEvent) {
        crate::tracing_setup::events::degradation_triggered(
            &event.component,
            &event.failure,
            &event.fallback_used,
        );
        self.events.push(TrackedDegradation {
            sequence: self.next_sequence,
            event,
        });
        self.next_sequence += 1;
    }

    pub fn record_all(&mut self, events: impl IntoIterator<Item = DegradationEvent>) {
        for event in events {
            self.record(event);
        }
    }

    pub fn events(&self) -> &[TrackedDegradation] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every recorded event, oldest first.
    pub fn drain(&mut self) -> Vec<DegradationEvent> {
        self.events.drain(..).map(|t| t.event).collect()
    }

    /// Count events in the last N seconds for a given component.
    pub fn count_recent(&self, component: &str, window_secs: i64) -> usize {
        let cutoff = Utc::now() - chrono::Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|t| t.event.component == component && t.event.timestamp > cutoff)
            .count()
    }
}
