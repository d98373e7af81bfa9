//! Event-recording reporter for testing.

use std::sync::{Arc, Mutex};

use mlforge_core::application::ports::{MaterializeEvent, Reporter};

/// Captures every reported event for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<MaterializeEvent>>>,
}

impl RecordingReporter {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events reported so far.
    pub fn events(&self) -> Vec<MaterializeEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &MaterializeEvent) {
        let Ok(mut events) = self.events.lock() else {
            return;
        };
        events.push(event.clone());
    }
}
