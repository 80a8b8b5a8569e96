//! Quiet-aware event forwarding

use crate::domain::ports::{RunEvent, RunEventSink};

/// Forwards events to a sink, dropping narration when quiet.
pub(crate) struct Narrator<'a> {
    events: &'a dyn RunEventSink,
    quiet: bool,
}

impl<'a> Narrator<'a> {
    pub(crate) fn new(events: &'a dyn RunEventSink, quiet: bool) -> Self {
        Self { events, quiet }
    }

    pub(crate) fn emit(&self, event: RunEvent) {
        if self.quiet && event.is_narration() {
            return;
        }
        self.events.on_event(event);
    }
}
