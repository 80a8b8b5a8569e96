//! Console event sink
//!
//! Prints run events to stdout as they happen. Prompts are flushed so the
//! operator sees them before input is read.

use std::io::{self, Write};

use bce_cert_cleaner::domain::ports::{RunEvent, RunEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::progress::render_event;

pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

impl RunEventSink for ConsoleEventSink {
    fn on_event(&self, event: RunEvent) {
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(render_event(&event, &self.ui).as_bytes());
        let _ = stdout.flush();
    }
}
