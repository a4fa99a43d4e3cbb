//! IO-backed notification sinks.
//!
//! Narration never fails, so these sinks log the first write error and drop
//! the rest silently instead of propagating.

use std::io::Write;

use trilogy_types::{Notification, NotificationSink};

/// Writes each notification's rendered text as one line.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    writer: W,
    failed: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Whether any write has failed so far.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

impl<W: Write> NotificationSink for TextSink<W> {
    fn notify(&mut self, notification: Notification) {
        if let Err(e) = writeln!(self.writer, "{}", notification.format()) {
            report_write_failure(&mut self.failed, "text", &e);
        }
    }
}

/// Writes each notification as a single JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    failed: bool,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

impl<W: Write> NotificationSink for JsonLinesSink<W> {
    fn notify(&mut self, notification: Notification) {
        let line = match serde_json::to_string(&notification) {
            Ok(line) => line,
            Err(e) => {
                report_write_failure(&mut self.failed, "json", &e);
                return;
            }
        };
        if let Err(e) = writeln!(self.writer, "{line}") {
            report_write_failure(&mut self.failed, "json", &e);
        }
    }
}

/// Forwards notifications to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: Notification) {
        tracing::info!(target: "trilogy::narration", "{}", notification.format());
    }
}

fn report_write_failure(failed: &mut bool, sink: &str, err: &dyn std::fmt::Display) {
    if !*failed {
        tracing::warn!(sink, "Failed to write notification: {err}");
        *failed = true;
    }
}
