//! Subscriber layer feeding the buffer

use std::fmt;

use chrono::Utc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::buffer::{LogRecord, RollingBuffer};

/// Captures every event it sees into a [`RollingBuffer`]
#[derive(Debug, Clone)]
pub struct RollingLayer {
    buffer: RollingBuffer,
}

impl RollingLayer {
    pub fn new(buffer: RollingBuffer) -> Self {
        Self { buffer }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.buffer.push(to_record(event));
    }
}

pub(crate) fn to_record(event: &Event<'_>) -> LogRecord {
    let mut visitor = RecordVisitor::default();
    event.record(&mut visitor);
    let meta = event.metadata();
    LogRecord {
        timestamp: Utc::now(),
        level: *meta.level(),
        target: meta.target().to_string(),
        message: visitor.message,
        fields: visitor.fields,
    }
}

#[derive(Default)]
struct RecordVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl RecordVisitor {
    fn push(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            // log records bridged through tracing-log
            name if name.starts_with("log.") => {}
            name => self.fields.push((name.to_string(), value)),
        }
    }
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }
}
