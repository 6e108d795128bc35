//! Circular record buffer

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::Level;

/// One captured event
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
    /// `name=value` pairs other than the message
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    /// Single-line form used by the console sink
    pub fn line(&self) -> String {
        let mut line = format!(
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        );
        for (name, value) in &self.fields {
            line.push_str(&format!(" {}={}", name, value));
        }
        line
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Shared handle; clones see the same records. Oldest records are evicted
/// once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct RollingBuffer {
    records: Arc<Mutex<VecDeque<LogRecord>>>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, record: LogRecord) {
        let mut records = self.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.lock().iter().cloned().collect()
    }

    /// Records at exactly `level`, oldest first
    pub fn at_level(&self, level: Level) -> Vec<LogRecord> {
        self.lock().iter().filter(|r| r.level == level).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
