//! Log record representation for the gelfhook adapter.
//!
//! This module defines the `GelfRecord` struct that captures one log event
//! together with its severity, timestamp, and structured fields for the
//! duration of a single delivery call.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::level::GelfLevel;

/// One log event handed to the adapter for forwarding.
#[derive(Clone, Debug)]
pub struct GelfRecord {
    /// Severity of the event.
    pub level: GelfLevel,
    /// The log message content.
    pub message: String,
    /// Time the record was created.
    pub timestamp: SystemTime,
    /// Structured key-value pairs attached to the record.
    pub fields: BTreeMap<String, Value>,
}

impl GelfRecord {
    /// Construct a record with the current time and no extra fields.
    pub fn new(level: GelfLevel, message: &str) -> Self {
        Self {
            level,
            message: message.to_owned(),
            timestamp: SystemTime::now(),
            fields: BTreeMap::new(),
        }
    }

    /// Attach one structured field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Merge a batch of structured fields into the record.
    pub fn with_fields(mut self, fields: BTreeMap<String, Value>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Override the capture time. Useful for deterministic output.
    pub fn with_timestamp(mut self, timestamp: SystemTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whole seconds since the unix epoch.
    pub(crate) fn unix_timestamp(&self) -> u64 {
        self.timestamp
            .duration_since(UNIX_EPOCH)
            .map(|dur| dur.as_secs())
            .unwrap_or_default()
    }
}

impl fmt::Display for GelfRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn with_field_accumulates() {
        let record = GelfRecord::new(GelfLevel::Informational, "hello")
            .with_field("service", "api")
            .with_field("attempt", 3);
        assert_eq!(record.fields.len(), 2);
        assert_eq!(record.fields["service"], Value::from("api"));
        assert_eq!(record.fields["attempt"], Value::from(3));
    }

    #[test]
    fn unix_timestamp_truncates_to_seconds() {
        let record = GelfRecord::new(GelfLevel::Debug, "tick")
            .with_timestamp(UNIX_EPOCH + Duration::from_millis(1_700_000_000_750));
        assert_eq!(record.unix_timestamp(), 1_700_000_000);
    }

    #[test]
    fn display_shows_level_and_message() {
        let record = GelfRecord::new(GelfLevel::Error, "boom");
        assert_eq!(record.to_string(), "ERROR - boom");
    }
}
