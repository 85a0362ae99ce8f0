//! Log sinks and the record shape they consume.
//!
//! # Responsibilities
//! - Define the `LogSink` seam between the logger and its output
//! - Serialize one JSON object per line, fields in insertion order
//! - Default stdout sink for production use
//!
//! # Design Decisions
//! - Sink writes are infallible by contract; a failing log destination must
//!   never fail the request path, so I/O errors are dropped
//! - Field order is preserved (`serde_json` with `preserve_order`) so that
//!   `time`/`level`/`message` lead every line

use serde_json::Value;
use std::io::Write;

/// One output field of a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

/// Shorthand constructor for an [`Attr`].
pub fn attr(key: impl Into<String>, value: impl Into<Value>) -> Attr {
    Attr {
        key: key.into(),
        value: value.into(),
    }
}

/// A fully assembled log record, ready for a sink.
///
/// Fields appear in insertion order. Duplicate keys resolve to the last
/// occurrence when serialized.
#[derive(Debug, Clone)]
pub struct Record {
    pub fields: Vec<Attr>,
}

impl Record {
    /// Look up a field value by key (last occurrence wins, matching the
    /// serialized form).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .rev()
            .find(|a| a.key == key)
            .map(|a| &a.value)
    }

    /// Serialize to a single JSON object.
    pub fn to_json(&self) -> String {
        let mut map = serde_json::Map::new();
        for a in &self.fields {
            map.insert(a.key.clone(), a.value.clone());
        }
        Value::Object(map).to_string()
    }
}

/// Destination for assembled log records.
pub trait LogSink: Send + Sync {
    fn write(&self, record: &Record);
}

/// Default sink: one JSON line per record on stdout.
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write(&self, record: &Record) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", record.to_json());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_preserves_field_order() {
        let record = Record {
            fields: vec![attr("level", "INFO"), attr("msg", "hello"), attr("path", "/")],
        };
        assert_eq!(
            record.to_json(),
            r#"{"level":"INFO","msg":"hello","path":"/"}"#
        );
    }

    #[test]
    fn duplicate_keys_resolve_to_last() {
        let record = Record {
            fields: vec![attr("k", "first"), attr("k", "second")],
        };
        assert_eq!(record.to_json(), r#"{"k":"second"}"#);
        assert_eq!(record.get("k"), Some(&Value::from("second")));
    }
}
