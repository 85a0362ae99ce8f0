//! Output-field rewrite rules.
//!
//! A rewrite rule adapts the canonical record fields to the schema a log
//! ingestion backend expects. It is injected configuration: a pure function
//! applied to every output field at emission time.

use crate::logger::sink::Attr;
use serde_json::Value;
use std::sync::Arc;

/// Canonical key for the record message.
pub const MESSAGE_KEY: &str = "msg";
/// Canonical key for the record severity.
pub const LEVEL_KEY: &str = "level";
/// Canonical key for the rendered error message on `error` records.
pub const ERROR_KEY: &str = "error";
/// Canonical key for the rendered cause chain on `error` records.
pub const STACK_KEY: &str = "stack";
/// Canonical key for the record timestamp.
pub const TIME_KEY: &str = "time";

/// Pure per-field rename/transform applied before a record reaches the sink.
pub type RewriteAttr = Arc<dyn Fn(Attr) -> Attr + Send + Sync>;

/// Rewrite preset for Google Cloud Logging (Stackdriver) ingestion.
///
/// Maps the canonical fields onto the LogEntry schema:
/// `msg` → `message`, `level` → `severity` (normalizing `WARN` to the
/// literal `WARNING`), `error` → `errorMessage`.
///
/// SEE: https://cloud.google.com/logging/docs/reference/v2/rest/v2/LogEntry#logseverity
pub fn stackdriver() -> RewriteAttr {
    Arc::new(|a: Attr| match a.key.as_str() {
        MESSAGE_KEY => Attr {
            key: "message".to_string(),
            value: a.value,
        },
        LEVEL_KEY => {
            let value = if a.value == Value::from("WARN") {
                Value::from("WARNING")
            } else {
                a.value
            };
            Attr {
                key: "severity".to_string(),
                value,
            }
        }
        ERROR_KEY => Attr {
            key: "errorMessage".to_string(),
            value: a.value,
        },
        _ => a,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::sink::attr;

    #[test]
    fn stackdriver_renames_canonical_fields() {
        let rewrite = stackdriver();
        assert_eq!(rewrite(attr(MESSAGE_KEY, "hi")), attr("message", "hi"));
        assert_eq!(rewrite(attr(LEVEL_KEY, "INFO")), attr("severity", "INFO"));
        assert_eq!(rewrite(attr(ERROR_KEY, "boom")), attr("errorMessage", "boom"));
    }

    #[test]
    fn stackdriver_normalizes_warn() {
        let rewrite = stackdriver();
        assert_eq!(rewrite(attr(LEVEL_KEY, "WARN")), attr("severity", "WARNING"));
    }

    #[test]
    fn stackdriver_leaves_other_fields_alone() {
        let rewrite = stackdriver();
        assert_eq!(rewrite(attr("path", "/users")), attr("path", "/users"));
    }
}
