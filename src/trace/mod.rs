//! Trace-context header parsing.
//!
//! # Data Flow
//! ```text
//! X-Cloud-Trace-Context header (raw bytes)
//!     → extract_trace_id
//!     → Some(trace_id) | None (absent/malformed, degraded path)
//! ```
//!
//! # Design Decisions
//! - Pure and deterministic; safe on attacker-controlled input (constrained
//!   character class, no backtracking blowup)
//! - Exactly one `<hex>/<hex>` segment is required; multi-segment headers are
//!   treated as malformed rather than guessed at
//! - Absence or malformation never fails the request; callers degrade by
//!   logging without trace attributes

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TRACE_CONTEXT_RE: Regex = Regex::new(r"([a-f0-9]+)/([a-f0-9]+)").unwrap();
}

/// Extract the trace ID from a raw `X-Cloud-Trace-Context` header value.
///
/// The header has the shape `<trace-id-hex>/<span-id-hex>[;o=<flag>]`; only
/// the leading hex segment is returned. Empty, non-UTF-8, or ambiguous
/// (zero or multiple segment) input yields `None`.
///
/// SEE: https://cloud.google.com/trace/docs/setup#force-trace
pub fn extract_trace_id(raw: &[u8]) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let raw = std::str::from_utf8(raw).ok()?;

    let mut matches = TRACE_CONTEXT_RE.captures_iter(raw);
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }

    Some(first.get(1)?.as_str().to_string())
}
