//! The request-scoped structured logger.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tokio::runtime::Handle;

use crate::logger::level::Level;
use crate::logger::rewrite::{RewriteAttr, ERROR_KEY, LEVEL_KEY, MESSAGE_KEY, STACK_KEY, TIME_KEY};
use crate::logger::sink::{attr, Attr, LogSink, Record, StdoutSink};

/// Payload handed to the error hook after an `error` record is written.
///
/// Carries a clone of the emitting logger so the hook can read its context
/// map (e.g. the trace ID recorded by the injection middleware).
#[derive(Clone)]
pub struct ErrorEvent {
    pub logger: Logger,
    pub message: String,
    pub error: String,
    pub attributes: Vec<Attr>,
}

/// Hook invoked once per `error` call, on a detached execution path.
///
/// The caller never waits on it and never observes its outcome; a panicking
/// hook is contained by the task/thread boundary.
pub type OnError = Arc<dyn Fn(ErrorEvent) + Send + Sync>;

/// Root-logger construction options.
pub struct LoggerOpts {
    /// Minimum severity to emit. `error` ignores this.
    pub level: Level,
    /// Optional per-field rename applied before records reach the sink.
    pub rewrite: Option<RewriteAttr>,
    /// Optional hook dispatched after each `error` record.
    pub on_error: Option<OnError>,
}

/// A leveled structured logger with bound attributes and a private context
/// map.
///
/// Cloning (and [`Logger::with`]) shares the sink, rewrite rule, and error
/// hook; bound attributes and the context map are owned per instance, so a
/// derived logger can be handed to a request without any synchronization.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    level: Level,
    rewrite: Option<RewriteAttr>,
    on_error: Option<OnError>,
    attrs: Vec<Attr>,
    context: HashMap<String, String>,
}

impl Logger {
    /// Construct the root logger writing JSON lines to stdout.
    pub fn new(opts: LoggerOpts) -> Self {
        Self::with_sink(opts, Arc::new(StdoutSink))
    }

    /// Construct the root logger with an explicit sink.
    pub fn with_sink(opts: LoggerOpts, sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            level: opts.level,
            rewrite: opts.rewrite,
            on_error: opts.on_error,
            attrs: Vec::new(),
            context: HashMap::new(),
        }
    }

    /// Derive a child logger with `attrs` appended to the bound set.
    ///
    /// The receiver is not modified; the child shares the sink and hook and
    /// starts from a copy of the receiver's context map.
    pub fn with(&self, attrs: impl IntoIterator<Item = Attr>) -> Logger {
        let mut child = self.clone();
        child.attrs.extend(attrs);
        child
    }

    /// Record a context entry on this logger instance.
    ///
    /// Context entries are metadata for later retrieval (e.g. by the error
    /// hook), not log fields; they are never emitted on their own.
    pub fn set_context(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.context.insert(key.into(), value.into());
    }

    /// Look up a context entry.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }

    pub fn debug(&self, msg: &str, attrs: &[Attr]) {
        self.emit(Level::Debug, msg, attrs);
    }

    pub fn info(&self, msg: &str, attrs: &[Attr]) {
        self.emit(Level::Info, msg, attrs);
    }

    pub fn warning(&self, msg: &str, attrs: &[Attr]) {
        self.emit(Level::Warn, msg, attrs);
    }

    /// Emit an error record and dispatch the error hook.
    ///
    /// Never suppressed by the level threshold. The record (with the rendered
    /// error message and cause chain appended) is written to the sink first;
    /// only then is the hook dispatched fire-and-forget, so the sink write
    /// happens-before the hook runs and the caller never waits on it.
    pub fn error(&self, msg: &str, err: &(dyn std::error::Error + 'static), attrs: &[Attr]) {
        let mut fields = attrs.to_vec();
        fields.push(attr(ERROR_KEY, err.to_string()));
        fields.push(attr(STACK_KEY, render_cause_chain(err)));

        self.emit(Level::Error, msg, &fields);

        if let Some(hook) = &self.on_error {
            let hook = Arc::clone(hook);
            let event = ErrorEvent {
                logger: self.clone(),
                message: msg.to_string(),
                error: err.to_string(),
                attributes: fields,
            };
            dispatch(hook, event);
        }
    }

    fn emit(&self, level: Level, msg: &str, extra: &[Attr]) {
        if level != Level::Error && level < self.level {
            return;
        }

        let mut fields = Vec::with_capacity(3 + self.attrs.len() + extra.len());
        fields.push(attr(
            TIME_KEY,
            Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        ));
        fields.push(attr(LEVEL_KEY, level.as_str()));
        fields.push(attr(MESSAGE_KEY, msg));
        fields.extend(self.attrs.iter().cloned());
        fields.extend(extra.iter().cloned());

        if let Some(rewrite) = &self.rewrite {
            fields = fields.into_iter().map(|a| rewrite(a)).collect();
        }

        self.sink.write(&Record { fields });
    }
}

/// Render an error and its `source()` chain into one multi-line string.
fn render_cause_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\ncaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Run the hook on a detached execution path.
///
/// Inside a Tokio runtime the hook becomes a spawned task; otherwise it runs
/// on a detached OS thread. Either way a panic in the hook stops at that
/// boundary and the dispatch outcome is unobservable to the caller.
fn dispatch(hook: OnError, event: ErrorEvent) {
    match Handle::try_current() {
        Ok(handle) => {
            handle.spawn(async move {
                hook(event);
            });
        }
        Err(_) => {
            std::thread::spawn(move || {
                hook(event);
            });
        }
    }
}
