//! Logging adapter wrapping an optional caller-supplied sink.
//!
//! The manager logs through a [`LoggerAdapter`]: a caller-supplied
//! [`LogSink`] when one was configured, otherwise the built-in
//! [`StdOutLogSink`]. Messages optionally pass through a [`Translator`]
//! before delivery; when no translator is configured the identity function
//! is used, so the log path has no translation branch.
//!
//! There is no buffering and no failure handling: a panicking sink or
//! translator unwinds to the caller.
//!
//! # Examples
//!
//! ```rust
//! use gqlweave::logging::{LogLevel, LoggerAdapter};
//!
//! let adapter = LoggerAdapter::new(None, None);
//! assert!(!adapter.has_custom_sink());
//! adapter.log(LogLevel::Info, "ready"); // "info: [gqlweave] ready" on stdout
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Module tag attached to every line emitted through the adapter.
pub const MODULE_TAG: &str = "gqlweave";

/// Severity attached to an emitted log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    /// Verbose diagnostics.
    Debug,
    /// Routine lifecycle messages.
    Info,
    /// Suspicious but non-fatal conditions.
    Warn,
    /// Failures reported by a collaborator.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// Abstraction over an external log destination.
///
/// Implementations receive the fixed module tag, the level, and the
/// (possibly translated) message, and decide how to record the line.
pub trait LogSink: Send + Sync {
    /// Record one log line.
    fn log(&self, module: &str, level: LogLevel, message: &str);
}

/// Fallback sink writing `"{level}: [{module}] {message}"` to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdOutLogSink;

impl LogSink for StdOutLogSink {
    fn log(&self, module: &str, level: LogLevel, message: &str) {
        println!("{level}: [{module}] {message}");
    }
}

/// Pure message translation applied before delivery.
pub type Translator = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Wraps the configured sink and translator behind one `log` call.
///
/// Selection happens once, at construction: either the caller-supplied
/// sink or the stdout fallback, and either the caller-supplied translator
/// or the identity function. The log path itself is branch-free.
#[derive(Clone)]
pub struct LoggerAdapter {
    sink: Arc<dyn LogSink>,
    custom_sink: bool,
    translate: Translator,
}

impl LoggerAdapter {
    /// Builds an adapter from optional caller-supplied parts.
    pub fn new(sink: Option<Arc<dyn LogSink>>, translator: Option<Translator>) -> Self {
        let custom_sink = sink.is_some();
        Self {
            sink: sink.unwrap_or_else(|| Arc::new(StdOutLogSink)),
            custom_sink,
            translate: translator.unwrap_or_else(|| Arc::new(|message: &str| message.to_owned())),
        }
    }

    /// Translates the message, then delivers it to the sink under the
    /// fixed [`MODULE_TAG`].
    pub fn log(&self, level: LogLevel, message: &str) {
        let message = (self.translate)(message);
        self.sink.log(MODULE_TAG, level, &message);
    }

    /// Shorthand for [`log`](Self::log) at [`LogLevel::Info`].
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Whether a caller-supplied sink is in use (vs. the stdout fallback).
    #[must_use]
    pub fn has_custom_sink(&self) -> bool {
        self.custom_sink
    }
}

impl fmt::Debug for LoggerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerAdapter")
            .field("custom_sink", &self.custom_sink)
            .finish_non_exhaustive()
    }
}
