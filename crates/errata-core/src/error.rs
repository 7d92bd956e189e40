//! The `DetailedError` value type.

use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Cause;
use crate::builder::ErrorBuilder;
use crate::location::SourceLocation;
use crate::record::ErrorRecord;

/// An error carrying a message, an optional code, optional structured data,
/// an optional wrapped cause and the location where it was built.
///
/// Values are immutable. Cloning is cheap and shares the same underlying
/// error, so the wrapped cause keeps its identity across clones.
///
/// `{}` formats the message only; `{:#}` formats the full report (see
/// [`render`](Self::render)).
#[derive(Clone, Serialize, Deserialize)]
#[serde(into = "ErrorRecord", try_from = "ErrorRecord")]
pub struct DetailedError {
    repr: Arc<Repr>,
}

struct Repr {
    message: String,
    error_code: Option<String>,
    error_data: Option<serde_json::Value>,
    inner_cause: Option<Cause>,
    location: SourceLocation,
    stack_trace: Option<StackTrace>,
}

/// A stack trace captured at build time, or the text of one that crossed a
/// serialization boundary.
pub(crate) enum StackTrace {
    Captured(Backtrace),
    Restored(String),
}

/// All fields of a `DetailedError`, already validated.
pub(crate) struct Parts {
    pub message: String,
    pub error_code: Option<String>,
    pub error_data: Option<serde_json::Value>,
    pub inner_cause: Option<Cause>,
    pub location: SourceLocation,
    pub stack_trace: Option<StackTrace>,
}

impl DetailedError {
    /// Start building a base-kind error with the given message.
    pub fn builder(message: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::plain(message.into(), None)
    }

    /// Build a base-kind error with only a message.
    ///
    /// # Errors
    ///
    /// Returns an `ARG_NULL` error if `message` is blank.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Result<Self, Self> {
        Self::builder(message).build()
    }

    pub(crate) fn from_parts(parts: Parts) -> Self {
        let Parts {
            message,
            error_code,
            error_data,
            inner_cause,
            location,
            stack_trace,
        } = parts;
        Self {
            repr: Arc::new(Repr {
                message,
                error_code,
                error_data,
                inner_cause,
                location,
                stack_trace,
            }),
        }
    }

    /// The composed message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.repr.message
    }

    /// The machine-readable error code, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.repr.error_code.as_deref()
    }

    /// Whether this error carries exactly `code`.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.error_code() == Some(code)
    }

    /// The attached payload, if any.
    #[must_use]
    pub fn error_data(&self) -> Option<&serde_json::Value> {
        self.repr.error_data.as_ref()
    }

    /// The wrapped cause, if any. This is the same `Arc` that was supplied.
    #[must_use]
    pub fn inner_cause(&self) -> Option<&Cause> {
        self.repr.inner_cause.as_ref()
    }

    /// Where the error was raised.
    #[must_use]
    pub fn location(&self) -> &SourceLocation {
        &self.repr.location
    }

    /// File in which the error was raised, if known.
    #[must_use]
    pub fn source_file(&self) -> Option<&str> {
        self.repr.location.file.as_deref()
    }

    /// Enclosing function path, if recorded by `source_location!`.
    #[must_use]
    pub fn source_member(&self) -> Option<&str> {
        self.repr.location.member.as_deref()
    }

    /// Line at which the error was raised, if known.
    #[must_use]
    pub fn source_line(&self) -> Option<u32> {
        self.repr.location.line
    }

    /// The captured backtrace, if one was recorded at build time.
    #[must_use]
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self.repr.stack_trace.as_ref()? {
            StackTrace::Captured(backtrace) => Some(backtrace),
            StackTrace::Restored(_) => None,
        }
    }

    /// Stack trace text, whether captured here or restored from a record.
    #[must_use]
    pub fn stack_trace(&self) -> Option<String> {
        match self.repr.stack_trace.as_ref()? {
            StackTrace::Captured(backtrace) => Some(backtrace.to_string()),
            StackTrace::Restored(text) => Some(text.clone()),
        }
    }

    pub(crate) fn stack_trace_ref(&self) -> Option<&StackTrace> {
        self.repr.stack_trace.as_ref()
    }
}

impl fmt::Debug for DetailedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetailedError")
            .field("message", &self.repr.message)
            .field("error_code", &self.repr.error_code)
            .field("error_data", &self.repr.error_data)
            .field("inner_cause", &self.repr.inner_cause)
            .field("location", &self.repr.location)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for DetailedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.render())
        } else {
            f.write_str(&self.repr.message)
        }
    }
}

impl std::error::Error for DetailedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.repr
            .inner_cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// A cause restored from a serialized error. Only its text survives the
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteCause {
    message: String,
}

impl RemoteCause {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
