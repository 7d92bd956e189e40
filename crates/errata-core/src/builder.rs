//! Builder that composes and validates a `DetailedError`.

use std::error::Error as StdError;
use std::sync::Arc;

use crate::Cause;
use crate::codes;
use crate::error::{DetailedError, Parts, StackTrace};
use crate::kinds::EMPTY_ARGUMENT_MESSAGE;
use crate::location::SourceLocation;
use crate::settings::CaptureSettings;

/// How the final message is composed from the message text.
#[derive(Debug, Clone)]
enum Template {
    /// Message is used as-is.
    Plain,
    /// `"{message} (Parameter '{name}')"`
    Parameter { name: String },
    /// `"{message} (Parameter '{name}' with value '{value}')"`
    ParameterValue { name: String, value: String },
}

/// Collects the inputs of a `DetailedError`.
///
/// Obtained from [`DetailedError::builder`] or one of the kind factories
/// ([`DetailedError::null_argument`], [`DetailedError::out_of_range`],
/// [`DetailedError::invalid_operation`], [`DetailedError::object_disposed`]),
/// which pre-fill the message and code.
#[must_use = "an ErrorBuilder does nothing until `build` is called"]
pub struct ErrorBuilder {
    template: Template,
    message: String,
    code: Option<String>,
    data: Option<serde_json::Value>,
    cause: Option<Cause>,
    location: Option<SourceLocation>,
}

impl ErrorBuilder {
    pub(crate) const fn plain(message: String, code: Option<String>) -> Self {
        Self::with_template(Template::Plain, message, code)
    }

    pub(crate) fn parameter(name: String, message: &str, code: &str) -> Self {
        Self::with_template(
            Template::Parameter { name },
            message.to_string(),
            Some(code.to_string()),
        )
    }

    pub(crate) fn parameter_value(name: String, value: String, message: &str, code: &str) -> Self {
        Self::with_template(
            Template::ParameterValue { name, value },
            message.to_string(),
            Some(code.to_string()),
        )
    }

    const fn with_template(template: Template, message: String, code: Option<String>) -> Self {
        Self {
            template,
            message,
            code,
            data: None,
            cause: None,
            location: None,
        }
    }

    /// Replace the message text. Parameter decoration of the null-argument
    /// and out-of-range kinds is still applied.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the error code. A blank code leaves the error without one.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        let code = code.into();
        self.code = (!code.trim().is_empty()).then_some(code);
        self
    }

    /// Attach a structured payload. A JSON `null` leaves the error without
    /// one.
    pub fn data(mut self, data: impl Into<serde_json::Value>) -> Self {
        let data = data.into();
        self.data = (!data.is_null()).then_some(data);
        self
    }

    /// Wrap a lower-level error.
    pub fn cause<E>(mut self, cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        self.cause = Some(Arc::from(cause.into()));
        self
    }

    /// Wrap an already shared error, keeping its identity.
    pub fn shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Use an explicit location instead of capturing the caller.
    pub fn location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Compose the message and produce the error.
    ///
    /// Without an explicit [`location`](Self::location), the caller's file
    /// and line are recorded (unless disabled by [`CaptureSettings`]).
    ///
    /// # Errors
    ///
    /// Returns an `ARG_NULL` error when the message or the parameter name is
    /// blank.
    #[track_caller]
    pub fn build(self) -> Result<DetailedError, DetailedError> {
        let settings = CaptureSettings::current();
        let location = match self.location {
            Some(location) => location,
            None if settings.capture_location => SourceLocation::caller(),
            None => SourceLocation::default(),
        };

        if is_blank(&self.message) {
            return Err(rejected_input("message", location, settings));
        }
        let message = match self.template {
            Template::Plain => self.message,
            Template::Parameter { name } => {
                if is_blank(&name) {
                    return Err(rejected_input("param_name", location, settings));
                }
                format!("{} (Parameter '{name}')", self.message)
            }
            Template::ParameterValue { name, value } => {
                if is_blank(&name) {
                    return Err(rejected_input("param_name", location, settings));
                }
                format!("{} (Parameter '{name}' with value '{value}')", self.message)
            }
        };

        let error = DetailedError::from_parts(Parts {
            message,
            error_code: self.code,
            error_data: self.data,
            inner_cause: self.cause,
            location,
            stack_trace: settings.backtrace.capture().map(StackTrace::Captured),
        });
        tracing::trace!(
            code = error.error_code(),
            file = error.source_file(),
            line = error.source_line(),
            "built detailed error"
        );
        Ok(error)
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// The error returned when a required construction input is blank.
fn rejected_input(
    parameter: &str,
    location: SourceLocation,
    settings: CaptureSettings,
) -> DetailedError {
    tracing::debug!(parameter, "rejected blank input while building detailed error");
    DetailedError::from_parts(Parts {
        message: format!("{EMPTY_ARGUMENT_MESSAGE} (Parameter '{parameter}')"),
        error_code: Some(codes::ARG_NULL.to_string()),
        error_data: None,
        inner_cause: None,
        location,
        stack_trace: settings.backtrace.capture().map(StackTrace::Captured),
    })
}
