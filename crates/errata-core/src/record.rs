//! Serialized form of a `DetailedError`.
//!
//! `DetailedError` (de)serializes through [`ErrorRecord`], so the wire shape
//! is this explicit field list rather than the in-memory layout:
//!
//! ```json
//! {
//!   "message": "Value cannot be null. (Parameter 'id')",
//!   "ErrorCode": "ARG_NULL",
//!   "ErrorData": null,
//!   "InnerError": "connection reset",
//!   "FileName": "src/lib.rs",
//!   "MethodName": "app::load",
//!   "LineNumber": 12,
//!   "StackTrace": "..."
//! }
//! ```
//!
//! The inner cause only survives as text and comes back as a
//! [`RemoteCause`].

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codes;
use crate::error::{DetailedError, Parts, RemoteCause, StackTrace};
use crate::kinds::EMPTY_ARGUMENT_MESSAGE;
use crate::location::SourceLocation;
use crate::render::display_or_placeholder;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Composed message. Must not be blank.
    #[schemars(length(min = 1))]
    pub message: String,

    #[serde(rename = "ErrorCode", default)]
    pub error_code: Option<String>,

    #[serde(rename = "ErrorData", default)]
    pub error_data: Option<serde_json::Value>,

    /// Display text of the wrapped cause.
    #[serde(rename = "InnerError", default, skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<String>,

    #[serde(flatten)]
    pub location: SourceLocation,

    #[serde(rename = "StackTrace", default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl From<&DetailedError> for ErrorRecord {
    fn from(error: &DetailedError) -> Self {
        Self {
            message: error.message().to_string(),
            error_code: error.error_code().map(str::to_string),
            error_data: error.error_data().cloned(),
            inner_error: error.inner_cause().map(display_or_placeholder),
            location: error.location().clone(),
            stack_trace: error.stack_trace(),
        }
    }
}

impl From<DetailedError> for ErrorRecord {
    fn from(error: DetailedError) -> Self {
        Self::from(&error)
    }
}

impl TryFrom<ErrorRecord> for DetailedError {
    type Error = Self;

    /// Restore an error from its record. No location or stack trace is
    /// captured here; only what the record carries is kept.
    fn try_from(record: ErrorRecord) -> Result<Self, Self::Error> {
        if record.message.trim().is_empty() {
            tracing::debug!("rejected error record with blank message");
            return Err(Self::from_parts(Parts {
                message: format!("{EMPTY_ARGUMENT_MESSAGE} (Parameter 'message')"),
                error_code: Some(codes::ARG_NULL.to_string()),
                error_data: None,
                inner_cause: None,
                location: SourceLocation::default(),
                stack_trace: None,
            }));
        }

        Ok(Self::from_parts(Parts {
            message: record.message,
            error_code: record.error_code.filter(|code| !code.trim().is_empty()),
            error_data: record.error_data,
            inner_cause: record
                .inner_error
                .map(|text| Arc::new(RemoteCause::new(text)) as crate::Cause),
            location: record.location,
            stack_trace: record.stack_trace.map(StackTrace::Restored),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_with_stable_field_names() {
        let err = DetailedError::builder("msg")
            .code("X")
            .data(json!({ "k": "v" }))
            .location(SourceLocation::new("TestFile.rs", 42).with_member("test_method"))
            .build()
            .unwrap();

        let value = serde_json::to_value(ErrorRecord {
            stack_trace: None,
            ..ErrorRecord::from(&err)
        })
        .unwrap();
        assert_eq!(
            value,
            json!({
                "message": "msg",
                "ErrorCode": "X",
                "ErrorData": { "k": "v" },
                "FileName": "TestFile.rs",
                "MethodName": "test_method",
                "LineNumber": 42
            })
        );
    }

    #[test]
    fn absent_code_and_data_serialize_as_null() {
        let err = DetailedError::builder("msg")
            .location(SourceLocation::default())
            .build()
            .unwrap();
        let value = serde_json::to_value(ErrorRecord::from(&err)).unwrap();
        assert_eq!(value["ErrorCode"], serde_json::Value::Null);
        assert_eq!(value["ErrorData"], serde_json::Value::Null);
        assert!(value.get("FileName").is_none());
    }

    #[test]
    fn minimal_record_deserializes() {
        let err: DetailedError = serde_json::from_str(r#"{"message":"only"}"#).unwrap();
        assert_eq!(err.message(), "only");
        assert_eq!(err.error_code(), None);
        assert!(err.location().is_empty());
    }

    #[test]
    fn blank_code_record_restores_without_code() {
        for payload in [
            r#"{"message":"m","ErrorCode":""}"#,
            r#"{"message":"m","ErrorCode":"   "}"#,
        ] {
            let err: DetailedError = serde_json::from_str(payload).unwrap();
            assert_eq!(err.error_code(), None, "{payload}");
            assert!(err.render().contains("Error Code: N/A"));
        }
    }

    #[test]
    fn blank_message_record_is_rejected() {
        let result = serde_json::from_str::<DetailedError>(r#"{"message":"  "}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Parameter 'message'"), "{message}");
    }

    #[test]
    fn inner_error_text_becomes_remote_cause() {
        let err: DetailedError =
            serde_json::from_str(r#"{"message":"outer","InnerError":"socket closed"}"#).unwrap();
        let cause = err.inner_cause().unwrap();
        let remote = cause.downcast_ref::<RemoteCause>().unwrap();
        assert_eq!(remote.message(), "socket closed");
    }

    #[test]
    fn stack_trace_text_survives_roundtrip() {
        let err: DetailedError =
            serde_json::from_str(r#"{"message":"outer","StackTrace":"0: main"}"#).unwrap();
        assert_eq!(err.stack_trace().as_deref(), Some("0: main"));
        assert!(err.backtrace().is_none());
        assert!(err.render().contains("Stack Trace: 0: main"));
    }
}
