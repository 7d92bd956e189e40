//! Factories for the specialized error kinds.
//!
//! Each kind is a `DetailedError` built from a default message and code.
//! Every default can be overridden on the returned [`ErrorBuilder`].

use std::fmt::Display;

use crate::builder::ErrorBuilder;
use crate::codes;
use crate::error::DetailedError;

pub const NULL_ARGUMENT_MESSAGE: &str = "Value cannot be null.";
pub const OUT_OF_RANGE_MESSAGE: &str = "Specified argument was out of the range of valid values.";
pub const INVALID_OPERATION_MESSAGE: &str =
    "Operation is not valid due to the current state of the object.";
pub const OBJECT_DISPOSED_MESSAGE: &str = "The object has been disposed and cannot be used.";

/// Message of the error returned when a required construction input is blank.
pub const EMPTY_ARGUMENT_MESSAGE: &str = "Value cannot be null or empty.";

impl DetailedError {
    /// A required argument was missing.
    ///
    /// Message: `"{message} (Parameter '{param_name}')"`, code `ARG_NULL`.
    pub fn null_argument(param_name: impl Into<String>) -> ErrorBuilder {
        ErrorBuilder::parameter(param_name.into(), NULL_ARGUMENT_MESSAGE, codes::ARG_NULL)
    }

    /// An argument's value fell outside its accepted domain.
    ///
    /// Message: `"{message} (Parameter '{param_name}' with value '{actual_value}')"`,
    /// code `ARG_OUT_OF_RANGE`. `actual_value` is rendered with `Display`.
    pub fn out_of_range(param_name: impl Into<String>, actual_value: impl Display) -> ErrorBuilder {
        ErrorBuilder::parameter_value(
            param_name.into(),
            actual_value.to_string(),
            OUT_OF_RANGE_MESSAGE,
            codes::ARG_OUT_OF_RANGE,
        )
    }

    /// The operation is not valid in the current state.
    pub fn invalid_operation() -> ErrorBuilder {
        ErrorBuilder::plain(
            INVALID_OPERATION_MESSAGE.to_string(),
            Some(codes::INVALID_OPERATION.to_string()),
        )
    }

    /// The object was already released.
    pub fn object_disposed() -> ErrorBuilder {
        ErrorBuilder::plain(
            OBJECT_DISPOSED_MESSAGE.to_string(),
            Some(codes::OBJ_DISPOSED.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn null_argument_defaults() {
        let err = DetailedError::null_argument("testParam").build().unwrap();
        assert_eq!(err.message(), "Value cannot be null. (Parameter 'testParam')");
        assert_eq!(err.error_code(), Some(codes::ARG_NULL));
        assert_eq!(err.error_data(), None);
    }

    #[test]
    fn null_argument_overrides_keep_parameter_suffix() {
        let err = DetailedError::null_argument("testParam")
            .message("Test error message.")
            .code("TEST_ERROR_CODE")
            .data(json!({ "Key": "Value" }))
            .build()
            .unwrap();
        assert_eq!(err.message(), "Test error message. (Parameter 'testParam')");
        assert_eq!(err.error_code(), Some("TEST_ERROR_CODE"));
        assert_eq!(err.error_data(), Some(&json!({ "Key": "Value" })));
    }

    #[test]
    fn out_of_range_defaults() {
        let err = DetailedError::out_of_range("testParam", 150).build().unwrap();
        assert_eq!(
            err.message(),
            "Specified argument was out of the range of valid values. \
             (Parameter 'testParam' with value '150')"
        );
        assert_eq!(err.error_code(), Some(codes::ARG_OUT_OF_RANGE));
        assert_eq!(err.error_data(), None);
    }

    #[test]
    fn invalid_operation_passes_message_through() {
        let err = DetailedError::invalid_operation().build().unwrap();
        assert_eq!(err.message(), INVALID_OPERATION_MESSAGE);
        assert_eq!(err.error_code(), Some(codes::INVALID_OPERATION));

        let custom = DetailedError::invalid_operation()
            .message("Stream already started.")
            .build()
            .unwrap();
        assert_eq!(custom.message(), "Stream already started.");
    }

    #[test]
    fn object_disposed_defaults() {
        let err = DetailedError::object_disposed().build().unwrap();
        assert_eq!(err.message(), OBJECT_DISPOSED_MESSAGE);
        assert_eq!(err.error_code(), Some(codes::OBJ_DISPOSED));
        assert_eq!(err.error_data(), None);
    }

    #[test]
    fn blank_parameter_name_is_rejected() {
        let rejected = DetailedError::null_argument("").build().unwrap_err();
        assert_eq!(
            rejected.message(),
            "Value cannot be null or empty. (Parameter 'param_name')"
        );

        let rejected = DetailedError::out_of_range(" ", 3).build().unwrap_err();
        assert_eq!(rejected.error_code(), Some(codes::ARG_NULL));
    }
}
