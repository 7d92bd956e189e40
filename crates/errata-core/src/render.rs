//! Multi-line report of a `DetailedError`.

use std::fmt::{self, Display};
use std::panic::{self, AssertUnwindSafe};

use crate::error::{DetailedError, StackTrace};

/// Text shown for any absent or unprintable field.
pub const PLACEHOLDER: &str = "N/A";

impl DetailedError {
    /// Render the full report:
    ///
    /// ```text
    /// DetailedError: <message>
    /// Error Code: <code>
    /// Error Data: <data as compact JSON>
    /// File: <file>
    /// Method: <member>
    /// Line: <line>
    /// Caused By: <cause>
    /// Stack Trace: <trace>
    /// ```
    ///
    /// The `File`/`Method`/`Line` block is only present when some location
    /// field is known. Absent fields print as [`PLACEHOLDER`], and so does a
    /// cause whose `Display` fails or panics.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("DetailedError: {}", self.message()),
            format!("Error Code: {}", self.error_code().unwrap_or(PLACEHOLDER)),
            format!("Error Data: {}", or_placeholder(self.error_data())),
        ];

        let location = self.location();
        if !location.is_empty() {
            lines.push(format!(
                "File: {}",
                location.file.as_deref().unwrap_or(PLACEHOLDER)
            ));
            lines.push(format!(
                "Method: {}",
                location.member.as_deref().unwrap_or(PLACEHOLDER)
            ));
            lines.push(format!("Line: {}", or_placeholder(location.line)));
        }

        lines.push(format!("Caused By: {}", or_placeholder(self.inner_cause())));
        let trace = match self.stack_trace_ref() {
            Some(StackTrace::Captured(backtrace)) => display_or_placeholder(backtrace),
            Some(StackTrace::Restored(text)) => text.clone(),
            None => PLACEHOLDER.to_string(),
        };
        lines.push(format!("Stack Trace: {trace}"));

        lines.join("\n")
    }
}

fn or_placeholder<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |value| display_or_placeholder(&value))
}

/// Format `value`, substituting the placeholder if its `Display` reports an
/// error or panics.
pub(crate) fn display_or_placeholder<T: Display + ?Sized>(value: &T) -> String {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut text = String::new();
        fmt::write(&mut text, format_args!("{value}")).map(|()| text)
    }));
    match attempt {
        Ok(Ok(text)) => text,
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::SourceLocation;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug)]
    struct Unprintable;

    impl Display for Unprintable {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    impl std::error::Error for Unprintable {}

    #[test]
    fn renders_every_field_in_order() {
        let err = DetailedError::builder("Test error message.")
            .code("TEST_ERROR_CODE")
            .data(json!({ "Key": "Value" }))
            .location(SourceLocation::new("TestFile.rs", 42).with_member("test_method"))
            .cause(std::io::Error::other("inner failure"))
            .build()
            .unwrap();

        let rendered = err.render();
        let lines: Vec<&str> = rendered.lines().take(7).collect();
        assert_eq!(
            lines,
            vec![
                "DetailedError: Test error message.",
                "Error Code: TEST_ERROR_CODE",
                r#"Error Data: {"Key":"Value"}"#,
                "File: TestFile.rs",
                "Method: test_method",
                "Line: 42",
                "Caused By: inner failure",
            ]
        );
        assert!(rendered.contains("Stack Trace: "));
    }

    #[test]
    fn absent_fields_use_placeholder() {
        let err = DetailedError::builder("bare")
            .location(SourceLocation::default())
            .build()
            .unwrap();
        let rendered = err.render();
        assert!(rendered.contains("Error Code: N/A"));
        assert!(rendered.contains("Error Data: N/A"));
        assert!(rendered.contains("Caused By: N/A"));
        assert!(!rendered.contains("File:"));
    }

    #[test]
    fn partial_location_fills_missing_fields() {
        let location = SourceLocation {
            file: Some("lib.rs".into()),
            member: None,
            line: None,
        };
        let err = DetailedError::builder("partial")
            .location(location)
            .build()
            .unwrap();
        let rendered = err.render();
        assert!(rendered.contains("File: lib.rs\nMethod: N/A\nLine: N/A"));
    }

    #[test]
    fn failing_cause_display_renders_placeholder() {
        let err = DetailedError::builder("outer")
            .cause(Unprintable)
            .build()
            .unwrap();
        assert!(err.render().contains("Caused By: N/A"));
    }

    #[test]
    fn display_or_placeholder_passes_through_plain_values() {
        assert_eq!(display_or_placeholder(&150), "150");
        assert_eq!(display_or_placeholder(&Unprintable), PLACEHOLDER);
    }
}
