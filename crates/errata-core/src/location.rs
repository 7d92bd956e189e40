//! Source location of an error site.
//!
//! Two capture paths exist:
//! - [`SourceLocation::caller`] (and every `#[track_caller]` builder method)
//!   records the caller's file and line via [`std::panic::Location`]. There is
//!   no runtime facility for the calling function's name, so `member` stays
//!   `None`.
//! - [`source_location!`](crate::source_location) expands at the call site and
//!   also records the enclosing function path.

use std::panic::Location;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where an error was constructed. Every field is optional; absent fields are
/// never filled with made-up values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct SourceLocation {
    /// Source file path as reported by the compiler.
    #[serde(rename = "FileName", default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Enclosing function path, e.g. `my_crate::parser::parse`.
    #[serde(rename = "MethodName", default, skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,

    /// 1-based line number.
    #[serde(rename = "LineNumber", default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl SourceLocation {
    /// Location with a file and line but no member.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: Some(file.into()),
            member: None,
            line: Some(line),
        }
    }

    /// Attach the enclosing member name.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    /// Location of the caller of the enclosing `#[track_caller]` chain.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// True when no field is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.file.is_none() && self.member.is_none() && self.line.is_none()
    }
}

impl From<&Location<'_>> for SourceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Turn the type name of the marker fn emitted by [`source_location!`] into
/// the path of the function that contains it.
#[doc(hidden)]
#[must_use]
pub fn enclosing_member(marker_type_name: &str) -> String {
    let mut path = marker_type_name
        .strip_suffix("::__errata_here")
        .unwrap_or(marker_type_name);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.to_string()
}

/// Capture the file, line and enclosing function path at the macro site.
///
/// ```
/// use errata_core::{source_location, DetailedError};
///
/// fn open_stream() -> DetailedError {
///     DetailedError::invalid_operation()
///         .location(source_location!())
///         .build()
///         .unwrap()
/// }
///
/// let err = open_stream();
/// assert!(err.source_member().unwrap().ends_with("open_stream"));
/// ```
#[macro_export]
macro_rules! source_location {
    () => {{
        fn __errata_here() {}
        fn __errata_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::SourceLocation::new(::core::file!(), ::core::line!()).with_member(
            $crate::location::enclosing_member(__errata_type_name_of(__errata_here)),
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn caller_records_file_and_line() {
        let location = SourceLocation::caller();
        assert_eq!(location.file.as_deref(), Some(file!()));
        assert!(location.line.unwrap() > 0);
        assert_eq!(location.member, None);
    }

    #[test]
    fn macro_records_enclosing_function() {
        let location = crate::source_location!();
        assert_eq!(location.file.as_deref(), Some(file!()));
        assert_eq!(
            location.member.as_deref(),
            Some("errata_core::location::tests::macro_records_enclosing_function")
        );
    }

    #[test]
    fn macro_inside_closure_reports_outer_function() {
        let capture = || crate::source_location!();
        let location = capture();
        assert_eq!(
            location.member.as_deref(),
            Some("errata_core::location::tests::macro_inside_closure_reports_outer_function")
        );
    }

    #[test]
    fn enclosing_member_strips_marker_and_closures() {
        assert_eq!(
            enclosing_member("app::run::{{closure}}::{{closure}}::__errata_here"),
            "app::run"
        );
        assert_eq!(enclosing_member("app::run"), "app::run");
    }

    #[test]
    fn default_is_empty() {
        assert!(SourceLocation::default().is_empty());
        assert!(!SourceLocation::new("lib.rs", 3).is_empty());
    }
}
