//! Process-wide capture settings.
//!
//! Settings are installed at most once (usually by `errata-config` at
//! startup) and read on every build. Before installation the defaults apply.

use std::backtrace::Backtrace;
use std::sync::OnceLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

static INSTALLED: OnceLock<CaptureSettings> = OnceLock::new();

/// How a stack trace is captured when an error is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BacktraceMode {
    /// Never capture.
    Disabled,
    /// Capture when `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE` ask for it.
    #[default]
    Environment,
    /// Always capture.
    Forced,
}

impl BacktraceMode {
    /// Capture according to the mode. `None` when nothing was recorded.
    pub(crate) fn capture(self) -> Option<Backtrace> {
        let backtrace = match self {
            Self::Disabled => return None,
            Self::Environment => Backtrace::capture(),
            Self::Forced => Backtrace::force_capture(),
        };
        matches!(
            backtrace.status(),
            std::backtrace::BacktraceStatus::Captured
        )
        .then_some(backtrace)
    }
}

/// Switches that control what `ErrorBuilder::build` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CaptureSettings {
    /// Record the caller's file and line when no location is given.
    pub capture_location: bool,
    /// Stack trace capture policy.
    pub backtrace: BacktraceMode,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            capture_location: true,
            backtrace: BacktraceMode::default(),
        }
    }
}

impl CaptureSettings {
    /// The installed settings, or the defaults if none were installed.
    #[must_use]
    pub fn current() -> Self {
        INSTALLED.get().copied().unwrap_or_default()
    }

    /// Install these settings for the rest of the process.
    ///
    /// # Errors
    ///
    /// Returns the rejected settings if settings were already installed.
    pub fn install(self) -> Result<(), Self> {
        INSTALLED.set(self)
    }

    /// Whether [`install`](Self::install) has already succeeded.
    #[must_use]
    pub fn is_installed() -> bool {
        INSTALLED.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_capture_location_and_follow_environment() {
        let settings = CaptureSettings::default();
        assert!(settings.capture_location);
        assert_eq!(settings.backtrace, BacktraceMode::Environment);
    }

    #[test]
    fn disabled_mode_never_captures() {
        assert!(BacktraceMode::Disabled.capture().is_none());
    }

    #[test]
    fn forced_mode_always_captures() {
        assert!(BacktraceMode::Forced.capture().is_some());
    }

    #[test]
    fn backtrace_mode_uses_lowercase_names() {
        let json = serde_json::to_string(&BacktraceMode::Forced).unwrap();
        assert_eq!(json, r#""forced""#);
        let mode: BacktraceMode = serde_json::from_str(r#""disabled""#).unwrap();
        assert_eq!(mode, BacktraceMode::Disabled);
    }
}
