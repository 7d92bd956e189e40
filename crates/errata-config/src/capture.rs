//! Error capture configuration.

use errata_core::{BacktraceMode, CaptureSettings};
use serde::{Deserialize, Serialize};

/// Default location capture setting.
const fn default_location() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// Record the caller's file and line when an error is built.
    #[serde(default = "default_location")]
    pub location: bool,

    /// Stack trace capture: `disabled`, `environment` or `forced`.
    #[serde(default)]
    pub backtrace: BacktraceMode,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            backtrace: BacktraceMode::default(),
        }
    }
}

impl From<&CaptureConfig> for CaptureSettings {
    fn from(config: &CaptureConfig) -> Self {
        Self {
            capture_location: config.location,
            backtrace: config.backtrace,
        }
    }
}
