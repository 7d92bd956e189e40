//! # errata-config
//!
//! Layered configuration loading for Errata using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ERRATA_*` prefix, `__` as separator)
//! 2. Project-level `.errata/config.toml`
//! 3. User-level `~/.config/errata/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `ERRATA_CAPTURE__BACKTRACE` -> `capture.backtrace`.
//!
//! # Usage
//!
//! ```no_run
//! use errata_config::ErrataConfig;
//!
//! // Load from all sources and make the capture settings process-wide:
//! let config = ErrataConfig::init().expect("config");
//!
//! if !config.capture.location {
//!     println!("caller locations will not be recorded");
//! }
//! ```

mod capture;
mod error;

pub use capture::CaptureConfig;
pub use error::ConfigError;

use errata_core::CaptureSettings;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ErrataConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
}

impl ErrataConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong shape.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Load with `.env` support and install the capture settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on load failure, or
    /// [`ConfigError::AlreadyInstalled`] if settings were installed before.
    pub fn init() -> Result<Self, ConfigError> {
        let config = Self::load_with_dotenv()?;
        config.install()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".errata/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ERRATA_").split("__"))
    }

    /// Capture settings described by this configuration.
    #[must_use]
    pub fn capture_settings(&self) -> CaptureSettings {
        CaptureSettings::from(&self.capture)
    }

    /// Install the capture settings for the rest of the process.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyInstalled`] if settings were installed
    /// before; the earlier settings stay in effect.
    pub fn install(&self) -> Result<CaptureSettings, ConfigError> {
        let settings = self.capture_settings();
        match settings.install() {
            Ok(()) => {
                tracing::debug!(
                    capture_location = settings.capture_location,
                    backtrace = ?settings.backtrace,
                    "installed error capture settings"
                );
                Ok(settings)
            }
            Err(rejected) => {
                tracing::warn!(
                    ?rejected,
                    active = ?CaptureSettings::current(),
                    "error capture settings already installed; keeping the active ones"
                );
                Err(ConfigError::AlreadyInstalled)
            }
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("errata").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
