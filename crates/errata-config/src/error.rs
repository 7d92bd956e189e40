//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// Capture settings were already installed for this process.
    #[error("Capture settings are already installed")]
    AlreadyInstalled,
}
