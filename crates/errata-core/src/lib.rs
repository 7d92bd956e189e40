//! # errata-core
//!
//! Structured error values for Errata.
//!
//! This crate provides a single error type, [`DetailedError`], that carries:
//! - A composed, human-readable message
//! - A stable machine-readable error code (see [`codes`])
//! - Arbitrary structured payload data (`serde_json::Value`)
//! - An optional wrapped cause
//! - The source location at which it was built (see [`SourceLocation`])
//!
//! The specialized kinds (null argument, out of range, invalid operation,
//! object disposed) are factory functions on [`DetailedError`] that return a
//! pre-filled [`ErrorBuilder`]; they are not separate types.
//!
//! # Usage
//!
//! ```
//! use errata_core::{codes, DetailedError};
//!
//! fn set_volume(level: u8) -> Result<(), DetailedError> {
//!     if level > 100 {
//!         return Err(DetailedError::out_of_range("level", level)
//!             .data(serde_json::json!({ "min": 0, "max": 100 }))
//!             .build()?);
//!     }
//!     Ok(())
//! }
//!
//! let err = set_volume(150).unwrap_err();
//! assert!(err.has_code(codes::ARG_OUT_OF_RANGE));
//! assert!(err.message().contains("'150'"));
//! ```

mod builder;
pub mod codes;
mod error;
pub mod kinds;
pub mod location;
mod record;
mod render;
mod settings;

pub use builder::ErrorBuilder;
pub use error::{DetailedError, RemoteCause};
pub use location::SourceLocation;
pub use record::ErrorRecord;
pub use render::PLACEHOLDER;
pub use settings::{BacktraceMode, CaptureSettings};

/// Shared, thread-safe handle to a wrapped cause.
pub type Cause = std::sync::Arc<dyn std::error::Error + Send + Sync + 'static>;
