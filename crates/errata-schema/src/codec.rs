//! Moving `DetailedError` values across a JSON boundary.

use errata_core::DetailedError;

use crate::error::SchemaError;
use crate::registry::SchemaRegistry;

/// JSON form of an error, as produced by its `ErrorRecord`.
///
/// # Errors
///
/// Returns `SchemaError::Decode` if serialization fails, which only happens
/// for payloads `serde_json` cannot represent.
pub fn encode_error(error: &DetailedError) -> Result<serde_json::Value, SchemaError> {
    Ok(serde_json::to_value(error)?)
}

impl SchemaRegistry {
    /// Validate `value` against the error record schema and restore it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` if the payload does not match
    /// the schema, or `SchemaError::Decode` if it matches but still cannot be
    /// restored (for example a whitespace-only message).
    pub fn decode_error(&self, value: &serde_json::Value) -> Result<DetailedError, SchemaError> {
        self.validate(Self::ERROR_RECORD, value)?;
        Ok(serde_json::from_value(value.clone())?)
    }
}
