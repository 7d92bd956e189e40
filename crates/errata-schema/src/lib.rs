//! # errata-schema
//!
//! JSON Schema generation, validation, and registry for serialized Errata
//! errors.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the JSON Schemas for the error wire
//!   form and the capture settings
//! - Validation of arbitrary JSON against a registered schema
//! - `decode_error` / `encode_error` for moving `DetailedError` values across
//!   a JSON boundary with validation on the way in
//!
//! ## Architecture
//!
//! Wire types are defined in `errata-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry and validation
//! layer.

mod codec;
mod error;
mod registry;

pub use codec::encode_error;
pub use error::SchemaError;
pub use registry::SchemaRegistry;
