//! Well-known error codes.
//!
//! Codes are stable identifiers meant for programmatic dispatch. The base
//! kind accepts any caller-defined code; the specialized kinds default to the
//! constants below.

/// A required argument was missing or empty.
pub const ARG_NULL: &str = "ARG_NULL";

/// An argument's value fell outside its accepted domain.
pub const ARG_OUT_OF_RANGE: &str = "ARG_OUT_OF_RANGE";

/// The operation is not permitted in the current state.
pub const INVALID_OPERATION: &str = "INVALID_OPERATION";

/// The operation targeted a resource that was already released.
pub const OBJ_DISPOSED: &str = "OBJ_DISPOSED";
