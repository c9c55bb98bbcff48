//! A strict 128-bit UUID value type.
//!
//! The value owns its canonical representation: **exactly 16 bytes**. Every
//! other form is derived from those bytes and memoized on first use:
//!
//! - Canonical hyphenated form: 36 characters, lowercase on output, e.g.
//!   `9e472052-a654-4693-9a8b-3ce57ada3d6c`.
//! - Compact hex form: 32 lowercase hex characters, no separators, e.g.
//!   `9e472052a65446939a8b3ce57ada3d6c`.
//!
//! ## Strict parsing
//! String inputs are validated against RFC 4122 rules before any bytes are
//! produced: hex digits only (either case), a version nibble in `1..=5`, and
//! variant bits `10`. Inputs of any length other than 36 (hyphenated) or 32
//! (compact hex) are rejected outright. See [`Uuid::from_rfc4122`] and
//! [`Uuid::from_hex`].
//!
//! ## The raw-byte escape hatch
//! Constructing from raw bytes ([`Uuid::from_bytes`], [`Uuid::from_slice`])
//! checks *length only* — any 16 bytes are accepted, including bytes that the
//! strict string parser would reject. This asymmetry is deliberate: the byte
//! path is a low-level escape hatch for carrying arbitrary 16-byte
//! identifiers, while string parsing stays strict. Callers that need semantic
//! validity on bytes must opt in via [`Uuid::is_valid_bytes`].
//!
//! ## Validation without errors
//! The `is_valid*` predicates ([`Uuid::is_valid`], [`Uuid::is_valid_hex`],
//! [`Uuid::is_valid_rfc4122`], [`Uuid::is_valid_bytes`]) never fail — every
//! malformed input becomes `false`. All parsing and comparing operations
//! return [`UuidError`] instead; nothing is silently corrected.

mod hex;
mod value;

// Re-export public types
pub use value::{Uuid, UuidInput};

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Input had the right shape (string or bytes) but failed the required
    /// length or pattern checks.
    #[error("Invalid format: {0}")]
    Format(String),
    /// Input was absent where a value was required.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// API misuse independent of any single value's shape.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
