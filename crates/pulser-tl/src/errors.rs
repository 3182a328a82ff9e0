//! Error types for the TL encoder.
//!
//! Every failure is returned to the caller. The encoder never substitutes an
//! empty byte sequence for a constructor it cannot encode.

use thiserror::Error;

/// Errors that can occur while encoding TL constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The constructor is part of the schema but has no defined encoding
    #[error("constructor {name} ({tag:#010x}) has no defined encoding")]
    Unsupported {
        /// Schema name of the constructor
        name: &'static str,
        /// Constructor type tag
        tag: u32,
    },

    /// Length-prefixed value does not fit in the 24-bit length header
    #[error("byte string too long: {len} bytes exceeds maximum {max}")]
    BytesTooLong {
        /// Actual length in bytes
        len: usize,
        /// Largest representable length
        max: usize,
    },

    /// Raw tag value does not name any known constructor
    #[error("unknown constructor tag: {0:#010x}")]
    UnknownTag(u32),
}

/// Convenient Result type alias for encoding operations
pub type Result<T> = std::result::Result<T, EncodeError>;
