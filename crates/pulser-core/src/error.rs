//! Error types for identifier generation.

use thiserror::Error;

/// Errors from [`MessageIdGenerator`](crate::MessageIdGenerator)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    /// No candidate in the allowed residue class within the retry budget
    #[error("no valid message id after {attempts} attempts")]
    AttemptsExhausted {
        /// Attempts made before giving up
        attempts: u32,
    },
}

/// Result type for identifier generation
pub type Result<T> = std::result::Result<T, IdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_attempts() {
        let err = IdError::AttemptsExhausted { attempts: 8 };
        assert_eq!(err.to_string(), "no valid message id after 8 attempts");
    }
}
