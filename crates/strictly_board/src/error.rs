//! Board validation error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// The specific reason a board string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValidationErrorKind {
    /// The input did not contain exactly one byte per square.
    #[display("expected {} bytes, found {}", expected, found)]
    InvalidLength {
        /// Number of bytes a board requires.
        expected: usize,
        /// Number of bytes supplied.
        found: usize,
    },
}

/// Validation error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid board: {} at {}:{}", kind, file, line)]
pub struct ValidationError {
    /// What was wrong with the input.
    pub kind: ValidationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ValidationError {
    /// Creates a new validation error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an [`ValidationErrorKind::InvalidLength`] error.
    #[track_caller]
    pub fn invalid_length(expected: usize, found: usize) -> Self {
        Self::new(ValidationErrorKind::InvalidLength { expected, found })
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_lengths() {
        let err = ValidationError::invalid_length(9, 8);
        let msg = err.to_string();
        assert!(msg.contains("expected 9 bytes, found 8"), "{msg}");
    }
}
