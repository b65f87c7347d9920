//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These are input validation failures. Scoring itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name '{name}' contains a non-Hangul character {found:?}")]
    NonHangulName { name: String, found: char },
}

impl DomainError {
    /// Check if this error was caused by an empty name
    pub fn is_empty_name(&self) -> bool {
        matches!(self, DomainError::EmptyName)
    }
}
