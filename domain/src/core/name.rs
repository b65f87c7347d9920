//! Person name value object

use super::error::DomainError;
use crate::hangul::is_syllable;
use serde::{Deserialize, Serialize};

/// A validated Korean personal name (Value Object)
///
/// Surrounding whitespace is trimmed; what remains must be non-empty and
/// consist only of precomposed Hangul syllables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName {
    value: String,
}

impl PersonName {
    /// Validate and create a name
    pub fn try_new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }

        if let Some(found) = trimmed.chars().find(|c| !is_syllable(*c)) {
            return Err(DomainError::NonHangulName {
                name: trimmed.to_string(),
                found,
            });
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Number of syllables in the name
    pub fn syllable_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for PersonName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<&str> for PersonName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.value
    }
}
