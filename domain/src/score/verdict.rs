//! Score and verdict value objects

use serde::{Deserialize, Serialize};

/// Compatibility score between two names, always in `0..=99`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CompatibilityScore(u8);

impl CompatibilityScore {
    /// Highest possible score
    pub const MAX: u8 = 99;

    /// Score at or above which the pair counts as a match
    pub const DEFAULT_PROPOSAL_THRESHOLD: u8 = 50;

    /// Try to create a score, returning None above 99
    pub fn try_new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// Build a score from the tens and ones digits
    pub(crate) fn from_digits(tens: u32, ones: u32) -> Self {
        Self(((tens % 10) * 10 + ones % 10) as u8)
    }

    /// Build a score from a single remaining fold value
    pub(crate) fn from_single(value: u32) -> Self {
        Self((value % 100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn tens(&self) -> u8 {
        self.0 / 10
    }

    pub fn ones(&self) -> u8 {
        self.0 % 10
    }

    /// Classify the score against a threshold
    pub fn verdict(&self, threshold: u8) -> Verdict {
        if self.0 >= threshold {
            Verdict::Proposal
        } else {
            Verdict::Consolation
        }
    }
}

impl std::fmt::Display for CompatibilityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<CompatibilityScore> for u8 {
    fn from(score: CompatibilityScore) -> Self {
        score.0
    }
}

impl TryFrom<u8> for CompatibilityScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or_else(|| format!("score {} is above {}", value, Self::MAX))
    }
}

/// Outcome of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Score reached the threshold - the partner proposes
    Proposal,
    /// Score fell short
    Consolation,
}

impl Verdict {
    pub fn is_proposal(&self) -> bool {
        matches!(self, Verdict::Proposal)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Verdict::Proposal => "proposal",
            Verdict::Consolation => "consolation",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
