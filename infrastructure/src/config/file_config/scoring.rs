//! Scoring configuration from TOML (`[scoring]` section)

use gunghap_domain::CompatibilityScore;
use serde::{Deserialize, Serialize};

/// Raw scoring configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScoringConfig {
    /// Scores at or above this value are a match (0-99)
    pub proposal_threshold: u8,
}

impl Default for FileScoringConfig {
    fn default() -> Self {
        Self {
            proposal_threshold: CompatibilityScore::DEFAULT_PROPOSAL_THRESHOLD,
        }
    }
}
