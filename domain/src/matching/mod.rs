//! Match result - the complete outcome of scoring two names

use crate::core::name::PersonName;
use crate::image::ImageOutcome;
use crate::score::{CompatibilityScore, FoldTrace, Verdict};
use serde::{Deserialize, Serialize};

/// Complete result of one match
///
/// Deserializing rejects a `score` that disagrees with the `trace`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawMatchResult")]
pub struct MatchResult {
    /// The user's name
    pub name: PersonName,
    /// The partner's name
    pub partner: PersonName,
    /// Final score
    pub score: CompatibilityScore,
    /// Whether the score reached the proposal threshold
    pub verdict: Verdict,
    /// Every row of the folding triangle
    pub trace: FoldTrace,
    /// Outcome of the proposal image request
    pub image: ImageOutcome,
}

#[derive(Deserialize)]
struct RawMatchResult {
    name: PersonName,
    partner: PersonName,
    score: CompatibilityScore,
    verdict: Verdict,
    trace: FoldTrace,
    image: ImageOutcome,
}

impl TryFrom<RawMatchResult> for MatchResult {
    type Error = String;

    fn try_from(raw: RawMatchResult) -> Result<Self, Self::Error> {
        let expected = raw.trace.score();
        if raw.score != expected {
            return Err(format!(
                "score {} does not match the fold trace ({})",
                raw.score, expected
            ));
        }
        Ok(Self::new(
            raw.name,
            raw.partner,
            raw.trace,
            raw.verdict,
            raw.image,
        ))
    }
}

impl MatchResult {
    pub fn new(
        name: PersonName,
        partner: PersonName,
        trace: FoldTrace,
        verdict: Verdict,
        image: ImageOutcome,
    ) -> Self {
        Self {
            name,
            partner,
            score: trace.score(),
            verdict,
            trace,
            image,
        }
    }
}
