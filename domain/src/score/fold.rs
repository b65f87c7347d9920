//! Triangular folding of stroke values into a compatibility score
//!
//! The two names are written one after the other, every syllable is replaced
//! by its stroke value, and neighbouring values are added (mod 100) row by
//! row until two values remain. Those two values give the tens and ones
//! digits of the score.
//!
//! ```text
//!  김  철  수  이  영  희
//!   7  11   4   2   5   5
//!    18  15   6   7  10
//!      33  21  13  17
//!        54  34  30
//!          88  64        -> 84
//! ```

use super::verdict::CompatibilityScore;
use crate::hangul::{is_syllable, stroke_value};
use serde::{Deserialize, Serialize};

/// Stroke values of every Hangul syllable in `name` followed by `partner`.
///
/// Characters outside the syllable block are dropped, not counted as zero.
pub fn stroke_sequence(name: &str, partner: &str) -> Vec<u32> {
    name.chars()
        .chain(partner.chars())
        .filter(|c| is_syllable(*c))
        .map(|c| stroke_value(c as u32))
        .collect()
}

/// One folding pass: each adjacent pair becomes `(a + b) % 100`.
///
/// The result is exactly one element shorter than the input (empty for
/// inputs of length 0 or 1).
pub fn fold_once(values: &[u32]) -> Vec<u32> {
    values
        .windows(2)
        .map(|w| (w[0] % 100 + w[1] % 100) % 100)
        .collect()
}

/// Every row of the folding triangle
///
/// Deserializing refolds the first row and rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFoldTrace")]
pub struct FoldTrace {
    rows: Vec<Vec<u32>>,
}

#[derive(Deserialize)]
struct RawFoldTrace {
    rows: Vec<Vec<u32>>,
}

impl TryFrom<RawFoldTrace> for FoldTrace {
    type Error = String;

    fn try_from(raw: RawFoldTrace) -> Result<Self, Self::Error> {
        let Some(strokes) = raw.rows.first() else {
            return Err("fold trace has no rows".to_string());
        };
        let trace = Self::from_strokes(strokes.clone());
        if trace.rows != raw.rows {
            return Err("fold trace rows do not follow from the stroke sequence".to_string());
        }
        Ok(trace)
    }
}

impl FoldTrace {
    /// Fold a stroke sequence until at most two values remain
    pub fn from_strokes(strokes: Vec<u32>) -> Self {
        let mut rows = vec![strokes];
        loop {
            let last = &rows[rows.len() - 1];
            if last.len() <= 2 {
                break;
            }
            let next = fold_once(last);
            rows.push(next);
        }
        Self { rows }
    }

    /// All rows, starting with the stroke sequence
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// The unfolded stroke sequence
    pub fn strokes(&self) -> &[u32] {
        self.rows.first().map_or(&[], Vec::as_slice)
    }

    /// The remaining zero, one or two values
    pub fn terminal(&self) -> &[u32] {
        self.rows.last().map_or(&[], Vec::as_slice)
    }

    /// Number of folding passes performed
    pub fn passes(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn score(&self) -> CompatibilityScore {
        match self.terminal() {
            [] => CompatibilityScore::from_single(0),
            [only] => CompatibilityScore::from_single(*only),
            [first, second, ..] => CompatibilityScore::from_digits(*first, *second),
        }
    }
}

/// Fold the concatenated names and keep every row
pub fn fold_trace(name: &str, partner: &str) -> FoldTrace {
    FoldTrace::from_strokes(stroke_sequence(name, partner))
}

/// Compatibility score of two names, in `0..=99`.
///
/// Total over all inputs: names without any Hangul syllable score 0.
pub fn compatibility_score(name: &str, partner: &str) -> u8 {
    fold_trace(name, partner).score().value()
}
