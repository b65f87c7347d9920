//! Syllable value object - a precomposed Hangul syllable split into jamo

use super::jamo::{
    FINAL_COUNT, FINALS, INITIALS, MEDIAL_FINAL_COUNT, MEDIALS, SYLLABLE_BASE, SYLLABLE_COUNT,
    split_cluster, stroke_count,
};

/// Trailing consonant of a syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalConsonant {
    /// Open syllable (가, 나)
    None,
    /// A single or doubled consonant (각, 갂)
    Single(char),
    /// Two consonants fused into one symbol (ㄳ = ㄱ + ㅅ)
    Cluster {
        symbol: char,
        first: char,
        second: char,
    },
}

impl FinalConsonant {
    fn from_index(index: usize) -> Self {
        match FINALS.get(index).copied().flatten() {
            None => FinalConsonant::None,
            Some(symbol) => match split_cluster(symbol) {
                Some((first, second)) => FinalConsonant::Cluster {
                    symbol,
                    first,
                    second,
                },
                None => FinalConsonant::Single(symbol),
            },
        }
    }

    /// Compatibility jamo symbol, if the syllable has a final
    pub fn symbol(&self) -> Option<char> {
        match self {
            FinalConsonant::None => None,
            FinalConsonant::Single(c) => Some(*c),
            FinalConsonant::Cluster { symbol, .. } => Some(*symbol),
        }
    }

    /// Stroke count of the final. Clusters count each base consonant.
    pub fn strokes(&self) -> u32 {
        match self {
            FinalConsonant::None => 0,
            FinalConsonant::Single(c) => stroke_count(*c).unwrap_or(0),
            FinalConsonant::Cluster { first, second, .. } => {
                stroke_count(*first).unwrap_or(0) + stroke_count(*second).unwrap_or(0)
            }
        }
    }
}

/// A precomposed Hangul syllable decomposed into initial, medial and final jamo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syllable {
    initial: char,
    medial: char,
    final_consonant: FinalConsonant,
}

impl Syllable {
    /// Decompose a code point. Returns `None` outside U+AC00..=U+D7A3.
    pub fn from_code_point(code_point: u32) -> Option<Self> {
        let code = code_point.checked_sub(SYLLABLE_BASE)?;
        if code >= SYLLABLE_COUNT {
            return None;
        }

        let initial_index = code / MEDIAL_FINAL_COUNT;
        let remainder = code % MEDIAL_FINAL_COUNT;
        let medial_index = remainder / FINAL_COUNT;
        let final_index = remainder % FINAL_COUNT;

        Some(Self {
            initial: INITIALS[initial_index as usize],
            medial: MEDIALS[medial_index as usize],
            final_consonant: FinalConsonant::from_index(final_index as usize),
        })
    }

    /// Decompose a character
    pub fn from_char(c: char) -> Option<Self> {
        Self::from_code_point(c as u32)
    }

    pub fn initial(&self) -> char {
        self.initial
    }

    pub fn medial(&self) -> char {
        self.medial
    }

    pub fn final_consonant(&self) -> FinalConsonant {
        self.final_consonant
    }

    /// Total stroke count of all jamo in the syllable
    pub fn strokes(&self) -> u32 {
        stroke_count(self.initial).unwrap_or(0)
            + stroke_count(self.medial).unwrap_or(0)
            + self.final_consonant.strokes()
    }
}

impl std::fmt::Display for Syllable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.initial, self.medial)?;
        if let Some(symbol) = self.final_consonant.symbol() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Whether `c` is a precomposed Hangul syllable
pub fn is_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Stroke value of a single code point.
///
/// Anything outside the syllable block is worth 0 rather than an error;
/// callers are expected to filter input with [`is_syllable`] first.
pub fn stroke_value(code_point: u32) -> u32 {
    Syllable::from_code_point(code_point).map_or(0, |s| s.strokes())
}
