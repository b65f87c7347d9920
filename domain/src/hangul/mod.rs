//! Hangul syllable decomposition and stroke counting.
//!
//! - [`jamo`]: fixed index tables and the per-jamo stroke table
//! - [`syllable::Syllable`]: a syllable split into initial, medial and final jamo
//! - [`syllable::stroke_value`]: stroke value of a single code point

pub mod jamo;
pub mod syllable;

pub use syllable::{FinalConsonant, Syllable, is_syllable, stroke_value};
