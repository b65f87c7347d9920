//! Name compatibility scoring.
//!
//! - [`fold::compatibility_score`]: the score of two names
//! - [`fold::FoldTrace`]: every row of the folding triangle
//! - [`verdict::CompatibilityScore`] / [`verdict::Verdict`]: score value objects

pub mod fold;
pub mod verdict;

pub use fold::{FoldTrace, compatibility_score, fold_once, fold_trace, stroke_sequence};
pub use verdict::{CompatibilityScore, Verdict};
