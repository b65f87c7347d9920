//! Domain layer for gunghap
//!
//! This crate contains the core scoring logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Stroke value
//!
//! Every precomposed Hangul syllable is split into its initial, medial and
//! final jamo; the stroke counts of those jamo add up to the syllable's
//! stroke value. Compound finals (ㄳ, ㄺ, ...) count both base consonants.
//!
//! ## Folding
//!
//! The stroke values of both names, written one after the other, are folded
//! pairwise (mod 100) until two values remain. Their last digits form the
//! compatibility score in `0..=99`.
//!
//! Both operations are pure and total: they never fail and never touch
//! shared state.

pub mod config;
pub mod core;
pub mod hangul;
pub mod image;
pub mod matching;
pub mod prompt;
pub mod score;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, name::PersonName};
pub use hangul::{FinalConsonant, Syllable, is_syllable, stroke_value};
pub use image::{DEFAULT_IMAGE_SIZE, ImageOutcome, ImageReference, ImageRequest};
pub use matching::MatchResult;
pub use prompt::PromptTemplate;
pub use score::{
    CompatibilityScore, FoldTrace, Verdict, compatibility_score, fold_once, fold_trace,
    stroke_sequence,
};
