//! Output formatting for match results

pub mod console;
pub mod formatter;
