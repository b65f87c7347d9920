//! Interactive mode

pub mod repl;

pub use repl::MatchRepl;
