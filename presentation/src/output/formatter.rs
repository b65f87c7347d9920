//! Output formatter trait

use gunghap_domain::MatchResult;

/// Trait for formatting match results
pub trait OutputFormatter {
    /// Format the result for a human reader
    fn format(&self, result: &MatchResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &MatchResult) -> String;
}
