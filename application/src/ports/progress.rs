//! Progress notification port
//!
//! Defines the interface for reporting progress while a match runs.

use gunghap_domain::{CompatibilityScore, Verdict};

/// Callback for progress updates during a match
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called once the score is known
    fn on_scored(&self, _score: &CompatibilityScore, _verdict: Verdict) {}

    /// Called when the image request starts
    fn on_image_start(&self);

    /// Called when the image request finishes
    fn on_image_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_image_start(&self) {}
    fn on_image_complete(&self, _success: bool) {}
}
