//! Progress reporting for match execution

use colored::Colorize;
use gunghap_application::ProgressNotifier;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while the image service is working
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.magenta} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_image_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("이미지 생성 중...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_image_complete(&self, success: bool) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = guard.take() {
            if success {
                pb.finish_with_message(format!("{}", "이미지 생성 완료".green()));
            } else {
                pb.finish_with_message(format!("{}", "이미지 생성 실패".red()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_image_start();
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_image_complete(true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_complete_without_start_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.on_image_complete(false);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
