//! Match Names use case
//!
//! Validates two names, scores them, and on a match asks the image service
//! for a proposal picture.

use crate::config::BehaviorConfig;
use crate::ports::image_generator::{ImageGenerationError, ImageGenerator};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use gunghap_domain::{
    DomainError, ImageOutcome, ImageRequest, MatchResult, PersonName, PromptTemplate, fold_trace,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a match
#[derive(Error, Debug)]
pub enum MatchNamesError {
    #[error("Invalid name: {0}")]
    InvalidName(#[from] DomainError),
}

/// Input for the MatchNames use case
#[derive(Debug, Clone)]
pub struct MatchNamesInput {
    /// The user's name, as typed
    pub name: String,
    /// The partner's name, as typed
    pub partner: String,
}

impl MatchNamesInput {
    pub fn new(name: impl Into<String>, partner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partner: partner.into(),
        }
    }
}

/// Use case for scoring two names
pub struct MatchNamesUseCase {
    behavior: BehaviorConfig,
    image_generator: Option<Arc<dyn ImageGenerator>>,
}

impl MatchNamesUseCase {
    pub fn new(behavior: BehaviorConfig) -> Self {
        Self {
            behavior,
            image_generator: None,
        }
    }

    /// Attach the service used for proposal images
    pub fn with_image_generator(mut self, generator: Arc<dyn ImageGenerator>) -> Self {
        self.image_generator = Some(generator);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: MatchNamesInput) -> Result<MatchResult, MatchNamesError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Only name validation can fail. Image service failures end up in
    /// [`ImageOutcome::Failed`] and the score is still returned.
    pub async fn execute_with_progress(
        &self,
        input: MatchNamesInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<MatchResult, MatchNamesError> {
        let name = PersonName::try_new(&input.name)?;
        let partner = PersonName::try_new(&input.partner)?;

        let trace = fold_trace(name.as_str(), partner.as_str());
        let score = trace.score();
        let verdict = score.verdict(self.behavior.proposal_threshold);

        debug!("Scored {} + {}", name, partner);
        info!("Scored {} ({})", score, verdict);
        debug!("Fold rows: {:?}", trace.rows());
        progress.on_scored(&score, verdict);

        let image = if verdict.is_proposal() {
            self.request_image(&partner, progress).await
        } else {
            ImageOutcome::Skipped
        };

        Ok(MatchResult::new(name, partner, trace, verdict, image))
    }

    async fn request_image(
        &self,
        partner: &PersonName,
        progress: &dyn ProgressNotifier,
    ) -> ImageOutcome {
        if !self.behavior.generate_image {
            debug!("Image generation disabled");
            return ImageOutcome::Skipped;
        }

        let Some(generator) = &self.image_generator else {
            debug!("No image generator configured");
            return ImageOutcome::Skipped;
        };

        let request = ImageRequest::new(PromptTemplate::proposal_image(partner.as_str()))
            .with_size(self.behavior.image_size.clone());

        info!("Requesting proposal image ({})", request.size);
        progress.on_image_start();

        let result = match self.behavior.image_timeout {
            Some(limit) => tokio::time::timeout(limit, generator.generate(&request))
                .await
                .unwrap_or(Err(ImageGenerationError::Timeout)),
            None => generator.generate(&request).await,
        };

        match result {
            Ok(image) => {
                progress.on_image_complete(true);
                ImageOutcome::Generated { image }
            }
            Err(e) => {
                warn!("Image generation failed: {}", e);
                progress.on_image_complete(false);
                ImageOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}
