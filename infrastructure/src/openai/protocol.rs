//! Wire types for the OpenAI Images API
//!
//! Only the subset used by [`super::OpenAiImageGenerator`] is modelled.

use gunghap_application::ImageGenerationError;
use gunghap_domain::ImageReference;
use serde::{Deserialize, Serialize};

/// Longest error body echoed back to the user
const MAX_ERROR_BODY: usize = 200;

/// `POST /v1/images/generations` request body
#[derive(Debug, Serialize)]
pub struct ImagesRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub n: u8,
    pub size: &'a str,
}

/// Successful response body
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

/// One generated image
#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
    pub b64_json: Option<String>,
}

/// Error response body: `{"error": {"message": "..."}}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

/// Extract the first image from a successful response body
pub fn parse_images_response(body: &str) -> Result<ImageReference, ImageGenerationError> {
    let response: ImagesResponse = serde_json::from_str(body)
        .map_err(|e| ImageGenerationError::InvalidResponse(e.to_string()))?;

    let first = response
        .data
        .into_iter()
        .next()
        .ok_or_else(|| ImageGenerationError::InvalidResponse("no images returned".to_string()))?;

    match (first.url, first.b64_json) {
        (Some(url), _) => Ok(ImageReference::Url(url)),
        (None, Some(data)) => Ok(ImageReference::Base64(data)),
        (None, None) => Err(ImageGenerationError::InvalidResponse(
            "image has neither url nor b64_json".to_string(),
        )),
    }
}

/// Map a non-success HTTP response to an error
///
/// Uses the API's own message when the body has one, otherwise a trimmed
/// excerpt of the raw body.
pub fn error_from_response(status: u16, body: &str) -> ImageGenerationError {
    let message = match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => excerpt(body.trim(), MAX_ERROR_BODY),
    };
    ImageGenerationError::RequestFailed { status, message }
}

fn excerpt(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
