//! HTTP client for the generation service.
//!
//! This module provides a low-level HTTP client wrapper for calling the
//! `generateContent` endpoint, handling authentication, status checks and
//! envelope parsing.

use super::error::GeminiError;
use super::models::{GenerateContentRequest, GenerateContentResponse};
use log::*;

/// Makes requests to the generation service and extracts response text.
///
pub struct Client {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given API key and base URL.
    ///
    pub fn new(api_key: &str, base_url: &str) -> Self {
        Client {
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Send the request to the model and return the generated text, or None
    /// if the service answered without any.
    ///
    pub(crate) async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, GeminiError> {
        let request_url = format!("{}/models/{}:generateContent", self.base_url, model);
        debug!("Sending generation request to model '{}'...", model);

        let response = self
            .http_client
            .post(&request_url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        if !status.is_success() {
            error!(
                "Generation request failed with status {}: {}",
                status, response_text
            );
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                message: response_text,
            });
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&response_text)?;
        if let Some(error) = envelope.error {
            return Err(GeminiError::ServiceError(error.message));
        }

        Ok(envelope.text())
    }
}
