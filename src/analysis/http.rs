//! HTTP client for the image-understanding service.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::ImageAnalyzer;
use crate::config::ServiceConfig;
use crate::error::AnalysisError;

/// Wire request: the user's prompt plus the image source identifier.
///
/// The service accepts both remote URLs and local paths in `image_url`.
#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    prompt: &'a str,
    image_url: &'a str,
}

/// Wire response: the free-text description.
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    analysis: String,
}

/// `reqwest`-backed [`ImageAnalyzer`].
///
/// One POST per call with bearer auth; no retry.
pub struct HttpAnalyzer {
    client: Client,
    config: ServiceConfig,
}

impl HttpAnalyzer {
    /// Create a client for the configured service.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ImageAnalyzer for HttpAnalyzer {
    fn service_name(&self) -> &str {
        &self.config.service
    }

    async fn analyze(&self, prompt: &str, source: &str) -> Result<String, AnalysisError> {
        debug!(
            service = %self.config.service,
            endpoint = %self.config.endpoint,
            "Sending analysis request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&AnalyzeRequest {
                prompt,
                image_url: source,
            })
            .send()
            .await
            .map_err(|e| AnalysisError::RequestFailed {
                service: self.config.service.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Remote {
                service: self.config.service.clone(),
                status: status.as_u16(),
                reason,
            });
        }

        let body: AnalyzeResponse =
            response
                .json()
                .await
                .map_err(|e| AnalysisError::InvalidResponse {
                    service: self.config.service.clone(),
                    reason: e.to_string(),
                })?;

        Ok(body.analysis)
    }
}
