use log::{debug, info, warn};
use crate::client::models::generation::{GenerationRequest, GenerationResult, Mode};
use crate::client::services::response_parser;
use crate::common::config::ClientConfig;
use crate::common::error::GenerationError;

/// HTTP side of the generator: one POST per submission plus the image downloads.
/// Cloning is cheap, the underlying `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct GenerationService {
    http: reqwest::Client,
    origin: String,
}

impl GenerationService {
    pub fn new(origin: impl Into<String>) -> Self {
        Self::with_client(origin, reqwest::Client::new())
    }

    pub fn with_client(origin: impl Into<String>, http: reqwest::Client) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { http, origin }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.server_origin.clone())
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn endpoint(&self) -> String {
        format!("{}/generate", self.origin)
    }

    /// Validates the requirement, sends it and normalizes the answer for `mode`.
    /// Blank requirements fail before anything touches the network.
    pub async fn submit(
        &self,
        requirement: &str,
        mode: Mode,
    ) -> Result<GenerationResult, GenerationError> {
        let request = GenerationRequest::new(requirement, mode)?;
        let endpoint = self.endpoint();
        info!("Requesting diagram generation from {} (mode {})", endpoint, mode.as_u8());
        debug!("Requirement: {:?}", request.requirement);

        let outcome = async {
            let response = self.http.post(&endpoint).json(&request).send().await?;
            let status = response.status();
            let body = response.bytes().await?;

            if !status.is_success() {
                return Err(GenerationError::Server {
                    status: status.as_u16(),
                    detail: response_parser::error_detail(&body),
                });
            }
            response_parser::parse_generation_response(&body, mode, &self.origin)
        }
        .await;

        match &outcome {
            Ok(result) => info!("Generation succeeded with {} diagram(s)", result.images().len()),
            Err(e) => warn!("Generation failed: {}", e),
        }
        outcome
    }

    /// Downloads one diagram image. Non-2xx statuses and empty bodies are errors.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, GenerationError> {
        debug!("Fetching diagram image {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Image {} returned status {}", url, status);
            return Err(GenerationError::Server { status: status.as_u16(), detail: None });
        }
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            warn!("Image {} returned an empty body", url);
            return Err(GenerationError::UnexpectedResponse(format!(
                "empty image body from {}",
                url
            )));
        }
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let svc = GenerationService::new("http://localhost:8000/");
        assert_eq!(svc.origin(), "http://localhost:8000");
        assert_eq!(svc.endpoint(), "http://localhost:8000/generate");
    }

    #[test]
    fn from_config_uses_configured_origin() {
        let cfg = ClientConfig {
            server_origin: "http://10.0.0.5:9000".into(),
            ..ClientConfig::default()
        };
        assert_eq!(GenerationService::from_config(&cfg).endpoint(), cfg.generate_endpoint());
    }

    #[tokio::test]
    async fn blank_requirement_fails_without_network() {
        // Nothing listens on port 1; reaching the network would be a transport error.
        let svc = GenerationService::new("http://127.0.0.1:1");
        let err = svc.submit("  \n ", Mode::Enhanced).await.unwrap_err();
        assert!(matches!(err, GenerationError::Validation));
    }
}
