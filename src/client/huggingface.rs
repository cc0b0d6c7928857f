//! HuggingFaceClient - hosted inference API implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use gymia_planner::client::{ClientConfig, HuggingFaceClient, ModelClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // From environment variable (HUGGINGFACE_API_KEY)
//! let client = HuggingFaceClient::try_from_env()?;
//! let text = client.generate_text("Monte um treino de 3 dias").await?;
//!
//! // Explicit configuration
//! let client = HuggingFaceClient::new(ClientConfig::new("hf_token").with_model("gpt2"))?;
//! # Ok(())
//! # }
//! ```

use super::{ClientConfig, ClientError, GenerationParameters, ModelClient};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Model client that talks to the Hugging Face inference HTTP API.
///
/// One attempt per call; the configured timeout bounds it.
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    config: ClientConfig,
}

impl HuggingFaceClient {
    /// Creates a client from explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Creates a client from `HUGGINGFACE_*` environment variables.
    pub fn try_from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send_request(&self, body: &InferenceRequest<'_>) -> Result<String, ClientError> {
        let endpoint = self.config.endpoint();
        debug!("Sending inference request to {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read inference error body".to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: Vec<Generation> = serde_json::from_slice(&bytes)
            .map_err(|err| ClientError::MalformedResponse(err.to_string()))?;

        extract_generated_text(parsed)
    }
}

#[async_trait]
impl ModelClient for HuggingFaceClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, ClientError> {
        let request = InferenceRequest {
            inputs: prompt,
            parameters: &self.config.parameters,
        };

        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParameters,
}

#[derive(Deserialize)]
struct Generation {
    generated_text: Option<String>,
}

fn extract_generated_text(response: Vec<Generation>) -> Result<String, ClientError> {
    response
        .into_iter()
        .next()
        .and_then(|generation| generation.generated_text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            ClientError::MalformedResponse("response carried no generated_text".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let parameters = GenerationParameters::default();
        let request = InferenceRequest {
            inputs: "Hello",
            parameters: &parameters,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"inputs\":\"Hello\""));
        assert!(json.contains("\"max_length\":1000"));
        assert!(json.contains("\"return_full_text\":false"));
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"[{"generated_text": "título: Plano A"}]"#;
        let response: Vec<Generation> = serde_json::from_str(json).unwrap();
        assert_eq!(extract_generated_text(response).unwrap(), "título: Plano A");
    }

    #[test]
    fn test_response_parsing_empty_array() {
        let response: Vec<Generation> = serde_json::from_str("[]").unwrap();
        assert!(matches!(
            extract_generated_text(response),
            Err(ClientError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_response_parsing_missing_field() {
        let response: Vec<Generation> = serde_json::from_str(r#"[{"score": 0.4}]"#).unwrap();
        assert!(extract_generated_text(response).is_err());
    }

    #[test]
    fn test_client_creation() {
        let client = HuggingFaceClient::new(ClientConfig::new("key").with_model("gpt2")).unwrap();
        assert_eq!(client.name(), "gpt2");
        assert_eq!(client.config().api_key, "key");
    }
}
