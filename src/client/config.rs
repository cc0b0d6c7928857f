//! Configuration for the inference endpoint.

use super::ClientError;
use serde::Serialize;
use std::env;
use std::fmt;
use std::time::Duration;

pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";
pub const MODEL_ENV: &str = "HUGGINGFACE_MODEL";
pub const BASE_URL_ENV: &str = "HUGGINGFACE_BASE_URL";

pub const DEFAULT_MODEL: &str = "microsoft/DialoGPT-medium";
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Decoding parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub top_p: f32,
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: 1000,
            temperature: 0.7,
            do_sample: true,
            top_p: 0.9,
            return_full_text: false,
        }
    }
}

/// Static configuration for [`super::HuggingFaceClient`].
///
/// # Examples
///
/// ```
/// use gymia_planner::client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("hf_token")
///     .with_model("mistralai/Mistral-7B-Instruct-v0.2")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(
///     config.endpoint(),
///     "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.2"
/// );
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub parameters: GenerationParameters,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a configuration with the default model, endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            parameters: GenerationParameters::default(),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HUGGINGFACE_API_KEY` (required)
    /// - `HUGGINGFACE_MODEL` (optional, defaults to `microsoft/DialoGPT-medium`)
    /// - `HUGGINGFACE_BASE_URL` (optional, defaults to the hosted inference API)
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| ClientError::MissingApiKey(API_KEY_ENV))?;

        let mut config = Self::new(api_key);
        if let Ok(model) = env::var(MODEL_ENV) {
            config = config.with_model(model);
        }
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_parameters(mut self, parameters: GenerationParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Full URL of the model endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.model)
    }
}
