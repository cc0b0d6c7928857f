//! Model client API.
//!
//! A [`ModelClient`] turns a prompt into raw generated text. The pipeline
//! only ever needs that one operation, so the trait is deliberately small and
//! easy to replace with a stub in tests:
//!
//! ```rust
//! use async_trait::async_trait;
//! use gymia_planner::client::{ClientError, ModelClient};
//!
//! struct CannedClient;
//!
//! #[async_trait]
//! impl ModelClient for CannedClient {
//!     fn name(&self) -> &str {
//!         "canned"
//!     }
//!
//!     async fn generate_text(&self, _prompt: &str) -> Result<String, ClientError> {
//!         Ok("título: Plano de Teste".to_string())
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod huggingface;

pub use config::{ClientConfig, GenerationParameters};
pub use error::ClientError;
pub use huggingface::HuggingFaceClient;

use async_trait::async_trait;

/// Anything that can produce free text for a prompt.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Sends `prompt` and returns the generated text.
    async fn generate_text(&self, prompt: &str) -> Result<String, ClientError>;
}

#[async_trait]
impl<T: ModelClient + ?Sized> ModelClient for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, ClientError> {
        (**self).generate_text(prompt).await
    }
}
