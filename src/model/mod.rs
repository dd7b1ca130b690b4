mod gemini;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiClient;

// None of these reach the caller; the resolver falls back to offline answers
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode upstream response: {0}")]
    Decode(String),

    #[error("upstream response contained no text")]
    EmptyText,

    #[error("upstream did not answer within {0:?}")]
    Timeout(std::time::Duration),
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
