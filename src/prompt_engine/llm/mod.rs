// prompt_engine/llm/mod.rs - Generation client trait

pub mod gemini;

pub use gemini::GeminiAdapter;

use super::RawGenerationResponse;
use crate::error::PipelineError;
use async_trait::async_trait;

/// Trait for LLM text generation adapters.
///
/// One call to `generate` is exactly one outbound request; retries and
/// timeouts belong to the caller.
#[async_trait]
pub trait LLMAdapter: Send + Sync {
    /// Send the compiled prompt and return the provider's raw envelope
    async fn generate(&self, prompt: &str) -> Result<RawGenerationResponse, PipelineError>;

    /// Provider name
    fn name(&self) -> &str;
}
