// prompt_engine/llm/gemini.rs - Google Gemini generateContent adapter

use super::LLMAdapter;
use crate::config::ReportConfig;
use crate::error::PipelineError;
use crate::prompt_engine::{GenerationRequest, RawGenerationResponse};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const MAX_ERROR_BODY_CHARS: usize = 2000;
const REDACTED: &str = "[REDACTED]";

pub struct GeminiAdapter {
    client: Client,
    api_key: Option<SecretString>,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiAdapter {
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self::with_settings(api_key, DEFAULT_MODEL, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::with_settings(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            config.request_timeout(),
        )
    }

    pub fn with_settings(
        api_key: Option<SecretString>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Endpoint without the credential, safe to log
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn credential(&self) -> Result<&str, PipelineError> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .filter(|key| !key.trim().is_empty())
            .ok_or(PipelineError::MissingCredential)
    }

    fn map_send_error(&self, e: reqwest::Error) -> PipelineError {
        if e.is_timeout() {
            return PipelineError::Timeout(self.timeout);
        }
        PipelineError::TransportFailure {
            status: e.status().map(|s| s.as_u16()),
            message: format!("Gemini: {}", e.without_url()),
        }
    }
}

#[async_trait]
impl LLMAdapter for GeminiAdapter {
    async fn generate(&self, prompt: &str) -> Result<RawGenerationResponse, PipelineError> {
        let api_key = self.credential()?;
        let request = GenerationRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = sanitize_error_body(&body, api_key);
            tracing::error!("Gemini API failure: status={} body={}", status, body);
            return Err(PipelineError::TransportFailure {
                status: Some(status.as_u16()),
                message: format!("Gemini: {}", body),
            });
        }

        response
            .json::<RawGenerationResponse>()
            .await
            .map_err(|e| PipelineError::TransportFailure {
                status: Some(status.as_u16()),
                message: format!("Gemini envelope: {}", e.without_url()),
            })
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Redact the credential and cap the size of a provider error body
fn sanitize_error_body(body: &str, api_key: &str) -> String {
    let redacted = if api_key.is_empty() {
        body.to_string()
    } else {
        body.replace(api_key, REDACTED)
    };
    let redacted = redacted.trim();

    match redacted.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...[TRUNCATED]", &redacted[..cut]),
        None => redacted.to_string(),
    }
}
