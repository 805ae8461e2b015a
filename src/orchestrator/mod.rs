use crate::config::ReportConfig;
use crate::error::PipelineError;
use crate::prompt_engine::llm::{GeminiAdapter, LLMAdapter};
use crate::prompt_engine::PromptCompiler;
use crate::report::{extract_report, Report};
use crate::scores::{validate_payload, ScorePayload};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use self::retry::RetryPolicy;

pub mod retry;

/// Report generation pipeline: validate -> compile -> generate -> extract.
///
/// Holds no per-request state, so one instance can serve concurrent callers.
/// Each invocation makes its own provider calls; nothing is queued or limited.
pub struct ReportPipeline {
    adapter: Arc<dyn LLMAdapter>,
    compiler: PromptCompiler,
    retry: RetryPolicy,
    timeout: Duration,
}

impl ReportPipeline {
    pub fn new(adapter: Arc<dyn LLMAdapter>, retry: RetryPolicy, timeout: Duration) -> Self {
        Self {
            adapter,
            compiler: PromptCompiler::new(),
            retry,
            timeout,
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        let retry = RetryPolicy::with_delays(
            config.max_retries,
            config.retry_base_delay(),
            config.retry_max_delay(),
        );
        Self::new(
            Arc::new(GeminiAdapter::from_config(config)),
            retry,
            config.request_timeout(),
        )
    }

    pub fn compiler(&self) -> &PromptCompiler {
        &self.compiler
    }

    /// Generate a report from a raw request body
    pub async fn generate(&self, body: &Value) -> Result<Report, PipelineError> {
        self.generate_with_cancel(body, &CancellationToken::new())
            .await
    }

    /// Generate a report, aborting the in-flight provider call when `cancel` fires
    pub async fn generate_with_cancel(
        &self,
        body: &Value,
        cancel: &CancellationToken,
    ) -> Result<Report, PipelineError> {
        let payload = validate_payload(body).map_err(|e| {
            tracing::warn!("Rejected report request: {}", e);
            e
        })?;
        self.generate_for(&payload, cancel).await
    }

    /// Generate a report from an already validated payload
    pub async fn generate_for(
        &self,
        payload: &ScorePayload,
        cancel: &CancellationToken,
    ) -> Result<Report, PipelineError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("report", %request_id, variant = %payload.variant());

        async move {
            let prompt = self.compiler.compile(payload);
            tracing::info!(
                "Generating {} report via '{}' ({} chars)",
                prompt.variant,
                self.adapter.name(),
                prompt.text.len()
            );

            let text = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::warn!("Report generation cancelled by caller");
                    return Err(PipelineError::Cancelled);
                }
                result = self.call_with_retry(&prompt.text) => result?,
            };

            let report = extract_report(&text, prompt.variant)?;
            tracing::info!("Report validated ({} chars of provider text)", text.len());
            Ok(report)
        }
        .instrument(span)
        .await
    }

    // --- Private helpers ---

    async fn call_with_retry(&self, prompt: &str) -> Result<String, PipelineError> {
        let mut attempt = 0u8;

        loop {
            match self.try_provider(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    tracing::warn!(
                        "Provider {} attempt {}/{} failed: {}",
                        self.adapter.name(),
                        attempt + 1,
                        self.retry.max_retries() + 1,
                        e
                    );

                    if self.retry.should_retry(attempt, &e) {
                        self.retry.wait_before_retry(attempt).await;
                        attempt += 1;
                        continue;
                    }

                    return Err(e);
                }
            }
        }
    }

    async fn try_provider(&self, prompt: &str) -> Result<String, PipelineError> {
        let raw = match tokio::time::timeout(self.timeout, self.adapter.generate(prompt)).await {
            Ok(result) => result?,
            Err(_) => return Err(PipelineError::Timeout(self.timeout)),
        };

        raw.first_text()
            .map(str::to_string)
            .ok_or(PipelineError::EmptyResponse)
    }
}
