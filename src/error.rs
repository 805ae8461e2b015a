// error.rs - Pipeline error taxonomy

use crate::scores::ReportVariant;
use std::time::Duration;
use thiserror::Error;

/// Every failure the report pipeline can surface, one per stage
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Incomplete input for {variant} report: missing or invalid '{field}'")]
    IncompleteInput {
        variant: ReportVariant,
        field: String,
    },

    #[error("Provider API key is not configured")]
    MissingCredential,

    #[error("{}", transport_message(.status, .message))]
    TransportFailure {
        status: Option<u16>,
        message: String,
    },

    #[error("Provider response was empty")]
    EmptyResponse,

    #[error("Provider call timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Provider returned malformed JSON: {message}")]
    MalformedJson { message: String, raw: String },

    #[error("Report schema violation at '{path}': expected {expected}")]
    SchemaViolation { path: String, expected: &'static str },

    #[error("Report generation was cancelled")]
    Cancelled,
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Provider request failed. Status: {}: {}", code, message),
        None => format!("Provider request failed: {}", message),
    }
}

impl PipelineError {
    /// Stable machine-readable name of the failure
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::IncompleteInput { .. } => "IncompleteInput",
            PipelineError::MissingCredential => "MissingCredential",
            PipelineError::TransportFailure { .. } => "TransportFailure",
            PipelineError::EmptyResponse => "EmptyResponse",
            PipelineError::Timeout(_) => "Timeout",
            PipelineError::MalformedJson { .. } => "MalformedJson",
            PipelineError::SchemaViolation { .. } => "SchemaViolation",
            PipelineError::Cancelled => "Cancelled",
        }
    }

    /// HTTP status class at the inbound boundary: caller errors are 400, the rest 500
    pub fn status_class(&self) -> u16 {
        match self {
            PipelineError::IncompleteInput { .. } => 400,
            _ => 500,
        }
    }

    /// Returns true if the provider call may succeed when repeated
    pub fn is_retryable(&self) -> bool {
        match self {
            PipelineError::EmptyResponse => true,
            // Client errors other than timeout/rate-limit will fail identically again
            PipelineError::TransportFailure {
                status: Some(code), ..
            } => !(400..500).contains(code) || *code == 408 || *code == 429,
            PipelineError::TransportFailure { status: None, .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        let input = PipelineError::IncompleteInput {
            variant: ReportVariant::SingleProfile,
            field: "discScores.d".to_string(),
        };
        assert_eq!(input.status_class(), 400);
        assert_eq!(PipelineError::MissingCredential.status_class(), 500);
        assert_eq!(PipelineError::EmptyResponse.status_class(), 500);
        assert_eq!(PipelineError::Cancelled.status_class(), 500);
    }

    #[test]
    fn test_transport_message_carries_status() {
        let err = PipelineError::TransportFailure {
            status: Some(503),
            message: "overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert_eq!(err.kind(), "TransportFailure");
    }

    #[test]
    fn test_retry_classification() {
        let server = PipelineError::TransportFailure {
            status: Some(502),
            message: String::new(),
        };
        let rate_limited = PipelineError::TransportFailure {
            status: Some(429),
            message: String::new(),
        };
        let bad_request = PipelineError::TransportFailure {
            status: Some(400),
            message: String::new(),
        };
        let network = PipelineError::TransportFailure {
            status: None,
            message: String::new(),
        };

        assert!(server.is_retryable());
        assert!(rate_limited.is_retryable());
        assert!(network.is_retryable());
        assert!(!bad_request.is_retryable());
        assert!(PipelineError::EmptyResponse.is_retryable());
        assert!(!PipelineError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(!PipelineError::MissingCredential.is_retryable());
    }
}
