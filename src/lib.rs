pub mod config;
pub mod error;
pub mod orchestrator;
pub mod prompt_engine;
pub mod report;
pub mod scores;
pub mod server;

pub use config::{ConfigError, ReportConfig};
pub use error::PipelineError;
pub use orchestrator::retry::RetryPolicy;
pub use orchestrator::ReportPipeline;
pub use prompt_engine::{CompiledPrompt, PromptCompiler};
pub use report::{extract_report, Report, REPORT_SCHEMA_VERSION};
pub use scores::{
    parse_score_text, payload_from_text, validate_payload, ReportVariant, ScorePayload, ScoreSet,
};

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "disc_report=info,tower_http=info";

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing already initialized: {}", e);
    }
}
