// server.rs - Inbound HTTP boundary

use crate::config::ReportConfig;
use crate::orchestrator::ReportPipeline;
use crate::report::REPORT_SCHEMA_VERSION;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

pub const GENERATE_REPORT_PATH: &str = "/api/generateReport";
pub const SCHEMA_VERSION_HEADER: &str = "x-report-schema-version";

#[derive(Clone)]
struct AppState {
    pipeline: Arc<ReportPipeline>,
    shutdown: CancellationToken,
}

/// Error body shown verbatim by the UI
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    kind: &'static str,
}

pub fn router(pipeline: Arc<ReportPipeline>, shutdown: CancellationToken) -> Router {
    Router::new()
        .route(GENERATE_REPORT_PATH, post(generate_report))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pipeline, shutdown })
}

/// Bind and serve until `shutdown` fires. In-flight provider calls are
/// cancelled with it.
pub async fn serve(config: &ReportConfig, shutdown: CancellationToken) -> std::io::Result<()> {
    let pipeline = Arc::new(ReportPipeline::from_config(config));
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Report server listening on {}", listener.local_addr()?);

    let app = router(pipeline, shutdown.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}

async fn health() -> &'static str {
    "ok"
}

async fn generate_report(State(state): State<AppState>, body: Bytes) -> Response {
    let body: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "InvalidBody",
                format!("Request body is not valid JSON: {}", e),
            )
        }
    };

    let cancel = state.shutdown.child_token();
    match state.pipeline.generate_with_cancel(&body, &cancel).await {
        Ok(report) => (
            [(SCHEMA_VERSION_HEADER, REPORT_SCHEMA_VERSION)],
            Json(report),
        )
            .into_response(),
        Err(e) => {
            let status = StatusCode::from_u16(e.status_class())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, e.kind(), e.to_string())
        }
    }
}

fn error_response(status: StatusCode, kind: &'static str, message: String) -> Response {
    (status, Json(ErrorBody { message, kind })).into_response()
}
