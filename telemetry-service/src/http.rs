//! The HTTP trigger surface consumed by the dashboard UI. One route:
//! POST runs a mock generation pass, GET only explains itself.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use time::OffsetDateTime;

use crate::mock;
use crate::store::TelemetryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TelemetryStore>,
}

/// Success/failure envelope for the trigger endpoint.
#[derive(Debug, Serialize)]
pub struct TriggerOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TriggerOutcome {
    fn succeeded(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
struct TriggerHelp {
    message: &'static str,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/init-data", get(init_data_info).post(init_data))
        .with_state(state)
}

/// POST /api/init-data — run one mock generation pass. Generator errors
/// never escape; they come back as the failure envelope.
async fn init_data(State(state): State<AppState>) -> (StatusCode, Json<TriggerOutcome>) {
    metrics::counter!("mock_generation_runs_total").increment(1);

    let mut rng = StdRng::from_entropy();
    let now = OffsetDateTime::now_utc();

    match mock::generate_mock_data(state.store.as_ref(), &mut rng, now).await {
        Ok(()) => (
            StatusCode::OK,
            Json(TriggerOutcome::succeeded("mock data generated")),
        ),
        Err(e) => {
            tracing::error!(error = %e, "mock data generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TriggerOutcome::failed(e.to_string())),
            )
        }
    }
}

/// GET /api/init-data — informational only, no side effects.
async fn init_data_info() -> Json<TriggerHelp> {
    Json(TriggerHelp {
        message: "POST to this endpoint to generate mock telemetry data",
    })
}
