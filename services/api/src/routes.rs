use crate::infra::{AppState, SharedService};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use career_match::assessment::{assessment_router, AnswersPayload, Recommendation};
use career_match::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

/// Recommendation stamped with the moment it was produced.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendationReport {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) sectors_considered: usize,
    #[serde(flatten)]
    pub(crate) recommendation: Recommendation,
}

pub(crate) fn with_service_routes(service: SharedService) -> axum::Router {
    assessment_router(service.clone())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/reports/recommendation",
            axum::routing::post(recommendation_report_endpoint),
        )
        .layer(Extension(service))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn recommendation_report_endpoint(
    Extension(service): Extension<SharedService>,
    Json(payload): Json<AnswersPayload>,
) -> Result<Json<RecommendationReport>, AppError> {
    let recommendation = service.recommend(&payload.answers)?;

    Ok(Json(RecommendationReport {
        generated_at: Utc::now(),
        sectors_considered: service.sector_config().len(),
        recommendation,
    }))
}
