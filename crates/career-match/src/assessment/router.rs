use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::QuestionBank;
use super::service::{AssessmentError, AssessmentService};
use crate::psychometrics::AnswerMap;

/// Request body shared by the assessment endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswersPayload {
    #[serde(default)]
    pub answers: AnswerMap,
}

/// Router builder exposing the scoring and recommendation endpoints.
pub fn assessment_router<Q>(service: Arc<AssessmentService<Q>>) -> Router
where
    Q: QuestionBank + 'static,
{
    Router::new()
        .route("/api/v1/assessments/profile", post(profile_handler::<Q>))
        .route(
            "/api/v1/assessments/recommendation",
            post(recommendation_handler::<Q>),
        )
        .route("/api/v1/sectors", get(sectors_handler::<Q>))
        .with_state(service)
}

pub(crate) async fn profile_handler<Q>(
    State(service): State<Arc<AssessmentService<Q>>>,
    axum::Json(payload): axum::Json<AnswersPayload>,
) -> Response
where
    Q: QuestionBank + 'static,
{
    match service.profile(&payload.answers) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendation_handler<Q>(
    State(service): State<Arc<AssessmentService<Q>>>,
    axum::Json(payload): axum::Json<AnswersPayload>,
) -> Response
where
    Q: QuestionBank + 'static,
{
    match service.recommend(&payload.answers) {
        Ok(recommendation) => (StatusCode::OK, axum::Json(recommendation)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn sectors_handler<Q>(
    State(service): State<Arc<AssessmentService<Q>>>,
) -> Response
where
    Q: QuestionBank + 'static,
{
    let sectors = service.sectors();
    (StatusCode::OK, axum::Json(json!({ "sectors": sectors }))).into_response()
}

fn error_response(error: AssessmentError) -> Response {
    match error {
        AssessmentError::IncompleteGating { ref missing } => {
            let payload = json!({
                "error": error.to_string(),
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
