use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::Profile;
use super::narrative::NarrativeGenerator;
use super::repository::{EvaluationId, EvaluationRepository, RepositoryError};
use super::service::{AnalysisService, AnalysisServiceError};

const DEFAULT_RECENT_LIMIT: usize = 20;

/// Router builder exposing the scoring and analysis endpoints.
pub fn assessment_router<R, N>(service: Arc<AnalysisService<R, N>>) -> Router
where
    R: EvaluationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    Router::new()
        .route("/api/v1/analyze", post(analyze_handler::<R, N>))
        .route("/api/v1/scores", post(scores_handler::<R, N>))
        .route("/api/v1/quick-score", post(quick_score_handler::<R, N>))
        .route("/api/v1/evaluations", get(recent_handler::<R, N>))
        .route(
            "/api/v1/evaluations/:evaluation_id",
            get(evaluation_handler::<R, N>),
        )
        .with_state(service)
}

fn error_response(error: AnalysisServiceError) -> Response {
    let status = match &error {
        AnalysisServiceError::Intake(_) => StatusCode::BAD_REQUEST,
        AnalysisServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AnalysisServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AnalysisServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "success": false,
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}

pub(crate) async fn analyze_handler<R, N>(
    State(service): State<Arc<AnalysisService<R, N>>>,
    Json(profile): Json<Profile>,
) -> Response
where
    R: EvaluationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    match service.analyze(profile) {
        Ok(record) => {
            let payload = json!({
                "success": true,
                "result": record,
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn scores_handler<R, N>(
    State(service): State<Arc<AnalysisService<R, N>>>,
    Json(profile): Json<Profile>,
) -> Response
where
    R: EvaluationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    match service.score(&profile) {
        Ok(scores) => (StatusCode::OK, Json(scores)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn quick_score_handler<R, N>(
    State(service): State<Arc<AnalysisService<R, N>>>,
    Json(profile): Json<Profile>,
) -> Response
where
    R: EvaluationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    match service.quick_score(&profile) {
        Ok(score) => (StatusCode::OK, Json(json!({ "score": score }))).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecentQuery {
    limit: Option<usize>,
}

pub(crate) async fn recent_handler<R, N>(
    State(service): State<Arc<AnalysisService<R, N>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    R: EvaluationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT).min(100);
    match service.recent(limit) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn evaluation_handler<R, N>(
    State(service): State<Arc<AnalysisService<R, N>>>,
    Path(evaluation_id): Path<String>,
) -> Response
where
    R: EvaluationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    match service.get(&EvaluationId(evaluation_id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}
