use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use crate::advisor::domain::{AssessmentId, AssessmentStatus, ProfileSubmission};
use crate::advisor::report::export_summaries;
use crate::advisor::repository::{AlertPublisher, AssessmentRepository, RepositoryError};
use crate::advisor::service::{AdvisorServiceError, PathwayAdvisorService};

const EXPORT_LIMIT: usize = 250;

/// Router builder exposing HTTP endpoints for intake, evaluation, status,
/// and the consultant-facing CSV export.
pub fn advisor_router<R, A>(service: Arc<PathwayAdvisorService<R, A>>) -> Router
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/advisor/assessments", post(submit_handler::<R, A>))
        .route(
            "/api/v1/advisor/assessments/export",
            get(export_handler::<R, A>),
        )
        .route(
            "/api/v1/advisor/assessments/:assessment_id",
            get(status_handler::<R, A>),
        )
        .route(
            "/api/v1/advisor/assessments/:assessment_id/results",
            post(evaluate_handler::<R, A>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<PathwayAdvisorService<R, A>>>,
    axum::Json(submission): axum::Json<ProfileSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(AdvisorServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AdvisorServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "assessment already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn evaluate_handler<R, A>(
    State(service): State<Arc<PathwayAdvisorService<R, A>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.evaluate(&id) {
        Ok(results) => (StatusCode::OK, axum::Json(results)).into_response(),
        Err(AdvisorServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "assessment not found",
                "assessment_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, A>(
    State(service): State<Arc<PathwayAdvisorService<R, A>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AdvisorServiceError::Repository(RepositoryError::NotFound)) => {
            // Unknown ids answer with the neutral pre-evaluation shape so
            // polling clients see the same payload before and after intake
            // lands.
            let payload = json!({
                "assessment_id": id.0,
                "status": AssessmentStatus::Submitted.label(),
                "outcome_summary": "pending evaluation",
                "top_score": serde_json::Value::Null,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn export_handler<R, A>(
    State(service): State<Arc<PathwayAdvisorService<R, A>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    let records = match service.pending_review(EXPORT_LIMIT) {
        Ok(records) => records,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
        }
    };

    let mut buffer = Vec::new();
    if let Err(error) = export_summaries(&records, &mut buffer) {
        let payload = json!({
            "error": error.to_string(),
        });
        return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv")],
        buffer,
    )
        .into_response()
}
