use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicationId, RiskAssessmentInput};
use super::repository::{ApplicationRepository, RepositoryError, ReviewQueue};
use super::service::{RiskAssessmentService, RiskAssessmentServiceError};

/// Optional body for assessment requests.
#[derive(Debug, Default, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub assessed_by: Option<String>,
}

/// Router builder exposing intake, assessment, and read endpoints.
pub fn application_router<R, Q>(service: Arc<RiskAssessmentService<R, Q>>) -> Router
where
    R: ApplicationRepository + 'static,
    Q: ReviewQueue + 'static,
{
    Router::new()
        .route("/api/v1/applications", post(submit_handler::<R, Q>))
        .route(
            "/api/v1/applications/:application_id",
            get(status_handler::<R, Q>),
        )
        .route(
            "/api/v1/applications/:application_id/risk-assessment",
            post(assess_handler::<R, Q>).get(latest_assessment_handler::<R, Q>),
        )
        .with_state(service)
}

fn error_response(error: RiskAssessmentServiceError) -> Response {
    let status = match &error {
        RiskAssessmentServiceError::Intake(_) => StatusCode::UNPROCESSABLE_ENTITY,
        RiskAssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        RiskAssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        RiskAssessmentServiceError::Repository(RepositoryError::Unavailable(_))
        | RiskAssessmentServiceError::Review(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn submit_handler<R, Q>(
    State(service): State<Arc<RiskAssessmentService<R, Q>>>,
    Json(snapshot): Json<RiskAssessmentInput>,
) -> Response
where
    R: ApplicationRepository + 'static,
    Q: ReviewQueue + 'static,
{
    match service.submit(snapshot) {
        Ok(record) => (StatusCode::ACCEPTED, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, Q>(
    State(service): State<Arc<RiskAssessmentService<R, Q>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    Q: ReviewQueue + 'static,
{
    match service.get(&ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assess_handler<R, Q>(
    State(service): State<Arc<RiskAssessmentService<R, Q>>>,
    Path(application_id): Path<String>,
    request: Option<Json<AssessmentRequest>>,
) -> Response
where
    R: ApplicationRepository + 'static,
    Q: ReviewQueue + 'static,
{
    let assessed_by = request
        .and_then(|Json(request)| request.assessed_by)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| service.default_assessor().to_string());

    match service.assess(&ApplicationId(application_id), &assessed_by) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn latest_assessment_handler<R, Q>(
    State(service): State<Arc<RiskAssessmentService<R, Q>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    Q: ReviewQueue + 'static,
{
    let id = ApplicationId(application_id);
    match service.latest(&id) {
        Ok(Some(result)) => (StatusCode::OK, Json(result)).into_response(),
        Ok(None) => {
            let payload = json!({
                "application_id": id.0,
                "error": "application has not been assessed",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}
