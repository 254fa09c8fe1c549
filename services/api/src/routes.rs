use crate::infra::AppState;
use account_onboarding::workflows::account_opening::{
    application_router, ApplicationRepository, ReviewQueue, RiskAssessmentService,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_application_routes<R, Q>(
    service: Arc<RiskAssessmentService<R, Q>>,
) -> axum::Router
where
    R: ApplicationRepository + 'static,
    Q: ReviewQueue + 'static,
{
    application_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    if ready {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryApplicationRepository, InMemoryReviewQueue};
    use account_onboarding::workflows::account_opening::RiskAssessmentEngine;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let service = Arc::new(RiskAssessmentService::new(
            Arc::new(InMemoryApplicationRepository::default()),
            Arc::new(InMemoryReviewQueue::default()),
            RiskAssessmentEngine::default(),
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        state.readiness.store(ready, Ordering::Release);
        with_application_routes(service).layer(Extension(state))
    }

    async fn get(router: axum::Router, uri: &str) -> StatusCode {
        router
            .oneshot(
                Request::get(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("response")
            .status()
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        assert_eq!(get(app(false), "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        assert_eq!(
            get(app(false), "/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(get(app(true), "/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_render_as_text() {
        assert_eq!(get(app(true), "/metrics").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn application_routes_are_mounted() {
        assert_eq!(
            get(app(true), "/api/v1/applications/app-missing").await,
            StatusCode::NOT_FOUND
        );
    }
}
