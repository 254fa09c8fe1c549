use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryApplicationRepository, InMemoryReviewQueue};
use crate::routes::with_application_routes;
use account_onboarding::config::AppConfig;
use account_onboarding::error::AppError;
use account_onboarding::telemetry;
use account_onboarding::workflows::account_opening::{RiskAssessmentEngine, RiskAssessmentService};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let rules = config.risk.load_rules()?;
    info!(
        rules_path = ?config.risk.rules_path,
        high_risk_industries = rules.high_risk_industries.len(),
        "risk rule set loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryApplicationRepository::default());
    let reviews = Arc::new(InMemoryReviewQueue::default());
    let application_service = Arc::new(
        RiskAssessmentService::new(repository, reviews, RiskAssessmentEngine::new(rules))
            .with_default_assessor(config.risk.assessed_by.clone()),
    );

    let app = with_application_routes(application_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "account onboarding service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
