use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{ApplicationId, ApplicationStatus, RiskAssessmentInput};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{
    ApplicationRecord, ApplicationRepository, RepositoryError, ReviewQueue, ReviewQueueError,
    ReviewTicket,
};
use super::risk::{RiskAssessmentEngine, RiskAssessmentResult, DEFAULT_ASSESSOR};

/// Service composing the intake guard, repository, review queue, and risk engine.
pub struct RiskAssessmentService<R, Q> {
    guard: IntakeGuard,
    repository: Arc<R>,
    reviews: Arc<Q>,
    engine: Arc<RiskAssessmentEngine>,
    default_assessor: String,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<R, Q> RiskAssessmentService<R, Q>
where
    R: ApplicationRepository + 'static,
    Q: ReviewQueue + 'static,
{
    pub fn new(repository: Arc<R>, reviews: Arc<Q>, engine: RiskAssessmentEngine) -> Self {
        Self {
            guard: IntakeGuard::new(),
            repository,
            reviews,
            engine: Arc::new(engine),
            default_assessor: DEFAULT_ASSESSOR.to_string(),
        }
    }

    /// Assessor recorded when a request does not name one.
    pub fn with_default_assessor(mut self, assessed_by: impl Into<String>) -> Self {
        self.default_assessor = assessed_by.into();
        self
    }

    pub fn default_assessor(&self) -> &str {
        &self.default_assessor
    }

    pub fn engine(&self) -> &RiskAssessmentEngine {
        &self.engine
    }

    /// Validate and store a new application snapshot.
    pub fn submit(
        &self,
        snapshot: RiskAssessmentInput,
    ) -> Result<ApplicationRecord, RiskAssessmentServiceError> {
        self.guard.validate(&snapshot)?;

        let record = ApplicationRecord {
            application_id: next_application_id(),
            snapshot,
            status: ApplicationStatus::Submitted,
            assessment: None,
        };

        let stored = self.repository.insert(record)?;
        info!(
            application_id = stored.application_id.as_str(),
            account_type = stored.snapshot.account_type.label(),
            "application submitted"
        );
        Ok(stored)
    }

    /// Assess a stored application, persist the result, and route it to review when required.
    pub fn assess(
        &self,
        application_id: &ApplicationId,
        assessed_by: &str,
    ) -> Result<RiskAssessmentResult, RiskAssessmentServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        let result = self
            .engine
            .assess_as(&record.application_id, &record.snapshot, assessed_by);

        record.status = if result.requires_manual_review {
            ApplicationStatus::ManualReview
        } else {
            ApplicationStatus::RiskAssessed
        };
        record.assessment = Some(result.clone());
        self.repository.update(record)?;

        info!(
            application_id = application_id.as_str(),
            assessment_id = result.id.as_str(),
            risk_score = result.risk_score,
            overall_risk = result.overall_risk.label(),
            "risk assessment stored"
        );

        if result.requires_manual_review {
            let reasons = self.engine.review_reasons(&result);
            warn!(
                application_id = application_id.as_str(),
                reasons = reasons.len(),
                "application routed to manual review"
            );
            self.reviews.enqueue(ReviewTicket {
                application_id: result.application_id.clone(),
                assessment_id: result.id.clone(),
                risk_score: result.risk_score,
                overall_risk: result.overall_risk,
                reasons,
            })?;
        }

        Ok(result)
    }

    /// Fetch an application and current status for API responses.
    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, RiskAssessmentServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Latest stored assessment, if the application has been assessed.
    pub fn latest(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Option<RiskAssessmentResult>, RiskAssessmentServiceError> {
        Ok(self.get(application_id)?.assessment)
    }

    pub fn pending_review(
        &self,
        limit: usize,
    ) -> Result<Vec<ApplicationRecord>, RiskAssessmentServiceError> {
        Ok(self.repository.pending_review(limit)?)
    }
}

/// Error raised by the risk assessment service.
#[derive(Debug, thiserror::Error)]
pub enum RiskAssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Review(#[from] ReviewQueueError),
}
