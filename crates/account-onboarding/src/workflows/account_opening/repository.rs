use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, ApplicationStatus, RiskAssessmentInput};
use super::risk::{RiskAssessmentResult, RiskLevel};

/// Repository record containing the application snapshot, status, and latest assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub snapshot: RiskAssessmentInput,
    pub status: ApplicationStatus,
    pub assessment: Option<RiskAssessmentResult>,
}

impl ApplicationRecord {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.application_id.clone(),
            account_type: self.snapshot.account_type.label(),
            status: self.status.label(),
            risk_score: self.assessment.as_ref().map(|result| result.risk_score),
            overall_risk: self
                .assessment
                .as_ref()
                .map(|result| result.overall_risk.label()),
            requires_manual_review: self
                .assessment
                .as_ref()
                .map(|result| result.requires_manual_review),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn pending_review(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook routing applications to human reviewers.
pub trait ReviewQueue: Send + Sync {
    fn enqueue(&self, ticket: ReviewTicket) -> Result<(), ReviewQueueError>;
}

/// Work item handed to the manual review queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTicket {
    pub application_id: ApplicationId,
    pub assessment_id: String,
    pub risk_score: u8,
    pub overall_risk: RiskLevel,
    pub reasons: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewQueueError {
    #[error("review queue unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub account_type: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_risk: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_manual_review: Option<bool>,
}
