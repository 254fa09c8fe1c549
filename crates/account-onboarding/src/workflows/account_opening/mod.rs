//! Account-opening intake, risk assessment, and manual review routing.
//!
//! Applications are validated by the intake guard, stored as read-only snapshots, and scored by
//! the [`risk::RiskAssessmentEngine`]. Assessments that need a human decision are handed to a
//! [`ReviewQueue`].

pub mod domain;
pub mod intake;
pub mod repository;
pub mod risk;
pub mod router;
pub mod samples;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AccountActivity, AccountType, AdditionalSigner, Address, ApplicationId, ApplicationStatus,
    BankingRelationship, BusinessProfile, ComponentCheck, DocumentStatus, DocumentType,
    EmploymentStatus, FinancialProfile, KycResults, KycStatus, KycVerification, OfacScreening,
    PersonalInfo, RiskAssessmentInput, SanctionsMatch, SignerIdentity, SignerRole,
    UploadedDocument, VerificationDetails,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{
    ApplicationRecord, ApplicationRepository, ApplicationStatusView, RepositoryError,
    ReviewQueue, ReviewQueueError, ReviewTicket,
};
pub use risk::{
    Clock, FixedClock, IdGenerator, RiskAssessmentEngine, RiskAssessmentResult, RiskCategory,
    RiskFactor, RiskImpact, RiskLevel, RiskRuleSet, SystemClock, UuidGenerator,
};
pub use router::application_router;
pub use service::{RiskAssessmentService, RiskAssessmentServiceError};
