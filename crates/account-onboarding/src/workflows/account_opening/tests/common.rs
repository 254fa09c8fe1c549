use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::account_opening::domain::{
    ApplicationId, ApplicationStatus, RiskAssessmentInput,
};
use crate::workflows::account_opening::repository::{
    ApplicationRecord, ApplicationRepository, RepositoryError, ReviewQueue, ReviewQueueError,
    ReviewTicket,
};
use crate::workflows::account_opening::risk::{
    FixedClock, IdGenerator, RiskAssessmentEngine, RiskRuleSet,
};
use crate::workflows::account_opening::{samples, RiskAssessmentService};

pub(super) fn assessment_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid instant")
}

/// Ids of the form `assessment-1`, `assessment-2`, ...
#[derive(Default)]
pub(super) struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let id = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("assessment-{id}")
    }
}

pub(super) fn engine_with_rules(rules: RiskRuleSet) -> RiskAssessmentEngine {
    RiskAssessmentEngine::with_dependencies(
        rules,
        Arc::new(FixedClock(assessment_instant())),
        Arc::new(SequentialIds::default()),
    )
}

pub(super) fn fixed_engine() -> RiskAssessmentEngine {
    engine_with_rules(RiskRuleSet::default())
}

pub(super) fn low_risk_input() -> RiskAssessmentInput {
    samples::low_risk_consumer()
}

pub(super) fn high_risk_input() -> RiskAssessmentInput {
    samples::high_risk_commercial()
}

pub(super) fn application_id(value: &str) -> ApplicationId {
    ApplicationId::new(value)
}

pub(super) fn build_service() -> (
    RiskAssessmentService<MemoryRepository, MemoryReviews>,
    Arc<MemoryRepository>,
    Arc<MemoryReviews>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let reviews = Arc::new(MemoryReviews::default());
    let service = RiskAssessmentService::new(repository.clone(), reviews.clone(), fixed_engine());
    (service, repository, reviews)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl MemoryRepository {
    pub(super) fn status_of(&self, id: &ApplicationId) -> Option<ApplicationStatus> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .get(id)
            .map(|record| record.status)
    }
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.application_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending_review(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == ApplicationStatus::ManualReview)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryReviews {
    tickets: Arc<Mutex<Vec<ReviewTicket>>>,
}

impl MemoryReviews {
    pub(super) fn tickets(&self) -> Vec<ReviewTicket> {
        self.tickets.lock().expect("review mutex poisoned").clone()
    }
}

impl ReviewQueue for MemoryReviews {
    fn enqueue(&self, ticket: ReviewTicket) -> Result<(), ReviewQueueError> {
        self.tickets
            .lock()
            .expect("review mutex poisoned")
            .push(ticket);
        Ok(())
    }
}

pub(super) struct OfflineReviews;

impl ReviewQueue for OfflineReviews {
    fn enqueue(&self, _ticket: ReviewTicket) -> Result<(), ReviewQueueError> {
        Err(ReviewQueueError::Transport("queue offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl ApplicationRepository for ConflictRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending_review(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending_review(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
