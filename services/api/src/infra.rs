use account_onboarding::workflows::account_opening::{
    ApplicationId, ApplicationRecord, ApplicationRepository, ApplicationStatus, RepositoryError,
    ReviewQueue, ReviewQueueError, ReviewTicket,
};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

type Records = HashMap<ApplicationId, ApplicationRecord>;

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<Records>>,
}

impl InMemoryApplicationRepository {
    fn records(&self) -> Result<MutexGuard<'_, Records>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.application_id) {
            guard.insert(record.application_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(self.records()?.get(id).cloned())
    }

    fn pending_review(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records()?;
        let mut pending: Vec<ApplicationRecord> = guard
            .values()
            .filter(|record| record.status == ApplicationStatus::ManualReview)
            .cloned()
            .collect();
        pending.sort_by(|left, right| left.application_id.0.cmp(&right.application_id.0));
        pending.truncate(limit);
        Ok(pending)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReviewQueue {
    tickets: Arc<Mutex<Vec<ReviewTicket>>>,
}

impl ReviewQueue for InMemoryReviewQueue {
    fn enqueue(&self, ticket: ReviewTicket) -> Result<(), ReviewQueueError> {
        let mut guard = self
            .tickets
            .lock()
            .map_err(|_| ReviewQueueError::Transport("review queue mutex poisoned".to_string()))?;
        guard.push(ticket);
        Ok(())
    }
}

impl InMemoryReviewQueue {
    pub(crate) fn tickets(&self) -> Vec<ReviewTicket> {
        self.tickets
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_onboarding::workflows::account_opening::{samples, RiskLevel};

    fn record(id: &str, status: ApplicationStatus) -> ApplicationRecord {
        ApplicationRecord {
            application_id: ApplicationId::new(id),
            snapshot: samples::low_risk_consumer(),
            status,
            assessment: None,
        }
    }

    #[test]
    fn duplicate_inserts_conflict() {
        let repository = InMemoryApplicationRepository::default();
        repository
            .insert(record("app-000001", ApplicationStatus::Submitted))
            .expect("first insert");
        assert!(matches!(
            repository.insert(record("app-000001", ApplicationStatus::Submitted)),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn updates_require_existing_record() {
        let repository = InMemoryApplicationRepository::default();
        assert!(matches!(
            repository.update(record("app-000404", ApplicationStatus::RiskAssessed)),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn pending_review_is_ordered_and_limited() {
        let repository = InMemoryApplicationRepository::default();
        for (id, status) in [
            ("app-000003", ApplicationStatus::ManualReview),
            ("app-000001", ApplicationStatus::ManualReview),
            ("app-000002", ApplicationStatus::RiskAssessed),
            ("app-000004", ApplicationStatus::ManualReview),
        ] {
            repository.insert(record(id, status)).expect("insert");
        }

        let pending = repository.pending_review(2).expect("pending");
        let ids: Vec<&str> = pending
            .iter()
            .map(|record| record.application_id.as_str())
            .collect();
        assert_eq!(ids, vec!["app-000001", "app-000003"]);
    }

    #[test]
    fn review_queue_records_tickets() {
        let queue = InMemoryReviewQueue::default();
        queue
            .enqueue(ReviewTicket {
                application_id: ApplicationId::new("app-000009"),
                assessment_id: "ra-1".to_string(),
                risk_score: 72,
                overall_risk: RiskLevel::High,
                reasons: vec!["OFAC screening match: potential match".to_string()],
            })
            .expect("enqueue");
        assert_eq!(queue.tickets().len(), 1);
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2025-06-01 "),
            Ok(NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid"))
        );
        assert!(parse_date("06/01/2025").is_err());
    }
}
