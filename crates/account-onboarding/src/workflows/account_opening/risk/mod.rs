mod aggregate;
mod assessors;
mod config;
mod factor;
pub mod labels;
mod policy;

pub use config::{RecommendationTrigger, RiskRuleSet};
pub use factor::{RiskCategory, RiskFactor, RiskImpact, RiskLevel};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::domain::{ApplicationId, RiskAssessmentInput};

pub const DEFAULT_ASSESSOR: &str = "system";

/// Source of the assessment timestamp and the reference date for age calculations.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh result identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Clock pinned to one instant, for reproducible assessments.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Immutable output of a single assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentResult {
    pub id: String,
    pub application_id: ApplicationId,
    pub overall_risk: RiskLevel,
    pub risk_score: u8,
    pub factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
    pub requires_manual_review: bool,
    pub assessed_at: DateTime<Utc>,
    pub assessed_by: String,
}

impl RiskAssessmentResult {
    pub fn factors_in(&self, category: RiskCategory) -> impl Iterator<Item = &RiskFactor> {
        self.factors
            .iter()
            .filter(move |factor| factor.category == category)
    }

    pub fn summary(&self) -> String {
        let review = if self.requires_manual_review {
            "manual review required"
        } else {
            "no manual review"
        };
        format!(
            "{} risk (score {}), {} factor(s), {review}",
            self.overall_risk.label(),
            self.risk_score,
            self.factors.len()
        )
    }
}

/// Stateless evaluator that applies the rule set to an application snapshot.
#[derive(Clone)]
pub struct RiskAssessmentEngine {
    rules: RiskRuleSet,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for RiskAssessmentEngine {
    fn default() -> Self {
        Self::new(RiskRuleSet::default())
    }
}

impl RiskAssessmentEngine {
    pub fn new(rules: RiskRuleSet) -> Self {
        Self::with_dependencies(rules, Arc::new(SystemClock), Arc::new(UuidGenerator))
    }

    pub fn with_dependencies(
        rules: RiskRuleSet,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { rules, clock, ids }
    }

    pub fn rules(&self) -> &RiskRuleSet {
        &self.rules
    }

    /// Assess on behalf of the default `system` assessor.
    pub fn assess(
        &self,
        application_id: &ApplicationId,
        input: &RiskAssessmentInput,
    ) -> RiskAssessmentResult {
        self.assess_as(application_id, input, DEFAULT_ASSESSOR)
    }

    pub fn assess_as(
        &self,
        application_id: &ApplicationId,
        input: &RiskAssessmentInput,
        assessed_by: &str,
    ) -> RiskAssessmentResult {
        let assessed_at = self.clock.now();
        let factors = assessors::collect_factors(input, &self.rules, assessed_at.date_naive());

        let (risk_score, overall_risk) = aggregate::aggregate(&factors);
        let recommendations = policy::recommend(overall_risk, &factors, &self.rules);
        let requires_manual_review =
            policy::requires_manual_review(overall_risk, &factors, &self.rules);

        debug!(
            application_id = application_id.as_str(),
            factor_count = factors.len(),
            risk_score,
            overall_risk = overall_risk.label(),
            requires_manual_review,
            "risk assessment computed"
        );

        RiskAssessmentResult {
            id: self.ids.next_id(),
            application_id: application_id.clone(),
            overall_risk,
            risk_score,
            factors,
            recommendations,
            requires_manual_review,
            assessed_at,
            assessed_by: assessed_by.to_string(),
        }
    }

    /// Reasons attached to review tickets for an assessment produced by this engine.
    pub fn review_reasons(&self, result: &RiskAssessmentResult) -> Vec<String> {
        policy::review_reasons(&result.factors, &self.rules)
    }
}
