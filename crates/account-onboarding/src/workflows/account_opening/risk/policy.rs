use super::config::RiskRuleSet;
use super::factor::{RiskFactor, RiskImpact, RiskLevel};

fn baseline_recommendations(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => &[
            "Proceed with standard account opening",
            "Apply standard transaction monitoring",
        ],
        RiskLevel::Medium => &[
            "Conduct enhanced due diligence review",
            "Request additional supporting documentation",
            "Apply enhanced transaction monitoring for the first 90 days",
        ],
        RiskLevel::High => &[
            "Route application for manual compliance review",
            "Obtain senior management approval before account opening",
            "Apply enhanced ongoing monitoring",
            "Impose risk-based account restrictions and transaction limits",
        ],
    }
}

/// Classification baseline followed by keyword-triggered actions for severe factors.
pub(crate) fn recommend(
    level: RiskLevel,
    factors: &[RiskFactor],
    rules: &RiskRuleSet,
) -> Vec<String> {
    let mut recommendations: Vec<String> = baseline_recommendations(level)
        .iter()
        .map(|item| item.to_string())
        .collect();

    for factor in factors
        .iter()
        .filter(|factor| factor.score() > rules.recommendation_score_floor)
    {
        for trigger in &rules.recommendation_triggers {
            if factor.label_contains(&trigger.keyword) {
                recommendations.push(trigger.recommendation.clone());
            }
        }
    }

    dedup_preserving_order(recommendations)
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// Manual review overrides, checked in order and short-circuiting on the first hit.
pub(crate) fn requires_manual_review(
    level: RiskLevel,
    factors: &[RiskFactor],
    rules: &RiskRuleSet,
) -> bool {
    if level == RiskLevel::High {
        return true;
    }

    let critical = factors.iter().any(|factor| {
        let keyword_hit = factor.impact == RiskImpact::Negative
            && rules
                .manual_review_keywords
                .iter()
                .any(|keyword| factor.label_contains(keyword));
        keyword_hit || factor.score() >= rules.critical_factor_score
    });
    if critical {
        return true;
    }

    factors
        .iter()
        .filter(|factor| factor.score() > rules.elevated_factor_score)
        .count()
        >= rules.elevated_factor_limit
}

/// Labels of negative factors above the elevated threshold, used as review reasons.
pub(crate) fn review_reasons(factors: &[RiskFactor], rules: &RiskRuleSet) -> Vec<String> {
    factors
        .iter()
        .filter(|factor| {
            factor.impact == RiskImpact::Negative && factor.score() > rules.elevated_factor_score
        })
        .map(|factor| format!("{}: {}", factor.factor, factor.description))
        .collect()
}
