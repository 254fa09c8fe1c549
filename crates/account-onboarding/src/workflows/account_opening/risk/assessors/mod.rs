mod behavioral;
mod business;
mod documents;
mod financial;
mod geographic;
mod identity;
mod signers;

pub(crate) use behavioral::assess_behavior;
pub(crate) use business::assess_business;
pub(crate) use documents::assess_documents;
pub(crate) use financial::assess_financials;
pub(crate) use geographic::assess_geography;
pub(crate) use identity::assess_identity;
pub(crate) use signers::assess_signers;

use chrono::NaiveDate;

use super::super::domain::RiskAssessmentInput;
use super::config::RiskRuleSet;
use super::factor::RiskFactor;

/// Run every assessor in evaluation order; the returned order is the factor order of the result.
pub(crate) fn collect_factors(
    input: &RiskAssessmentInput,
    rules: &RiskRuleSet,
    today: NaiveDate,
) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if let (Some(personal), Some(kyc)) = (&input.personal_info, &input.kyc_verification) {
        factors.extend(assess_identity(personal, kyc, today));
    }

    if let Some(financial) = &input.financial_profile {
        factors.extend(assess_financials(financial));
    }

    if let Some(business) = &input.business_profile {
        factors.extend(assess_business(input.account_type, business, rules, today));
    }

    factors.extend(assess_documents(&input.documents));

    if let Some(address) = input.screening_address() {
        factors.extend(assess_geography(address, rules));
    }

    factors.extend(assess_behavior(input, rules));
    factors.extend(assess_signers(&input.additional_signers));

    factors
}

/// Ratio helper that treats a zero or non-finite denominator as undefined.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}
