use chrono::{Datelike, NaiveDate};

use super::super::super::domain::{KycStatus, KycVerification, PersonalInfo};
use super::super::factor::{Ladder, RiskCategory, RiskFactor};
use super::super::labels;

const KYC_WEIGHT: f64 = 0.3;
const AGE_WEIGHT: f64 = 0.1;

pub(crate) fn assess_identity(
    personal: &PersonalInfo,
    kyc: &KycVerification,
    today: NaiveDate,
) -> Vec<RiskFactor> {
    let mut factors = Vec::with_capacity(3);

    factors.extend(kyc_status_factor(kyc));
    factors.push(ofac_factor(kyc));

    let age = age_on(personal.date_of_birth, today);
    factors.extend(
        Ladder::over(age)
            .rung(
                |age| *age < 21,
                |age| {
                    RiskFactor::negative(
                        RiskCategory::Identity,
                        labels::YOUNG_APPLICANT,
                        AGE_WEIGHT,
                        40,
                        format!("Applicant is {age} years old, under 21"),
                    )
                },
            )
            .rung(
                |age| *age > 80,
                |age| {
                    RiskFactor::negative(
                        RiskCategory::Identity,
                        labels::SENIOR_APPLICANT,
                        AGE_WEIGHT,
                        25,
                        format!("Applicant is {age} years old, over 80"),
                    )
                },
            )
            .otherwise(|age| {
                RiskFactor::positive(
                    RiskCategory::Identity,
                    labels::STANDARD_AGE,
                    AGE_WEIGHT,
                    10,
                    format!("Applicant is {age} years old"),
                )
            })
            .first_match(),
    );

    factors
}

fn kyc_status_factor(kyc: &KycVerification) -> Option<RiskFactor> {
    Ladder::over(kyc)
        .rung(
            |kyc| kyc.status == KycStatus::Passed && kyc.confidence >= 0.9,
            |kyc| {
                RiskFactor::positive(
                    RiskCategory::Identity,
                    labels::KYC_PASSED,
                    KYC_WEIGHT,
                    10,
                    format!(
                        "KYC verification passed with {:.0}% confidence",
                        kyc.confidence * 100.0
                    ),
                )
            },
        )
        .rung(
            |kyc| kyc.status == KycStatus::Passed && kyc.confidence >= 0.7,
            |kyc| {
                RiskFactor::neutral(
                    RiskCategory::Identity,
                    labels::KYC_PASSED_MODERATE,
                    KYC_WEIGHT,
                    30,
                    format!(
                        "KYC verification passed with {:.0}% confidence",
                        kyc.confidence * 100.0
                    ),
                )
            },
        )
        .rung(
            |kyc| kyc.status != KycStatus::Failed,
            |kyc| {
                RiskFactor::negative(
                    RiskCategory::Identity,
                    labels::KYC_NEEDS_REVIEW,
                    KYC_WEIGHT,
                    60,
                    format!(
                        "KYC status '{}' at {:.0}% confidence requires review",
                        kyc.status.label(),
                        kyc.confidence * 100.0
                    ),
                )
            },
        )
        .otherwise(|_| {
            RiskFactor::negative(
                RiskCategory::Identity,
                labels::IDENTITY_FAILED,
                KYC_WEIGHT,
                90,
                "KYC verification failed",
            )
        })
        .first_match()
}

fn ofac_factor(kyc: &KycVerification) -> RiskFactor {
    let ofac = &kyc.results.ofac;
    if !ofac.passed {
        let description = if ofac.matches.is_empty() {
            "Applicant matched an OFAC sanctions list".to_string()
        } else {
            let lists = ofac
                .matches
                .iter()
                .map(|hit| hit.list.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{} potential OFAC match(es) on: {lists}",
                ofac.matches.len()
            )
        };
        RiskFactor::negative(
            RiskCategory::Identity,
            labels::OFAC_MATCH,
            0.4,
            95,
            description,
        )
    } else {
        RiskFactor::positive(
            RiskCategory::Identity,
            labels::OFAC_CLEAN,
            0.2,
            5,
            "No matches found on OFAC sanctions lists",
        )
    }
}

/// Whole years elapsed, counting a birthday only once its month and day have been reached.
pub(crate) fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}
