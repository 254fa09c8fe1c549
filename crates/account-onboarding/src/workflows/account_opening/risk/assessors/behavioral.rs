use super::super::super::domain::RiskAssessmentInput;
use super::super::config::RiskRuleSet;
use super::super::factor::{RiskCategory, RiskFactor};
use super::super::labels;

const REPEATED_DIGIT_RUN: usize = 4;

pub(crate) fn assess_behavior(input: &RiskAssessmentInput, rules: &RiskRuleSet) -> Vec<RiskFactor> {
    let Some(personal) = &input.personal_info else {
        return Vec::new();
    };

    let mut factors = Vec::with_capacity(3);

    if let Some(domain) = email_domain(&personal.email) {
        factors.push(if rules.is_disposable_email_domain(&domain) {
            RiskFactor::negative(
                RiskCategory::Behavioral,
                labels::DISPOSABLE_EMAIL,
                0.2,
                70,
                format!("Email domain {domain} belongs to a disposable provider"),
            )
        } else if rules.is_personal_email_domain(&domain) {
            RiskFactor::neutral(
                RiskCategory::Behavioral,
                labels::PERSONAL_EMAIL,
                0.1,
                10,
                format!("Email hosted by personal provider {domain}"),
            )
        } else {
            RiskFactor::positive(
                RiskCategory::Behavioral,
                labels::CUSTOM_EMAIL_DOMAIN,
                0.1,
                5,
                format!("Email hosted on domain {domain}"),
            )
        });
    }

    let digits: String = personal
        .phone
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();
    if has_repeated_digits(&digits) || rules.has_sequential_digit_run(&digits) {
        factors.push(RiskFactor::negative(
            RiskCategory::Behavioral,
            labels::SUSPICIOUS_PHONE,
            0.15,
            55,
            "Phone number contains repeated or sequential digit patterns",
        ));
    }

    if let Some(physical) = &personal.physical_address {
        if physical != &personal.mailing_address {
            factors.push(RiskFactor::neutral(
                RiskCategory::Behavioral,
                labels::ADDRESS_MISMATCH,
                0.1,
                25,
                format!(
                    "Mailing address in {} differs from physical address in {}",
                    personal.mailing_address.city, physical.city
                ),
            ));
        }
    }

    factors
}

fn email_domain(email: &str) -> Option<String> {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.trim().to_lowercase())
        .filter(|domain| !domain.is_empty())
}

fn has_repeated_digits(digits: &str) -> bool {
    digits
        .as_bytes()
        .windows(REPEATED_DIGIT_RUN)
        .any(|window| window.iter().all(|digit| *digit == window[0]))
}
