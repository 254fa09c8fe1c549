use chrono::NaiveDate;

use super::super::super::domain::{AccountType, BusinessProfile};
use super::super::config::RiskRuleSet;
use super::super::factor::{Ladder, RiskCategory, RiskFactor};
use super::super::labels;
use super::ratio;

const DAYS_PER_YEAR: f64 = 365.25;

pub(crate) fn assess_business(
    account_type: AccountType,
    profile: &BusinessProfile,
    rules: &RiskRuleSet,
    today: NaiveDate,
) -> Vec<RiskFactor> {
    if account_type == AccountType::Consumer {
        return Vec::new();
    }

    let mut factors = Vec::with_capacity(5);

    factors.push(if profile.is_cash_intensive {
        RiskFactor::negative(
            RiskCategory::Business,
            labels::CASH_INTENSIVE,
            0.3,
            75,
            format!("{} handles significant cash volume", profile.business_name),
        )
    } else {
        RiskFactor::positive(
            RiskCategory::Business,
            labels::NON_CASH_INTENSIVE,
            0.3,
            15,
            "Business does not rely on cash transactions",
        )
    });

    let business_age =
        (today - profile.date_established).num_days() as f64 / DAYS_PER_YEAR;
    let description = format!("Business operating for {business_age:.1} years");
    factors.extend(
        Ladder::over(business_age)
            .rung(
                |years| *years < 1.0,
                |_| {
                    RiskFactor::negative(
                        RiskCategory::Business,
                        labels::NEW_BUSINESS,
                        0.2,
                        60,
                        description.as_str(),
                    )
                },
            )
            .rung(
                |years| *years >= 5.0,
                |_| {
                    RiskFactor::positive(
                        RiskCategory::Business,
                        labels::ESTABLISHED_BUSINESS,
                        0.2,
                        10,
                        description.as_str(),
                    )
                },
            )
            .otherwise(|_| {
                RiskFactor::neutral(
                    RiskCategory::Business,
                    labels::DEVELOPING_BUSINESS,
                    0.2,
                    25,
                    description.as_str(),
                )
            })
            .first_match(),
    );

    factors.push(if rules.is_high_risk_industry(&profile.industry_type) {
        RiskFactor::negative(
            RiskCategory::Business,
            labels::HIGH_RISK_INDUSTRY,
            0.35,
            80,
            format!("Industry '{}' is classified as high risk", profile.industry_type),
        )
    } else {
        RiskFactor::neutral(
            RiskCategory::Business,
            labels::STANDARD_INDUSTRY,
            0.2,
            20,
            format!("Industry '{}' carries standard risk", profile.industry_type),
        )
    });

    let description = format!(
        "Expected monthly volume of ${:.0}",
        profile.monthly_transaction_volume
    );
    factors.extend(
        Ladder::over(profile.monthly_transaction_volume)
            .rung(
                |volume| *volume > 500_000.0,
                |_| {
                    RiskFactor::negative(
                        RiskCategory::Business,
                        labels::HIGH_TRANSACTION_VOLUME,
                        0.15,
                        45,
                        description.as_str(),
                    )
                },
            )
            .rung(
                |volume| *volume < 10_000.0,
                |_| {
                    RiskFactor::positive(
                        RiskCategory::Business,
                        labels::LOW_TRANSACTION_VOLUME,
                        0.15,
                        15,
                        description.as_str(),
                    )
                },
            )
            .first_match(),
    );

    if let Some(balance_ratio) = ratio(
        profile.expected_balance,
        profile.monthly_transaction_volume,
    ) {
        let description = format!(
            "Expected balance covers {:.1}% of monthly volume",
            balance_ratio * 100.0
        );
        factors.extend(
            Ladder::over(balance_ratio)
                .rung(
                    |balance| *balance < 0.1,
                    |_| {
                        RiskFactor::negative(
                            RiskCategory::Business,
                            labels::LOW_BALANCE_RATIO,
                            0.1,
                            40,
                            description.as_str(),
                        )
                    },
                )
                .rung(
                    |balance| *balance > 1.0,
                    |_| {
                        RiskFactor::positive(
                            RiskCategory::Business,
                            labels::HEALTHY_BALANCE_RATIO,
                            0.1,
                            10,
                            description.as_str(),
                        )
                    },
                )
                .first_match(),
        );
    }

    factors
}
