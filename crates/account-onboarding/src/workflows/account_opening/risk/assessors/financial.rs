use super::super::super::domain::FinancialProfile;
use super::super::factor::{Ladder, RiskCategory, RiskFactor};
use super::super::labels;
use super::ratio;

pub(crate) fn assess_financials(profile: &FinancialProfile) -> Vec<RiskFactor> {
    let mut factors = Vec::with_capacity(5);

    if let Some(debt_to_income) = ratio(profile.liabilities, profile.annual_income) {
        let description = format!("Debt-to-income ratio of {:.1}%", debt_to_income * 100.0);
        factors.extend(
            Ladder::over(debt_to_income)
                .rung(
                    |dti| *dti > 0.5,
                    |_| {
                        RiskFactor::negative(
                            RiskCategory::Financial,
                            labels::HIGH_DEBT_TO_INCOME,
                            0.25,
                            70,
                            description.as_str(),
                        )
                    },
                )
                .rung(
                    |dti| *dti > 0.3,
                    |_| {
                        RiskFactor::neutral(
                            RiskCategory::Financial,
                            labels::MODERATE_DEBT_TO_INCOME,
                            0.25,
                            35,
                            description.as_str(),
                        )
                    },
                )
                .otherwise(|_| {
                    RiskFactor::positive(
                        RiskCategory::Financial,
                        labels::LOW_DEBT_TO_INCOME,
                        0.25,
                        15,
                        description.as_str(),
                    )
                })
                .first_match(),
        );
    }

    let sources = &profile.income_source;
    if sources.len() == 1 && sources[0].eq_ignore_ascii_case("employment") {
        factors.push(RiskFactor::neutral(
            RiskCategory::Financial,
            labels::SINGLE_EMPLOYMENT_INCOME,
            0.1,
            25,
            "Income depends on a single employer",
        ));
    } else if sources.len() > 1 {
        factors.push(RiskFactor::positive(
            RiskCategory::Financial,
            labels::DIVERSIFIED_INCOME,
            0.1,
            15,
            format!("{} distinct income sources reported", sources.len()),
        ));
    }

    if let Some(asset_ratio) = ratio(profile.assets, profile.annual_income) {
        let description = format!("Assets equal {asset_ratio:.1}x annual income");
        factors.extend(
            Ladder::over(asset_ratio)
                .rung(
                    |assets| *assets > 2.0,
                    |_| {
                        RiskFactor::positive(
                            RiskCategory::Financial,
                            labels::STRONG_ASSETS,
                            0.15,
                            10,
                            description.as_str(),
                        )
                    },
                )
                .rung(
                    |assets| *assets < 0.5,
                    |_| {
                        RiskFactor::negative(
                            RiskCategory::Financial,
                            labels::LIMITED_ASSETS,
                            0.15,
                            45,
                            description.as_str(),
                        )
                    },
                )
                .first_match(),
        );
    }

    let relationships = &profile.banking_relationships;
    if !relationships.is_empty() {
        let total_years: f64 = relationships
            .iter()
            .map(|relationship| relationship.years_with_bank)
            .sum();
        let average_years = total_years / relationships.len() as f64;
        let description = format!("Average banking relationship of {average_years:.1} years");

        factors.extend(
            Ladder::over(average_years)
                .rung(
                    |years| *years >= 5.0,
                    |_| {
                        RiskFactor::positive(
                            RiskCategory::Financial,
                            labels::ESTABLISHED_BANKING,
                            0.15,
                            10,
                            description.as_str(),
                        )
                    },
                )
                .rung(
                    |years| *years < 1.0,
                    |_| {
                        RiskFactor::negative(
                            RiskCategory::Financial,
                            labels::NEW_BANKING,
                            0.15,
                            50,
                            description.as_str(),
                        )
                    },
                )
                .first_match(),
        );
    }

    let description = format!("Annual income of ${:.0}", profile.annual_income);
    factors.extend(
        Ladder::over(profile.annual_income)
            .rung(
                |income| *income < 25_000.0,
                |_| {
                    RiskFactor::negative(
                        RiskCategory::Financial,
                        labels::LOW_INCOME,
                        0.1,
                        40,
                        description.as_str(),
                    )
                },
            )
            .rung(
                |income| *income > 150_000.0,
                |_| {
                    RiskFactor::positive(
                        RiskCategory::Financial,
                        labels::HIGH_INCOME,
                        0.1,
                        5,
                        description.as_str(),
                    )
                },
            )
            .first_match(),
    );

    factors
}
