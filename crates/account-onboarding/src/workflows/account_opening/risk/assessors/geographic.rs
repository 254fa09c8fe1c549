use super::super::super::domain::Address;
use super::super::config::RiskRuleSet;
use super::super::factor::{RiskCategory, RiskFactor};
use super::super::labels;

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

pub(crate) fn assess_geography(address: &Address, rules: &RiskRuleSet) -> Vec<RiskFactor> {
    let (Some(state), Some(country)) = (present(&address.state), present(&address.country))
    else {
        return vec![RiskFactor::negative(
            RiskCategory::Geographic,
            labels::INCOMPLETE_ADDRESS,
            0.2,
            50,
            "Address is missing state or country",
        )];
    };

    let mut factors = Vec::with_capacity(2);

    factors.push(if rules.is_high_risk_state(state) {
        RiskFactor::negative(
            RiskCategory::Geographic,
            labels::HIGH_RISK_STATE,
            0.15,
            40,
            format!("State {state} is designated higher risk"),
        )
    } else {
        RiskFactor::positive(
            RiskCategory::Geographic,
            labels::STANDARD_STATE,
            0.15,
            15,
            format!("State {state} carries standard risk"),
        )
    });

    if !rules.is_domestic_country(country) {
        factors.push(if rules.is_high_risk_country(country) {
            RiskFactor::negative(
                RiskCategory::Geographic,
                labels::HIGH_RISK_COUNTRY,
                0.4,
                85,
                format!("Address located in high-risk jurisdiction {country}"),
            )
        } else {
            RiskFactor::negative(
                RiskCategory::Geographic,
                labels::INTERNATIONAL_ADDRESS,
                0.2,
                35,
                format!("Address located outside the United States ({country})"),
            )
        });
    }

    factors
}
