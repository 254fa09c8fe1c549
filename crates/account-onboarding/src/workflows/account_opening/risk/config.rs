use serde::{Deserialize, Serialize};

use super::labels;

/// Keyword that, when found in a high-scoring factor label, appends a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTrigger {
    pub keyword: String,
    pub recommendation: String,
}

impl RecommendationTrigger {
    pub fn new(keyword: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// Keyword sets and decision dials injected into the engine at construction.
///
/// Missing fields in a serialized rule set fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskRuleSet {
    pub high_risk_industries: Vec<String>,
    pub disposable_email_markers: Vec<String>,
    pub personal_email_domains: Vec<String>,
    pub sequential_digit_runs: Vec<String>,
    pub high_risk_states: Vec<String>,
    pub domestic_countries: Vec<String>,
    pub high_risk_countries: Vec<String>,
    pub manual_review_keywords: Vec<String>,
    pub recommendation_triggers: Vec<RecommendationTrigger>,
    /// Factors scoring strictly above this value are scanned for recommendation triggers.
    pub recommendation_score_floor: u8,
    /// Any factor at or above this score forces manual review.
    pub critical_factor_score: u8,
    /// Factors strictly above this score count toward the elevated-factor heuristic.
    pub elevated_factor_score: u8,
    pub elevated_factor_limit: usize,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Default for RiskRuleSet {
    fn default() -> Self {
        Self {
            high_risk_industries: strings(&[
                "cannabis",
                "cryptocurrency",
                "gambling",
                "adult entertainment",
                "pawn shops",
                "check cashing",
                "money services",
                "firearms",
            ]),
            disposable_email_markers: strings(&[
                "tempmail",
                "10minutemail",
                "guerrillamail",
                "mailinator",
            ]),
            personal_email_domains: strings(&[
                "gmail.com",
                "yahoo.com",
                "hotmail.com",
                "outlook.com",
            ]),
            sequential_digit_runs: strings(&["1234", "2345", "3456", "4567", "5678", "6789"]),
            high_risk_states: strings(&["FL", "NV", "DE", "MT", "WY"]),
            domestic_countries: strings(&["US", "USA"]),
            high_risk_countries: strings(&["RU", "CN", "KP", "IR", "CU", "SY"]),
            manual_review_keywords: strings(&[
                labels::OFAC_KEYWORD,
                labels::SANCTIONS_KEYWORD,
                labels::HIGH_RISK_COUNTRY,
            ]),
            recommendation_triggers: vec![
                RecommendationTrigger::new(
                    labels::OFAC_KEYWORD,
                    "Escalate to compliance for OFAC sanctions review before account opening",
                ),
                RecommendationTrigger::new(
                    labels::SANCTIONS_KEYWORD,
                    "Escalate to compliance for OFAC sanctions review before account opening",
                ),
                RecommendationTrigger::new(
                    labels::IDENTITY_FAILED,
                    "Obtain additional government-issued identification and re-run identity verification",
                ),
                RecommendationTrigger::new(
                    labels::CASH_INTENSIVE,
                    "Implement enhanced cash transaction monitoring and currency transaction reporting",
                ),
                RecommendationTrigger::new(
                    labels::HIGH_RISK_INDUSTRY,
                    "Apply industry-specific enhanced due diligence and licensing verification",
                ),
                RecommendationTrigger::new(
                    labels::DOCUMENT_KEYWORD,
                    "Request re-submission of required verification documents",
                ),
                RecommendationTrigger::new(
                    labels::HIGH_RISK_COUNTRY,
                    "Perform country-specific due diligence for the high-risk jurisdiction",
                ),
                RecommendationTrigger::new(
                    labels::DEBT_TO_INCOME_KEYWORD,
                    "Review debt obligations and consider reduced credit exposure",
                ),
            ],
            recommendation_score_floor: 70,
            critical_factor_score: 90,
            elevated_factor_score: 60,
            elevated_factor_limit: 3,
        }
    }
}

impl RiskRuleSet {
    pub fn is_high_risk_industry(&self, industry: &str) -> bool {
        let industry = industry.to_lowercase();
        keywords(&self.high_risk_industries).any(|keyword| industry.contains(&keyword))
    }

    pub fn is_disposable_email_domain(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        keywords(&self.disposable_email_markers).any(|marker| domain.contains(&marker))
    }

    pub fn is_personal_email_domain(&self, domain: &str) -> bool {
        contains_code(&self.personal_email_domains, domain)
    }

    pub fn has_sequential_digit_run(&self, digits: &str) -> bool {
        keywords(&self.sequential_digit_runs).any(|run| digits.contains(&run))
    }

    pub fn is_high_risk_state(&self, state: &str) -> bool {
        contains_code(&self.high_risk_states, state)
    }

    pub fn is_domestic_country(&self, country: &str) -> bool {
        contains_code(&self.domestic_countries, country)
    }

    pub fn is_high_risk_country(&self, country: &str) -> bool {
        contains_code(&self.high_risk_countries, country)
    }

    /// Name of the first keyword list holding an empty or whitespace-only entry.
    ///
    /// A blank entry would match every input, so rule files carrying one are rejected at load.
    pub fn first_blank_entry(&self) -> Option<&'static str> {
        let lists: [(&'static str, &[String]); 8] = [
            ("high_risk_industries", &self.high_risk_industries),
            ("disposable_email_markers", &self.disposable_email_markers),
            ("personal_email_domains", &self.personal_email_domains),
            ("sequential_digit_runs", &self.sequential_digit_runs),
            ("high_risk_states", &self.high_risk_states),
            ("domestic_countries", &self.domestic_countries),
            ("high_risk_countries", &self.high_risk_countries),
            ("manual_review_keywords", &self.manual_review_keywords),
        ];

        lists
            .into_iter()
            .find(|(_, entries)| entries.iter().any(|entry| entry.trim().is_empty()))
            .map(|(name, _)| name)
            .or_else(|| {
                self.recommendation_triggers
                    .iter()
                    .any(|trigger| trigger.keyword.trim().is_empty())
                    .then_some("recommendation_triggers")
            })
    }
}

/// Trimmed, lowercased keywords with blank entries skipped.
fn keywords(entries: &[String]) -> impl Iterator<Item = String> + '_ {
    entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_lowercase)
}

fn contains_code(codes: &[String], value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && codes.iter().any(|code| code.trim().eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_matching_is_case_insensitive_substring() {
        let rules = RiskRuleSet::default();
        assert!(rules.is_high_risk_industry("Money Services Business"));
        assert!(rules.is_high_risk_industry("online GAMBLING"));
        assert!(!rules.is_high_risk_industry("Software consulting"));
    }

    #[test]
    fn partial_rule_sets_fall_back_to_defaults() {
        let rules: RiskRuleSet =
            serde_json::from_str(r#"{ "high_risk_states": ["CA"] }"#).expect("rules parse");

        assert!(rules.is_high_risk_state("ca"));
        assert!(!rules.is_high_risk_state("FL"));
        assert_eq!(rules.recommendation_score_floor, 70);
        assert!(rules.is_high_risk_country("KP"));
    }

    #[test]
    fn country_codes_are_trimmed_and_case_insensitive() {
        let rules = RiskRuleSet::default();
        assert!(rules.is_domestic_country(" usa "));
        assert!(rules.is_high_risk_country("ir"));
        assert!(!rules.is_domestic_country("CA"));
    }

    #[test]
    fn blank_keywords_never_match() {
        let rules: RiskRuleSet = serde_json::from_str(
            r#"{
                "high_risk_industries": ["cannabis", ""],
                "disposable_email_markers": ["  "],
                "sequential_digit_runs": [""],
                "domestic_countries": ["US", " "]
            }"#,
        )
        .expect("rules parse");

        assert!(!rules.is_high_risk_industry("Software consulting"));
        assert!(rules.is_high_risk_industry("Cannabis dispensary"));
        assert!(!rules.is_disposable_email_domain("gmail.com"));
        assert!(!rules.has_sequential_digit_run("4158670192"));
        assert!(!rules.is_domestic_country(""));
        assert!(rules.is_domestic_country("us"));
    }

    #[test]
    fn first_blank_entry_names_the_offending_list() {
        assert_eq!(RiskRuleSet::default().first_blank_entry(), None);

        let rules: RiskRuleSet =
            serde_json::from_str(r#"{ "manual_review_keywords": ["OFAC", ""] }"#)
                .expect("rules parse");
        assert_eq!(rules.first_blank_entry(), Some("manual_review_keywords"));

        let mut rules = RiskRuleSet::default();
        rules
            .recommendation_triggers
            .push(RecommendationTrigger::new(" ", "Always recommend"));
        assert_eq!(rules.first_blank_entry(), Some("recommendation_triggers"));
    }
}
