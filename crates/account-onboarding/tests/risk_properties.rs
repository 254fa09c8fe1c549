use std::sync::Arc;

use account_onboarding::workflows::account_opening::{
    samples, ApplicationId, DocumentStatus, DocumentType, FixedClock, IdGenerator, KycStatus,
    RiskAssessmentEngine, RiskAssessmentInput, RiskLevel, RiskRuleSet, SignerRole,
};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

struct ConstantId;

impl IdGenerator for ConstantId {
    fn next_id(&self) -> String {
        "ra-fixed".to_string()
    }
}

fn engine() -> RiskAssessmentEngine {
    let instant = Utc
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid instant");
    RiskAssessmentEngine::with_dependencies(
        RiskRuleSet::default(),
        Arc::new(FixedClock(instant)),
        Arc::new(ConstantId),
    )
}

fn kyc_status() -> impl Strategy<Value = KycStatus> {
    prop_oneof![
        Just(KycStatus::Pending),
        Just(KycStatus::InProgress),
        Just(KycStatus::Passed),
        Just(KycStatus::Failed),
        Just(KycStatus::NeedsReview),
    ]
}

fn document_status() -> impl Strategy<Value = DocumentStatus> {
    prop_oneof![
        Just(DocumentStatus::Pending),
        Just(DocumentStatus::Verified),
        Just(DocumentStatus::Failed),
        Just(DocumentStatus::Rejected),
    ]
}

prop_compose! {
    fn application()(
        commercial in any::<bool>(),
        income in 0.0f64..400_000.0,
        liabilities in 0.0f64..400_000.0,
        assets in 0.0f64..2_000_000.0,
        status in kyc_status(),
        confidence in 0.0f64..=1.0,
        ofac_hit in any::<bool>(),
        documents in prop::collection::vec(document_status(), 0..5),
        (state, country) in (
            prop_oneof![Just("CA"), Just("FL"), Just("NV"), Just("TX")],
            prop_oneof![Just("US"), Just("CA"), Just("IR")],
        ),
        email in prop_oneof![
            Just("a@gmail.com"),
            Just("a@mailinator.com"),
            Just("a@example.org"),
            Just("no-domain"),
        ],
        owners in prop::collection::vec((kyc_status(), 0.0f64..=100.0), 0..7),
    ) -> RiskAssessmentInput {
        let mut input = if commercial {
            samples::high_risk_commercial()
        } else {
            samples::low_risk_consumer()
        };

        if let Some(financial) = input.financial_profile.as_mut() {
            financial.annual_income = income;
            financial.liabilities = liabilities;
            financial.assets = assets;
        }
        if let Some(kyc) = input.kyc_verification.as_mut() {
            kyc.status = status;
            kyc.confidence = confidence;
            kyc.results.ofac.passed = !ofac_hit;
        }
        if let Some(personal) = input.personal_info.as_mut() {
            personal.email = email.to_string();
            personal.mailing_address.state = Some(state.to_string());
            personal.mailing_address.country = Some(country.to_string());
        }
        if let Some(business) = input.business_profile.as_mut() {
            business.business_address.state = Some(state.to_string());
            business.business_address.country = Some(country.to_string());
        }
        input.documents = documents
            .into_iter()
            .map(|status| samples::document(DocumentType::Other, status))
            .collect();
        input.additional_signers = owners
            .into_iter()
            .enumerate()
            .map(|(index, (status, share))| {
                samples::signer(
                    &format!("Owner{index}"),
                    SignerRole::BeneficialOwner,
                    status,
                    Some(share),
                )
            })
            .collect();
        input
    }
}

proptest! {
    #[test]
    fn score_stays_in_range_and_matches_classification(input in application()) {
        let result = engine().assess(&ApplicationId::new("app-prop"), &input);
        prop_assert!(result.risk_score <= 100);
        prop_assert_eq!(result.overall_risk, RiskLevel::from_score(result.risk_score));
        for factor in &result.factors {
            prop_assert!(factor.score() <= 100);
            prop_assert!(factor.weight() > 0.0);
        }
    }

    #[test]
    fn identical_inputs_produce_identical_results(input in application()) {
        let id = ApplicationId::new("app-prop");
        prop_assert_eq!(engine().assess(&id, &input), engine().assess(&id, &input));
    }

    #[test]
    fn high_risk_and_critical_factors_require_review(input in application()) {
        let result = engine().assess(&ApplicationId::new("app-prop"), &input);
        if result.overall_risk == RiskLevel::High {
            prop_assert!(result.requires_manual_review);
        }
        if result.factors.iter().any(|factor| factor.score() >= 90) {
            prop_assert!(result.requires_manual_review);
        }
    }

    #[test]
    fn recommendations_are_unique_and_start_with_baseline(input in application()) {
        let result = engine().assess(&ApplicationId::new("app-prop"), &input);
        let baseline = match result.overall_risk {
            RiskLevel::Low => 2,
            RiskLevel::Medium => 3,
            RiskLevel::High => 4,
        };
        prop_assert!(result.recommendations.len() >= baseline);
        for (index, item) in result.recommendations.iter().enumerate() {
            prop_assert!(!result.recommendations[index + 1..].contains(item));
        }
    }
}
