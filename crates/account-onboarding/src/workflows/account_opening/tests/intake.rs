use super::common::*;

use crate::workflows::account_opening::domain::{AccountType, KycStatus, SignerRole};
use crate::workflows::account_opening::intake::{IntakeGuard, IntakeViolation};
use crate::workflows::account_opening::samples;

#[test]
fn sample_applications_pass_intake() {
    let guard = IntakeGuard::new();
    guard.validate(&low_risk_input()).expect("consumer sample valid");
    guard.validate(&high_risk_input()).expect("commercial sample valid");
}

#[test]
fn business_accounts_require_a_business_profile() {
    let mut input = low_risk_input();
    input.account_type = AccountType::Business;

    match IntakeGuard::new().validate(&input) {
        Err(IntakeViolation::MissingBusinessProfile { account_type }) => {
            assert_eq!(account_type, "business")
        }
        other => panic!("expected missing business profile, got {other:?}"),
    }
}

#[test]
fn negative_amounts_are_rejected() {
    let mut input = low_risk_input();
    if let Some(financial) = input.financial_profile.as_mut() {
        financial.liabilities = -10.0;
    }

    match IntakeGuard::new().validate(&input) {
        Err(IntakeViolation::InvalidAmount { field, found }) => {
            assert_eq!(field, "financial_profile.liabilities");
            assert_eq!(found, -10.0);
        }
        other => panic!("expected invalid amount, got {other:?}"),
    }
}

#[test]
fn non_finite_business_amounts_are_rejected() {
    let mut input = high_risk_input();
    if let Some(business) = input.business_profile.as_mut() {
        business.expected_balance = f64::NAN;
    }

    assert!(matches!(
        IntakeGuard::new().validate(&input),
        Err(IntakeViolation::InvalidAmount {
            field: "business_profile.expected_balance",
            ..
        })
    ));
}

#[test]
fn kyc_confidence_must_be_a_probability() {
    let mut input = low_risk_input();
    input.kyc_verification = Some(samples::clean_kyc(1.2));

    assert!(matches!(
        IntakeGuard::new().validate(&input),
        Err(IntakeViolation::InvalidKycConfidence(found)) if found == 1.2
    ));
}

#[test]
fn ownership_outside_percentage_range_is_rejected() {
    let mut input = high_risk_input();
    input.additional_signers = vec![samples::signer(
        "Cleo",
        SignerRole::BeneficialOwner,
        KycStatus::Passed,
        Some(140.0),
    )];

    match IntakeGuard::new().validate(&input) {
        Err(IntakeViolation::InvalidOwnership { signer, found }) => {
            assert_eq!(signer, "Cleo Partner");
            assert_eq!(found, 140.0);
        }
        other => panic!("expected invalid ownership, got {other:?}"),
    }
}

#[test]
fn beneficial_owners_must_declare_ownership() {
    let mut input = high_risk_input();
    input.additional_signers = vec![
        samples::signer("Dev", SignerRole::AuthorizedSigner, KycStatus::Passed, None),
        samples::signer("Eli", SignerRole::BeneficialOwner, KycStatus::Pending, None),
    ];

    match IntakeGuard::new().validate(&input) {
        Err(IntakeViolation::MissingOwnership(name)) => assert_eq!(name, "Eli Partner"),
        other => panic!("expected missing ownership, got {other:?}"),
    }
}
