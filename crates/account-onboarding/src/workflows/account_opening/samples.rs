//! Canned application snapshots for demos and fixtures.

use chrono::NaiveDate;

use super::domain::{
    AccountType, AdditionalSigner, Address, BankingRelationship, BusinessProfile,
    ComponentCheck, DocumentStatus, DocumentType, EmploymentStatus, FinancialProfile,
    KycResults, KycStatus, KycVerification, OfacScreening, PersonalInfo, RiskAssessmentInput,
    SanctionsMatch, SignerIdentity, SignerRole, UploadedDocument,
};

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("sample date out of range"),
    }
}

const JANE_DATE_OF_BIRTH: NaiveDate = date(1985, 3, 12);
const VICTOR_DATE_OF_BIRTH: NaiveDate = date(1980, 1, 20);
const QUICKCASH_ESTABLISHED: NaiveDate = date(2025, 1, 15);

pub fn address(city: &str, state: &str, zip_code: &str) -> Address {
    Address {
        street: "100 Market St".to_string(),
        city: city.to_string(),
        state: Some(state.to_string()),
        zip_code: zip_code.to_string(),
        country: Some("US".to_string()),
    }
}

fn check(passed: bool, confidence: f64) -> Option<ComponentCheck> {
    Some(ComponentCheck {
        passed,
        confidence,
        details: None,
    })
}

pub fn verified_document(document_type: DocumentType) -> UploadedDocument {
    UploadedDocument {
        document_type,
        verification_status: DocumentStatus::Verified,
        verification_details: None,
    }
}

pub fn document(document_type: DocumentType, status: DocumentStatus) -> UploadedDocument {
    UploadedDocument {
        document_type,
        verification_status: status,
        verification_details: None,
    }
}

pub fn signer(
    first_name: &str,
    role: SignerRole,
    kyc_status: KycStatus,
    ownership: Option<f64>,
) -> AdditionalSigner {
    AdditionalSigner {
        personal_info: SignerIdentity {
            first_name: first_name.to_string(),
            last_name: "Partner".to_string(),
            email: format!("{}@partners.example.com", first_name.to_lowercase()),
            date_of_birth: None,
        },
        role,
        kyc_status,
        beneficial_ownership_percentage: ownership,
    }
}

pub fn clean_kyc(confidence: f64) -> KycVerification {
    KycVerification {
        status: KycStatus::Passed,
        confidence,
        results: KycResults {
            identity: check(true, confidence),
            address: check(true, confidence),
            phone: check(true, 0.9),
            email: check(true, 0.9),
            ofac: OfacScreening {
                passed: true,
                matches: Vec::new(),
            },
        },
    }
}

/// Salaried consumer in California with clean KYC and verified documents.
pub fn low_risk_consumer() -> RiskAssessmentInput {
    RiskAssessmentInput {
        account_type: AccountType::Consumer,
        personal_info: Some(PersonalInfo {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: JANE_DATE_OF_BIRTH,
            ssn: "123-45-6789".to_string(),
            phone: "415-867-0192".to_string(),
            email: "jane.doe@gmail.com".to_string(),
            mailing_address: address("San Francisco", "CA", "94105"),
            physical_address: None,
            employment_status: EmploymentStatus::Employed,
        }),
        business_profile: None,
        financial_profile: Some(FinancialProfile {
            annual_income: 95_000.0,
            income_source: vec!["employment".to_string()],
            assets: 250_000.0,
            liabilities: 35_000.0,
            banking_relationships: vec![BankingRelationship {
                bank_name: "Bay Area Credit Union".to_string(),
                account_types: vec!["checking".to_string(), "savings".to_string()],
                years_with_bank: 7.0,
            }],
            account_activities: Vec::new(),
        }),
        kyc_verification: Some(clean_kyc(0.95)),
        documents: vec![
            verified_document(DocumentType::DriversLicense),
            verified_document(DocumentType::BankStatement),
        ],
        additional_signers: Vec::new(),
    }
}

/// Newly formed cash-intensive money services business in Florida with an OFAC hit.
pub fn high_risk_commercial() -> RiskAssessmentInput {
    let miami = address("Miami", "FL", "33131");

    RiskAssessmentInput {
        account_type: AccountType::Commercial,
        personal_info: Some(PersonalInfo {
            first_name: "Victor".to_string(),
            last_name: "Hale".to_string(),
            date_of_birth: VICTOR_DATE_OF_BIRTH,
            ssn: "987-65-4321".to_string(),
            phone: "305-555-1234".to_string(),
            email: "victor@quickcashfx.com".to_string(),
            mailing_address: miami.clone(),
            physical_address: None,
            employment_status: EmploymentStatus::SelfEmployed,
        }),
        business_profile: Some(BusinessProfile {
            business_name: "QuickCash FX LLC".to_string(),
            ein: "59-1234567".to_string(),
            entity_type: "llc".to_string(),
            industry_type: "Money Services".to_string(),
            date_established: QUICKCASH_ESTABLISHED,
            business_address: miami,
            is_cash_intensive: true,
            monthly_transaction_volume: 250_000.0,
            monthly_transaction_count: 4_200,
            expected_balance: 50_000.0,
        }),
        financial_profile: Some(FinancialProfile {
            annual_income: 40_000.0,
            income_source: vec!["business".to_string()],
            assets: 30_000.0,
            liabilities: 32_000.0,
            banking_relationships: vec![BankingRelationship {
                bank_name: "Coastal Savings".to_string(),
                account_types: vec!["business checking".to_string()],
                years_with_bank: 3.0,
            }],
            account_activities: Vec::new(),
        }),
        kyc_verification: Some(KycVerification {
            status: KycStatus::Failed,
            confidence: 0.42,
            results: KycResults {
                identity: check(false, 0.42),
                address: check(true, 0.8),
                phone: check(true, 0.7),
                email: check(true, 0.7),
                ofac: OfacScreening {
                    passed: false,
                    matches: vec![SanctionsMatch {
                        name: "Victor Hale".to_string(),
                        list: "SDN".to_string(),
                        match_score: 0.93,
                    }],
                },
            },
        }),
        documents: vec![
            document(DocumentType::ArticlesOfIncorporation, DocumentStatus::Failed),
            document(DocumentType::DriversLicense, DocumentStatus::Rejected),
        ],
        additional_signers: Vec::new(),
    }
}
