use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted account-opening applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Product family requested by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Consumer,
    Commercial,
    Business,
}

impl AccountType {
    pub const fn label(self) -> &'static str {
        match self {
            AccountType::Consumer => "consumer",
            AccountType::Commercial => "commercial",
            AccountType::Business => "business",
        }
    }
}

/// Postal address as captured during intake. State and country may be absent on partial submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    pub zip_code: String,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Retired,
    Student,
}

/// Primary applicant identity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub ssn: String,
    pub phone: String,
    pub email: String,
    pub mailing_address: Address,
    #[serde(default)]
    pub physical_address: Option<Address>,
    pub employment_status: EmploymentStatus,
}

/// Business disclosures collected for commercial and business accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_name: String,
    pub ein: String,
    pub entity_type: String,
    pub industry_type: String,
    pub date_established: NaiveDate,
    pub business_address: Address,
    pub is_cash_intensive: bool,
    pub monthly_transaction_volume: f64,
    pub monthly_transaction_count: u32,
    pub expected_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankingRelationship {
    pub bank_name: String,
    #[serde(default)]
    pub account_types: Vec<String>,
    pub years_with_bank: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountActivity {
    pub activity_type: String,
    pub frequency: String,
    pub amount: f64,
}

/// Financial disclosure used for capacity and stability checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub annual_income: f64,
    #[serde(default)]
    pub income_source: Vec<String>,
    pub assets: f64,
    pub liabilities: f64,
    #[serde(default)]
    pub banking_relationships: Vec<BankingRelationship>,
    #[serde(default)]
    pub account_activities: Vec<AccountActivity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Pending,
    InProgress,
    Passed,
    Failed,
    NeedsReview,
}

impl KycStatus {
    pub const fn label(self) -> &'static str {
        match self {
            KycStatus::Pending => "pending",
            KycStatus::InProgress => "in_progress",
            KycStatus::Passed => "passed",
            KycStatus::Failed => "failed",
            KycStatus::NeedsReview => "needs_review",
        }
    }
}

/// Outcome of one verification component reported by the KYC provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentCheck {
    pub passed: bool,
    pub confidence: f64,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanctionsMatch {
    pub name: String,
    pub list: String,
    pub match_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfacScreening {
    pub passed: bool,
    #[serde(default)]
    pub matches: Vec<SanctionsMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycResults {
    #[serde(default)]
    pub identity: Option<ComponentCheck>,
    #[serde(default)]
    pub address: Option<ComponentCheck>,
    #[serde(default)]
    pub phone: Option<ComponentCheck>,
    #[serde(default)]
    pub email: Option<ComponentCheck>,
    pub ofac: OfacScreening,
}

/// Latest KYC verification returned for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycVerification {
    pub status: KycStatus,
    pub confidence: f64,
    pub results: KycResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    DriversLicense,
    Passport,
    StateId,
    UtilityBill,
    BankStatement,
    TaxReturn,
    ArticlesOfIncorporation,
    BusinessLicense,
    EinLetter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Verified,
    Failed,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationDetails {
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub issues: Vec<String>,
}

/// Uploaded document metadata together with its verification outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub document_type: DocumentType,
    pub verification_status: DocumentStatus,
    #[serde(default)]
    pub verification_details: Option<VerificationDetails>,
}

impl UploadedDocument {
    pub fn has_issues(&self) -> bool {
        self.verification_details
            .as_ref()
            .map(|details| !details.issues.is_empty())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignerRole {
    AuthorizedSigner,
    BeneficialOwner,
    ControlPerson,
    JointOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerIdentity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

/// Additional signer or owner attached to the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalSigner {
    pub personal_info: SignerIdentity,
    pub role: SignerRole,
    pub kyc_status: KycStatus,
    #[serde(default)]
    pub beneficial_ownership_percentage: Option<f64>,
}

/// Read-only snapshot assembled from the profile, KYC, document, and signer stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentInput {
    pub account_type: AccountType,
    #[serde(default)]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default)]
    pub business_profile: Option<BusinessProfile>,
    #[serde(default)]
    pub financial_profile: Option<FinancialProfile>,
    #[serde(default)]
    pub kyc_verification: Option<KycVerification>,
    #[serde(default)]
    pub documents: Vec<UploadedDocument>,
    #[serde(default)]
    pub additional_signers: Vec<AdditionalSigner>,
}

impl RiskAssessmentInput {
    /// Address used for geographic screening: mailing for consumers, business address otherwise.
    pub fn screening_address(&self) -> Option<&Address> {
        let mailing = self
            .personal_info
            .as_ref()
            .map(|info| &info.mailing_address);

        match self.account_type {
            AccountType::Consumer => mailing,
            AccountType::Commercial | AccountType::Business => self
                .business_profile
                .as_ref()
                .map(|profile| &profile.business_address)
                .or(mailing),
        }
    }
}

/// High level status tracked for an application once risk assessment is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    RiskAssessed,
    ManualReview,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::RiskAssessed => "risk_assessed",
            ApplicationStatus::ManualReview => "manual_review",
        }
    }
}
