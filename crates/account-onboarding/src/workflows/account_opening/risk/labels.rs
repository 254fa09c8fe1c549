//! Factor labels emitted by the assessors.
//!
//! Recommendation triggers and manual-review keywords match against these strings, so the
//! defaults in [`super::RiskRuleSet`] are built from the same constants.

// identity
pub const KYC_PASSED: &str = "KYC verification passed";
pub const KYC_PASSED_MODERATE: &str = "KYC verification passed with moderate confidence";
pub const KYC_NEEDS_REVIEW: &str = "KYC verification requires review";
pub const IDENTITY_FAILED: &str = "Identity verification failed";
pub const OFAC_MATCH: &str = "OFAC screening match";
pub const OFAC_CLEAN: &str = "Clean OFAC screening";
pub const YOUNG_APPLICANT: &str = "Young applicant";
pub const SENIOR_APPLICANT: &str = "Senior applicant";
pub const STANDARD_AGE: &str = "Standard age range";

// financial
pub const HIGH_DEBT_TO_INCOME: &str = "High debt-to-income ratio";
pub const MODERATE_DEBT_TO_INCOME: &str = "Moderate debt-to-income ratio";
pub const LOW_DEBT_TO_INCOME: &str = "Low debt-to-income ratio";
pub const SINGLE_EMPLOYMENT_INCOME: &str = "Single employment income source";
pub const DIVERSIFIED_INCOME: &str = "Diversified income sources";
pub const STRONG_ASSETS: &str = "Strong asset position";
pub const LIMITED_ASSETS: &str = "Limited assets";
pub const ESTABLISHED_BANKING: &str = "Established banking relationships";
pub const NEW_BANKING: &str = "New banking relationships";
pub const LOW_INCOME: &str = "Low income";
pub const HIGH_INCOME: &str = "High income";

// business
pub const CASH_INTENSIVE: &str = "Cash-intensive business";
pub const NON_CASH_INTENSIVE: &str = "Non-cash-intensive business";
pub const NEW_BUSINESS: &str = "New business";
pub const ESTABLISHED_BUSINESS: &str = "Established business";
pub const DEVELOPING_BUSINESS: &str = "Developing business";
pub const HIGH_RISK_INDUSTRY: &str = "High-risk industry";
pub const STANDARD_INDUSTRY: &str = "Standard industry";
pub const HIGH_TRANSACTION_VOLUME: &str = "High transaction volume";
pub const LOW_TRANSACTION_VOLUME: &str = "Low transaction volume";
pub const LOW_BALANCE_RATIO: &str = "Low balance-to-volume ratio";
pub const HEALTHY_BALANCE_RATIO: &str = "Healthy balance-to-volume ratio";

// documentation
pub const NO_DOCUMENTS: &str = "No documents uploaded";
pub const DOCUMENTS_VERIFIED: &str = "Documents fully verified";
pub const DOCUMENTS_MOSTLY_VERIFIED: &str = "Documents mostly verified";
pub const DOCUMENTS_FAILED: &str = "Failed document verification";
pub const DOCUMENTS_PENDING: &str = "Pending document verification";
pub const DOCUMENT_ISSUES: &str = "Document verification issues";

// geographic
pub const INCOMPLETE_ADDRESS: &str = "Incomplete address information";
pub const HIGH_RISK_STATE: &str = "High-risk state";
pub const STANDARD_STATE: &str = "Standard-risk state";
pub const HIGH_RISK_COUNTRY: &str = "High-risk country";
pub const INTERNATIONAL_ADDRESS: &str = "International address";

// behavioral
pub const DISPOSABLE_EMAIL: &str = "Disposable email provider";
pub const PERSONAL_EMAIL: &str = "Personal email provider";
pub const CUSTOM_EMAIL_DOMAIN: &str = "Custom email domain";
pub const SUSPICIOUS_PHONE: &str = "Suspicious phone number pattern";
pub const ADDRESS_MISMATCH: &str = "Mailing and physical address differ";

// signers
pub const MANY_SIGNERS: &str = "Large number of signers";
pub const SIGNER_KYC_FAILED: &str = "Signer KYC failures";
pub const SIGNER_KYC_PENDING: &str = "Signer KYC pending";
pub const OWNERSHIP_EXCEEDS_TOTAL: &str = "Beneficial ownership exceeds 100%";
pub const OWNERSHIP_UNDER_DISCLOSED: &str = "Low beneficial ownership disclosure";

/// Keyword shared by both OFAC factor labels.
pub const OFAC_KEYWORD: &str = "OFAC";
pub const SANCTIONS_KEYWORD: &str = "sanctions";
pub const DOCUMENT_KEYWORD: &str = "document";
pub const DEBT_TO_INCOME_KEYWORD: &str = "debt-to-income";
