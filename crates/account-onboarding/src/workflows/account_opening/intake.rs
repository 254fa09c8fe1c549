use super::domain::{AccountType, RiskAssessmentInput, SignerRole};

/// Validation errors raised before an application snapshot is stored.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("{account_type} accounts require a business profile")]
    MissingBusinessProfile { account_type: &'static str },
    #[error("{field} must be a finite, non-negative amount (found {found})")]
    InvalidAmount { field: &'static str, found: f64 },
    #[error("KYC confidence must be between 0 and 1 (found {0})")]
    InvalidKycConfidence(f64),
    #[error("beneficial ownership for {signer} must be between 0 and 100 percent (found {found})")]
    InvalidOwnership { signer: String, found: f64 },
    #[error("beneficial owner {0} must declare an ownership percentage")]
    MissingOwnership(String),
}

/// Guard rejecting snapshots that violate the engine's input contract.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, input: &RiskAssessmentInput) -> Result<(), IntakeViolation> {
        if input.account_type != AccountType::Consumer && input.business_profile.is_none() {
            return Err(IntakeViolation::MissingBusinessProfile {
                account_type: input.account_type.label(),
            });
        }

        if let Some(financial) = &input.financial_profile {
            check_amount("financial_profile.annual_income", financial.annual_income)?;
            check_amount("financial_profile.assets", financial.assets)?;
            check_amount("financial_profile.liabilities", financial.liabilities)?;
            for relationship in &financial.banking_relationships {
                check_amount(
                    "financial_profile.banking_relationships.years_with_bank",
                    relationship.years_with_bank,
                )?;
            }
        }

        if let Some(business) = &input.business_profile {
            check_amount(
                "business_profile.monthly_transaction_volume",
                business.monthly_transaction_volume,
            )?;
            check_amount(
                "business_profile.expected_balance",
                business.expected_balance,
            )?;
        }

        if let Some(kyc) = &input.kyc_verification {
            if !(0.0..=1.0).contains(&kyc.confidence) {
                return Err(IntakeViolation::InvalidKycConfidence(kyc.confidence));
            }
        }

        for signer in &input.additional_signers {
            let name = format!(
                "{} {}",
                signer.personal_info.first_name, signer.personal_info.last_name
            );
            match signer.beneficial_ownership_percentage {
                Some(found) if !(0.0..=100.0).contains(&found) => {
                    return Err(IntakeViolation::InvalidOwnership {
                        signer: name,
                        found,
                    });
                }
                None if signer.role == SignerRole::BeneficialOwner => {
                    return Err(IntakeViolation::MissingOwnership(name));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), IntakeViolation> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(IntakeViolation::InvalidAmount {
            field,
            found: value,
        })
    }
}
