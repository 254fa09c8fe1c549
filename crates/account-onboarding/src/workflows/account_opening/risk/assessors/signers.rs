use super::super::super::domain::{AdditionalSigner, KycStatus, SignerRole};
use super::super::factor::{RiskCategory, RiskFactor};
use super::super::labels;

const MAX_SIGNERS: usize = 5;
const MIN_DISCLOSED_OWNERSHIP: f64 = 25.0;

pub(crate) fn assess_signers(signers: &[AdditionalSigner]) -> Vec<RiskFactor> {
    if signers.is_empty() {
        return Vec::new();
    }

    let mut factors = Vec::new();

    if signers.len() > MAX_SIGNERS {
        factors.push(RiskFactor::negative(
            RiskCategory::Signers,
            labels::MANY_SIGNERS,
            0.15,
            50,
            format!("{} additional signers on the account", signers.len()),
        ));
    }

    let with_status = |status: KycStatus| {
        signers
            .iter()
            .filter(|signer| signer.kyc_status == status)
            .count()
    };

    let failed = with_status(KycStatus::Failed);
    if failed > 0 {
        factors.push(RiskFactor::negative(
            RiskCategory::Signers,
            labels::SIGNER_KYC_FAILED,
            0.3,
            75,
            format!("{failed} signer(s) failed KYC verification"),
        ));
    }

    let pending = with_status(KycStatus::Pending);
    if pending > 0 {
        factors.push(RiskFactor::neutral(
            RiskCategory::Signers,
            labels::SIGNER_KYC_PENDING,
            0.1,
            35,
            format!("{pending} signer(s) awaiting KYC verification"),
        ));
    }

    let owners: Vec<&AdditionalSigner> = signers
        .iter()
        .filter(|signer| signer.role == SignerRole::BeneficialOwner)
        .collect();
    let total_ownership: f64 = owners
        .iter()
        .map(|owner| owner.beneficial_ownership_percentage.unwrap_or(0.0))
        .sum();

    if total_ownership > 100.0 {
        factors.push(RiskFactor::negative(
            RiskCategory::Signers,
            labels::OWNERSHIP_EXCEEDS_TOTAL,
            0.2,
            60,
            format!("Declared beneficial ownership totals {total_ownership:.1}%, which exceeds 100%"),
        ));
    } else if !owners.is_empty() && total_ownership < MIN_DISCLOSED_OWNERSHIP {
        factors.push(RiskFactor::negative(
            RiskCategory::Signers,
            labels::OWNERSHIP_UNDER_DISCLOSED,
            0.2,
            45,
            format!("Declared beneficial ownership totals only {total_ownership:.1}%"),
        ));
    }

    factors
}
