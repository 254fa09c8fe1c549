use super::super::super::domain::{DocumentStatus, UploadedDocument};
use super::super::factor::{RiskCategory, RiskFactor};
use super::super::labels;

pub(crate) fn assess_documents(documents: &[UploadedDocument]) -> Vec<RiskFactor> {
    if documents.is_empty() {
        return vec![RiskFactor::negative(
            RiskCategory::Documentation,
            labels::NO_DOCUMENTS,
            0.3,
            80,
            "No supporting documents have been uploaded",
        )];
    }

    let total = documents.len();
    let count = |status: DocumentStatus| {
        documents
            .iter()
            .filter(|document| document.verification_status == status)
            .count()
    };
    let verified = count(DocumentStatus::Verified);
    let failed = count(DocumentStatus::Failed) + count(DocumentStatus::Rejected);
    let pending = count(DocumentStatus::Pending);
    let verification_rate = verified as f64 / total as f64;

    let mut factors = Vec::with_capacity(3);

    if verification_rate >= 0.9 {
        factors.push(RiskFactor::positive(
            RiskCategory::Documentation,
            labels::DOCUMENTS_VERIFIED,
            0.25,
            5,
            format!("{verified} of {total} documents verified"),
        ));
    } else if verification_rate >= 0.7 {
        factors.push(RiskFactor::positive(
            RiskCategory::Documentation,
            labels::DOCUMENTS_MOSTLY_VERIFIED,
            0.25,
            20,
            format!("{verified} of {total} documents verified"),
        ));
    } else if failed > 0 {
        factors.push(RiskFactor::negative(
            RiskCategory::Documentation,
            labels::DOCUMENTS_FAILED,
            0.3,
            65,
            format!("{failed} of {total} documents failed or were rejected"),
        ));
    }

    if pending > 0 {
        factors.push(RiskFactor::neutral(
            RiskCategory::Documentation,
            labels::DOCUMENTS_PENDING,
            0.1,
            30,
            format!("{pending} document(s) awaiting verification"),
        ));
    }

    let with_issues = documents
        .iter()
        .filter(|document| document.has_issues())
        .count();
    if with_issues > 0 {
        factors.push(RiskFactor::negative(
            RiskCategory::Documentation,
            labels::DOCUMENT_ISSUES,
            0.2,
            45,
            format!("{with_issues} document(s) reported verification issues"),
        ));
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::account_opening::domain::{DocumentType, VerificationDetails};

    fn document(status: DocumentStatus) -> UploadedDocument {
        UploadedDocument {
            document_type: DocumentType::DriversLicense,
            verification_status: status,
            verification_details: None,
        }
    }

    #[test]
    fn empty_upload_list_emits_single_factor() {
        let factors = assess_documents(&[]);
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].score(), 80);
        assert_eq!(factors[0].category, RiskCategory::Documentation);
    }

    #[test]
    fn mostly_verified_suppresses_failure_branch() {
        let mut documents = vec![document(DocumentStatus::Verified); 3];
        documents.push(document(DocumentStatus::Rejected));

        let factors = assess_documents(&documents);
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].factor, labels::DOCUMENTS_MOSTLY_VERIFIED);
    }

    #[test]
    fn pending_and_issues_stack_on_failure() {
        let mut flagged = document(DocumentStatus::Failed);
        flagged.verification_details = Some(VerificationDetails {
            confidence: Some(0.4),
            issues: vec!["Glare obscures expiration date".to_string()],
        });
        let documents = vec![flagged, document(DocumentStatus::Pending)];

        let factors = assess_documents(&documents);
        let names: Vec<_> = factors.iter().map(|factor| factor.factor.as_str()).collect();
        assert_eq!(
            names,
            vec![
                labels::DOCUMENTS_FAILED,
                labels::DOCUMENTS_PENDING,
                labels::DOCUMENT_ISSUES
            ]
        );
        assert!(factors[2].description.starts_with('1'));
    }

    #[test]
    fn only_pending_documents_emit_pending_factor_alone() {
        let factors = assess_documents(&[document(DocumentStatus::Pending)]);
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].factor, labels::DOCUMENTS_PENDING);
    }
}
