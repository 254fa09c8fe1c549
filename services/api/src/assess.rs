use account_onboarding::config::{load_rules_from, AppConfig, RiskConfig};
use account_onboarding::error::AppError;
use account_onboarding::workflows::account_opening::{
    ApplicationId, IntakeGuard, RiskAssessmentEngine, RiskAssessmentInput, RiskAssessmentResult,
    RiskAssessmentServiceError,
};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to a JSON application snapshot
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Application id recorded on the result
    #[arg(long, default_value = "app-cli")]
    pub(crate) application_id: String,
    /// Assessor recorded on the result (defaults to RISK_ASSESSED_BY or "system")
    #[arg(long)]
    pub(crate) assessed_by: Option<String>,
    /// JSON rule set overriding RISK_RULES_PATH
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let result = assess_snapshot(args, &config.risk)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn assess_snapshot(
    args: AssessArgs,
    risk: &RiskConfig,
) -> Result<RiskAssessmentResult, AppError> {
    let AssessArgs {
        input,
        application_id,
        assessed_by,
        rules,
    } = args;

    let rules = match rules {
        Some(path) => load_rules_from(path)?,
        None => risk.load_rules()?,
    };

    let snapshot: RiskAssessmentInput = serde_json::from_str(&fs::read_to_string(input)?)?;
    IntakeGuard::new()
        .validate(&snapshot)
        .map_err(RiskAssessmentServiceError::from)?;

    let assessed_by = assessed_by
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| risk.assessed_by.clone());

    Ok(RiskAssessmentEngine::new(rules).assess_as(
        &ApplicationId::new(application_id),
        &snapshot,
        &assessed_by,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_onboarding::workflows::account_opening::{samples, RiskLevel};
    use std::env;

    fn write_snapshot(name: &str, snapshot: &RiskAssessmentInput) -> PathBuf {
        let path = env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        fs::write(
            &path,
            serde_json::to_vec(snapshot).expect("snapshot serializes"),
        )
        .expect("write snapshot");
        path
    }

    fn risk_config() -> RiskConfig {
        RiskConfig {
            assessed_by: "batch-runner".to_string(),
            rules_path: None,
        }
    }

    #[test]
    fn assesses_snapshot_from_file() {
        let path = write_snapshot("assess-high", &samples::high_risk_commercial());
        let result = assess_snapshot(
            AssessArgs {
                input: path.clone(),
                application_id: "app-000042".to_string(),
                assessed_by: None,
                rules: None,
            },
            &risk_config(),
        );
        fs::remove_file(&path).ok();

        let result = result.expect("assessment succeeds");
        assert_eq!(result.application_id.as_str(), "app-000042");
        assert_eq!(result.assessed_by, "batch-runner");
        assert_eq!(result.overall_risk, RiskLevel::High);
        assert!(result.requires_manual_review);
    }

    #[test]
    fn rejects_snapshots_failing_intake() {
        let mut snapshot = samples::low_risk_consumer();
        if let Some(kyc) = snapshot.kyc_verification.as_mut() {
            kyc.confidence = 4.0;
        }
        let path = write_snapshot("assess-invalid", &snapshot);
        let result = assess_snapshot(
            AssessArgs {
                input: path.clone(),
                application_id: "app-cli".to_string(),
                assessed_by: Some("analyst".to_string()),
                rules: None,
            },
            &risk_config(),
        );
        fs::remove_file(&path).ok();

        match result {
            Err(AppError::Service(RiskAssessmentServiceError::Intake(_))) => {}
            other => panic!("expected intake violation, got {other:?}"),
        }
    }

    #[test]
    fn missing_snapshot_is_an_io_error() {
        let result = assess_snapshot(
            AssessArgs {
                input: PathBuf::from("/nonexistent/snapshot.json"),
                application_id: "app-cli".to_string(),
                assessed_by: None,
                rules: None,
            },
            &risk_config(),
        );
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
