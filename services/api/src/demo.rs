use crate::infra::{InMemoryApplicationRepository, InMemoryReviewQueue};
use account_onboarding::error::AppError;
use account_onboarding::workflows::account_opening::{
    samples, ApplicationRepository, Clock, FixedClock, RiskAssessmentEngine,
    RiskAssessmentInput, RiskAssessmentResult, RiskAssessmentService, RiskCategory, RiskRuleSet,
    SystemClock, UuidGenerator,
};
use chrono::{NaiveDate, TimeZone, Utc};
use clap::{Args, ValueEnum};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum DemoScenario {
    /// Salaried consumer with clean KYC
    Low,
    /// Sanctioned cash-intensive commercial applicant
    High,
    #[default]
    All,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Which sample applications to run
    #[arg(long, value_enum, default_value_t = DemoScenario::All)]
    pub(crate) scenario: DemoScenario,
    /// Pin the assessment date (YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

type DemoService = RiskAssessmentService<InMemoryApplicationRepository, InMemoryReviewQueue>;

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryApplicationRepository::default());
    let reviews = Arc::new(InMemoryReviewQueue::default());
    let engine = RiskAssessmentEngine::with_dependencies(
        RiskRuleSet::default(),
        demo_clock(args.today),
        Arc::new(UuidGenerator),
    );
    let service = RiskAssessmentService::new(repository.clone(), reviews.clone(), engine);

    println!("Account opening risk assessment demo");
    for (title, snapshot) in scenarios(args.scenario) {
        println!();
        println!("== {title} ==");
        run_scenario(&service, repository.as_ref(), snapshot)?;
    }

    println!();
    let tickets = reviews.tickets();
    if tickets.is_empty() {
        println!("Manual review queue: empty");
    } else {
        println!("Manual review queue:");
        for ticket in tickets {
            println!(
                "  - {} (score {}, {} risk)",
                ticket.application_id.as_str(),
                ticket.risk_score,
                ticket.overall_risk.label()
            );
            for reason in &ticket.reasons {
                println!("      {reason}");
            }
        }
    }

    Ok(())
}

fn demo_clock(today: Option<NaiveDate>) -> Arc<dyn Clock> {
    match today.and_then(|date| date.and_hms_opt(12, 0, 0)) {
        Some(noon) => Arc::new(FixedClock(Utc.from_utc_datetime(&noon))),
        None => Arc::new(SystemClock),
    }
}

pub(crate) fn scenarios(scenario: DemoScenario) -> Vec<(&'static str, RiskAssessmentInput)> {
    let low = ("Consumer checking application", samples::low_risk_consumer());
    let high = (
        "Commercial money services application",
        samples::high_risk_commercial(),
    );
    match scenario {
        DemoScenario::Low => vec![low],
        DemoScenario::High => vec![high],
        DemoScenario::All => vec![low, high],
    }
}

fn run_scenario(
    service: &DemoService,
    repository: &InMemoryApplicationRepository,
    snapshot: RiskAssessmentInput,
) -> Result<(), AppError> {
    let record = service.submit(snapshot)?;
    println!(
        "  Submitted {} ({} account)",
        record.application_id.as_str(),
        record.snapshot.account_type.label()
    );

    let result = service.assess(&record.application_id, service.default_assessor())?;
    for line in render_assessment(&result) {
        println!("{line}");
    }

    match repository.fetch(&record.application_id) {
        Ok(Some(stored)) => match serde_json::to_string_pretty(&stored.status_view()) {
            Ok(json) => println!("  Public status payload:\n{json}"),
            Err(err) => println!("  Public status payload unavailable: {err}"),
        },
        Ok(None) => println!("  Repository lookup returned no record"),
        Err(err) => println!("  Repository unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn render_assessment(result: &RiskAssessmentResult) -> Vec<String> {
    let mut lines = vec![format!("  Result: {}", result.summary())];

    for category in RiskCategory::ordered() {
        let factors: Vec<_> = result.factors_in(category).collect();
        if factors.is_empty() {
            continue;
        }
        lines.push(format!("  {}:", category.label()));
        for factor in factors {
            lines.push(format!(
                "    - {} [score {}, weight {:.2}] {}",
                factor.factor, factor.score(), factor.weight(), factor.description
            ));
        }
    }

    lines.push("  Recommendations:".to_string());
    lines.extend(
        result
            .recommendations
            .iter()
            .map(|item| format!("    * {item}")),
    );
    lines
}
