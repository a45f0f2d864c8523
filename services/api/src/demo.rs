use crate::infra::{InMemoryAlertPublisher, InMemoryAssessmentRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use pathway_advisor::advisor::{
    evaluate_all, AssessmentRepository, EducationLevel, ExpressEntryDetails, IntakeGuard,
    LanguageTestKind,
    LanguageTestResult, MaritalStatus, PathwayAdvisorService, PathwayDetails, PathwayGoal,
    PathwayResult, ProfileSubmission,
};
use pathway_advisor::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to an applicant profile JSON document
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Override the evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { profile, as_of } = args;

    let raw = fs::read_to_string(profile)?;
    let submission: ProfileSubmission = serde_json::from_str(&raw)?;

    let guard = IntakeGuard::default();
    let applicant = guard.profile_from_submission(submission)?;

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let results = evaluate_all(&applicant, as_of);

    println!(
        "Pathway readiness for {} (goal: {:?})",
        applicant.full_name, applicant.goal
    );
    render_pathway_report(&results, as_of);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { as_of } = args;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    println!("Pathway advisor demo");

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let service = Arc::new(PathwayAdvisorService::new(
        repository.clone(),
        alerts.clone(),
    ));

    let submission = demo_profile_submission();
    let record = match service.submit(submission) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    let public_view = record.status_view();
    println!(
        "- Received assessment {} -> status {}",
        public_view.assessment_id.0, public_view.status
    );
    println!("  Outcome: {}", public_view.outcome_summary);

    let results = match service.evaluate_as_of(&record.profile.assessment_id, as_of) {
        Ok(results) => results,
        Err(err) => {
            println!("  Evaluation unavailable: {}", err);
            return Ok(());
        }
    };
    render_pathway_report(&results, as_of);

    let stored_view = match repository.fetch(&record.profile.assessment_id) {
        Ok(Some(record)) => record.status_view(),
        Ok(None) => {
            println!("  Repository lookup returned no record");
            return Ok(());
        }
        Err(err) => {
            println!("  Repository unavailable: {}", err);
            return Ok(());
        }
    };
    match serde_json::to_string_pretty(&stored_view) {
        Ok(json) => println!("\nPublic status payload:\n{}", json),
        Err(err) => println!("\nPublic status payload unavailable: {}", err),
    }

    let events = alerts.events();
    if events.is_empty() {
        println!("\nConsultant alerts: none dispatched");
    } else {
        println!("\nConsultant alerts:");
        for alert in events {
            println!(
                "- template={} -> {}",
                alert.template, alert.assessment_id.0
            );
        }
    }

    Ok(())
}

fn demo_profile_submission() -> ProfileSubmission {
    ProfileSubmission {
        full_name: "Sofia Almeida".to_string(),
        email: "sofia.almeida@example.com".to_string(),
        phone: "+55 11 5555 0168".to_string(),
        birth_date: "1995-02-11".to_string(),
        citizenship_country: "Brazil".to_string(),
        residence_country: "Brazil".to_string(),
        education_level: EducationLevel::Master,
        work_experience_years: 5.0,
        language_tests: vec![LanguageTestResult {
            kind: LanguageTestKind::IeltsGeneral,
            listening: Some(8.0),
            reading: Some(7.5),
            writing: Some(7.0),
            speaking: Some(7.5),
            overall: Some(7.5),
        }],
        marital_status: MaritalStatus::Single,
        has_canadian_relative: false,
        has_job_offer: true,
        has_canadian_experience: false,
        has_police_record: false,
        available_funds: 22_000,
        goal: PathwayGoal::All,
        details: PathwayDetails {
            express_entry: ExpressEntryDetails { has_eca: true },
            ..PathwayDetails::default()
        },
    }
}

fn render_pathway_report(results: &[PathwayResult], as_of: NaiveDate) {
    println!("\nRanked pathways (evaluated {as_of})");

    if results.is_empty() {
        println!("- No applicable pathway for the declared goal");
        return;
    }

    for (rank, result) in results.iter().enumerate() {
        let verdict = if result.eligible {
            "eligible"
        } else {
            "not yet eligible"
        };
        println!(
            "\n{}. {} | score {} | {}",
            rank + 1,
            result.pathway.label(),
            result.readiness_score,
            verdict
        );
        println!("   {}", result.details);

        if !result.missing_requirements.is_empty() {
            println!("   Missing requirements:");
            for item in &result.missing_requirements {
                println!("   - {item}");
            }
        }
        if !result.recommendations.is_empty() {
            println!("   Recommendations:");
            for note in &result.recommendations {
                println!("   - {note}");
            }
        }
    }
}
