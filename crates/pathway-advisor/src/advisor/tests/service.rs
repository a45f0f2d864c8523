use super::common::*;
use crate::advisor::domain::{AssessmentId, AssessmentStatus, PathwayGoal};
use crate::advisor::intake::IntakeError;
use crate::advisor::repository::{AssessmentRepository, RepositoryError};
use crate::advisor::service::AdvisorServiceError;

#[test]
fn submit_stores_a_pending_record() {
    let (service, repository, alerts) = build_service();

    let record = service
        .submit(submission(PathwayGoal::All))
        .expect("submission succeeds");

    assert!(record.profile.assessment_id.0.starts_with("assess-"));
    assert_eq!(record.status, AssessmentStatus::Submitted);
    assert!(record.results.is_none());
    assert!(repository
        .fetch(&record.profile.assessment_id)
        .expect("fetch succeeds")
        .is_some());
    assert!(alerts.events().is_empty());
}

#[test]
fn submit_propagates_intake_errors() {
    let (service, _, _) = build_service();

    let mut submission = submission(PathwayGoal::All);
    submission.full_name = String::new();

    match service.submit(submission) {
        Err(AdvisorServiceError::Intake(IntakeError::MissingContactField(_))) => {}
        other => panic!("expected intake rejection, got {other:?}"),
    }
}

#[test]
fn evaluate_stores_results_and_alerts_on_eligible_pathways() {
    let (service, repository, alerts) = build_service();

    let mut submission = submission(PathwayGoal::Citizenship);
    submission.details.citizenship.is_pr = true;
    submission.details.citizenship.years_in_canada = 4;
    submission.details.citizenship.filed_taxes = true;

    let record = service.submit(submission).expect("submission succeeds");
    let results = service
        .evaluate_as_of(&record.profile.assessment_id, as_of())
        .expect("evaluation succeeds");

    assert_eq!(results.len(), 1);
    assert!(results[0].eligible);

    let stored = repository
        .fetch(&record.profile.assessment_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.status, AssessmentStatus::Evaluated);
    assert_eq!(stored.results.as_deref().map(|results| results.len()), Some(1));

    let events = alerts.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, "eligible_pathway_follow_up");
    assert_eq!(
        events[0].details.get("pathway").map(String::as_str),
        Some("Canadian Citizenship")
    );
}

#[test]
fn evaluate_skips_alerts_when_nothing_is_eligible() {
    let (service, _, alerts) = build_service();

    let record = service
        .submit(submission(PathwayGoal::Work))
        .expect("submission succeeds");
    let results = service
        .evaluate_as_of(&record.profile.assessment_id, as_of())
        .expect("evaluation succeeds");

    assert!(results.iter().all(|result| !result.eligible));
    assert!(alerts.events().is_empty());
}

#[test]
fn evaluate_unknown_assessment_is_not_found() {
    let (service, _, _) = build_service();

    match service.evaluate_as_of(&AssessmentId("assess-missing".to_string()), as_of()) {
        Err(AdvisorServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn get_propagates_not_found() {
    let (service, _, _) = build_service();

    match service.get(&AssessmentId("assess-missing".to_string())) {
        Err(AdvisorServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn pending_review_surfaces_evaluated_records() {
    let (service, _, _) = build_service();

    let record = service
        .submit(submission(PathwayGoal::All))
        .expect("submission succeeds");
    assert!(service
        .pending_review(10)
        .expect("pending query succeeds")
        .is_empty());

    service
        .evaluate_as_of(&record.profile.assessment_id, as_of())
        .expect("evaluation succeeds");

    let pending = service.pending_review(10).expect("pending query succeeds");
    assert_eq!(pending.len(), 1);
    assert_eq!(
        pending[0].profile.assessment_id,
        record.profile.assessment_id
    );
}

#[test]
fn status_view_reflects_the_top_ranked_pathway() {
    let (service, repository, _) = build_service();

    let mut submission = submission(PathwayGoal::Study);
    submission.details.study.has_acceptance_letter = true;
    submission.details.study.has_home_country_ties = true;
    submission.language_tests = vec![academic_test(6.5)];
    submission.available_funds = 40_000;

    let record = service.submit(submission).expect("submission succeeds");
    service
        .evaluate_as_of(&record.profile.assessment_id, as_of())
        .expect("evaluation succeeds");

    let stored = repository
        .fetch(&record.profile.assessment_id)
        .expect("fetch succeeds")
        .expect("record present");
    let view = stored.status_view();

    assert_eq!(view.status, "evaluated");
    assert_eq!(view.top_score, Some(100));
    assert_eq!(view.eligible_pathways, vec!["Study Permit"]);
    assert!(view.outcome_summary.contains("ready to pursue"));
}
