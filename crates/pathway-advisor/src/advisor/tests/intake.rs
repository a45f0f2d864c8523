use super::common::*;
use crate::advisor::domain::{LanguageTestKind, LanguageTestResult, PathwayGoal};
use crate::advisor::intake::{IntakeError, IntakeGuard};

fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

#[test]
fn maps_submission_fields_onto_the_profile() {
    let submission = submission(PathwayGoal::PermanentResidence);

    let profile = guard()
        .profile_from_submission(submission)
        .expect("valid submission");

    assert_eq!(profile.assessment_id.0, "pending");
    assert_eq!(
        profile.birth_date,
        chrono::NaiveDate::from_ymd_opt(1996, 1, 20).expect("valid date")
    );
    assert_eq!(profile.goal, PathwayGoal::PermanentResidence);
    assert_eq!(profile.available_funds, 16_000);
    assert_eq!(profile.language_tests.len(), 1);
}

#[test]
fn rejects_unparsable_birth_dates() {
    let mut submission = submission(PathwayGoal::Study);
    submission.birth_date = "January 20, 1996".to_string();

    match guard().profile_from_submission(submission) {
        Err(IntakeError::InvalidBirthDate(raw)) => assert!(raw.contains("January")),
        other => panic!("expected birth date rejection, got {other:?}"),
    }
}

#[test]
fn rejects_impossible_calendar_dates() {
    let mut submission = submission(PathwayGoal::Study);
    submission.birth_date = "1996-02-30".to_string();

    assert!(matches!(
        guard().profile_from_submission(submission),
        Err(IntakeError::InvalidBirthDate(_))
    ));
}

#[test]
fn rejects_blank_contact_fields() {
    let mut submission = submission(PathwayGoal::Study);
    submission.full_name = "   ".to_string();

    assert!(matches!(
        guard().profile_from_submission(submission),
        Err(IntakeError::MissingContactField("full name"))
    ));
}

#[test]
fn rejects_undeliverable_email() {
    let mut submission = submission(PathwayGoal::Study);
    submission.email = "amina.example.com".to_string();

    assert!(matches!(
        guard().profile_from_submission(submission),
        Err(IntakeError::InvalidEmail(_))
    ));
}

#[test]
fn rejects_negative_or_non_finite_experience() {
    let mut negative = submission(PathwayGoal::Work);
    negative.work_experience_years = -1.0;
    assert!(matches!(
        guard().profile_from_submission(negative),
        Err(IntakeError::InvalidWorkExperience)
    ));

    let mut non_finite = submission(PathwayGoal::Work);
    non_finite.work_experience_years = f32::NAN;
    assert!(matches!(
        guard().profile_from_submission(non_finite),
        Err(IntakeError::InvalidWorkExperience)
    ));
}

#[test]
fn rejects_scores_beyond_the_test_scale() {
    let mut submission = submission(PathwayGoal::PermanentResidence);
    submission.language_tests = vec![LanguageTestResult {
        kind: LanguageTestKind::IeltsGeneral,
        listening: Some(9.5),
        reading: Some(7.0),
        writing: Some(7.0),
        speaking: Some(7.0),
        overall: None,
    }];

    match guard().profile_from_submission(submission) {
        Err(IntakeError::ScoreOutOfRange { test, skill, .. }) => {
            assert_eq!(test, "IELTS General");
            assert_eq!(skill, "listening");
        }
        other => panic!("expected out-of-range rejection, got {other:?}"),
    }
}

#[test]
fn accepts_scales_wider_than_ielts() {
    let mut submission = submission(PathwayGoal::PermanentResidence);
    submission.language_tests = vec![four_skill_test(LanguageTestKind::Celpip, 10.0)];

    assert!(guard().profile_from_submission(submission).is_ok());
}
