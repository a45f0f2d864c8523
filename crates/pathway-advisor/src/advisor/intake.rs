use chrono::NaiveDate;

use crate::advisor::domain::{
    ApplicantProfile, AssessmentId, LanguageTestResult, ProfileSubmission,
};

/// Validation errors raised while turning a wire submission into a typed
/// applicant profile.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("birth date '{0}' is not a valid YYYY-MM-DD date")]
    InvalidBirthDate(String),
    #[error("{0} is required")]
    MissingContactField(&'static str),
    #[error("email address '{0}' is not deliverable")]
    InvalidEmail(String),
    #[error("work experience must be a finite number of years, zero or more")]
    InvalidWorkExperience,
    #[error("{test} {skill} score {value} is outside the 0-{max} range")]
    ScoreOutOfRange {
        test: &'static str,
        skill: &'static str,
        value: f32,
        max: f32,
    },
}

/// Guard producing [`ApplicantProfile`] instances from raw submissions.
///
/// The evaluators themselves never fail: they assume a well-formed profile
/// and degrade gracefully on missing optional answers. Everything that can
/// actually be malformed — the birth date string, contact fields, test
/// scores — is rejected here, before the engine runs.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn profile_from_submission(
        &self,
        submission: ProfileSubmission,
    ) -> Result<ApplicantProfile, IntakeError> {
        if submission.full_name.trim().is_empty() {
            return Err(IntakeError::MissingContactField("full name"));
        }
        if submission.email.trim().is_empty() {
            return Err(IntakeError::MissingContactField("email"));
        }
        if !submission.email.contains('@') {
            return Err(IntakeError::InvalidEmail(submission.email));
        }

        let birth_date = NaiveDate::parse_from_str(submission.birth_date.trim(), "%Y-%m-%d")
            .map_err(|_| IntakeError::InvalidBirthDate(submission.birth_date.clone()))?;

        if !submission.work_experience_years.is_finite() || submission.work_experience_years < 0.0
        {
            return Err(IntakeError::InvalidWorkExperience);
        }

        for test in &submission.language_tests {
            validate_test(test)?;
        }

        Ok(ApplicantProfile {
            assessment_id: AssessmentId("pending".to_string()),
            full_name: submission.full_name,
            email: submission.email,
            phone: submission.phone,
            birth_date,
            citizenship_country: submission.citizenship_country,
            residence_country: submission.residence_country,
            education_level: submission.education_level,
            work_experience_years: submission.work_experience_years,
            language_tests: submission.language_tests,
            marital_status: submission.marital_status,
            has_canadian_relative: submission.has_canadian_relative,
            has_job_offer: submission.has_job_offer,
            has_canadian_experience: submission.has_canadian_experience,
            has_police_record: submission.has_police_record,
            available_funds: submission.available_funds,
            goal: submission.goal,
            details: submission.details,
        })
    }
}

fn validate_test(test: &LanguageTestResult) -> Result<(), IntakeError> {
    let max = test.kind.max_skill_score();
    let skills = [
        ("listening", test.listening),
        ("reading", test.reading),
        ("writing", test.writing),
        ("speaking", test.speaking),
        ("overall", test.overall),
    ];

    for (skill, value) in skills {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 || value > max {
                return Err(IntakeError::ScoreOutOfRange {
                    test: test.kind.label(),
                    skill,
                    value,
                    max,
                });
            }
        }
    }

    Ok(())
}
