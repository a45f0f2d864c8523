use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::advisor::domain::{
    ApplicantProfile, AssessmentId, AssessmentStatus, EducationLevel, LanguageTestKind,
    LanguageTestResult, MaritalStatus, PathwayDetails, PathwayGoal, ProfileSubmission,
};
use crate::advisor::repository::{
    AlertError, AlertPublisher, AssessmentRecord, AssessmentRepository, ConsultationAlert,
    RepositoryError,
};
use crate::advisor::router::advisor_router;
use crate::advisor::service::PathwayAdvisorService;

/// Fixed evaluation date so age-dependent rules stay deterministic.
pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date")
}

/// Applicant aged 30 on `as_of()`, single, Bachelor, four years of skilled
/// experience, no tests and no pathway specifics. Tests layer in what each
/// rule needs.
pub(super) fn applicant(goal: PathwayGoal) -> ApplicantProfile {
    ApplicantProfile {
        assessment_id: AssessmentId("assess-fixture".to_string()),
        full_name: "Amina Hassan".to_string(),
        email: "amina.hassan@example.com".to_string(),
        phone: "+20 100 555 0199".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1996, 1, 20).expect("valid date"),
        citizenship_country: "Egypt".to_string(),
        residence_country: "Egypt".to_string(),
        education_level: EducationLevel::Bachelor,
        work_experience_years: 4.0,
        language_tests: Vec::new(),
        marital_status: MaritalStatus::Single,
        has_canadian_relative: false,
        has_job_offer: false,
        has_canadian_experience: false,
        has_police_record: false,
        available_funds: 5_000,
        goal,
        details: PathwayDetails::default(),
    }
}

pub(super) fn submission(goal: PathwayGoal) -> ProfileSubmission {
    ProfileSubmission {
        full_name: "Amina Hassan".to_string(),
        email: "amina.hassan@example.com".to_string(),
        phone: "+20 100 555 0199".to_string(),
        birth_date: "1996-01-20".to_string(),
        citizenship_country: "Egypt".to_string(),
        residence_country: "Egypt".to_string(),
        education_level: EducationLevel::Bachelor,
        work_experience_years: 4.0,
        language_tests: vec![four_skill_test(LanguageTestKind::IeltsGeneral, 7.0)],
        marital_status: MaritalStatus::Single,
        has_canadian_relative: false,
        has_job_offer: false,
        has_canadian_experience: false,
        has_police_record: false,
        available_funds: 16_000,
        goal,
        details: PathwayDetails::default(),
    }
}

pub(super) fn four_skill_test(kind: LanguageTestKind, score: f32) -> LanguageTestResult {
    LanguageTestResult {
        kind,
        listening: Some(score),
        reading: Some(score),
        writing: Some(score),
        speaking: Some(score),
        overall: None,
    }
}

pub(super) fn academic_test(overall: f32) -> LanguageTestResult {
    LanguageTestResult {
        kind: LanguageTestKind::IeltsAcademic,
        listening: None,
        reading: None,
        writing: None,
        speaking: None,
        overall: Some(overall),
    }
}

pub(super) fn build_service() -> (
    PathwayAdvisorService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service = PathwayAdvisorService::new(repository.clone(), alerts.clone());
    (service, repository, alerts)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.profile.assessment_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending_review(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == AssessmentStatus::Evaluated)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<ConsultationAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<ConsultationAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: ConsultationAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending_review(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending_review(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn advisor_router_with_service(
    service: PathwayAdvisorService<MemoryRepository, MemoryAlerts>,
) -> axum::Router {
    advisor_router(Arc::new(service))
}
