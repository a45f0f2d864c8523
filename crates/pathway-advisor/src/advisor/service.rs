use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::advisor::domain::{AssessmentId, AssessmentStatus, ProfileSubmission};
use crate::advisor::evaluation::PathwayResult;
use crate::advisor::intake::{IntakeError, IntakeGuard};
use crate::advisor::registry;
use crate::advisor::repository::{
    AlertError, AlertPublisher, AssessmentRecord, AssessmentRepository, ConsultationAlert,
    RepositoryError,
};

/// Service composing the intake guard, evaluation registry, repository, and
/// consultant alerts.
pub struct PathwayAdvisorService<R, A> {
    guard: IntakeGuard,
    repository: Arc<R>,
    alerts: Arc<A>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("assess-{id:06}"))
}

impl<R, A> PathwayAdvisorService<R, A>
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>) -> Self {
        Self {
            guard: IntakeGuard::default(),
            repository,
            alerts,
        }
    }

    /// Validate and store a new submission, returning the repository-backed
    /// record.
    pub fn submit(
        &self,
        submission: ProfileSubmission,
    ) -> Result<AssessmentRecord, AdvisorServiceError> {
        let mut profile = self.guard.profile_from_submission(submission)?;
        let assessment_id = next_assessment_id();
        profile.assessment_id = assessment_id.clone();

        let record = AssessmentRecord {
            profile,
            status: AssessmentStatus::Submitted,
            results: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Evaluate a stored assessment against today's date.
    pub fn evaluate(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<Vec<PathwayResult>, AdvisorServiceError> {
        self.evaluate_as_of(assessment_id, Local::now().date_naive())
    }

    /// Evaluate against an explicit date so callers can reproduce a run.
    /// Age-dependent rules make the evaluation date part of the input.
    pub fn evaluate_as_of(
        &self,
        assessment_id: &AssessmentId,
        as_of: NaiveDate,
    ) -> Result<Vec<PathwayResult>, AdvisorServiceError> {
        let mut record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;

        let results = registry::evaluate_all(&record.profile, as_of);

        record.status = AssessmentStatus::Evaluated;
        record.results = Some(results.clone());
        self.repository.update(record)?;

        if let Some(top) = results.iter().find(|result| result.eligible) {
            let mut details = BTreeMap::new();
            details.insert("pathway".to_string(), top.pathway.label().to_string());
            details.insert(
                "readiness_score".to_string(),
                top.readiness_score.to_string(),
            );
            self.alerts.publish(ConsultationAlert {
                template: "eligible_pathway_follow_up".to_string(),
                assessment_id: assessment_id.clone(),
                details,
            })?;
        }

        info!(
            assessment_id = %assessment_id.0,
            pathways = results.len(),
            "pathway evaluation complete"
        );

        Ok(results)
    }

    /// Fetch an assessment and current status for API responses.
    pub fn get(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, AdvisorServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Evaluated assessments awaiting consultant review.
    pub fn pending_review(
        &self,
        limit: usize,
    ) -> Result<Vec<AssessmentRecord>, AdvisorServiceError> {
        Ok(self.repository.pending_review(limit)?)
    }
}

/// Error raised by the advisor service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
