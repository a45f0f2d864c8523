use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::advisor::domain::{ApplicantProfile, AssessmentId, AssessmentStatus};
use crate::advisor::evaluation::PathwayResult;

/// Repository record pairing the submitted profile with its evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub profile: ApplicantProfile,
    pub status: AssessmentStatus,
    pub results: Option<Vec<PathwayResult>>,
}

impl AssessmentRecord {
    pub fn outcome_summary(&self) -> String {
        match self.results.as_deref() {
            Some([]) => "no applicable pathway for the declared goal".to_string(),
            Some(results) => {
                let top = &results[0];
                if top.eligible {
                    format!(
                        "{} is ready to pursue (score {})",
                        top.pathway.label(),
                        top.readiness_score
                    )
                } else {
                    format!(
                        "{} is the closest option (score {})",
                        top.pathway.label(),
                        top.readiness_score
                    )
                }
            }
            None => "pending evaluation".to_string(),
        }
    }

    pub fn status_view(&self) -> AssessmentStatusView {
        let top = self.results.as_deref().and_then(|results| results.first());
        let eligible_pathways = self
            .results
            .as_deref()
            .map(|results| {
                results
                    .iter()
                    .filter(|result| result.eligible)
                    .map(|result| result.pathway.label().to_string())
                    .collect()
            })
            .unwrap_or_default();

        AssessmentStatusView {
            assessment_id: self.profile.assessment_id.clone(),
            status: self.status.label(),
            outcome_summary: self.outcome_summary(),
            top_score: top.map(|result| result.readiness_score),
            eligible_pathways,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// Evaluated records awaiting consultant review.
    fn pending_review(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook notifying consultants that an assessment deserves a
/// follow-up (e.g. a booking reminder or CRM adapter).
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: ConsultationAlert) -> Result<(), AlertError>;
}

/// Alert payload so routes and tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationAlert {
    pub template: String,
    pub assessment_id: AssessmentId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an assessment's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentStatusView {
    pub assessment_id: AssessmentId,
    pub status: &'static str,
    pub outcome_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_score: Option<i16>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub eligible_pathways: Vec<String>,
}
