//! Applicant intake, pathway evaluation, and assessment lifecycle.
//!
//! The evaluation core is a pure function: one [`ApplicantProfile`] in, a
//! ranked list of [`PathwayResult`]s out. Everything else
//! in this module — intake guard, repository, service facade, router — is
//! the lifecycle around that core so submissions can be stored, evaluated,
//! and surfaced to consultants.

pub mod domain;
pub(crate) mod evaluation;
pub mod intake;
pub mod registry;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantProfile, AssessmentId, AssessmentStatus, CitizenshipDetails, EducationLevel,
    ExpressEntryDetails, LanguageTestKind, LanguageTestResult, MaritalStatus, PathwayDetails,
    PathwayGoal, ProfileSubmission, ProvincialDetails, QuebecDetails, StudyDetails, WorkDetails,
};
pub use evaluation::{Pathway, PathwayResult};
pub use intake::{IntakeError, IntakeGuard};
pub use registry::{evaluate_all, evaluators_for, Evaluator};
pub use report::export_summaries;
pub use repository::{
    AlertError, AlertPublisher, AssessmentRecord, AssessmentRepository, AssessmentStatusView,
    ConsultationAlert, RepositoryError,
};
pub use router::advisor_router;
pub use service::{AdvisorServiceError, PathwayAdvisorService};
