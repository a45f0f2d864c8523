//! Rule-based readiness scoring for Canadian immigration pathways.
//!
//! The [`advisor`] module holds the applicant domain model, the six pathway
//! evaluators, and the assessment lifecycle (intake, evaluation, storage,
//! HTTP routing). The remaining modules carry service plumbing shared with
//! the deployable binary: configuration, telemetry, and the top-level error
//! type.

pub mod advisor;
pub mod config;
pub mod error;
pub mod telemetry;
