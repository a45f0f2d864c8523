pub(crate) mod citizenship;
pub(crate) mod express_entry;
pub(crate) mod provincial;
pub(crate) mod quebec;
pub(crate) mod study;
pub(crate) mod work;

use crate::advisor::scoring::ScoreSheet;
use serde::{Deserialize, Serialize};

/// The immigration routes this engine can assess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pathway {
    #[serde(rename = "Study Permit")]
    StudyPermit,
    #[serde(rename = "Work Permit")]
    WorkPermit,
    #[serde(rename = "Express Entry (PR)")]
    ExpressEntry,
    #[serde(rename = "Provincial Nominee Program (PNP)")]
    ProvincialNominee,
    #[serde(rename = "Quebec PR (CSQ)")]
    Quebec,
    #[serde(rename = "Canadian Citizenship")]
    Citizenship,
}

impl Pathway {
    pub const fn label(self) -> &'static str {
        match self {
            Pathway::StudyPermit => "Study Permit",
            Pathway::WorkPermit => "Work Permit",
            Pathway::ExpressEntry => "Express Entry (PR)",
            Pathway::ProvincialNominee => "Provincial Nominee Program (PNP)",
            Pathway::Quebec => "Quebec PR (CSQ)",
            Pathway::Citizenship => "Canadian Citizenship",
        }
    }
}

/// One pathway's verdict for one applicant.
///
/// `readiness_score` is an ordinal ranking signal, not a percentage: the
/// partial-credit and bonus rules can push it outside 0-100 and no clamping
/// is applied. `eligible` comes from each pathway's hard gate, which is
/// checked independently of the score threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayResult {
    pub pathway: Pathway,
    pub readiness_score: i16,
    pub eligible: bool,
    pub missing_requirements: Vec<String>,
    pub recommendations: Vec<String>,
    pub details: String,
}

impl PathwayResult {
    pub(crate) fn from_sheet(
        pathway: Pathway,
        sheet: ScoreSheet,
        eligible: bool,
        details: impl Into<String>,
    ) -> Self {
        let (readiness_score, missing_requirements, recommendations) = sheet.into_parts();
        Self {
            pathway,
            readiness_score,
            eligible,
            missing_requirements,
            recommendations,
            details: details.into(),
        }
    }
}
