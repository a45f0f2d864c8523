use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Highest completed credential, ordered from least to most advanced.
///
/// Serde names match the labels the intake form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "Less than High School")]
    LessThanHighSchool,
    #[serde(rename = "High School")]
    HighSchool,
    Certificate,
    Diploma,
    #[serde(rename = "Advanced Diploma")]
    AdvancedDiploma,
    Bachelor,
    #[serde(rename = "Post-Graduate Diploma")]
    PostGraduateDiploma,
    Master,
    #[serde(rename = "PhD")]
    Phd,
    #[serde(rename = "Professional Degree")]
    ProfessionalDegree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    #[serde(rename = "Common-law")]
    CommonLaw,
    Divorced,
    Widowed,
}

/// The applicant's declared objective; selects which evaluators run.
///
/// An unrecognized value deserializes to [`PathwayGoal::Unrecognized`],
/// which maps to an empty evaluator set rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PathwayGoal {
    Study,
    Work,
    #[serde(rename = "pr")]
    PermanentResidence,
    Quebec,
    Citizenship,
    All,
    Unrecognized,
}

impl From<String> for PathwayGoal {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "study" => Self::Study,
            "work" => Self::Work,
            "pr" => Self::PermanentResidence,
            "quebec" => Self::Quebec,
            "citizenship" => Self::Citizenship,
            "all" => Self::All,
            _ => Self::Unrecognized,
        }
    }
}

/// Recognized language tests. Evaluators pick the first result matching the
/// kind they care about; duplicates are allowed and ignored past the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageTestKind {
    #[serde(rename = "IELTS Academic")]
    IeltsAcademic,
    #[serde(rename = "IELTS General")]
    IeltsGeneral,
    #[serde(rename = "CELPIP")]
    Celpip,
    #[serde(rename = "TOEFL")]
    Toefl,
    #[serde(rename = "PTE")]
    Pte,
    #[serde(rename = "TEF")]
    Tef,
    #[serde(rename = "TCF")]
    Tcf,
}

impl LanguageTestKind {
    /// General-stream English tests accepted by the federal and provincial
    /// economic programs.
    pub const fn is_general_english(self) -> bool {
        matches!(self, Self::IeltsGeneral | Self::Celpip)
    }

    pub const fn is_french(self) -> bool {
        matches!(self, Self::Tef | Self::Tcf)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::IeltsAcademic => "IELTS Academic",
            Self::IeltsGeneral => "IELTS General",
            Self::Celpip => "CELPIP",
            Self::Toefl => "TOEFL",
            Self::Pte => "PTE",
            Self::Tef => "TEF",
            Self::Tcf => "TCF",
        }
    }

    /// Upper bound of the test's published per-skill scale, used by intake
    /// validation.
    pub const fn max_skill_score(self) -> f32 {
        match self {
            Self::IeltsAcademic | Self::IeltsGeneral => 9.0,
            Self::Celpip => 12.0,
            Self::Toefl => 30.0,
            Self::Pte => 90.0,
            Self::Tef | Self::Tcf => 699.0,
        }
    }
}

/// One language test attempt. A `None` skill score means the skill was not
/// attempted, which is distinct from scoring zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageTestResult {
    pub kind: LanguageTestKind,
    #[serde(default)]
    pub listening: Option<f32>,
    #[serde(default)]
    pub reading: Option<f32>,
    #[serde(default)]
    pub writing: Option<f32>,
    #[serde(default)]
    pub speaking: Option<f32>,
    #[serde(default)]
    pub overall: Option<f32>,
}

impl LanguageTestResult {
    /// All four skills, only when each was attempted.
    pub fn skill_scores(&self) -> Option<[f32; 4]> {
        match (self.listening, self.reading, self.writing, self.speaking) {
            (Some(listening), Some(reading), Some(writing), Some(speaking)) => {
                Some([listening, reading, writing, speaking])
            }
            _ => None,
        }
    }

    /// Raw four-skill average; skills that were not attempted count as zero.
    pub fn raw_average(&self) -> f32 {
        (self.listening.unwrap_or(0.0)
            + self.reading.unwrap_or(0.0)
            + self.writing.unwrap_or(0.0)
            + self.speaking.unwrap_or(0.0))
            / 4.0
    }
}

/// Study-permit specifics collected by the intake form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyDetails {
    pub has_acceptance_letter: bool,
    pub tuition_cost: Option<u32>,
    pub has_home_country_ties: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkDetails {
    pub has_lmia: bool,
    pub is_lmia_exempt: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressEntryDetails {
    pub has_eca: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvincialDetails {
    pub preferred_province: Option<String>,
    pub job_in_preferred_province: bool,
    pub experience_in_province: bool,
}

/// Quebec specifics. `french_level` stays a CEFR label string because the
/// eligibility gate compares labels, not ordinals (see the quebec evaluator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuebecDetails {
    pub french_level: Option<String>,
    pub has_quebec_job_offer: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitizenshipDetails {
    pub is_pr: bool,
    pub years_in_canada: u8,
    pub filed_taxes: bool,
}

/// Per-pathway answers. Every field defaults, so a submission only carries
/// the sections relevant to its goal and evaluators read absent answers as
/// "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathwayDetails {
    pub study: StudyDetails,
    pub work: WorkDetails,
    pub express_entry: ExpressEntryDetails,
    pub provincial: ProvincialDetails,
    pub quebec: QuebecDetails,
    pub citizenship: CitizenshipDetails,
}

/// Wire-format submission collected by the multi-step intake form. The
/// intake guard turns this into a typed [`ApplicantProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// YYYY-MM-DD; parsed (and rejected when unparsable) during intake.
    pub birth_date: String,
    #[serde(default)]
    pub citizenship_country: String,
    #[serde(default)]
    pub residence_country: String,
    pub education_level: EducationLevel,
    #[serde(default)]
    pub work_experience_years: f32,
    #[serde(default)]
    pub language_tests: Vec<LanguageTestResult>,
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub has_canadian_relative: bool,
    #[serde(default)]
    pub has_job_offer: bool,
    #[serde(default)]
    pub has_canadian_experience: bool,
    #[serde(default)]
    pub has_police_record: bool,
    #[serde(default)]
    pub available_funds: u32,
    pub goal: PathwayGoal,
    #[serde(default)]
    pub details: PathwayDetails,
}

/// The validated, immutable applicant model every evaluator consumes.
///
/// Contact fields are carried for the assessment record but never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub assessment_id: AssessmentId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub citizenship_country: String,
    pub residence_country: String,
    pub education_level: EducationLevel,
    pub work_experience_years: f32,
    pub language_tests: Vec<LanguageTestResult>,
    pub marital_status: MaritalStatus,
    pub has_canadian_relative: bool,
    pub has_job_offer: bool,
    pub has_canadian_experience: bool,
    pub has_police_record: bool,
    pub available_funds: u32,
    pub goal: PathwayGoal,
    pub details: PathwayDetails,
}

impl ApplicantProfile {
    /// First test of the given kind, in submission order.
    pub fn find_test(&self, kind: LanguageTestKind) -> Option<&LanguageTestResult> {
        self.language_tests.iter().find(|test| test.kind == kind)
    }

    /// First general-stream English test (IELTS General or CELPIP).
    pub fn general_english_test(&self) -> Option<&LanguageTestResult> {
        self.language_tests
            .iter()
            .find(|test| test.kind.is_general_english())
    }

    /// First French test (TEF or TCF).
    pub fn french_test(&self) -> Option<&LanguageTestResult> {
        self.language_tests
            .iter()
            .find(|test| test.kind.is_french())
    }
}

/// High level status tracked throughout the assessment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    Submitted,
    Evaluated,
    Reviewed,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStatus::Submitted => "submitted",
            AssessmentStatus::Evaluated => "evaluated",
            AssessmentStatus::Reviewed => "reviewed",
        }
    }
}
