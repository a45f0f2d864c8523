use chrono::NaiveDate;

use crate::advisor::domain::{ApplicantProfile, EducationLevel};
use crate::advisor::evaluation::{Pathway, PathwayResult};
use crate::advisor::scoring::ScoreSheet;

pub(crate) fn evaluate(profile: &ApplicantProfile, _as_of: NaiveDate) -> PathwayResult {
    let mut sheet = ScoreSheet::new();
    let work = &profile.details.work;

    if profile.has_job_offer {
        sheet.add(50);
        if work.has_lmia {
            sheet.add(20);
        } else {
            sheet.require("LMIA (Labour Market Impact Assessment) approval from employer");
        }
    } else {
        sheet.require("Valid job offer from a Canadian employer");
    }

    if profile.work_experience_years >= 2.0 {
        sheet.add(20);
    } else if profile.work_experience_years >= 1.0 {
        sheet.add(10);
    } else {
        sheet.suggest("Gain more relevant work experience in your field");
    }

    match profile.education_level {
        EducationLevel::Master | EducationLevel::Phd => sheet.add(10),
        EducationLevel::Bachelor => sheet.add(5),
        _ => {}
    }

    let eligible = profile.has_job_offer && (work.has_lmia || work.is_lmia_exempt);

    if !eligible {
        sheet.suggest("Consider gaining Canadian experience through study (PGWP) first");
        sheet.suggest("Look for LMIA-exempt positions (intra-company transfer, CUSMA)");
    }

    let details = if eligible {
        "You are eligible for a Work Permit. Your employer must submit the LMIA application."
    } else {
        "You need a job offer and LMIA approval to qualify for a Work Permit."
    };

    PathwayResult::from_sheet(Pathway::WorkPermit, sheet, eligible, details)
}
