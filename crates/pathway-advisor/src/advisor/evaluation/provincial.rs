use chrono::NaiveDate;

use crate::advisor::domain::ApplicantProfile;
use crate::advisor::evaluation::{Pathway, PathwayResult};
use crate::advisor::scoring::ScoreSheet;

pub(crate) fn evaluate(profile: &ApplicantProfile, _as_of: NaiveDate) -> PathwayResult {
    let mut sheet = ScoreSheet::new();
    let provincial = &profile.details.provincial;

    let province_chosen = provincial
        .preferred_province
        .as_deref()
        .is_some_and(|province| !province.is_empty());
    if province_chosen {
        sheet.add(20);
    } else {
        sheet.suggest("Research and select a target province");
    }

    if profile.has_job_offer && provincial.job_in_preferred_province {
        sheet.add(30);
    } else {
        sheet.require("Job offer in your preferred province");
        sheet.suggest("Look for jobs in provinces with active PNP streams");
    }

    // Raw four-skill average, no CLB conversion: provincial streams publish
    // test-scale cutoffs directly. The thresholds below are on the raw
    // IELTS scale even though the requirement text speaks in CLB terms.
    if let Some(test) = profile.general_english_test() {
        let average = test.raw_average();
        if average >= 6.0 {
            sheet.add(20);
        } else if average >= 5.0 {
            sheet.add(10);
        } else {
            sheet.require("Minimum CLB 4-7 language proficiency (varies by province)");
        }
    }

    if profile.work_experience_years >= 2.0 {
        sheet.add(15);
    }
    if profile.has_canadian_experience && provincial.experience_in_province {
        sheet.add(15);
    }

    let eligible = sheet.score() >= 60 && profile.has_job_offer;

    if eligible {
        sheet.suggest("Create Express Entry profile if eligible (PNP adds 600 points)");
    } else {
        sheet.suggest("Focus on gaining provincial work experience or job offer");
    }

    let details = if eligible {
        "You have good potential for PNP. Focus on provinces that match your profile."
    } else {
        "PNP typically requires a job offer or provincial work experience."
    };

    PathwayResult::from_sheet(Pathway::ProvincialNominee, sheet, eligible, details)
}
