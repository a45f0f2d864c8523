use chrono::NaiveDate;

use crate::advisor::domain::ApplicantProfile;
use crate::advisor::evaluation::{Pathway, PathwayResult};
use crate::advisor::scoring::{age_on, ScoreSheet};

const REQUIRED_YEARS: u8 = 3;

pub(crate) fn evaluate(profile: &ApplicantProfile, as_of: NaiveDate) -> PathwayResult {
    let citizenship = &profile.details.citizenship;

    // Every other rule presumes permanent residence; without it the
    // assessment ends immediately.
    if !citizenship.is_pr {
        return PathwayResult {
            pathway: Pathway::Citizenship,
            readiness_score: 0,
            eligible: false,
            missing_requirements: vec!["You must be a Permanent Resident first".to_string()],
            recommendations: vec![
                "Complete PR application before considering citizenship".to_string()
            ],
            details: "Citizenship is only available to Permanent Residents.".to_string(),
        };
    }

    let mut sheet = ScoreSheet::new();
    sheet.add(30);

    if citizenship.years_in_canada >= REQUIRED_YEARS {
        sheet.add(30);
    } else {
        sheet.require(format!(
            "{} more years of physical presence in Canada",
            REQUIRED_YEARS - citizenship.years_in_canada
        ));
    }

    if citizenship.filed_taxes {
        sheet.add(20);
    } else {
        sheet.require("Tax filing for at least 3 years");
    }

    let age = age_on(profile.birth_date, as_of);
    if (18..=54).contains(&age) {
        let has_language = profile
            .language_tests
            .iter()
            .any(|test| test.raw_average() >= 4.0);
        if has_language {
            sheet.add(20);
        } else {
            sheet.require("CLB 4 language proficiency proof");
        }
    } else {
        // Outside the 18-54 band the language requirement is waived.
        sheet.add(20);
    }

    let eligible = citizenship.is_pr
        && citizenship.years_in_canada >= REQUIRED_YEARS
        && citizenship.filed_taxes
        && !profile.has_police_record;

    if eligible {
        sheet.suggest("Prepare citizenship application and study for citizenship test");
        sheet.suggest("Gather all PR documents and tax records");
    }

    let details = if eligible {
        "You are eligible to apply for Canadian citizenship."
    } else {
        "Complete the missing requirements before applying for citizenship."
    };

    PathwayResult::from_sheet(Pathway::Citizenship, sheet, eligible, details)
}
