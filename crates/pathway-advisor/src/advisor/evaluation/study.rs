use chrono::NaiveDate;

use crate::advisor::domain::{ApplicantProfile, LanguageTestKind};
use crate::advisor::evaluation::{Pathway, PathwayResult};
use crate::advisor::scoring::{format_cad, ScoreSheet};

const BASE_LIVING_FUNDS: u32 = 20_635;
const DEFAULT_TUITION: u32 = 15_000;

pub(crate) fn evaluate(profile: &ApplicantProfile, _as_of: NaiveDate) -> PathwayResult {
    let mut sheet = ScoreSheet::new();
    let study = &profile.details.study;

    if study.has_acceptance_letter {
        sheet.add(40);
    } else {
        sheet.require("Letter of Acceptance from a Designated Learning Institution (DLI)");
    }

    let academic = profile.find_test(LanguageTestKind::IeltsAcademic);
    match academic.and_then(|test| test.overall) {
        Some(overall) if overall >= 6.0 => sheet.add(30),
        Some(overall) if overall >= 5.5 => {
            sheet.add(20);
            sheet.suggest("Improve IELTS score to 6.5+ for better university options");
        }
        _ => sheet.require("IELTS Academic score of 6.0 or higher"),
    }

    let min_funds = BASE_LIVING_FUNDS + study.tuition_cost.unwrap_or(DEFAULT_TUITION);
    if profile.available_funds >= min_funds {
        sheet.add(20);
    } else {
        sheet.require(format!(
            "Proof of funds: ${} CAD (tuition + living expenses)",
            format_cad(min_funds)
        ));
        // Partial credit proportional to the funds actually on hand.
        sheet.add((profile.available_funds as f64 / min_funds as f64 * 20.0).floor() as i16);
    }

    if study.has_home_country_ties {
        sheet.add(10);
    } else {
        sheet.suggest("Strengthen ties to home country (job, property, family)");
    }

    let eligible = sheet.score() >= 70 && study.has_acceptance_letter;

    if eligible {
        sheet.suggest("Prepare all required documents for visa application");
        sheet.suggest("Book medical exam and biometrics appointment");
    }

    let details = if eligible {
        "You meet the basic requirements for a Study Permit. Complete your application as soon as possible."
    } else {
        "You need to address the missing requirements before applying for a Study Permit."
    };

    PathwayResult::from_sheet(Pathway::StudyPermit, sheet, eligible, details)
}
