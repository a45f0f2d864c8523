use chrono::NaiveDate;

use crate::advisor::domain::{ApplicantProfile, EducationLevel, MaritalStatus};
use crate::advisor::evaluation::{Pathway, PathwayResult};
use crate::advisor::scoring::{age_on, clb_band, format_cad, ScoreSheet};

const FUNDS_MARRIED: u32 = 18_300;
const FUNDS_SINGLE: u32 = 14_700;

pub(crate) fn evaluate(profile: &ApplicantProfile, as_of: NaiveDate) -> PathwayResult {
    let mut sheet = ScoreSheet::new();

    let age = age_on(profile.birth_date, as_of);
    if (18..=35).contains(&age) {
        sheet.add(20);
    } else if age <= 45 {
        sheet.add(((45 - age) * 2) as i16);
    }

    if profile.details.express_entry.has_eca {
        let education_points = match profile.education_level {
            EducationLevel::Phd => 20,
            EducationLevel::Master => 18,
            EducationLevel::Bachelor => 15,
            _ => 10,
        };
        sheet.add(education_points);
    } else {
        sheet.require("Educational Credential Assessment (ECA) from WES, IQAS, or ICAS");
    }

    if profile.work_experience_years >= 6.0 {
        sheet.add(15);
    } else if profile.work_experience_years >= 3.0 {
        sheet.add(12);
    } else if profile.work_experience_years >= 1.0 {
        sheet.add(8);
    } else {
        sheet.require("At least 1 year of skilled work experience");
    }

    // Unlike the provincial evaluator, federal scoring converts each skill
    // to its CLB band before averaging.
    match profile
        .general_english_test()
        .and_then(|test| test.skill_scores())
    {
        Some([listening, reading, writing, speaking]) => {
            let avg_clb = (clb_band(listening)
                + clb_band(reading)
                + clb_band(writing)
                + clb_band(speaking)) as f32
                / 4.0;

            if avg_clb >= 9.0 {
                sheet.add(25);
            } else if avg_clb >= 7.0 {
                sheet.add(20);
            } else if avg_clb >= 5.0 {
                sheet.add(10);
            }

            if avg_clb < 7.0 {
                sheet.require("Minimum CLB 7 language proficiency (FSW program)");
            }
            if avg_clb < 9.0 {
                sheet.suggest("Improve language scores to CLB 9+ for maximum CRS points");
            }
        }
        None => sheet.require("Valid IELTS General or CELPIP test (less than 2 years old)"),
    }

    if profile.has_job_offer {
        sheet.add(10);
    }
    if profile.has_canadian_experience {
        sheet.add(5);
    }
    if profile.has_canadian_relative {
        sheet.add(5);
    }

    let min_funds = if profile.marital_status == MaritalStatus::Married {
        FUNDS_MARRIED
    } else {
        FUNDS_SINGLE
    };
    if profile.available_funds >= min_funds {
        sheet.add(5);
    } else {
        sheet.require(format!("Proof of funds: ${} CAD", format_cad(min_funds)));
    }

    let eligible = sheet.score() >= 60 && sheet.missing_count() <= 2;

    if sheet.score() < 70 {
        sheet.suggest("Consider Provincial Nominee Program (PNP) for 600 additional CRS points");
    }
    if !profile.has_job_offer {
        sheet.suggest("Obtain a Canadian job offer for 50-200 additional CRS points");
    }

    let details = if eligible {
        let score = sheet.score();
        format!(
            "You have good prospects for Express Entry. Estimated CRS: {}-{} points.",
            i32::from(score) * 5,
            i32::from(score) * 6
        )
    } else {
        "You need to improve your profile to be competitive in Express Entry.".to_string()
    };

    PathwayResult::from_sheet(Pathway::ExpressEntry, sheet, eligible, details)
}
