//! Goal-driven dispatch over the pathway evaluators.

use chrono::NaiveDate;

use crate::advisor::domain::{ApplicantProfile, PathwayGoal};
use crate::advisor::evaluation::{
    citizenship, express_entry, provincial, quebec, study, work, PathwayResult,
};

/// Contract shared by every pathway module: pure in the profile and the
/// evaluation date, no other inputs.
pub type Evaluator = fn(&ApplicantProfile, NaiveDate) -> PathwayResult;

const STUDY: &[Evaluator] = &[study::evaluate];
const WORK: &[Evaluator] = &[work::evaluate];
const PERMANENT_RESIDENCE: &[Evaluator] = &[express_entry::evaluate, provincial::evaluate];
const QUEBEC: &[Evaluator] = &[quebec::evaluate];
const CITIZENSHIP: &[Evaluator] = &[citizenship::evaluate];
const ALL: &[Evaluator] = &[
    study::evaluate,
    work::evaluate,
    express_entry::evaluate,
    provincial::evaluate,
    quebec::evaluate,
    citizenship::evaluate,
];

/// The evaluators a declared goal selects. An unrecognized goal maps to the
/// empty set, which callers must read as "no applicable pathway".
pub fn evaluators_for(goal: PathwayGoal) -> &'static [Evaluator] {
    match goal {
        PathwayGoal::Study => STUDY,
        PathwayGoal::Work => WORK,
        PathwayGoal::PermanentResidence => PERMANENT_RESIDENCE,
        PathwayGoal::Quebec => QUEBEC,
        PathwayGoal::Citizenship => CITIZENSHIP,
        PathwayGoal::All => ALL,
        PathwayGoal::Unrecognized => &[],
    }
}

/// Run every evaluator the profile's goal selects and rank the results by
/// readiness score, best first. The sort is stable, so tied pathways keep
/// registry order.
pub fn evaluate_all(profile: &ApplicantProfile, as_of: NaiveDate) -> Vec<PathwayResult> {
    let mut results: Vec<PathwayResult> = evaluators_for(profile.goal)
        .iter()
        .map(|evaluate| evaluate(profile, as_of))
        .collect();

    results.sort_by(|a, b| b.readiness_score.cmp(&a.readiness_score));
    results
}
