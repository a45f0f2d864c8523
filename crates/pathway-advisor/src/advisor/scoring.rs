//! Helpers shared by every pathway evaluator.

use chrono::{Datelike, NaiveDate};

/// Whole years between `birth_date` and `as_of`, minus one when the
/// anniversary has not yet occurred in the `as_of` year.
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Maps a band-9-scale skill score to a standardized 0-10 proficiency level.
///
/// The cutoff table is reproduced as published: 7.0 through 8.0 all land on
/// level 9, and anything under 4.5 collapses to 0.
pub fn clb_band(raw: f32) -> u8 {
    if raw >= 8.5 {
        10
    } else if raw >= 8.0 {
        9
    } else if raw >= 7.5 {
        9
    } else if raw >= 7.0 {
        9
    } else if raw >= 6.5 {
        8
    } else if raw >= 6.0 {
        7
    } else if raw >= 5.5 {
        6
    } else if raw >= 5.0 {
        5
    } else if raw >= 4.5 {
        4
    } else {
        0
    }
}

/// Dollar amount with thousands separators, the way the intake UI renders
/// funds thresholds.
pub fn format_cad(amount: u32) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

/// Accumulator every evaluator runs its rules against: a point total plus
/// ordered hard-requirement and recommendation lists. A single rule may
/// touch more than one of the three.
#[derive(Debug, Default)]
pub struct ScoreSheet {
    score: i16,
    missing: Vec<String>,
    recommendations: Vec<String>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: i16) {
        self.score += points;
    }

    /// Record a hard requirement the profile does not meet.
    pub fn require(&mut self, requirement: impl Into<String>) {
        self.missing.push(requirement.into());
    }

    /// Record a soft, non-blocking improvement suggestion.
    pub fn suggest(&mut self, recommendation: impl Into<String>) {
        self.recommendations.push(recommendation.into());
    }

    pub fn score(&self) -> i16 {
        self.score
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn into_parts(self) -> (i16, Vec<String>, Vec<String>) {
        (self.score, self.missing, self.recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn age_counts_completed_years() {
        let as_of = date(2026, 6, 15);
        assert_eq!(age_on(date(1996, 6, 15), as_of), 30);
        assert_eq!(age_on(date(1996, 6, 16), as_of), 29);
        assert_eq!(age_on(date(1996, 1, 1), as_of), 30);
        assert_eq!(age_on(date(1996, 12, 31), as_of), 29);
    }

    #[test]
    fn age_handles_year_boundaries() {
        assert_eq!(age_on(date(2000, 1, 1), date(2026, 1, 1)), 26);
        assert_eq!(age_on(date(2000, 12, 31), date(2026, 1, 1)), 25);
    }

    #[test]
    fn band_boundaries_match_published_table() {
        assert_eq!(clb_band(9.0), 10);
        assert_eq!(clb_band(8.5), 10);
        assert_eq!(clb_band(8.0), 9);
        assert_eq!(clb_band(7.5), 9);
        assert_eq!(clb_band(7.0), 9);
        assert_eq!(clb_band(6.5), 8);
        assert_eq!(clb_band(6.0), 7);
        assert_eq!(clb_band(5.5), 6);
        assert_eq!(clb_band(5.0), 5);
        assert_eq!(clb_band(4.5), 4);
        assert_eq!(clb_band(4.4), 0);
        assert_eq!(clb_band(0.0), 0);
    }

    #[test]
    fn cad_formatting_groups_thousands() {
        assert_eq!(format_cad(0), "0");
        assert_eq!(format_cad(950), "950");
        assert_eq!(format_cad(14_700), "14,700");
        assert_eq!(format_cad(35_635), "35,635");
        assert_eq!(format_cad(1_234_567), "1,234,567");
    }

    #[test]
    fn sheet_accumulates_in_order() {
        let mut sheet = ScoreSheet::new();
        sheet.add(40);
        sheet.require("first gap");
        sheet.suggest("first idea");
        sheet.add(-5);
        sheet.require("second gap");

        assert_eq!(sheet.score(), 35);
        assert_eq!(sheet.missing_count(), 2);
        let (score, missing, recommendations) = sheet.into_parts();
        assert_eq!(score, 35);
        assert_eq!(missing, vec!["first gap", "second gap"]);
        assert_eq!(recommendations, vec!["first idea"]);
    }
}
