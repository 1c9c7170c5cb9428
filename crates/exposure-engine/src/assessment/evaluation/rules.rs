use chrono::NaiveDate;

use super::super::domain::{ExperienceLevel, Profile, SeasonRole};
use super::bands::{AbilityBand, AcademicBand};
use super::tables::{ability_delta, academic_delta};
use super::vector::ScoreVector;

const D1_GPA_MINIMUM: f64 = 2.3;
const D2_GPA_MINIMUM: f64 = 2.2;
const D3_GPA_MINIMUM: f64 = 2.0;
const D1_CAP: i32 = 15;
const D2_CAP: i32 = 20;
const D3_CAP: i32 = 25;
const JUCO_FLOOR: i32 = 60;
const JUCO_BOOST: i32 = 20;

const HEAVY_MINUTES: f64 = 80.0;
const LIGHT_MINUTES: f64 = 20.0;
const MATURITY_AGE_YEARS: f64 = 18.5;

pub fn apply_ability_adjustments(scores: ScoreVector, band: AbilityBand) -> ScoreVector {
    scores + ability_delta(band)
}

pub fn apply_academic_adjustments(scores: ScoreVector, band: AcademicBand) -> ScoreVector {
    scores + academic_delta(band)
}

/// NCAA core-GPA minimums as hard ceilings, with JUCO lifted when D1 is out of
/// reach. A missing GPA is treated as failing every minimum.
pub fn apply_eligibility_caps(scores: ScoreVector, gpa: Option<f64>) -> ScoreVector {
    let gpa = gpa.unwrap_or(0.0);
    let mut result = scores;

    if gpa < D1_GPA_MINIMUM {
        result.d1 = result.d1.min(D1_CAP);
        result.juco = result.juco.max(JUCO_FLOOR).max(result.juco + JUCO_BOOST);
    }

    if gpa < D2_GPA_MINIMUM {
        result.d2 = result.d2.min(D2_CAP);
    }

    // NAIA is left alone: its "2 of 3" rule admits via test score or class rank.
    if gpa < D3_GPA_MINIMUM {
        result.d3 = result.d3.min(D3_CAP);
    }

    result
}

pub fn apply_minutes_bonus(scores: ScoreVector, profile: &Profile) -> ScoreVector {
    let mut result = scores;
    let Some(season) = profile.latest_season() else {
        return result;
    };

    if season.main_role == SeasonRole::KeyStarter && season.minutes_played_percent >= HEAVY_MINUTES
    {
        result.d1 += 5;
        result.d2 += 5;
    }

    if season.main_role == SeasonRole::Bench && season.minutes_played_percent <= LIGHT_MINUTES {
        result.d1 -= 10;
        result.d2 -= 5;
        result.d3 -= 5;
    }

    result
}

pub fn apply_experience_bonus(
    scores: ScoreVector,
    profile: &Profile,
    as_of: NaiveDate,
) -> ScoreVector {
    let mut result = scores;

    if profile
        .age_on(as_of)
        .is_some_and(|age| age > MATURITY_AGE_YEARS)
    {
        result.d1 += 5;
        result.d2 += 5;
        result.naia += 5;
    }

    let bonus = match profile.experience_level {
        ExperienceLevel::SemiPro | ExperienceLevel::ProAcademyReserve => {
            ScoreVector::new(15, 15, 0, 10, 0)
        }
        ExperienceLevel::InternationalAcademyU19 => ScoreVector::new(10, 10, 0, 5, 0),
        ExperienceLevel::AdultAmateurLeague => ScoreVector::new(0, 5, 0, 5, 0),
        ExperienceLevel::Elite
        | ExperienceLevel::High
        | ExperienceLevel::Moderate
        | ExperienceLevel::Developing
        | ExperienceLevel::YouthClubOnly
        | ExperienceLevel::HighSchoolVarsity
        | ExperienceLevel::Unknown => ScoreVector::default(),
    };

    result + bonus
}
