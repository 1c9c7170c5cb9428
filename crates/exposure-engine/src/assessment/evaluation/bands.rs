use serde::{Deserialize, Serialize};

use super::super::domain::{ExperienceLevel, Gender, Profile, SeasonRole, YouthLeague};

const UP_MINUTES_THRESHOLD: f64 = 70.0;
const DOWN_MINUTES_THRESHOLD: f64 = 30.0;

/// Competitive level of the player's most relevant season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeagueTier {
    Elite,
    High,
    Mid,
    Low,
}

impl LeagueTier {
    pub const fn label(self) -> &'static str {
        match self {
            LeagueTier::Elite => "Elite",
            LeagueTier::High => "High",
            LeagueTier::Mid => "Mid",
            LeagueTier::Low => "Low",
        }
    }

    const fn rank(self) -> u8 {
        match self {
            LeagueTier::Elite => 3,
            LeagueTier::High => 2,
            LeagueTier::Mid => 1,
            LeagueTier::Low => 0,
        }
    }
}

/// Self-assessed ability adjusted for playing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityBand {
    High,
    Medium,
    Low,
}

impl AbilityBand {
    pub const fn label(self) -> &'static str {
        match self {
            AbilityBand::High => "High",
            AbilityBand::Medium => "Medium",
            AbilityBand::Low => "Low",
        }
    }

    pub const fn step_up(self) -> Self {
        match self {
            AbilityBand::Low => AbilityBand::Medium,
            AbilityBand::Medium | AbilityBand::High => AbilityBand::High,
        }
    }

    pub const fn step_down(self) -> Self {
        match self {
            AbilityBand::High => AbilityBand::Medium,
            AbilityBand::Medium | AbilityBand::Low => AbilityBand::Low,
        }
    }
}

/// GPA band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcademicBand {
    High,
    Solid,
    Risky,
    Problem,
}

impl AcademicBand {
    pub const fn label(self) -> &'static str {
        match self {
            AcademicBand::High => "High",
            AcademicBand::Solid => "Solid",
            AcademicBand::Risky => "Risky",
            AcademicBand::Problem => "Problem",
        }
    }
}

/// Ranks a single league for the given gender's recruiting landscape.
pub fn league_tier_for(league: YouthLeague, gender: Gender) -> LeagueTier {
    match (gender, league) {
        (Gender::Male, YouthLeague::MlsNext | YouthLeague::Ecnl) => LeagueTier::Elite,
        (Gender::Female, YouthLeague::Ecnl | YouthLeague::GirlsAcademy) => LeagueTier::Elite,
        (
            _,
            YouthLeague::EcnlRegional | YouthLeague::UsysNationalLeague | YouthLeague::UslAcademy,
        ) => LeagueTier::High,
        (_, YouthLeague::Npl) => LeagueTier::Mid,
        (
            _,
            YouthLeague::MlsNext
            | YouthLeague::GirlsAcademy
            | YouthLeague::UsysNational
            | YouthLeague::HighSchool
            | YouthLeague::EliteLocal
            | YouthLeague::ClubLocal
            | YouthLeague::Recreational
            | YouthLeague::Other,
        ) => LeagueTier::Low,
    }
}

fn best_tier(leagues: &[YouthLeague], gender: Gender) -> LeagueTier {
    leagues
        .iter()
        .map(|league| league_tier_for(*league, gender))
        .max_by_key(|tier| tier.rank())
        .unwrap_or(LeagueTier::Low)
}

pub fn classify_league_tier(profile: &Profile) -> LeagueTier {
    match profile.experience_level {
        ExperienceLevel::ProAcademyReserve | ExperienceLevel::InternationalAcademyU19 => {
            return LeagueTier::Elite;
        }
        ExperienceLevel::SemiPro => {
            let elite_latest = profile.latest_season().is_some_and(|season| {
                best_tier(&season.leagues, profile.gender) == LeagueTier::Elite
            });
            return if elite_latest {
                LeagueTier::Elite
            } else {
                LeagueTier::High
            };
        }
        _ => {}
    }

    match profile.latest_season() {
        Some(season) => best_tier(&season.leagues, profile.gender),
        None => LeagueTier::Low,
    }
}

pub fn classify_ability_band(profile: &Profile) -> AbilityBand {
    let Some(athletic) = &profile.athletic_profile else {
        return AbilityBand::Low;
    };

    let ratings = athletic.ratings();
    let elite_count = ratings.iter().filter(|rating| rating.is_elite()).count();
    let weak_count = ratings.iter().filter(|rating| rating.is_weak()).count();

    let mut band = if elite_count >= 4 {
        AbilityBand::High
    } else if elite_count >= 2 && weak_count <= 1 {
        AbilityBand::Medium
    } else {
        AbilityBand::Low
    };

    // The down rule runs second so contradictory data ends lower.
    if let Some(season) = profile.latest_season() {
        if season.main_role == SeasonRole::KeyStarter
            && season.minutes_played_percent >= UP_MINUTES_THRESHOLD
        {
            band = band.step_up();
        }
        if season.main_role == SeasonRole::Bench
            || season.minutes_played_percent <= DOWN_MINUTES_THRESHOLD
        {
            band = band.step_down();
        }
    }

    band
}

/// Missing GPA lands in `Problem`, same as a failing one.
pub fn classify_academic_band(gpa: Option<f64>) -> AcademicBand {
    match gpa {
        Some(gpa) if gpa >= 3.7 => AcademicBand::High,
        Some(gpa) if gpa >= 3.0 => AcademicBand::Solid,
        Some(gpa) if gpa >= 2.5 => AcademicBand::Risky,
        _ => AcademicBand::Problem,
    }
}
