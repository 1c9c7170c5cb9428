use super::domain::{Profile, YouthLeague};

const BASELINE: i32 = 50;

fn league_points(league: YouthLeague) -> i32 {
    match league {
        YouthLeague::MlsNext => 30,
        YouthLeague::Ecnl => 25,
        YouthLeague::GirlsAcademy => 22,
        YouthLeague::UslAcademy => 20,
        YouthLeague::UsysNational => 15,
        YouthLeague::EcnlRegional => 12,
        YouthLeague::Npl => 10,
        YouthLeague::HighSchool => 5,
        YouthLeague::ClubLocal => 3,
        YouthLeague::Other => 2,
        YouthLeague::Recreational => 1,
        YouthLeague::UsysNationalLeague | YouthLeague::EliteLocal => 0,
    }
}

/// Single 0-100 preview number for intake screens that skip the full analysis.
/// Unlike the engine it looks at every season, not just the latest.
pub fn quick_score(profile: &Profile) -> u8 {
    let mut score = BASELINE;

    score += profile
        .seasons
        .iter()
        .flat_map(|season| season.leagues.iter())
        .map(|league| league_points(*league))
        .max()
        .unwrap_or(0);

    let market = &profile.market;
    if market.has_video {
        score += 10;
    }
    if market.coaches_contacted > 20 {
        score += 5;
    }
    if market.responses_received > 5 {
        score += 5;
    }

    if let Some(gpa) = profile.gpa {
        if gpa >= 3.5 {
            score += 5;
        }
        if gpa >= 3.0 {
            score += 3;
        }
    }

    score.clamp(0, 100) as u8
}
