use serde::{Deserialize, Serialize};

use super::super::domain::{MarketProfile, Profile};
use super::bands::{AbilityBand, AcademicBand};

const NEUTRAL_RATING_POINTS: u8 = 50;
const PRO_TACTICAL_BONUS: u8 = 10;

/// Readiness per dimension, each 0-100. Independent of visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessScore {
    pub athletic: u8,
    pub technical: u8,
    pub tactical: u8,
    pub academic: u8,
    pub market: u8,
}

impl ReadinessScore {
    /// Rounded mean of the five dimensions.
    pub fn overall(&self) -> u8 {
        let total = u32::from(self.athletic)
            + u32::from(self.technical)
            + u32::from(self.tactical)
            + u32::from(self.academic)
            + u32::from(self.market);
        ((total as f64) / 5.0).round() as u8
    }
}

fn athletic_points(band: AbilityBand) -> u8 {
    match band {
        AbilityBand::High => 95,
        AbilityBand::Medium => 75,
        AbilityBand::Low => 40,
    }
}

fn academic_points(band: AcademicBand) -> u8 {
    match band {
        AcademicBand::High => 95,
        AcademicBand::Solid => 80,
        AcademicBand::Risky => 65,
        AcademicBand::Problem => 40,
    }
}

fn market_points(market: &MarketProfile) -> u8 {
    let video = if market.has_video { 50 } else { 10 };

    let outreach = if market.coaches_contacted == 0 {
        10
    } else if market.coaches_contacted < 10 {
        25
    } else if market.responses_received > 0 {
        let rate = f64::from(market.responses_received) / f64::from(market.coaches_contacted);
        if rate > 0.1 {
            50
        } else {
            35
        }
    } else {
        30
    };

    video + outreach
}

pub fn compute_readiness(
    profile: &Profile,
    ability: AbilityBand,
    academic: AcademicBand,
) -> ReadinessScore {
    let (technical, tactical) = match &profile.athletic_profile {
        Some(athletic) => {
            let mut tactical = athletic.tactical.points();
            if profile.experience_level.is_professional() {
                tactical = (tactical + PRO_TACTICAL_BONUS).min(100);
            }
            (athletic.technical.points(), tactical)
        }
        None => (NEUTRAL_RATING_POINTS, NEUTRAL_RATING_POINTS),
    };

    ReadinessScore {
        athletic: athletic_points(ability),
        technical,
        tactical,
        academic: academic_points(academic),
        market: market_points(&profile.market),
    }
}
