//! Fixed scoring policy tables.
//!
//! Base vectors differ by cohort because the D1 pool is much larger on the
//! women's side. Ability deltas move the *peak* of the fit curve rather than
//! penalising lower tiers, and academic deltas favour D3, where academic aid
//! replaces athletic scholarships.

use super::super::domain::Gender;
use super::bands::{AbilityBand, AcademicBand, LeagueTier};
use super::vector::ScoreVector;

pub fn base_scores(tier: LeagueTier, gender: Gender) -> ScoreVector {
    match gender {
        Gender::Male => match tier {
            LeagueTier::Elite => ScoreVector::new(70, 60, 40, 30, 20),
            LeagueTier::High => ScoreVector::new(30, 50, 60, 40, 30),
            LeagueTier::Mid => ScoreVector::new(15, 35, 55, 45, 35),
            LeagueTier::Low => ScoreVector::new(5, 20, 40, 45, 50),
        },
        Gender::Female => match tier {
            LeagueTier::Elite => ScoreVector::new(80, 65, 45, 30, 20),
            LeagueTier::High => ScoreVector::new(35, 55, 60, 40, 30),
            LeagueTier::Mid => ScoreVector::new(15, 35, 60, 45, 35),
            LeagueTier::Low => ScoreVector::new(5, 20, 45, 45, 50),
        },
    }
}

pub fn ability_delta(band: AbilityBand) -> ScoreVector {
    match band {
        AbilityBand::High => ScoreVector::new(15, 5, -10, -15, -20),
        AbilityBand::Medium => ScoreVector::new(-20, 10, 15, 5, 0),
        AbilityBand::Low => ScoreVector::new(-40, -25, 10, 20, 25),
    }
}

pub fn academic_delta(band: AcademicBand) -> ScoreVector {
    match band {
        AcademicBand::High => ScoreVector::new(5, 5, 20, 0, -10),
        AcademicBand::Solid => ScoreVector::new(0, 5, 10, 0, -5),
        AcademicBand::Risky => ScoreVector::new(-10, -5, -5, 5, 10),
        AcademicBand::Problem => ScoreVector::new(-25, -20, -15, 10, 25),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn women_elite_d1_base_exceeds_men() {
        let men = base_scores(LeagueTier::Elite, Gender::Male);
        let women = base_scores(LeagueTier::Elite, Gender::Female);
        assert!(women.d1 > men.d1);
    }

    #[test]
    fn raising_ability_moves_peak_toward_d1() {
        let low = ability_delta(AbilityBand::Low);
        let high = ability_delta(AbilityBand::High);
        assert!(high.d1 > low.d1);
        assert!(high.juco < low.juco);
    }
}
