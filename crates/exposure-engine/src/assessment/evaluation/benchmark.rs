use serde::{Deserialize, Serialize};

use super::bands::{AbilityBand, AcademicBand, LeagueTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenchmarkCategory {
    Exposure,
    Competition,
    Academics,
}

impl BenchmarkCategory {
    pub const fn label(self) -> &'static str {
        match self {
            BenchmarkCategory::Exposure => "Exposure",
            BenchmarkCategory::Competition => "Competition",
            BenchmarkCategory::Academics => "Academics",
        }
    }

    /// Reference averages for recruited D1 and D3 players.
    const fn references(self) -> (u8, u8) {
        match self {
            BenchmarkCategory::Exposure => (90, 65),
            BenchmarkCategory::Competition => (85, 65),
            BenchmarkCategory::Academics => (85, 75),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkStanding {
    AtOrAboveD1,
    BetweenD1AndD3,
    BelowD3,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkMetric {
    pub category: BenchmarkCategory,
    pub user_score: u8,
    pub d1_average: u8,
    pub d3_average: u8,
    pub standing: BenchmarkStanding,
    pub feedback: String,
}

impl BenchmarkMetric {
    fn new(category: BenchmarkCategory, user_score: u8) -> Self {
        let (d1_average, d3_average) = category.references();
        let standing = if user_score >= d1_average {
            BenchmarkStanding::AtOrAboveD1
        } else if user_score >= d3_average {
            BenchmarkStanding::BetweenD1AndD3
        } else {
            BenchmarkStanding::BelowD3
        };

        let label = category.label();
        let feedback = match standing {
            BenchmarkStanding::AtOrAboveD1 => format!("{label} level at or above D1 average"),
            BenchmarkStanding::BetweenD1AndD3 => {
                format!("{label} level between D1 and D3 average")
            }
            BenchmarkStanding::BelowD3 => format!("{label} level below D3 average"),
        };

        Self {
            category,
            user_score,
            d1_average,
            d3_average,
            standing,
            feedback,
        }
    }
}

pub fn compute_benchmarks(
    league: LeagueTier,
    ability: AbilityBand,
    academic: AcademicBand,
) -> Vec<BenchmarkMetric> {
    let exposure = match league {
        LeagueTier::Elite => 95,
        LeagueTier::High => 75,
        LeagueTier::Mid => 55,
        LeagueTier::Low => 35,
    };
    let competition = match ability {
        AbilityBand::High => 95,
        AbilityBand::Medium => 70,
        AbilityBand::Low => 50,
    };
    let academics = match academic {
        AcademicBand::High => 95,
        AcademicBand::Solid => 80,
        AcademicBand::Risky => 60,
        AcademicBand::Problem => 40,
    };

    vec![
        BenchmarkMetric::new(BenchmarkCategory::Exposure, exposure),
        BenchmarkMetric::new(BenchmarkCategory::Competition, competition),
        BenchmarkMetric::new(BenchmarkCategory::Academics, academics),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standings_follow_reference_averages() {
        let metrics = compute_benchmarks(LeagueTier::High, AbilityBand::Low, AcademicBand::Solid);

        assert_eq!(metrics[0].user_score, 75);
        assert_eq!(metrics[0].standing, BenchmarkStanding::BetweenD1AndD3);
        assert_eq!(metrics[1].standing, BenchmarkStanding::BelowD3);
        assert_eq!(metrics[1].feedback, "Competition level below D3 average");
        assert_eq!(metrics[2].standing, BenchmarkStanding::BetweenD1AndD3);
    }

    #[test]
    fn top_bands_reach_d1_reference() {
        let metrics = compute_benchmarks(LeagueTier::Elite, AbilityBand::High, AcademicBand::High);
        assert!(metrics
            .iter()
            .all(|metric| metric.standing == BenchmarkStanding::AtOrAboveD1));
    }
}
