mod bands;
mod benchmark;
mod config;
mod funnel;
mod policy;
mod readiness;
mod rules;
mod tables;
mod vector;

pub use bands::{
    classify_ability_band, classify_academic_band, classify_league_tier, league_tier_for,
    AbilityBand, AcademicBand, LeagueTier,
};
pub use benchmark::{compute_benchmarks, BenchmarkCategory, BenchmarkMetric, BenchmarkStanding};
pub use config::EvaluationConfig;
pub use funnel::{compute_funnel, FunnelAnalysis, FunnelStage};
pub use policy::{
    apply_multipliers, outreach_multiplier, video_multiplier, OutreachAssessment, OutreachTag,
};
pub use readiness::{compute_readiness, ReadinessScore};
pub use rules::{
    apply_ability_adjustments, apply_academic_adjustments, apply_eligibility_caps,
    apply_experience_bonus, apply_minutes_bonus,
};
pub use tables::{ability_delta, academic_delta, base_scores};
pub use vector::ScoreVector;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{CollegeLevel, Profile};

/// Stateless evaluator turning an intake profile into fit scores.
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Scores against the configured reference date, falling back to today.
    pub fn score(&self, profile: &Profile) -> ComputedScores {
        let as_of = self
            .config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());
        self.score_as_of(profile, as_of)
    }

    pub fn score_as_of(&self, profile: &Profile, as_of: NaiveDate) -> ComputedScores {
        let league_tier = classify_league_tier(profile);
        let ability_band = classify_ability_band(profile);
        let academic_band = classify_academic_band(profile.gpa);
        debug!(?league_tier, ?ability_band, ?academic_band, "classified profile");

        let on_paper_fit = on_paper_fit(profile, league_tier, ability_band, academic_band, as_of);

        let video_multiplier = video_multiplier(profile.market.has_video);
        let OutreachAssessment {
            multiplier: outreach_multiplier,
            tag: outreach_tag,
        } = outreach_multiplier(&profile.market);
        let visibility = apply_multipliers(on_paper_fit, video_multiplier, outreach_multiplier);

        ComputedScores {
            league_tier,
            ability_band,
            academic_band,
            on_paper_fit,
            visibility,
            visibility_scores: visibility_breakdown(
                on_paper_fit,
                visibility,
                video_multiplier,
                outreach_multiplier,
            ),
            readiness: compute_readiness(profile, ability_band, academic_band),
            benchmarks: compute_benchmarks(league_tier, ability_band, academic_band),
            funnel: compute_funnel(&profile.market),
            video_multiplier,
            outreach_multiplier,
            outreach_tag,
        }
    }
}

/// Additive pipeline up to the clamp: base table, ability, academics,
/// eligibility caps, minutes, experience.
fn on_paper_fit(
    profile: &Profile,
    league: LeagueTier,
    ability: AbilityBand,
    academic: AcademicBand,
    as_of: NaiveDate,
) -> ScoreVector {
    let scores = base_scores(league, profile.gender);
    let scores = apply_ability_adjustments(scores, ability);
    let scores = apply_academic_adjustments(scores, academic);
    let scores = apply_eligibility_caps(scores, profile.gpa);
    let scores = apply_minutes_bonus(scores, profile);
    let scores = apply_experience_bonus(scores, profile, as_of);
    scores.clamped()
}

fn visibility_breakdown(
    on_paper: ScoreVector,
    visibility: ScoreVector,
    video: f64,
    outreach: f64,
) -> Vec<VisibilityScore> {
    CollegeLevel::ALL
        .into_iter()
        .map(|level| VisibilityScore {
            level,
            visibility_percent: visibility.get(level),
            on_paper_fit: on_paper.get(level),
            notes: format!(
                "Base: {}, Video: {}x, Outreach: {}x",
                on_paper.get(level),
                video,
                outreach
            ),
        })
        .collect()
}

/// Per-level visibility entry for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityScore {
    pub level: CollegeLevel,
    pub visibility_percent: i32,
    pub on_paper_fit: i32,
    pub notes: String,
}

/// Complete engine output for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedScores {
    pub league_tier: LeagueTier,
    pub ability_band: AbilityBand,
    pub academic_band: AcademicBand,
    pub on_paper_fit: ScoreVector,
    pub visibility: ScoreVector,
    pub visibility_scores: Vec<VisibilityScore>,
    pub readiness: ReadinessScore,
    pub benchmarks: Vec<BenchmarkMetric>,
    pub funnel: FunnelAnalysis,
    pub video_multiplier: f64,
    pub outreach_multiplier: f64,
    pub outreach_tag: Option<OutreachTag>,
}

impl ComputedScores {
    /// Level with the highest final visibility; ties go to the more competitive tier.
    pub fn best_fit(&self) -> CollegeLevel {
        let mut best = (CollegeLevel::D1, self.visibility.d1);
        for (level, score) in self.visibility.iter().skip(1) {
            if score > best.1 {
                best = (level, score);
            }
        }
        best.0
    }
}
