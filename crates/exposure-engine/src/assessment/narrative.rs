use serde::{Deserialize, Serialize};

use super::domain::{CollegeLevel, Profile};
use super::evaluation::{
    AbilityBand, AcademicBand, ComputedScores, FunnelStage, LeagueTier, OutreachTag,
};

/// Text collaborator fed with the profile and the engine output.
///
/// Implementations must describe `scores.best_fit()` as the best-fit level;
/// the engine does not check what they write.
pub trait NarrativeGenerator: Send + Sync {
    fn generate(
        &self,
        profile: &Profile,
        scores: &ComputedScores,
    ) -> Result<Narrative, NarrativeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative backend unavailable: {0}")]
    Unavailable(String),
    #[error("narrative backend returned an invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub summary: String,
    pub key_strengths: Vec<String>,
    pub key_risks: Vec<RiskItem>,
    pub action_plan: ActionPlan,
    pub coach_evaluation: String,
    pub best_fit: BestFitDivision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskItem {
    pub risk: String,
    pub mitigation: String,
}

/// Actions bucketed by horizon: next 30 days, next 90 days, next 12 months.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestFitDivision {
    pub level: CollegeLevel,
    pub reasoning: String,
}

/// Deterministic narrator assembled from bands, tags, and funnel stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl NarrativeGenerator for TemplateNarrator {
    fn generate(
        &self,
        profile: &Profile,
        scores: &ComputedScores,
    ) -> Result<Narrative, NarrativeError> {
        let best = scores.best_fit();
        let best_visibility = scores.visibility.get(best);
        let best_on_paper = scores.on_paper_fit.get(best);

        let key_risks = risks(profile, scores);
        let action_plan = action_plan(profile, scores, best, &key_risks);

        let summary = format!(
            "{} {} projects best at {} with {}% current visibility ({}% on paper). \
             League tier {}, ability band {}, academic band {}; outreach funnel stage {}.",
            profile.first_name,
            profile.last_name,
            best.label(),
            best_visibility,
            best_on_paper,
            scores.league_tier.label(),
            scores.ability_band.label(),
            scores.academic_band.label(),
            scores.funnel.stage.label(),
        );

        let coach_evaluation = format!(
            "{}, class of {}. {} league exposure, {} ability, readiness {}/100. Best fit: {}.",
            profile.position.label(),
            profile.grad_year,
            scores.league_tier.label(),
            scores.ability_band.label(),
            scores.readiness.overall(),
            best.label(),
        );

        let reasoning = if best_visibility < best_on_paper {
            format!(
                "Highest visibility at {best_visibility}%; fixing video and outreach would lift it toward {best_on_paper}%"
            )
        } else {
            format!("Highest visibility at {best_visibility}% with no marketing penalty applied")
        };

        Ok(Narrative {
            summary,
            key_strengths: strengths(profile, scores),
            key_risks,
            action_plan,
            coach_evaluation,
            best_fit: BestFitDivision {
                level: best,
                reasoning,
            },
        })
    }
}

fn strengths(profile: &Profile, scores: &ComputedScores) -> Vec<String> {
    let mut strengths = Vec::new();

    match scores.league_tier {
        LeagueTier::Elite => strengths.push("Plays at the top tier of youth soccer".to_string()),
        LeagueTier::High => strengths.push("Competes in a nationally scouted league".to_string()),
        LeagueTier::Mid | LeagueTier::Low => {}
    }

    if scores.ability_band == AbilityBand::High {
        strengths.push("Athletic profile rated near the top of the scale".to_string());
    }

    if let (Some(gpa), AcademicBand::High | AcademicBand::Solid) =
        (profile.gpa, scores.academic_band)
    {
        strengths.push(format!("{gpa:.2} GPA keeps academically selective programs open"));
    }

    if profile.market.has_video {
        strengths.push("Highlight video available for coaches".to_string());
    }

    if matches!(
        scores.funnel.stage,
        FunnelStage::Evaluation | FunnelStage::Closing
    ) {
        strengths.push(format!(
            "Already holding {} offer(s)",
            profile.market.offers_received
        ));
    }

    strengths
}

fn risks(profile: &Profile, scores: &ComputedScores) -> Vec<RiskItem> {
    let mut risks = Vec::new();

    if !profile.market.has_video {
        risks.push(RiskItem {
            risk: "No highlight video; coaches cannot evaluate without one".to_string(),
            mitigation: "Cut a 3-6 minute video leading with your five best plays".to_string(),
        });
    }

    match scores.outreach_tag {
        Some(OutreachTag::Invisible) => risks.push(RiskItem {
            risk: "No coaches contacted yet".to_string(),
            mitigation: "Email 10-20 programs at your best-fit level".to_string(),
        }),
        Some(OutreachTag::Spamming) => risks.push(RiskItem {
            risk: format!(
                "Reply rate under 5% across {} contacts",
                profile.market.coaches_contacted
            ),
            mitigation: "Target fewer, fit-appropriate programs with personalised emails"
                .to_string(),
        }),
        Some(OutreachTag::TalentGap) => risks.push(RiskItem {
            risk: "Coaches respond but no offers follow".to_string(),
            mitigation: "Attend ID camps for the interested programs to be seen live".to_string(),
        }),
        None => {}
    }

    if matches!(
        scores.academic_band,
        AcademicBand::Risky | AcademicBand::Problem
    ) {
        risks.push(RiskItem {
            risk: "GPA limits NCAA eligibility".to_string(),
            mitigation: "Raise core-course grades above the 2.3 D1 minimum".to_string(),
        });
    }

    if scores.ability_band == AbilityBand::Low {
        risks.push(RiskItem {
            risk: "Limited minutes or ability ratings for higher divisions".to_string(),
            mitigation: "Earn a starting role and document minutes this season".to_string(),
        });
    }

    risks
}

fn action_plan(
    profile: &Profile,
    scores: &ComputedScores,
    best: CollegeLevel,
    risks: &[RiskItem],
) -> ActionPlan {
    let mut plan = ActionPlan {
        immediate: risks.iter().map(|risk| risk.mitigation.clone()).collect(),
        ..ActionPlan::default()
    };

    plan.short_term.push(scores.funnel.advice.clone());
    plan.short_term.push(format!(
        "Build a target list weighted toward {} programs",
        best.label()
    ));

    if scores.academic_band != AcademicBand::High {
        plan.long_term
            .push("Keep GPA trending up to widen academic options".to_string());
    }
    plan.long_term.push(format!(
        "Plan official visits before signing day for the class of {}",
        profile.grad_year
    ));

    plan
}
