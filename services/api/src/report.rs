use chrono::{Local, NaiveDate};
use clap::Args;
use exposure_engine::assessment::{
    quick_score, validate_intake, CollegeLevel, ComputedScores, EvaluationEngine, Narrative,
    NarrativeGenerator, Profile, TemplateNarrator,
};
use exposure_engine::config::AppConfig;
use exposure_engine::error::AppError;
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Profile JSON file in the intake form format
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Print scores and narrative as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
    /// Date used for the age calculation (defaults to APP_REFERENCE_DATE, then today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        profile,
        json,
        as_of,
    } = args;

    let config = AppConfig::load()?;
    let profile = load_profile(&profile)?;
    validate_intake(&profile)?;

    let as_of = as_of
        .or(config.evaluation.reference_date)
        .unwrap_or_else(|| Local::now().date_naive());
    let scores = EvaluationEngine::new(config.evaluation).score_as_of(&profile, as_of);
    let narrative = match TemplateNarrator.generate(&profile, &scores) {
        Ok(narrative) => Some(narrative),
        Err(err) => {
            eprintln!("narrative unavailable: {err}");
            None
        }
    };

    if json {
        let payload = json!({
            "asOf": as_of,
            "quickScore": quick_score(&profile),
            "scores": scores,
            "narrative": narrative,
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => eprintln!("json output unavailable: {err}"),
        }
    } else {
        println!(
            "{}",
            render_report(&profile, &scores, narrative.as_ref(), as_of)
        );
    }

    Ok(())
}

pub(crate) fn load_profile(path: &Path) -> Result<Profile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| AppError::ProfileFile {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn render_report(
    profile: &Profile,
    scores: &ComputedScores,
    narrative: Option<&Narrative>,
    as_of: NaiveDate,
) -> String {
    let mut lines = vec![
        format!(
            "Exposure report for {} {} (class of {}, as of {})",
            profile.first_name, profile.last_name, profile.grad_year, as_of
        ),
        format!(
            "League tier: {} | Ability: {} | Academics: {}",
            scores.league_tier.label(),
            scores.ability_band.label(),
            scores.academic_band.label()
        ),
        String::new(),
        format!("{:<6}{:>10}{:>12}", "Level", "On paper", "Visibility"),
    ];

    for level in CollegeLevel::ALL {
        lines.push(format!(
            "{:<6}{:>10}{:>12}",
            level.label(),
            scores.on_paper_fit.get(level),
            scores.visibility.get(level)
        ));
    }

    let tag = scores
        .outreach_tag
        .map(|tag| tag.label())
        .unwrap_or("none");
    lines.push(String::new());
    lines.push(format!(
        "Multipliers: video {}x, outreach {}x (flag: {tag})",
        scores.video_multiplier, scores.outreach_multiplier
    ));
    lines.push(format!(
        "Funnel: {}, {} | {}",
        scores.funnel.stage.label(),
        scores.funnel.conversion_rate,
        scores.funnel.advice
    ));
    lines.push(format!("Readiness: {}/100", scores.readiness.overall()));
    lines.push(format!("Best fit: {}", scores.best_fit().label()));

    if let Some(narrative) = narrative {
        lines.push(String::new());
        lines.push(narrative.summary.clone());
        if !narrative.key_risks.is_empty() {
            lines.push("Risks:".to_string());
            for item in &narrative.key_risks {
                lines.push(format!("  - {} -> {}", item.risk, item.mitigation));
            }
        }
    }

    lines.join("\n")
}
