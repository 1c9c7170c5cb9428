//! Athlete exposure assessment: intake model, scoring engine, narrative
//! boundary, storage boundary, and the HTTP router that fronts them.

pub mod domain;
pub mod evaluation;
mod intake;
pub mod narrative;
mod preview;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AthleticProfile, AthleticRating, CollegeLevel, ExperienceLevel, Gender, MarketProfile,
    Position, Profile, SeasonRecord, SeasonRole, YouthLeague,
};
pub use evaluation::{ComputedScores, EvaluationConfig, EvaluationEngine, ScoreVector};
pub use intake::{validate_intake, IntakeError};
pub use narrative::{
    ActionPlan, BestFitDivision, Narrative, NarrativeError, NarrativeGenerator, RiskItem,
    TemplateNarrator,
};
pub use preview::quick_score;
pub use repository::{EvaluationId, EvaluationRecord, EvaluationRepository, RepositoryError};
pub use router::assessment_router;
pub use service::{AnalysisService, AnalysisServiceError};
