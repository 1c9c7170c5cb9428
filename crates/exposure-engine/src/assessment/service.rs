use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::Profile;
use super::evaluation::{ComputedScores, EvaluationConfig, EvaluationEngine};
use super::intake::{validate_intake, IntakeError};
use super::narrative::NarrativeGenerator;
use super::preview::quick_score;
use super::repository::{EvaluationId, EvaluationRecord, EvaluationRepository, RepositoryError};

/// Service composing intake validation, the engine, the narrator, and storage.
pub struct AnalysisService<R, N> {
    engine: Arc<EvaluationEngine>,
    repository: Arc<R>,
    narrator: Arc<N>,
}

static EVALUATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_evaluation_id() -> EvaluationId {
    let id = EVALUATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EvaluationId(format!("eval-{id:06}"))
}

impl<R, N> AnalysisService<R, N>
where
    R: EvaluationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    pub fn new(repository: Arc<R>, narrator: Arc<N>, config: EvaluationConfig) -> Self {
        Self {
            engine: Arc::new(EvaluationEngine::new(config)),
            repository,
            narrator,
        }
    }

    /// Scores without generating narrative or storing anything.
    pub fn score(&self, profile: &Profile) -> Result<ComputedScores, AnalysisServiceError> {
        validate_intake(profile)?;
        Ok(self.engine.score(profile))
    }

    pub fn quick_score(&self, profile: &Profile) -> Result<u8, AnalysisServiceError> {
        validate_intake(profile)?;
        Ok(quick_score(profile))
    }

    /// Full analysis: scores, narrative, and a stored record.
    ///
    /// A narrator failure is logged and the record is stored without narrative.
    pub fn analyze(&self, profile: Profile) -> Result<EvaluationRecord, AnalysisServiceError> {
        validate_intake(&profile)?;
        let scores = self.engine.score(&profile);

        let narrative = match self.narrator.generate(&profile, &scores) {
            Ok(narrative) => Some(narrative),
            Err(err) => {
                warn!(error = %err, "narrative generation failed; storing scores only");
                None
            }
        };

        let record = EvaluationRecord {
            id: next_evaluation_id(),
            created_at: Utc::now(),
            profile,
            scores,
            narrative,
        };

        let stored = self.repository.insert(record)?;
        info!(
            id = %stored.id.0,
            best_fit = stored.scores.best_fit().label(),
            "stored evaluation"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &EvaluationId) -> Result<EvaluationRecord, AnalysisServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<EvaluationRecord>, AnalysisServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
