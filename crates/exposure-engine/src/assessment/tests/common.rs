use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::assessment::domain::{
    AthleticProfile, AthleticRating, ExperienceLevel, Gender, MarketProfile, Position, Profile,
    SeasonRecord, SeasonRole, YouthLeague,
};
use crate::assessment::evaluation::{ComputedScores, EvaluationConfig, EvaluationEngine};
use crate::assessment::narrative::{Narrative, NarrativeError, NarrativeGenerator};
use crate::assessment::repository::{
    EvaluationId, EvaluationRecord, EvaluationRepository, RepositoryError,
};
use crate::assessment::{assessment_router, AnalysisService, TemplateNarrator};

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
}

pub(super) fn evaluation_config() -> EvaluationConfig {
    EvaluationConfig {
        reference_date: Some(reference_date()),
    }
}

pub(super) fn engine() -> EvaluationEngine {
    EvaluationEngine::new(evaluation_config())
}

pub(super) fn season(
    year: u16,
    leagues: &[YouthLeague],
    role: SeasonRole,
    minutes: f64,
) -> SeasonRecord {
    SeasonRecord {
        year,
        team_name: format!("Club {year}"),
        leagues: leagues.to_vec(),
        main_role: role,
        minutes_played_percent: minutes,
        goals: 4,
        assists: 6,
        honors: String::new(),
    }
}

/// Six-axis profile with `strong` axes rated Top 10% and the rest Average.
pub(super) fn athletic(strong: usize) -> AthleticProfile {
    let rating = |axis: usize| {
        if axis < strong {
            AthleticRating::Top10Percent
        } else {
            AthleticRating::Average
        }
    };
    AthleticProfile {
        speed: rating(0),
        strength: rating(1),
        endurance: rating(2),
        work_rate: rating(3),
        technical: rating(4),
        tactical: rating(5),
    }
}

/// MLS NEXT rotation player with a high self-assessment, 3.8 GPA, a video,
/// and a healthy outreach funnel. No birth date, so no age bonus.
pub(super) fn profile() -> Profile {
    Profile {
        first_name: "Jordan".to_string(),
        last_name: "Reyes".to_string(),
        email: Some("jordan@example.com".to_string()),
        gender: Gender::Male,
        date_of_birth: None,
        citizenship: Some("US".to_string()),
        experience_level: ExperienceLevel::YouthClubOnly,
        position: Position::CM,
        secondary_positions: vec![Position::CDM],
        grad_year: 2026,
        state: "TX".to_string(),
        seasons: vec![season(
            2025,
            &[YouthLeague::MlsNext],
            SeasonRole::Rotation,
            75.0,
        )],
        gpa: Some(3.8),
        test_score: None,
        athletic_profile: Some(athletic(4)),
        market: MarketProfile {
            has_video: true,
            coaches_contacted: 15,
            responses_received: 3,
            offers_received: 1,
        },
    }
}

/// High-school-only player with no self-assessment and a 2.1 GPA.
pub(super) fn struggling_profile() -> Profile {
    Profile {
        seasons: vec![season(
            2025,
            &[YouthLeague::HighSchool],
            SeasonRole::Rotation,
            50.0,
        )],
        gpa: Some(2.1),
        athletic_profile: None,
        ..profile()
    }
}

pub(super) fn build_service() -> (
    AnalysisService<MemoryRepository, TemplateNarrator>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AnalysisService::new(
        repository.clone(),
        Arc::new(TemplateNarrator),
        evaluation_config(),
    );
    (service, repository)
}

pub(super) fn router_with_service(
    service: AnalysisService<MemoryRepository, TemplateNarrator>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<EvaluationId, EvaluationRecord>>>,
    order: Arc<Mutex<Vec<EvaluationId>>>,
}

impl EvaluationRepository for MemoryRepository {
    fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        self.order
            .lock()
            .expect("order mutex poisoned")
            .push(record.id.clone());
        Ok(record)
    }

    fn fetch(&self, id: &EvaluationId) -> Result<Option<EvaluationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let order = self.order.lock().expect("order mutex poisoned");
        Ok(order
            .iter()
            .rev()
            .filter_map(|id| guard.get(id).cloned())
            .take(limit)
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl EvaluationRepository for UnavailableRepository {
    fn insert(&self, _record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &EvaluationId) -> Result<Option<EvaluationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct OfflineNarrator;

impl NarrativeGenerator for OfflineNarrator {
    fn generate(
        &self,
        _profile: &Profile,
        _scores: &ComputedScores,
    ) -> Result<Narrative, NarrativeError> {
        Err(NarrativeError::Unavailable("model timeout".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
