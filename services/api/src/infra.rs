use chrono::NaiveDate;
use exposure_engine::assessment::{
    EvaluationId, EvaluationRecord, EvaluationRepository, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local evaluation store. Insertion order doubles as recency, so
/// `recent` never depends on how ids sort as strings.
#[derive(Default, Clone)]
pub(crate) struct InMemoryEvaluationRepository {
    records: Arc<Mutex<EvaluationLog>>,
}

#[derive(Default)]
struct EvaluationLog {
    by_id: HashMap<EvaluationId, EvaluationRecord>,
    order: Vec<EvaluationId>,
}

impl InMemoryEvaluationRepository {
    fn lock(&self) -> Result<MutexGuard<'_, EvaluationLog>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl EvaluationRepository for InMemoryEvaluationRepository {
    fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.by_id.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.order.push(record.id.clone());
        guard.by_id.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &EvaluationId) -> Result<Option<EvaluationRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.by_id.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .order
            .iter()
            .rev()
            .filter_map(|id| guard.by_id.get(id).cloned())
            .take(limit)
            .collect())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use exposure_engine::assessment::{
        EvaluationConfig, EvaluationEngine, ExperienceLevel, Gender, MarketProfile, Position,
        Profile,
    };

    fn record(id: &str) -> EvaluationRecord {
        let profile = Profile {
            first_name: "Riley".to_string(),
            last_name: "Chen".to_string(),
            email: None,
            gender: Gender::Female,
            date_of_birth: None,
            citizenship: None,
            experience_level: ExperienceLevel::HighSchoolVarsity,
            position: Position::RB,
            secondary_positions: Vec::new(),
            grad_year: 2027,
            state: "OR".to_string(),
            seasons: Vec::new(),
            gpa: Some(3.2),
            test_score: None,
            athletic_profile: None,
            market: MarketProfile::default(),
        };
        let as_of = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");
        let scores =
            EvaluationEngine::new(EvaluationConfig::default()).score_as_of(&profile, as_of);
        EvaluationRecord {
            id: EvaluationId(id.to_string()),
            created_at: chrono::Utc::now(),
            profile,
            scores,
            narrative: None,
        }
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let repository = InMemoryEvaluationRepository::default();
        repository.insert(record("eval-000001")).expect("first insert");

        assert!(matches!(
            repository.insert(record("eval-000001")),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn recent_returns_newest_first() {
        let repository = InMemoryEvaluationRepository::default();
        for id in ["eval-000001", "eval-000002", "eval-000003"] {
            repository.insert(record(id)).expect("insert succeeds");
        }

        let recent = repository.recent(2).expect("recent succeeds");
        let ids: Vec<_> = recent.iter().map(|record| record.id.0.as_str()).collect();

        assert_eq!(ids, ["eval-000003", "eval-000002"]);
    }

    #[test]
    fn recent_follows_insertion_order_past_six_digit_ids() {
        let repository = InMemoryEvaluationRepository::default();
        repository.insert(record("eval-999999")).expect("insert succeeds");
        repository.insert(record("eval-1000000")).expect("insert succeeds");

        let recent = repository.recent(1).expect("recent succeeds");

        assert_eq!(recent[0].id.0, "eval-1000000");
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2025-09-01 "),
            Ok(NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date"))
        );
        assert!(parse_date("09/01/2025").is_err());
    }
}
