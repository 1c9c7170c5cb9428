use std::sync::Arc;

use super::common::*;
use crate::assessment::repository::{EvaluationId, EvaluationRepository, RepositoryError};
use crate::assessment::{AnalysisService, AnalysisServiceError, IntakeError, TemplateNarrator};

#[test]
fn analyze_stores_scores_and_narrative() {
    let (service, repository) = build_service();

    let record = service.analyze(profile()).expect("analysis succeeds");

    assert!(record.id.0.starts_with("eval-"));
    assert_eq!(record.id.0.len(), "eval-000001".len());
    let narrative = record.narrative.as_ref().expect("narrative present");
    assert_eq!(narrative.best_fit.level, record.scores.best_fit());

    let stored = repository
        .fetch(&record.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, record);
}

#[test]
fn analyze_keeps_scores_when_narrator_fails() {
    let repository = Arc::new(MemoryRepository::default());
    let service = AnalysisService::new(
        repository.clone(),
        Arc::new(OfflineNarrator),
        evaluation_config(),
    );

    let record = service.analyze(profile()).expect("analysis succeeds");

    assert!(record.narrative.is_none());
    assert_eq!(record.scores.on_paper_fit.d1, 90);
    assert!(repository
        .fetch(&record.id)
        .expect("fetch succeeds")
        .is_some());
}

#[test]
fn analyze_rejects_invalid_intake_before_storing() {
    let (service, repository) = build_service();
    let mut profile = profile();
    profile.first_name = "  ".to_string();

    match service.analyze(profile) {
        Err(AnalysisServiceError::Intake(IntakeError::MissingName { field: "firstName" })) => {}
        other => panic!("expected missing name, got {other:?}"),
    }
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}

#[test]
fn score_rejects_responses_above_contacts() {
    let (service, _) = build_service();
    let mut profile = profile();
    profile.market.responses_received = 20;

    match service.score(&profile) {
        Err(AnalysisServiceError::Intake(IntakeError::ResponsesExceedContacts {
            responses: 20,
            contacted: 15,
        })) => {}
        other => panic!("expected counter violation, got {other:?}"),
    }
}

#[test]
fn score_does_not_store_anything() {
    let (service, repository) = build_service();

    let scores = service.score(&profile()).expect("scores computed");

    assert_eq!(scores.best_fit().label(), "D1");
    assert!(repository
        .recent(10)
        .expect("recent succeeds")
        .is_empty());
}

#[test]
fn get_propagates_not_found() {
    let (service, _) = build_service();

    match service.get(&EvaluationId("eval-999999".to_string())) {
        Err(AnalysisServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn repository_failures_surface_from_analyze() {
    let service = AnalysisService::new(
        Arc::new(UnavailableRepository),
        Arc::new(TemplateNarrator),
        evaluation_config(),
    );

    match service.analyze(profile()) {
        Err(AnalysisServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}

#[test]
fn recent_lists_newest_first() {
    let (service, _) = build_service();
    let first = service.analyze(profile()).expect("first analysis");
    let second = service
        .analyze(struggling_profile())
        .expect("second analysis");

    let recent = service.recent(1).expect("recent succeeds");

    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].id, second.id);
    assert_ne!(recent[0].id, first.id);
}

#[test]
fn quick_score_validates_before_scoring() {
    let (service, _) = build_service();
    let mut profile = profile();
    profile.gpa = Some(6.2);

    assert!(matches!(
        service.quick_score(&profile),
        Err(AnalysisServiceError::Intake(IntakeError::GpaOutOfRange(_)))
    ));
}
