//! Integration Tests for the Prediction Engine
//!
//! End-to-end pipeline behaviour: scenarios, bounds, override interplay,
//! degraded explanation and counterfactual consistency.

use std::sync::Arc;

use super::*;
use crate::error::EngineError;
use crate::logic::explain::{AttributionError, FactorConfig};
use crate::logic::features::{FeatureVector, StudentRecord};
use crate::logic::model::{LinearModel, ModelError, ModelMetadata};
use crate::logic::policy::{AdjustmentKind, OverrideConfig};
use crate::logic::test_support::{
    average_student, fixture_model, high_performer, high_performer_record, model_from,
};

const OVERRIDE_NOTE: &str = "Extreme Class Absences (Negative)";

fn engine() -> GradeEngine<LinearModel, LinearModel> {
    GradeEngine::new(fixture_model(), fixture_model(), EngineConfig::default()).unwrap()
}

fn engine_with(model: LinearModel) -> GradeEngine<LinearModel, LinearModel> {
    GradeEngine::new(model.clone(), model, EngineConfig::default()).unwrap()
}

struct Offline;

impl BaseRegressor for Offline {
    fn predict(&self, _vector: &FeatureVector) -> Result<f32, ModelError> {
        Err(ModelError::NotLoaded)
    }
}

struct NanModel;

impl BaseRegressor for NanModel {
    fn predict(&self, _vector: &FeatureVector) -> Result<f32, ModelError> {
        Ok(f32::NAN)
    }
}

struct BrokenExplainer;

impl AttributionExplainer for BrokenExplainer {
    fn attribute(&self, _vector: &FeatureVector) -> Result<Vec<f32>, AttributionError> {
        Err(AttributionError("explainer backend down".to_string()))
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_high_performer_scenario() {
    let result = engine().predict(&high_performer()).unwrap();

    assert!(result.score > 18.0 && result.score <= 20.0, "score {}", result.score);
    assert_eq!(result.adjustment.kind, AdjustmentKind::None);
    assert_eq!(
        result.factors,
        vec![
            "Internal Exam 2 (Positive)",
            "Internal Exam 1 (Positive)",
            "Study Time (Positive)",
        ]
    );
    assert!(!result.summary().contains("Absences"));
}

#[test]
fn test_extreme_absence_scenario() {
    let engine = engine();
    let baseline = engine.predict(&high_performer()).unwrap();
    let result = engine.predict(&high_performer().with_absences(25)).unwrap();

    assert!(result.score < baseline.score - 1.5, "{} vs {}", result.score, baseline.score);
    assert!(result.adjustment.is_penalty());
    assert_eq!(result.factors.len(), 4);
    assert_eq!(result.factors[0], OVERRIDE_NOTE);
    assert_eq!(result.factors[3], "Class Absences (Negative)");
    assert!(result.summary().starts_with(OVERRIDE_NOTE));
}

#[test]
fn test_renamed_exams_keep_other_display_names() {
    let config = EngineConfig::from_json(r#"{"names": {"G1": "Midterm 1", "G2": "Midterm 2"}}"#).unwrap();
    let engine = GradeEngine::new(fixture_model(), fixture_model(), config).unwrap();

    let result = engine.predict(&high_performer().with_absences(25)).unwrap();
    assert_eq!(
        result.factors,
        vec![
            OVERRIDE_NOTE,
            "Midterm 2 (Positive)",
            "Midterm 1 (Positive)",
            "Class Absences (Negative)",
        ]
    );
}

#[test]
fn test_oversized_factor_count_never_reaches_engine() {
    let config = EngineConfig {
        factors: FactorConfig { max_factors: 10, ..Default::default() },
        ..Default::default()
    };
    assert!(matches!(
        GradeEngine::new(fixture_model(), fixture_model(), config),
        Err(EngineError::InvalidConfig(_))
    ));
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_predict_is_deterministic() {
    let engine = engine();
    let first = engine.predict(&high_performer()).unwrap();

    for _ in 0..10 {
        let again = engine.predict(&high_performer()).unwrap();
        assert_eq!(again, first);
        assert_eq!(again.score.to_bits(), first.score.to_bits());
    }
}

#[test]
fn test_score_always_bounded() {
    let models = [
        fixture_model(),
        model_from(&[("G2", 3.0, 10.0)], 60.0),
        model_from(&[("absences", -2.0, 5.0)], -40.0),
    ];

    for model in models {
        let engine = engine_with(model);
        for absences in (0..=100).step_by(5) {
            for exam in [0.0, 10.0, 20.0] {
                let profile = high_performer().with_exams(exam, exam).with_absences(absences);
                let score = engine.predict(&profile).unwrap().score;
                assert!((0.0..=20.0).contains(&score), "score {} out of range", score);
            }
        }
    }
}

#[test]
fn test_extra_absences_never_raise_score_above_threshold() {
    let engine = engine();
    let mut previous = engine.score(&average_student().with_absences(16)).unwrap().score;

    for absences in 17..=60 {
        let score = engine.score(&average_student().with_absences(absences)).unwrap().score;
        assert!(score <= previous, "score rose at {} absences", absences);
        previous = score;
    }
}

#[test]
fn test_near_perfect_attendance_rewarded() {
    let engine = engine();
    let neutral = engine.score(&average_student()).unwrap();
    let perfect = engine.score(&average_student().with_absences(0)).unwrap();

    assert_eq!(neutral.adjustment.kind, AdjustmentKind::None);
    assert_eq!(perfect.adjustment.kind, AdjustmentKind::Bonus);
    assert!(perfect.score > neutral.score);
}

#[test]
fn test_low_absence_artifact_never_shown() {
    // Model that strongly blames low absence counts
    let engine = engine_with(model_from(&[("G2", 0.9, 10.7), ("absences", 1.0, 5.7)], 10.4));

    for absences in 0..5 {
        let profile = high_performer().with_absences(absences);
        let entries = engine.attributions(&profile).unwrap();
        let absence_entry = entries.iter().find(|e| e.feature == "absences").unwrap();
        assert!(absence_entry.contribution < 0.0);

        let result = engine.predict(&profile).unwrap();
        assert!(
            result.factors.iter().all(|f| !f.starts_with("Class Absences")),
            "{:?}",
            result.factors
        );
        assert_eq!(result.factors[0], "Internal Exam 2 (Positive)");
    }
}

#[test]
fn test_factor_count_bound() {
    let engine = engine();

    for absences in [0, 2, 8, 15, 16, 30, 100] {
        let result = engine.predict(&average_student().with_absences(absences)).unwrap();
        let notes = result.factors.iter().filter(|f| f.as_str() == OVERRIDE_NOTE).count();

        assert!(result.factors.len() <= 4);
        assert!(result.factors.len() - notes <= 3);
        if notes > 0 {
            assert_eq!(notes, 1);
            assert_eq!(result.factors[0], OVERRIDE_NOTE);
        }
    }
}

#[test]
fn test_bonus_does_not_add_note() {
    let result = engine().predict(&average_student().with_absences(0)).unwrap();
    assert_eq!(result.adjustment.kind, AdjustmentKind::Bonus);
    assert!(!result.factors.iter().any(|f| f == OVERRIDE_NOTE));
}

#[test]
fn test_attributions_explain_raw_model() {
    let profile = high_performer().with_absences(40);
    let corrected = engine();
    let uncorrected = GradeEngine::new(
        fixture_model(),
        fixture_model(),
        EngineConfig { policy: OverrideConfig::disabled(), ..Default::default() },
    )
    .unwrap();

    let with_policy = corrected.predict(&profile).unwrap();
    let without_policy = uncorrected.predict(&profile).unwrap();

    assert_eq!(with_policy.raw_score, without_policy.raw_score);
    assert!(with_policy.score < without_policy.score);
    // Same attribution-derived factors; the policy only adds the note
    assert_eq!(with_policy.factors[1..], without_policy.factors[..]);
    assert_eq!(
        corrected.attributions(&profile).unwrap(),
        uncorrected.attributions(&profile).unwrap()
    );
}

// ============================================================================
// ERRORS & DEGRADATION
// ============================================================================

#[test]
fn test_attribution_failure_degrades() {
    let degraded = GradeEngine::new(fixture_model(), BrokenExplainer, EngineConfig::default()).unwrap();

    let result = degraded.predict(&high_performer().with_absences(25)).unwrap();
    let full = engine().predict(&high_performer().with_absences(25)).unwrap();

    assert_eq!(result.score, full.score);
    assert!(result.factors.is_empty());
    assert!(matches!(
        degraded.attributions(&high_performer()),
        Err(EngineError::AttributionUnavailable(_))
    ));
}

#[test]
fn test_model_unavailable_is_fatal() {
    let offline = GradeEngine::new(Offline, fixture_model(), EngineConfig::default()).unwrap();
    let err = offline.predict(&high_performer()).unwrap_err();
    assert!(matches!(err, EngineError::ModelUnavailable(ModelError::NotLoaded)));
    assert_eq!(err.as_str(), "model_unavailable");

    let nan = GradeEngine::new(NanModel, fixture_model(), EngineConfig::default()).unwrap();
    assert!(matches!(
        nan.predict(&high_performer()),
        Err(EngineError::ModelUnavailable(ModelError::NonFinite(_)))
    ));
    assert!(nan.simulate(&high_performer(), &high_performer()).is_err());
}

#[test]
fn test_validation_error_surfaces() {
    let engine = engine();

    assert!(matches!(
        engine.predict(&high_performer().with_study_time(9)),
        Err(EngineError::Validation(_))
    ));

    let record = StudentRecord { goout: None, ..high_performer_record() };
    assert!(matches!(engine.predict_record(&record), Err(EngineError::Validation(_))));
    assert_eq!(
        engine.predict_record(&high_performer_record()).unwrap(),
        engine.predict(&high_performer()).unwrap()
    );
}

#[test]
fn test_invalid_config_rejected() {
    let config = EngineConfig {
        policy: OverrideConfig { max_grade: -5.0, ..Default::default() },
        ..Default::default()
    };
    assert!(matches!(
        GradeEngine::new(fixture_model(), fixture_model(), config),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn test_explain_disabled() {
    let config = EngineConfig { explain_enabled: false, ..Default::default() };
    let engine = GradeEngine::new(fixture_model(), BrokenExplainer, config).unwrap();

    let result = engine.predict(&high_performer().with_absences(30)).unwrap();
    assert!(result.factors.is_empty());
    assert!(result.adjustment.is_penalty());
}

// ============================================================================
// COUNTERFACTUAL SIMULATION
// ============================================================================

#[test]
fn test_simulate_identity_has_zero_delta() {
    let engine = engine();
    for profile in [high_performer(), average_student(), average_student().with_absences(40)] {
        let simulation = engine.simulate(&profile, &profile).unwrap();
        assert_eq!(simulation.delta, 0.0);
        assert_eq!(simulation.baseline_score, simulation.perturbed_score);
    }
}

#[test]
fn test_simulate_more_absences_not_positive() {
    let engine = engine();
    let baseline = average_student().with_absences(16);

    for absences in [17, 20, 35, 80] {
        let simulation = engine.simulate(&baseline, &baseline.with_absences(absences)).unwrap();
        assert!(simulation.delta <= 0.0, "delta {} at {}", simulation.delta, absences);
    }
}

#[test]
fn test_simulate_matches_predict() {
    let engine = engine();
    let perturbed = high_performer().with_absences(25);
    let simulation = engine.simulate(&high_performer(), &perturbed).unwrap();

    assert_eq!(simulation.baseline_score, engine.predict(&high_performer()).unwrap().score);
    assert_eq!(simulation.perturbed_score, engine.predict(&perturbed).unwrap().score);
    assert_eq!(simulation.delta, simulation.perturbed_score - simulation.baseline_score);
}

#[test]
fn test_simulate_has_no_residual_effects() {
    let engine = engine();
    let base = average_student();

    let first = engine.simulate(&base, &base.with_social_activity(5)).unwrap();
    engine.simulate(&base, &base.with_absences(60)).unwrap();
    engine.simulate(&base, &base.with_study_time(4)).unwrap();
    let again = engine.simulate(&base, &base.with_social_activity(5)).unwrap();

    assert_eq!(first, again);
    assert_eq!(base, average_student());
}

#[test]
fn test_what_if_sliders() {
    let engine = engine();
    let base = average_student();
    let what_if = WhatIf {
        study_time: Some(4),
        absences: Some(0),
        social_activity: None,
        health: Some(5),
    };

    let perturbed = what_if.apply(&base);
    assert_eq!(perturbed.study_time, 4);
    assert_eq!(perturbed.absences, 0);
    assert_eq!(perturbed.social_activity, base.social_activity);
    assert_eq!(perturbed.health, 5);

    let simulation = engine.simulate_what_if(&base, &what_if).unwrap();
    assert!(simulation.delta > 0.0);
    assert_eq!(simulation, engine.simulate(&base, &perturbed).unwrap());

    assert!(WhatIf::default().is_empty());
    assert_eq!(engine.simulate_what_if(&base, &WhatIf::default()).unwrap().delta, 0.0);
}

#[test]
fn test_what_if_out_of_range_is_validation_error() {
    let what_if = WhatIf { study_time: Some(7), ..Default::default() };
    assert!(matches!(
        engine().simulate_what_if(&average_student(), &what_if),
        Err(EngineError::Validation(_))
    ));
}

// ============================================================================
// SHARING
// ============================================================================

#[test]
fn test_concurrent_predictions_are_independent() {
    let model = Arc::new(fixture_model());
    let engine = GradeEngine::new(model.clone(), model, EngineConfig::default()).unwrap();
    let profiles: Vec<_> = (0..8u32).map(|i| average_student().with_absences(i * 7)).collect();
    let expected: Vec<_> = profiles.iter().map(|p| engine.predict(p).unwrap()).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = profiles
            .iter()
            .map(|profile| {
                let engine = &engine;
                scope.spawn(move || engine.predict(profile).unwrap())
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_shared_engine_from_bundle() {
    let model = Arc::new(fixture_model());
    let bundle = ModelBundle {
        regressor: model.clone(),
        explainer: model,
        metadata: ModelMetadata::new("<memory>", "linear"),
    };

    let engine = SharedGradeEngine::from_bundle(bundle, EngineConfig::default()).unwrap();
    assert_eq!(
        engine.predict(&high_performer()).unwrap(),
        self::engine().predict(&high_performer()).unwrap()
    );
}
