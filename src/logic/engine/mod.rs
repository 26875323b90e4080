//! Engine Module - Hybrid Grade Prediction & Explanation
//!
//! Composes the pipeline strictly forward:
//! profile → vector → {raw score, attributions} → override → factors.
//!
//! The engine holds only read-only collaborators and config, so one
//! instance can serve concurrent calls without synchronization.
//!
//! ## Usage
//! ```ignore
//! let engine = GradeEngine::new(model.clone(), model, EngineConfig::default())?;
//! let result = engine.predict(&profile)?;
//! let what_if = engine.simulate(&profile, &profile.with_absences(25))?;
//! ```

pub mod types;
pub mod simulator;
pub mod loader;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use types::{PredictionResult, Simulation, WhatIf};
pub use loader::{load_model, ModelBundle};

use crate::error::EngineResult;
use crate::logic::config::EngineConfig;
use crate::logic::explain::{attribute_entries, rank_factors, AttributionEntry, AttributionExplainer};
use crate::logic::features::{vectorize, FeatureVector, StudentProfile, StudentRecord};
use crate::logic::model::{raw_score, BaseRegressor};
use crate::logic::policy::{apply_override, OverrideOutcome};

/// Engine over shared trait objects (what `load_model` produces)
pub type SharedGradeEngine = GradeEngine<Arc<dyn BaseRegressor>, Arc<dyn AttributionExplainer>>;

pub struct GradeEngine<R, E> {
    regressor: R,
    explainer: E,
    config: EngineConfig,
}

impl SharedGradeEngine {
    pub fn from_bundle(bundle: ModelBundle, config: EngineConfig) -> EngineResult<Self> {
        Self::new(bundle.regressor, bundle.explainer, config)
    }
}

impl<R: BaseRegressor, E: AttributionExplainer> GradeEngine<R, E> {
    /// Config is validated once here, not per call
    pub fn new(regressor: R, explainer: E, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            regressor,
            explainer,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // PREDICTION
    // ========================================================================

    /// Score + explain one profile
    ///
    /// Scoring failures are fatal; explanation failures degrade to an
    /// empty factor list.
    pub fn predict(&self, profile: &StudentProfile) -> EngineResult<PredictionResult> {
        let vector = vectorize(profile)?;
        log::debug!("Feature vector: {}", vector.to_log_entry());
        let outcome = self.score_vector(&vector, profile.absences)?;

        let factors = if self.config.explain_enabled {
            self.explain(&vector, &outcome)
        } else {
            Vec::new()
        };

        log::debug!(
            "Prediction: raw {:.3} {} {:+.3} -> {:.3} ({} factors)",
            outcome.raw_score,
            outcome.adjustment.kind,
            outcome.adjustment.delta,
            outcome.score,
            factors.len()
        );

        Ok(PredictionResult {
            score: outcome.score,
            factors,
            raw_score: outcome.raw_score,
            adjustment: outcome.adjustment,
        })
    }

    /// Convert a storage row, then predict
    pub fn predict_record(&self, record: &StudentRecord) -> EngineResult<PredictionResult> {
        let profile = StudentProfile::try_from(record)?;
        self.predict(&profile)
    }

    /// Vectorize + regress + override, no explanation
    pub fn score(&self, profile: &StudentProfile) -> EngineResult<OverrideOutcome> {
        let vector = vectorize(profile)?;
        self.score_vector(&vector, profile.absences)
    }

    /// Raw attributions for a profile (errors are surfaced, not degraded)
    pub fn attributions(&self, profile: &StudentProfile) -> EngineResult<Vec<AttributionEntry>> {
        let vector = vectorize(profile)?;
        Ok(attribute_entries(&self.explainer, &vector)?)
    }

    fn score_vector(&self, vector: &FeatureVector, absences: u32) -> EngineResult<OverrideOutcome> {
        let raw = raw_score(&self.regressor, vector)?;
        Ok(apply_override(raw, absences, &self.config.policy))
    }

    /// Attributions explain the raw model on the same vector that was
    /// scored; the override only contributes the synthetic note.
    fn explain(&self, vector: &FeatureVector, outcome: &OverrideOutcome) -> Vec<String> {
        match attribute_entries(&self.explainer, vector) {
            Ok(entries) => rank_factors(
                &entries,
                outcome.adjustment.is_penalty(),
                &self.config.factors,
                &self.config.names,
            ),
            Err(e) => {
                log::warn!("Explanation unavailable ({}), returning score only", e);
                Vec::new()
            }
        }
    }
}
