//! Counterfactual Simulator
//!
//! Runs the same scoring path twice (baseline, perturbed) and reports the
//! signed delta. No state survives between calls.

use super::types::{Simulation, WhatIf};
use super::GradeEngine;
use crate::error::EngineResult;
use crate::logic::explain::AttributionExplainer;
use crate::logic::features::StudentProfile;
use crate::logic::model::BaseRegressor;

impl WhatIf {
    pub fn is_empty(&self) -> bool {
        *self == WhatIf::default()
    }

    /// Perturbed copy of `baseline`; the baseline itself is untouched
    pub fn apply(&self, baseline: &StudentProfile) -> StudentProfile {
        let mut perturbed = baseline.clone();

        if let Some(study_time) = self.study_time {
            perturbed = perturbed.with_study_time(study_time);
        }
        if let Some(absences) = self.absences {
            perturbed = perturbed.with_absences(absences);
        }
        if let Some(social_activity) = self.social_activity {
            perturbed = perturbed.with_social_activity(social_activity);
        }
        if let Some(health) = self.health {
            perturbed = perturbed.with_health(health);
        }

        perturbed
    }
}

impl<R: BaseRegressor, E: AttributionExplainer> GradeEngine<R, E> {
    /// delta = perturbed - baseline, both policy-corrected and clamped
    pub fn simulate(
        &self,
        baseline: &StudentProfile,
        perturbed: &StudentProfile,
    ) -> EngineResult<Simulation> {
        let before = self.score(baseline)?;
        let after = self.score(perturbed)?;
        let simulation = Simulation::new(before.score, after.score);

        log::debug!(
            "Simulation: {:.3} -> {:.3} (delta {:+.3})",
            simulation.baseline_score,
            simulation.perturbed_score,
            simulation.delta
        );

        Ok(simulation)
    }

    /// Dashboard variant: perturb through the what-if sliders
    pub fn simulate_what_if(
        &self,
        baseline: &StudentProfile,
        what_if: &WhatIf,
    ) -> EngineResult<Simulation> {
        self.simulate(baseline, &what_if.apply(baseline))
    }
}
