use serde::{Deserialize, Serialize};

use crate::logic::policy::Adjustment;

/// Prediction output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Policy-corrected grade, always within [0, max_grade]
    pub score: f32,
    /// Display factors, strongest first (override note, if any, leads)
    pub factors: Vec<String>,
    /// Model output before the override policy
    pub raw_score: f32,
    pub adjustment: Adjustment,
}

impl PredictionResult {
    /// Comma-joined factor list for a single-line display
    pub fn summary(&self) -> String {
        self.factors.join(", ")
    }
}

/// Counterfactual comparison of two profiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub baseline_score: f32,
    pub perturbed_score: f32,
    /// perturbed - baseline
    pub delta: f32,
}

impl Simulation {
    pub fn new(baseline_score: f32, perturbed_score: f32) -> Self {
        Self {
            baseline_score,
            perturbed_score,
            delta: perturbed_score - baseline_score,
        }
    }
}

/// What-if sliders; `None` keeps the baseline value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatIf {
    pub study_time: Option<u8>,
    pub absences: Option<u32>,
    pub social_activity: Option<u8>,
    pub health: Option<u8>,
}
