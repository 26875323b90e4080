//! Linear Model - JSON-backed regressor
//!
//! Stand-alone model artifact (`intercept`, `weights`, `means`) that needs
//! no native runtime. Its attribution is exact: `w_i * (x_i - mean_i)`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::manifest::check_feature_names;
use super::regressor::{BaseRegressor, ModelError};
use crate::logic::explain::{AttributionError, AttributionExplainer};
use crate::logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT};

fn layout_names() -> Vec<String> {
    FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default = "layout_names")]
    feature_names: Vec<String>,
    intercept: f32,
    weights: Vec<f32>,
    /// Training means, the attribution reference point
    means: Vec<f32>,
}

impl LinearModel {
    pub fn new(intercept: f32, weights: Vec<f32>, means: Vec<f32>) -> Result<Self, ModelError> {
        let model = Self {
            feature_names: layout_names(),
            intercept,
            weights,
            means,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let model: LinearModel = serde_json::from_str(text)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.display().to_string()));
        }
        log::info!("Loading linear model from: {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        check_feature_names(&self.feature_names)?;

        if self.weights.len() != FEATURE_COUNT || self.means.len() != FEATURE_COUNT {
            return Err(ModelError::SchemaMismatch(format!(
                "expected {} weights and means, got {} / {}",
                FEATURE_COUNT,
                self.weights.len(),
                self.means.len()
            )));
        }

        let all_finite = std::iter::once(&self.intercept)
            .chain(&self.weights)
            .chain(&self.means)
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ModelError::SchemaMismatch("non-finite coefficient".to_string()));
        }

        Ok(())
    }

    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Training means as a vector (occlusion background)
    pub fn background(&self) -> Option<FeatureVector> {
        FeatureVector::from_slice(&self.means)
    }
}

impl BaseRegressor for LinearModel {
    fn predict(&self, vector: &FeatureVector) -> Result<f32, ModelError> {
        let sum: f32 = self.weights
            .iter()
            .zip(vector.as_slice())
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.intercept + sum)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

impl AttributionExplainer for LinearModel {
    fn attribute(&self, vector: &FeatureVector) -> Result<Vec<f32>, AttributionError> {
        Ok(self.weights
            .iter()
            .zip(&self.means)
            .zip(vector.as_slice())
            .map(|((w, mean), x)| w * (x - mean))
            .collect())
    }
}
