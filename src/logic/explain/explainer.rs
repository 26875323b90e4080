//! Attribution Explainer
//!
//! Per-feature signed contributions for one prediction. Attributions always
//! explain the *raw* model output for the same vector that was scored,
//! never the policy-corrected score.

use std::sync::Arc;

use thiserror::Error;

use super::types::AttributionEntry;
use crate::logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT};
use crate::logic::model::{BaseRegressor, ModelError};

#[derive(Debug, Error)]
#[error("attribution failed: {0}")]
pub struct AttributionError(pub String);

impl From<ModelError> for AttributionError {
    fn from(err: ModelError) -> Self {
        AttributionError(err.to_string())
    }
}

// ============================================================================
// EXPLAINER TRAIT
// ============================================================================

/// Feature-attribution method, one contribution per feature in layout order
pub trait AttributionExplainer: Send + Sync {
    fn attribute(&self, vector: &FeatureVector) -> Result<Vec<f32>, AttributionError>;
}

impl<E: AttributionExplainer + ?Sized> AttributionExplainer for &E {
    fn attribute(&self, vector: &FeatureVector) -> Result<Vec<f32>, AttributionError> {
        (**self).attribute(vector)
    }
}

impl<E: AttributionExplainer + ?Sized> AttributionExplainer for Arc<E> {
    fn attribute(&self, vector: &FeatureVector) -> Result<Vec<f32>, AttributionError> {
        (**self).attribute(vector)
    }
}

impl<E: AttributionExplainer + ?Sized> AttributionExplainer for Box<E> {
    fn attribute(&self, vector: &FeatureVector) -> Result<Vec<f32>, AttributionError> {
        (**self).attribute(vector)
    }
}

/// Call the explainer once and pair contributions with names and values
pub fn attribute_entries<E: AttributionExplainer + ?Sized>(
    explainer: &E,
    vector: &FeatureVector,
) -> Result<Vec<AttributionEntry>, AttributionError> {
    let contributions = explainer.attribute(vector)?;

    if contributions.len() != FEATURE_COUNT {
        return Err(AttributionError(format!(
            "expected {} contributions, got {}",
            FEATURE_COUNT,
            contributions.len()
        )));
    }
    if let Some(index) = contributions.iter().position(|c| !c.is_finite()) {
        return Err(AttributionError(format!(
            "non-finite contribution for `{}`",
            FEATURE_LAYOUT[index]
        )));
    }

    Ok(FEATURE_LAYOUT
        .iter()
        .zip(contributions)
        .zip(vector.as_slice())
        .map(|((name, contribution), &value)| AttributionEntry {
            feature: name.to_string(),
            contribution,
            value,
        })
        .collect())
}

// ============================================================================
// OCCLUSION EXPLAINER (model-agnostic)
// ============================================================================

/// contribution_i = f(x) - f(x with feature i set to its background value)
///
/// Exact for additive models when the background is the training mean.
/// Costs FEATURE_COUNT + 1 model calls.
pub struct OcclusionExplainer<R> {
    model: R,
    background: FeatureVector,
}

impl<R: BaseRegressor> OcclusionExplainer<R> {
    pub fn new(model: R, background: FeatureVector) -> Self {
        Self { model, background }
    }

    pub fn background(&self) -> &FeatureVector {
        &self.background
    }
}

impl<R: BaseRegressor> AttributionExplainer for OcclusionExplainer<R> {
    fn attribute(&self, vector: &FeatureVector) -> Result<Vec<f32>, AttributionError> {
        let full = self.model.predict(vector)?;

        self.background
            .as_slice()
            .iter()
            .enumerate()
            .map(|(index, &reference)| -> Result<f32, AttributionError> {
                let masked = vector.with_value(index, reference);
                Ok(full - self.model.predict(&masked)?)
            })
            .collect()
    }
}
