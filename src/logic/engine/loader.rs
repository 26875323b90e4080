//! Model Loader
//!
//! Artifact path → shared regressor + matching explainer.
//! `.json` is a linear model (exact attribution), `.onnx` an ONNX export
//! explained by occlusion against the manifest background.

use std::path::Path;
use std::sync::Arc;

use crate::logic::explain::AttributionExplainer;
use crate::logic::model::{BaseRegressor, LinearModel, ModelError, ModelMetadata};

/// Loaded model collaborators, shareable across threads
#[derive(Clone)]
pub struct ModelBundle {
    pub regressor: Arc<dyn BaseRegressor>,
    pub explainer: Arc<dyn AttributionExplainer>,
    pub metadata: ModelMetadata,
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("regressor", &self.regressor.name())
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// Load by file extension; `manifest_path` is only read for ONNX artifacts
pub fn load_model(model_path: &Path, manifest_path: &Path) -> Result<ModelBundle, ModelError> {
    let extension = model_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => load_linear(model_path),
        Some("onnx") => load_onnx(model_path, manifest_path),
        _ => Err(ModelError::Unsupported(model_path.display().to_string())),
    }
}

fn load_linear(model_path: &Path) -> Result<ModelBundle, ModelError> {
    let model = Arc::new(LinearModel::from_file(model_path)?);

    Ok(ModelBundle {
        regressor: model.clone(),
        explainer: model,
        metadata: ModelMetadata::new(&model_path.display().to_string(), "linear"),
    })
}

#[cfg(feature = "onnx")]
fn load_onnx(model_path: &Path, manifest_path: &Path) -> Result<ModelBundle, ModelError> {
    use crate::logic::explain::OcclusionExplainer;
    use crate::logic::features::default_vector;
    use crate::logic::model::{ModelManifest, OnnxRegressor};

    let manifest = ModelManifest::from_file(manifest_path)?;
    let regressor = Arc::new(OnnxRegressor::load(model_path, &manifest)?);
    let metadata = regressor.metadata().clone();

    let background = manifest.background_vector().unwrap_or_else(|| {
        log::warn!("Manifest has no background vector - attributing against the default profile");
        default_vector()
    });

    Ok(ModelBundle {
        regressor: regressor.clone(),
        explainer: Arc::new(OcclusionExplainer::new(regressor, background)),
        metadata,
    })
}

#[cfg(not(feature = "onnx"))]
fn load_onnx(model_path: &Path, _manifest_path: &Path) -> Result<ModelBundle, ModelError> {
    Err(ModelError::Unsupported(format!(
        "{} (built without the `onnx` feature)",
        model_path.display()
    )))
}
