//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change where the engine looks for its artifacts, only edit this file.

/// Maximum possible grade in the observed schema (inclusive upper bound)
pub const MAX_GRADE: f32 = 20.0;

/// Default model artifact path
///
/// Fallback when `GRADE_MODEL_PATH` is not set.
/// `.json` loads a linear model, `.onnx` loads an ONNX regressor (feature `onnx`).
pub const DEFAULT_MODEL_PATH: &str = "student_grade_model.json";

/// Default manifest path for ONNX artifacts
pub const DEFAULT_MANIFEST_PATH: &str = "student_grade_model.manifest.json";

/// Default override preset name
pub const DEFAULT_OVERRIDE_PRESET: &str = "default";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Grade Insight";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model artifact path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("GRADE_MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get manifest path from environment or use default
pub fn get_manifest_path() -> String {
    std::env::var("GRADE_MANIFEST_PATH")
        .unwrap_or_else(|_| DEFAULT_MANIFEST_PATH.to_string())
}

/// Get engine config file path from environment (no default file)
pub fn get_config_path() -> Option<String> {
    std::env::var("GRADE_ENGINE_CONFIG")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

/// Get override preset name from environment or use default
pub fn get_override_preset() -> String {
    std::env::var("GRADE_OVERRIDE_PRESET")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|_| DEFAULT_OVERRIDE_PRESET.to_string())
}
