//! Engine Configuration
//!
//! Everything tunable about the pipeline in one serde document:
//! override rule table, factor rendering, display names.
//! Can be loaded from a JSON file or built from a preset at runtime.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{EngineError, EngineResult};
use crate::logic::explain::{FactorConfig, NameTable};
use crate::logic::policy::OverrideConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub policy: OverrideConfig,
    pub factors: FactorConfig,
    pub names: NameTable,
    /// When false, attribution is skipped and factors are always empty
    pub explain_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy: OverrideConfig::default(),
            factors: FactorConfig::default(),
            names: NameTable::default(),
            explain_enabled: true,
        }
    }
}

impl EngineConfig {
    /// Default config with a named override preset
    pub fn with_preset(preset: &str) -> EngineResult<Self> {
        let policy = OverrideConfig::preset(preset)
            .ok_or_else(|| EngineError::InvalidConfig(format!("unknown override preset `{}`", preset)))?;
        Ok(Self { policy, ..Default::default() })
    }

    pub fn from_json(text: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(text)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            EngineError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    /// `GRADE_ENGINE_CONFIG` file if set, otherwise the `GRADE_OVERRIDE_PRESET` preset
    pub fn from_env() -> EngineResult<Self> {
        match constants::get_config_path() {
            Some(path) => {
                log::info!("Loading engine config from: {}", path);
                Self::from_file(Path::new(&path))
            }
            None => Self::with_preset(&constants::get_override_preset()),
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.policy.validate().map_err(EngineError::InvalidConfig)?;
        self.factors.validate().map_err(EngineError::InvalidConfig)?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
