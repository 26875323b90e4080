//! Feature Vector - Model input
//!
//! **Versioned, immutable feature vector**
//!
//! Built once per call (through `FeatureVectorBuilder` or the vectorizer)
//! and never mutated afterwards. Derived vectors are fresh copies.

use serde::{Deserialize, Serialize};

use super::layout::{
    feature_index, layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT,
    FEATURE_LAYOUT, FEATURE_VERSION,
};

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned Feature Vector with layout metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    version: u8,
    /// CRC32 hash of the feature layout
    layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create from raw values with current version
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Create from a slice; `None` unless the width matches the layout exactly
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        let array: [f32; FEATURE_COUNT] = values.try_into().ok()?;
        Some(Self::from_values(array))
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn layout_hash(&self) -> u32 {
        self.layout_hash
    }

    /// Get values as array reference
    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Copy of this vector with one feature replaced (out-of-range index → unchanged copy)
    pub fn with_value(&self, index: usize, value: f32) -> Self {
        let mut values = self.values;
        if let Some(slot) = values.get_mut(index) {
            *slot = value;
        }
        Self::from_values(values)
    }

    /// Validate that this vector is compatible with current layout
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    /// Iterate `(feature name, value)` pairs in layout order
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        FEATURE_LAYOUT.iter().copied().zip(self.values.iter().copied())
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "named_values": self.named_values()
                .map(|(name, value)| (name.to_string(), value))
                .collect::<std::collections::BTreeMap<_, _>>(),
        })
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

// ============================================================================
// BUILDER PATTERN
// ============================================================================

/// Builder for creating FeatureVector with named setters
#[derive(Debug, Clone)]
pub struct FeatureVectorBuilder {
    values: [f32; FEATURE_COUNT],
}

impl FeatureVectorBuilder {
    /// Zeroed builder
    pub fn new() -> Self {
        Self { values: [0.0; FEATURE_COUNT] }
    }

    /// Start from an existing vector
    pub fn from_vector(vector: &FeatureVector) -> Self {
        Self { values: *vector.as_array() }
    }

    /// Set feature by name; unknown names are ignored and reported `false`
    pub fn try_set(&mut self, name: &str, value: f32) -> bool {
        match feature_index(name) {
            Some(index) => {
                self.values[index] = value;
                true
            }
            None => false,
        }
    }

    /// Set feature by name dynamically
    pub fn set(mut self, name: &str, value: f32) -> Self {
        self.try_set(name, value);
        self
    }

    pub fn build(self) -> FeatureVector {
        FeatureVector::from_values(self.values)
    }
}

impl Default for FeatureVectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
