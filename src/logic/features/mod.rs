//! Features Module - Feature Vectorization
//!
//! Maps a student record into the fixed-order vector the regressor expects.
//! The layout is the single source of truth for feature order.

pub mod layout;
pub mod vector;
pub mod defaults;
pub mod profile;
pub mod vectorizer;

#[cfg(test)]
mod tests;

// Re-export common types
pub use layout::{
    feature_index, feature_name, layout_hash, LayoutInfo, LayoutMismatchError,
    ABSENCES_FEATURE, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION,
};
pub use vector::{FeatureVector, FeatureVectorBuilder};
pub use defaults::{default_vector, DEFAULT_FEATURE_PROFILE};
pub use profile::{ProfileField, StudentProfile, StudentRecord, ValidationError};
pub use vectorizer::{vectorize, vectorize_record};
