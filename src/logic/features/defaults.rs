//! Default Feature Profile
//!
//! Fixed values for the features this system never tracks per student
//! (demographics, family background, alcohol use, ...).
//!
//! NOTE: this is a modeling simplification, not personalization. Every
//! student is scored as if these attributes matched one canonical
//! "typical" student. Audit or swap the table here, nowhere else.

use once_cell::sync::Lazy;

use super::vector::{FeatureVector, FeatureVectorBuilder};

/// Untracked features and their constant values (label-encoded as in training)
pub const DEFAULT_FEATURE_PROFILE: &[(&str, f32)] = &[
    ("school", 0.0),
    ("sex", 1.0),
    ("age", 21.0),
    ("address", 1.0),
    ("famsize", 0.0),
    ("Pstatus", 1.0),
    ("Medu", 3.0),
    ("Fedu", 3.0),
    ("Mjob", 2.0),
    ("Fjob", 2.0),
    ("reason", 1.0),
    ("guardian", 1.0),
    ("traveltime", 1.0),
    ("schoolsup", 0.0),
    ("famsup", 1.0),
    ("paid", 0.0),
    ("activities", 1.0),
    ("nursery", 1.0),
    ("higher", 1.0),
    ("internet", 1.0),
    ("romantic", 0.0),
    // Lowest level of the 1-5 scale. The legacy lookup used lowercase
    // `dalc`/`walc` keys and fed 0 to the model.
    ("Dalc", 1.0),
    ("Walc", 1.0),
];

static DEFAULT_VECTOR: Lazy<FeatureVector> = Lazy::new(|| {
    DEFAULT_FEATURE_PROFILE
        .iter()
        .fold(FeatureVectorBuilder::new(), |builder, &(name, value)| builder.set(name, value))
        .build()
});

/// Vector holding the default profile; profile-sourced slots are zero
pub fn default_vector() -> FeatureVector {
    DEFAULT_VECTOR.clone()
}

/// Default value for an untracked feature
pub fn default_value(name: &str) -> Option<f32> {
    DEFAULT_FEATURE_PROFILE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, v)| v)
}
