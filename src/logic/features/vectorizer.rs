//! Feature Vectorizer
//!
//! StudentProfile → complete FeatureVector in model order.
//! Tracked attributes come from the profile, everything else from
//! the default feature profile.

use super::defaults::default_vector;
use super::profile::{ProfileField, StudentProfile, StudentRecord, ValidationError};
use super::vector::{FeatureVector, FeatureVectorBuilder};

/// Build the model input for a profile
///
/// Fails only when a tracked attribute is out of range; untracked
/// features are never an error.
pub fn vectorize(profile: &StudentProfile) -> Result<FeatureVector, ValidationError> {
    profile.validate()?;

    let mut builder = FeatureVectorBuilder::from_vector(&default_vector());
    for field in ProfileField::ALL {
        builder.try_set(field.feature_id(), profile.value(field) as f32);
    }

    Ok(builder.build())
}

/// Convert a storage row and vectorize it
pub fn vectorize_record(record: &StudentRecord) -> Result<FeatureVector, ValidationError> {
    let profile = StudentProfile::try_from(record)?;
    vectorize(&profile)
}
