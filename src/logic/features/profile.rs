//! Student Profile - Caller-owned input record
//!
//! `StudentProfile` is the strict schema the engine scores.
//! `StudentRecord` is the loose row shape the storage layer hands over;
//! converting it is where missing or malformed attributes are rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::MAX_GRADE;

// ============================================================================
// PROFILE FIELDS
// ============================================================================

/// The nine model-relevant attributes tracked per student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Exam1,
    Exam2,
    Absences,
    Failures,
    StudyTime,
    Health,
    FamilyRelations,
    SocialActivity,
    FreeTime,
}

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        ProfileField::Exam1,
        ProfileField::Exam2,
        ProfileField::Absences,
        ProfileField::Failures,
        ProfileField::StudyTime,
        ProfileField::Health,
        ProfileField::FamilyRelations,
        ProfileField::SocialActivity,
        ProfileField::FreeTime,
    ];

    /// Model feature identifier this attribute maps to
    pub fn feature_id(&self) -> &'static str {
        match self {
            ProfileField::Exam1 => "G1",
            ProfileField::Exam2 => "G2",
            ProfileField::Absences => "absences",
            ProfileField::Failures => "failures",
            ProfileField::StudyTime => "studytime",
            ProfileField::Health => "health",
            ProfileField::FamilyRelations => "famrel",
            ProfileField::SocialActivity => "goout",
            ProfileField::FreeTime => "freetime",
        }
    }

    /// Column name in the student record store
    pub fn column(&self) -> &'static str {
        match self {
            ProfileField::Exam1 => "internal1",
            ProfileField::Exam2 => "internal2",
            ProfileField::Absences => "absences",
            ProfileField::Failures => "failures",
            ProfileField::StudyTime => "study_time",
            ProfileField::Health => "health",
            ProfileField::FamilyRelations => "famrel",
            ProfileField::SocialActivity => "goout",
            ProfileField::FreeTime => "freetime",
        }
    }

    /// Inclusive documented range
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            ProfileField::Exam1 | ProfileField::Exam2 => (0.0, MAX_GRADE as f64),
            ProfileField::Absences => (0.0, 100.0),
            ProfileField::Failures => (0.0, 10.0),
            ProfileField::StudyTime => (1.0, 4.0),
            ProfileField::Health
            | ProfileField::FamilyRelations
            | ProfileField::SocialActivity
            | ProfileField::FreeTime => (1.0, 5.0),
        }
    }

    /// Counts and ordinal levels must be whole numbers; exam scores may not be
    pub fn is_integer(&self) -> bool {
        !matches!(self, ProfileField::Exam1 | ProfileField::Exam2)
    }

    /// Check a raw value against range and integrality
    pub fn check(&self, value: f64) -> Result<f64, ValidationError> {
        let (min, max) = self.bounds();

        if !value.is_finite() || value < min || value > max {
            return Err(ValidationError::OutOfRange { field: *self, value, min, max });
        }
        if self.is_integer() && value.fract() != 0.0 {
            return Err(ValidationError::NotInteger { field: *self, value });
        }

        Ok(value)
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required attribute `{0}`")]
    MissingField(ProfileField),

    #[error("`{field}` = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: ProfileField,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("`{field}` must be a whole number, got {value}")]
    NotInteger { field: ProfileField, value: f64 },
}

impl ValidationError {
    pub fn field(&self) -> ProfileField {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotInteger { field, .. } => *field,
        }
    }
}

// ============================================================================
// STUDENT PROFILE (strict)
// ============================================================================

/// Model-relevant attributes of one student plus identifying fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Not used by the model
    #[serde(default)]
    pub student_id: Option<String>,
    /// Not used by the model
    #[serde(default)]
    pub name: Option<String>,

    pub exam_1: f32,
    pub exam_2: f32,
    pub absences: u32,
    pub failures: u32,
    pub study_time: u8,
    pub health: u8,
    pub family_relations: u8,
    pub social_activity: u8,
    pub free_time: u8,
}

impl StudentProfile {
    /// Raw value of a tracked attribute
    pub fn value(&self, field: ProfileField) -> f64 {
        match field {
            ProfileField::Exam1 => f64::from(self.exam_1),
            ProfileField::Exam2 => f64::from(self.exam_2),
            ProfileField::Absences => f64::from(self.absences),
            ProfileField::Failures => f64::from(self.failures),
            ProfileField::StudyTime => f64::from(self.study_time),
            ProfileField::Health => f64::from(self.health),
            ProfileField::FamilyRelations => f64::from(self.family_relations),
            ProfileField::SocialActivity => f64::from(self.social_activity),
            ProfileField::FreeTime => f64::from(self.free_time),
        }
    }

    /// Check every tracked attribute against its documented range
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in ProfileField::ALL {
            field.check(self.value(field))?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // "with field replaced" constructors (used for what-if perturbations)
    // ------------------------------------------------------------------

    pub fn with_exams(&self, exam_1: f32, exam_2: f32) -> Self {
        Self { exam_1, exam_2, ..self.clone() }
    }

    pub fn with_absences(&self, absences: u32) -> Self {
        Self { absences, ..self.clone() }
    }

    pub fn with_failures(&self, failures: u32) -> Self {
        Self { failures, ..self.clone() }
    }

    pub fn with_study_time(&self, study_time: u8) -> Self {
        Self { study_time, ..self.clone() }
    }

    pub fn with_health(&self, health: u8) -> Self {
        Self { health, ..self.clone() }
    }

    pub fn with_family_relations(&self, family_relations: u8) -> Self {
        Self { family_relations, ..self.clone() }
    }

    pub fn with_social_activity(&self, social_activity: u8) -> Self {
        Self { social_activity, ..self.clone() }
    }

    pub fn with_free_time(&self, free_time: u8) -> Self {
        Self { free_time, ..self.clone() }
    }
}

// ============================================================================
// STUDENT RECORD (loose, from storage)
// ============================================================================

/// Row as joined from the student + proctorial tables; any column may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub usn: Option<String>,
    pub name: Option<String>,
    pub internal1: Option<f64>,
    pub internal2: Option<f64>,
    pub absences: Option<f64>,
    pub failures: Option<f64>,
    pub study_time: Option<f64>,
    pub health: Option<f64>,
    pub famrel: Option<f64>,
    pub goout: Option<f64>,
    pub freetime: Option<f64>,
}

impl StudentRecord {
    pub fn get(&self, field: ProfileField) -> Option<f64> {
        match field {
            ProfileField::Exam1 => self.internal1,
            ProfileField::Exam2 => self.internal2,
            ProfileField::Absences => self.absences,
            ProfileField::Failures => self.failures,
            ProfileField::StudyTime => self.study_time,
            ProfileField::Health => self.health,
            ProfileField::FamilyRelations => self.famrel,
            ProfileField::SocialActivity => self.goout,
            ProfileField::FreeTime => self.freetime,
        }
    }

    fn require(&self, field: ProfileField) -> Result<f64, ValidationError> {
        let value = self.get(field).ok_or(ValidationError::MissingField(field))?;
        field.check(value)
    }
}

impl TryFrom<&StudentRecord> for StudentProfile {
    type Error = ValidationError;

    fn try_from(record: &StudentRecord) -> Result<Self, Self::Error> {
        // Range and integrality are checked before narrowing.
        Ok(Self {
            student_id: record.usn.clone(),
            name: record.name.clone(),
            exam_1: record.require(ProfileField::Exam1)? as f32,
            exam_2: record.require(ProfileField::Exam2)? as f32,
            absences: record.require(ProfileField::Absences)? as u32,
            failures: record.require(ProfileField::Failures)? as u32,
            study_time: record.require(ProfileField::StudyTime)? as u8,
            health: record.require(ProfileField::Health)? as u8,
            family_relations: record.require(ProfileField::FamilyRelations)? as u8,
            social_activity: record.require(ProfileField::SocialActivity)? as u8,
            free_time: record.require(ProfileField::FreeTime)? as u8,
        })
    }
}

impl TryFrom<StudentRecord> for StudentProfile {
    type Error = ValidationError;

    fn try_from(record: StudentRecord) -> Result<Self, Self::Error> {
        StudentProfile::try_from(&record)
    }
}
