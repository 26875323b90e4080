//! Shared fixtures for unit tests

use crate::logic::features::{feature_index, StudentProfile, StudentRecord, FEATURE_COUNT};
use crate::logic::model::LinearModel;

/// Exam scores 18/19, absences 2, no failures, strong habits
pub fn high_performer() -> StudentProfile {
    StudentProfile {
        student_id: Some("1RV23MCA001".to_string()),
        name: Some("Rahul Sharma".to_string()),
        exam_1: 18.0,
        exam_2: 19.0,
        absences: 2,
        failures: 0,
        study_time: 4,
        health: 5,
        family_relations: 5,
        social_activity: 2,
        free_time: 3,
    }
}

pub fn high_performer_record() -> StudentRecord {
    StudentRecord {
        usn: Some("1RV23MCA001".to_string()),
        name: Some("Rahul Sharma".to_string()),
        internal1: Some(18.0),
        internal2: Some(19.0),
        absences: Some(2.0),
        failures: Some(0.0),
        study_time: Some(4.0),
        health: Some(5.0),
        famrel: Some(5.0),
        goout: Some(2.0),
        freetime: Some(3.0),
    }
}

/// Middle-of-the-road student: no override band applies at 8 absences
pub fn average_student() -> StudentProfile {
    StudentProfile {
        student_id: None,
        name: None,
        exam_1: 11.0,
        exam_2: 11.0,
        absences: 8,
        failures: 0,
        study_time: 2,
        health: 3,
        family_relations: 4,
        social_activity: 3,
        free_time: 3,
    }
}

/// Linear stand-in for the fitted regressor
///
/// Weights/means roughly follow the grade dataset so the exam features
/// dominate; means are the attribution reference point.
pub fn fixture_model() -> LinearModel {
    let entries: &[(&str, f32, f32)] = &[
        // (feature, weight, mean)
        ("G1", 0.2, 10.9),
        ("G2", 0.9, 10.7),
        ("absences", -0.04, 5.7),
        ("failures", -0.5, 0.33),
        ("studytime", 0.2, 2.0),
        ("health", -0.05, 3.55),
        ("famrel", 0.1, 3.94),
        ("goout", -0.15, 3.1),
        ("freetime", 0.05, 3.2),
    ];
    model_from(entries, 10.4)
}

/// Build a linear model whose prediction at the means equals `mean_output`
pub fn model_from(entries: &[(&str, f32, f32)], mean_output: f32) -> LinearModel {
    let mut weights = vec![0.0; FEATURE_COUNT];
    let mut means = vec![0.0; FEATURE_COUNT];
    let mut offset = 0.0;

    for &(name, weight, mean) in entries {
        let index = feature_index(name).expect("fixture feature in layout");
        weights[index] = weight;
        means[index] = mean;
        offset += weight * mean;
    }

    LinearModel::new(mean_output - offset, weights, means).expect("fixture model is well-formed")
}
