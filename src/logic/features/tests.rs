//! Integration Tests for Feature Vectorization
//!
//! Profile/record → vector, schema coverage, and caller-contract failures.

#[cfg(test)]
mod integration_tests {
    use std::collections::HashSet;

    use crate::logic::features::{
        vectorize, vectorize_record, ProfileField, StudentProfile, StudentRecord,
        ValidationError, DEFAULT_FEATURE_PROFILE, FEATURE_COUNT, FEATURE_LAYOUT,
    };
    use crate::logic::test_support::{high_performer, high_performer_record};

    /// Every layout feature is sourced exactly once: profile or default table
    #[test]
    fn test_schema_fully_covered() {
        let profile_ids: HashSet<_> = ProfileField::ALL.iter().map(|f| f.feature_id()).collect();
        let default_ids: HashSet<_> = DEFAULT_FEATURE_PROFILE.iter().map(|(n, _)| *n).collect();

        assert_eq!(profile_ids.len(), 9);
        assert!(profile_ids.is_disjoint(&default_ids));
        assert_eq!(profile_ids.len() + default_ids.len(), FEATURE_COUNT);

        for name in FEATURE_LAYOUT {
            assert!(
                profile_ids.contains(name) || default_ids.contains(name),
                "{} has no source",
                name
            );
        }
    }

    #[test]
    fn test_vectorize_maps_profile_fields() {
        let vector = vectorize(&high_performer()).unwrap();

        assert_eq!(vector.get_by_name("G1"), Some(18.0));
        assert_eq!(vector.get_by_name("G2"), Some(19.0));
        assert_eq!(vector.get_by_name("absences"), Some(2.0));
        assert_eq!(vector.get_by_name("failures"), Some(0.0));
        assert_eq!(vector.get_by_name("studytime"), Some(4.0));
        assert_eq!(vector.get_by_name("health"), Some(5.0));
        assert_eq!(vector.get_by_name("famrel"), Some(5.0));
        assert_eq!(vector.get_by_name("goout"), Some(2.0));
        assert_eq!(vector.get_by_name("freetime"), Some(3.0));

        // Untracked attributes take the canonical defaults
        assert_eq!(vector.get_by_name("age"), Some(21.0));
        assert_eq!(vector.get_by_name("Medu"), Some(3.0));
        assert!(vector.validate().is_ok());
    }

    #[test]
    fn test_identifying_fields_do_not_reach_vector() {
        let mut renamed = high_performer();
        renamed.student_id = Some("OTHER".to_string());
        renamed.name = None;

        assert_eq!(vectorize(&renamed).unwrap(), vectorize(&high_performer()).unwrap());
    }

    #[test]
    fn test_record_conversion() {
        let profile = StudentProfile::try_from(&high_performer_record()).unwrap();
        assert_eq!(profile.student_id.as_deref(), Some("1RV23MCA001"));
        assert_eq!(profile.absences, 2);
        assert_eq!(profile.study_time, 4);
        assert_eq!(vectorize_record(&high_performer_record()).unwrap(), vectorize(&profile).unwrap());
    }

    #[test]
    fn test_record_from_store_json() {
        let json = r#"{
            "usn": "1RV23MCA003", "name": "Karthik R",
            "internal1": 8, "internal2": 7, "absences": 25, "failures": 2,
            "study_time": 1, "health": 3, "famrel": 2, "goout": 5, "freetime": 5
        }"#;
        let record: StudentRecord = serde_json::from_str(json).unwrap();
        let profile = StudentProfile::try_from(record).unwrap();

        assert_eq!(profile.absences, 25);
        assert_eq!(profile.exam_2, 7.0);
    }

    #[test]
    fn test_missing_tracked_field_is_rejected() {
        let record = StudentRecord { famrel: None, ..high_performer_record() };

        let err = StudentProfile::try_from(&record).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(ProfileField::FamilyRelations));
        assert!(err.to_string().contains("famrel"));
    }

    #[test]
    fn test_negative_absences_rejected() {
        let record = StudentRecord { absences: Some(-1.0), ..high_performer_record() };

        let err = vectorize_record(&record).unwrap_err();
        assert_eq!(err.field(), ProfileField::Absences);
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_fractional_level_rejected() {
        let record = StudentRecord { study_time: Some(2.5), ..high_performer_record() };
        assert!(matches!(
            StudentProfile::try_from(&record),
            Err(ValidationError::NotInteger { field: ProfileField::StudyTime, .. })
        ));
    }

    #[test]
    fn test_non_finite_exam_rejected() {
        let record = StudentRecord { internal1: Some(f64::NAN), ..high_performer_record() };
        assert!(StudentProfile::try_from(&record).is_err());

        let profile = high_performer().with_exams(f32::INFINITY, 10.0);
        assert!(vectorize(&profile).is_err());
    }

    #[test]
    fn test_out_of_range_strict_profile() {
        assert!(vectorize(&high_performer().with_study_time(5)).is_err());
        assert!(vectorize(&high_performer().with_health(0)).is_err());
        assert!(vectorize(&high_performer().with_exams(21.0, 19.0)).is_err());
        assert!(vectorize(&high_performer().with_absences(100)).is_ok());
        assert!(vectorize(&high_performer().with_absences(101)).is_err());
    }

    #[test]
    fn test_with_constructors_are_pure() {
        let base = high_performer();
        let changed = base.with_absences(25).with_social_activity(5);

        assert_eq!(base.absences, 2);
        assert_eq!(base.social_activity, 2);
        assert_eq!(changed.absences, 25);
        assert_eq!(changed.social_activity, 5);
        assert_eq!(changed.exam_1, base.exam_1);
    }
}
