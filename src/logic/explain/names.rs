//! Feature-name translation table
//!
//! Internal feature identifier → display string. Identifiers missing from
//! the table are shown verbatim.
//!
//! A configured table is a set of overrides on top of the built-in names.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Built-in display names
pub const FEATURE_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("G1", "Internal Exam 1"),
    ("G2", "Internal Exam 2"),
    ("absences", "Class Absences"),
    ("failures", "Past Failures"),
    ("studytime", "Study Time"),
    ("health", "Health Status"),
    ("famrel", "Family Relationships"),
    ("goout", "Social Activity / Partying"),
    ("freetime", "Free Time"),
    ("Medu", "Mother's Education"),
    ("Fedu", "Father's Education"),
    ("traveltime", "Commute Time"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NameTable(BTreeMap<String, String>);

impl<'de> Deserialize<'de> for NameTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(overrides
            .iter()
            .fold(Self::default(), |table, (feature, display)| table.with(feature, display)))
    }
}

impl NameTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, feature: &str, display: &str) -> Self {
        self.0.insert(feature.to_string(), display.to_string());
        self
    }

    pub fn display<'a>(&'a self, feature: &'a str) -> &'a str {
        self.0.get(feature).map(String::as_str).unwrap_or(feature)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for NameTable {
    fn default() -> Self {
        FEATURE_DISPLAY_NAMES
            .iter()
            .fold(Self::empty(), |table, (feature, display)| table.with(feature, display))
    }
}
