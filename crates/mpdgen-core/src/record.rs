//! Flat record types written to (and read back from) the JSON datasets.
//!
//! JSON keys are upper snake case to match the dashboard column names.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Snapshot
// ============================================================================

/// Reporting period a record is generated "as of".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Snapshot {
    #[serde(rename = "Fall 2023")]
    Fall2023,
    #[serde(rename = "Spring 2024")]
    Spring2024,
    #[serde(rename = "Fall 2024")]
    Fall2024,
    #[serde(rename = "Spring 2025")]
    Spring2025,
}

impl Snapshot {
    pub const ALL: [Snapshot; 4] = [
        Snapshot::Fall2023,
        Snapshot::Spring2024,
        Snapshot::Fall2024,
        Snapshot::Spring2025,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Snapshot::Fall2023 => "Fall 2023",
            Snapshot::Spring2024 => "Spring 2024",
            Snapshot::Fall2024 => "Fall 2024",
            Snapshot::Spring2025 => "Spring 2025",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Period end date (the `SNAPSHOT_MONTH` column).
    pub fn date(self) -> NaiveDate {
        let (y, m, d) = match self {
            Snapshot::Fall2023 => (2023, 10, 31),
            Snapshot::Spring2024 => (2024, 2, 28),
            Snapshot::Fall2024 => (2024, 10, 31),
            Snapshot::Spring2025 => (2025, 2, 28),
        };
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// FTE
// ============================================================================

/// A full-time-equivalent share held as a whole number of tenths.
///
/// Keeping the integer form until serialization is what lets a person's
/// shares sum to exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fte(u8);

impl Fte {
    pub const TENTHS_PER_UNIT: u8 = 10;
    pub const FULL: Fte = Fte(Self::TENTHS_PER_UNIT);

    pub fn from_tenths(tenths: u8) -> Self {
        Fte(tenths)
    }

    pub fn tenths(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / f64::from(Self::TENTHS_PER_UNIT)
    }

    /// Parses a fraction that must land on a 0.1 boundary within `[0, 1]`.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || !(0.0..=1.0 + 1e-9).contains(&value) {
            return None;
        }
        let scaled = value * f64::from(Self::TENTHS_PER_UNIT);
        let tenths = scaled.round();
        if (scaled - tenths).abs() > 1e-6 {
            return None;
        }
        Some(Fte(tenths as u8))
    }
}

impl fmt::Display for Fte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.as_f64())
    }
}

impl Serialize for Fte {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Fte {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Fte::from_f64(value).ok_or_else(|| {
            serde::de::Error::custom(format!("FTE {value} is not a multiple of 0.1 in [0, 1]"))
        })
    }
}

// ============================================================================
// Test group
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestGroup {
    High,
    Medium,
    Low,
}

impl TestGroup {
    /// Bucket a pair of 1–5 scores by their maximum.
    pub fn from_scores(listen: u8, read: u8) -> Self {
        match listen.max(read) {
            3.. => TestGroup::High,
            2 => TestGroup::Medium,
            _ => TestGroup::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TestGroup::High => "HIGH",
            TestGroup::Medium => "MEDIUM",
            TestGroup::Low => "LOW",
        }
    }
}

impl fmt::Display for TestGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// MPD record
// ============================================================================

/// Attributes shared by every role record of one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PersonProfile {
    pub sid: String,
    pub snapshot: Snapshot,
    pub snapshot_month: NaiveDate,
    pub duty_org: String,
    pub building: String,
    pub pop_category: String,
    pub groups: String,
    pub focus_area: String,
    pub niab_category: String,
    pub functional_role: String,
    pub country: String,
    pub nipf_priority: String,
    pub employee_skill_community: String,
    pub mission_element: String,
    pub location_specific: String,
    pub state: String,
    pub work_role: String,
    pub city: String,
    pub cimpl_rank_category: String,
    #[serde(alias = "ASSIGNED_ORG")]
    pub assigned_org_td: String,
    pub status: String,
    pub site: String,
    pub loe_justification: String,
    pub region: String,
    pub affiliation_type: String,
    pub activity_daf: String,
    pub critical_skills: String,
    pub domain_two_plus_three: String,
    pub site_resilience: String,
    pub tokens: String,
}

/// One person-role-snapshot assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MpdRecord {
    pub id: u64,
    #[serde(flatten)]
    pub person: PersonProfile,
    pub domain: String,
    pub function: String,
    pub dfp: String,
    pub cimpl_rank: String,
    pub fte: Fte,
}

// ============================================================================
// Test-score record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TestScoreRecord {
    pub id: u64,
    pub sid: String,
    pub language: String,
    #[serde(with = "score_text")]
    pub listen_score: u8,
    #[serde(with = "score_text")]
    pub read_score: u8,
    pub test_group: TestGroup,
    pub snapshot: Snapshot,
    pub snapshot_month: NaiveDate,
    pub tokens: String,
}

/// Scores are written as decimal strings; either strings or numbers are accepted back.
mod score_text {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(score: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(score)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u8),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(t) => t
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid score `{t}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_labels_round_trip() {
        for snapshot in Snapshot::ALL {
            assert_eq!(Snapshot::from_label(snapshot.label()), Some(snapshot));
        }
        assert_eq!(Snapshot::from_label("Winter 2024"), None);
        assert_eq!(Snapshot::Spring2024.date().to_string(), "2024-02-28");
    }

    #[test]
    fn test_group_thresholds() {
        assert_eq!(TestGroup::from_scores(1, 1), TestGroup::Low);
        assert_eq!(TestGroup::from_scores(2, 1), TestGroup::Medium);
        assert_eq!(TestGroup::from_scores(1, 3), TestGroup::High);
        assert_eq!(TestGroup::from_scores(5, 5), TestGroup::High);
    }

    #[test]
    fn fte_rejects_off_grid_values() {
        assert_eq!(Fte::from_f64(0.3), Some(Fte::from_tenths(3)));
        assert_eq!(Fte::from_f64(1.0), Some(Fte::FULL));
        assert_eq!(Fte::from_f64(0.25), None);
        assert_eq!(Fte::from_f64(1.5), None);
        assert_eq!(Fte::from_f64(-0.1), None);
        assert_eq!(Fte::from_tenths(7).to_string(), "0.7");
    }

    #[test]
    fn test_score_scores_accept_strings_and_numbers() {
        let value = json!({
            "ID": 4,
            "SID": "ABCDE12",
            "LANGUAGE": "HUTTESE",
            "LISTEN_SCORE": "2",
            "READ_SCORE": 5,
            "TEST_GROUP": "HIGH",
            "SNAPSHOT": "Fall 2024",
            "SNAPSHOT_MONTH": "2024-10-31",
            "TOKENS": "AAA|BBB"
        });
        let record: TestScoreRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.listen_score, 2);
        assert_eq!(record.read_score, 5);
        assert_eq!(record.snapshot, Snapshot::Fall2024);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["READ_SCORE"], json!("5"));
        assert_eq!(back["SNAPSHOT_MONTH"], json!("2024-10-31"));
    }
}
