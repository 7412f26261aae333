//! Roster Report - derived view over the roster

use serde::{Deserialize, Serialize};

use super::StudentRecord;

/// Aggregate report over a non-empty roster.
///
/// Built by [`RosterStore::generate_report`](super::RosterStore::generate_report);
/// never constructed for an empty roster, so the averages are always
/// well-defined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterReport {
    honor_students: Vec<StudentRecord>,
    average_gpa: f64,
    average_age: f64,
    record_count: usize,
}

impl RosterReport {
    /// Compute the report for a non-empty slice of records.
    ///
    /// Returns `None` for an empty slice (the averages would be undefined).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn compute(records: &[StudentRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let honor_students = records
            .iter()
            .filter(|r| r.is_honor_student())
            .cloned()
            .collect();

        let total_gpa: f64 = records.iter().map(StudentRecord::gpa).sum();
        let total_age: u64 = records.iter().map(|r| u64::from(r.age())).sum();
        let count = records.len() as f64;

        Some(Self {
            honor_students,
            average_gpa: total_gpa / count,
            average_age: total_age as f64 / count,
            record_count: records.len(),
        })
    }

    /// Honor students (GPA >= 3.5), in roster order.
    #[must_use]
    pub fn honor_students(&self) -> &[StudentRecord] {
        &self.honor_students
    }

    /// Mean GPA across all records.
    #[must_use]
    pub const fn average_gpa(&self) -> f64 {
        self.average_gpa
    }

    /// Mean age across all records.
    #[must_use]
    pub const fn average_age(&self) -> f64 {
        self.average_age
    }

    /// Number of records the report covers.
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.record_count
    }
}
