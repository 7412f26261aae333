//! Student Roster Schema
//!
//! This module provides the data structures for the roster store:
//! one record type, the file-backed store that owns it, and the
//! derived report view.
//!
//! ## Schema Overview
//!
//! ```text
//! RosterStore (1) ──< StudentRecord (N, insertion-ordered)
//!                          │
//!                          └──< course name (N, duplicates allowed)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use roster_db::roster::StudentRecord;
//!
//! // Create a record
//! let mut record = StudentRecord::new(1, "Alice", 20, 3.2);
//!
//! // Enroll in courses
//! record.add_course("Math");
//! record.add_course("Physics");
//!
//! // Adjust the GPA (range-checked)
//! record.set_gpa(3.8)?;
//! assert!(record.is_honor_student());
//! assert_eq!(record.grade_level(), "A");
//! # Ok::<(), roster_db::Error>(())
//! ```

mod record;
mod report;
mod store;

pub use record::{StudentRecord, StudentRecordBuilder};
pub use report::RosterReport;
pub use store::RosterStore;
