//! Student Record - one student's attributes and course list

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Lower bound of the valid GPA domain.
pub const GPA_MIN: f64 = 0.0;
/// Upper bound of the valid GPA domain.
pub const GPA_MAX: f64 = 4.0;

/// GPA threshold for honor status.
const HONOR_THRESHOLD: f64 = 3.5;

/// Student Record represents one student in the roster.
///
/// The record owns its own line-oriented serialization
/// ([`to_line`](Self::to_line) / [`from_line`](Self::from_line)) used by the
/// store's flat-file persistence. Course names are kept in insertion order
/// and duplicates are allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    id: u32,
    name: String,
    age: u32,
    gpa: f64,
    courses: Vec<String>,
}

impl StudentRecord {
    /// Create a new record with the given fields and an empty course list.
    ///
    /// No validation is applied here; `gpa` is range-checked only by
    /// [`set_gpa`](Self::set_gpa).
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, age: u32, gpa: f64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gpa,
            courses: Vec::new(),
        }
    }

    /// Create a builder for constructing a record with optional fields.
    #[must_use]
    pub fn builder(id: u32, name: impl Into<String>) -> StudentRecordBuilder {
        StudentRecordBuilder::new(id, name)
    }

    /// Get the record id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Get the student name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the student age.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Get the GPA.
    #[must_use]
    pub const fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Get the enrolled courses, in insertion order.
    #[must_use]
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Set the record id.
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Set the student name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the student age.
    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    /// Set the GPA, range-checked against `[0.0, 4.0]`.
    ///
    /// On an out-of-range value the prior GPA is retained and
    /// [`Error::GpaOutOfRange`] is returned. (The original system dropped
    /// such values silently; the refusal here is the same, only reported.)
    ///
    /// # Errors
    ///
    /// Returns [`Error::GpaOutOfRange`] if `gpa` is outside `[0.0, 4.0]`.
    pub fn set_gpa(&mut self, gpa: f64) -> Result<()> {
        if (GPA_MIN..=GPA_MAX).contains(&gpa) {
            self.gpa = gpa;
            Ok(())
        } else {
            Err(Error::GpaOutOfRange { gpa })
        }
    }

    /// Append a course name. Duplicates are allowed.
    pub fn add_course(&mut self, course: impl Into<String>) {
        self.courses.push(course.into());
    }

    /// Remove all occurrences of `course` (exact text match).
    ///
    /// No-op if the course is not enrolled.
    pub fn remove_course(&mut self, course: &str) {
        self.courses.retain(|c| c != course);
    }

    /// Whether this student has honor status (GPA >= 3.5).
    #[must_use]
    pub fn is_honor_student(&self) -> bool {
        self.gpa >= HONOR_THRESHOLD
    }

    /// Letter-grade tier for the current GPA.
    #[must_use]
    pub fn grade_level(&self) -> &'static str {
        if self.gpa >= 3.7 {
            "A"
        } else if self.gpa >= 3.0 {
            "B"
        } else if self.gpa >= 2.0 {
            "C"
        } else if self.gpa >= 1.0 {
            "D"
        } else {
            "F"
        }
    }

    /// Serialize to one line of the flat-file format:
    /// `id,name,age,gpa,course1;course2;...`
    ///
    /// The trailing course field is omitted entirely when the course list is
    /// empty. The GPA is printed with `f64`'s `Display` so that
    /// [`from_line`](Self::from_line) recovers it exactly.
    ///
    /// Delimiters inside field values are NOT escaped: a `,` in the name or
    /// a `;` in a course name will mis-parse on load. This matches the
    /// on-disk format of the original system.
    #[must_use]
    pub fn to_line(&self) -> String {
        if self.courses.is_empty() {
            format!("{},{},{},{}", self.id, self.name, self.age, self.gpa)
        } else {
            format!(
                "{},{},{},{},{}",
                self.id,
                self.name,
                self.age,
                self.gpa,
                self.courses.join(";")
            )
        }
    }

    /// Deserialize one line of the flat-file format.
    ///
    /// The first three commas delimit `id`, `name`, and `age`; the fourth
    /// (if present) separates the GPA from the semicolon-joined course list.
    /// An empty course field and a missing course field both yield an empty
    /// course list, so files written with a trailing comma still parse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the line has fewer than 4 comma-separated
    /// fields, or if `id`/`age` are not valid integers, or `gpa` is not a
    /// valid decimal.
    pub fn from_line(line: &str) -> Result<Self> {
        let mut fields = line.splitn(5, ',');

        let id = fields
            .next()
            .ok_or_else(|| Error::parse("id", "missing field"))?;
        let name = fields
            .next()
            .ok_or_else(|| Error::parse("name", "missing field"))?;
        let age = fields
            .next()
            .ok_or_else(|| Error::parse("age", "missing field"))?;
        let gpa = fields
            .next()
            .ok_or_else(|| Error::parse("gpa", "missing field"))?;

        let id: u32 = id
            .trim()
            .parse()
            .map_err(|e| Error::parse("id", format!("{e}: {id:?}")))?;
        let age: u32 = age
            .trim()
            .parse()
            .map_err(|e| Error::parse("age", format!("{e}: {age:?}")))?;
        let gpa: f64 = gpa
            .trim()
            .parse()
            .map_err(|e| Error::parse("gpa", format!("{e}: {gpa:?}")))?;

        let courses = match fields.next() {
            None | Some("") => Vec::new(),
            Some(list) => {
                let mut courses: Vec<String> = list.split(';').map(str::to_string).collect();
                // A trailing ';' produces one empty final segment; drop it.
                if courses.last().is_some_and(String::is_empty) {
                    courses.pop();
                }
                courses
            }
        };

        Ok(Self {
            id,
            name: name.to_string(),
            age,
            gpa,
            courses,
        })
    }
}

/// Builder for `StudentRecord`.
#[derive(Debug)]
pub struct StudentRecordBuilder {
    id: u32,
    name: String,
    age: u32,
    gpa: f64,
    courses: Vec<String>,
}

impl StudentRecordBuilder {
    /// Create a new builder with the required identity fields.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age: 0,
            gpa: 0.0,
            courses: Vec::new(),
        }
    }

    /// Set the student age.
    #[must_use]
    pub const fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Set the GPA (unchecked, like construction).
    #[must_use]
    pub const fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    /// Append one course.
    #[must_use]
    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.courses.push(course.into());
        self
    }

    /// Replace the whole course list.
    #[must_use]
    pub fn courses(mut self, courses: Vec<String>) -> Self {
        self.courses = courses;
        self
    }

    /// Build the `StudentRecord`.
    #[must_use]
    pub fn build(self) -> StudentRecord {
        StudentRecord {
            id: self.id,
            name: self.name,
            age: self.age,
            gpa: self.gpa,
            courses: self.courses,
        }
    }
}
