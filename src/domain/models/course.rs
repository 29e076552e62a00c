//! Course Domain Model
//!
//! Represents a course and the set of students enrolled in it.

use crate::domain::models::student::StudentId;

/// Newtype wrapper for Course ID providing type safety
///
/// Course ids are assigned by the database on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(i64);

impl CourseId {
    /// Create a CourseId from a raw database id
    #[must_use]
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying id
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CourseId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for CourseId {
    type Err = std::num::ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(value.parse()?))
    }
}

/// Data required to create a new Course
#[derive(Debug, Clone)]
pub struct CreateCourseData {
    pub name: String,
    pub students: Vec<StudentId>,
}

/// Data for updating an existing Course
///
/// A full update (PUT) provides every field; a partial update (PATCH)
/// provides only the fields to change.
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseData {
    pub name: Option<String>,
    pub students: Option<Vec<StudentId>>,
}

/// Filter predicate for listing courses
///
/// `name_contains` and `search` both select courses whose name contains the
/// value as a case-insensitive substring; when both are present they are
/// combined with AND.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub id: Option<CourseId>,
    pub name_contains: Option<String>,
    pub search: Option<String>,
}

/// Course domain entity
#[derive(Debug, Clone)]
pub struct Course {
    id: CourseId,
    name: String,
    students: Vec<StudentId>,
}

impl Course {
    /// Restore a Course from persisted data
    #[must_use]
    pub fn restore(id: CourseId, name: String, students: Vec<StudentId>) -> Self {
        Self { id, name, students }
    }

    /// Apply updates to the course, returning a new instance
    ///
    /// Fields left as `None` keep their current value.
    #[must_use]
    pub fn with_updates(self, data: UpdateCourseData) -> Self {
        Self {
            id: self.id,
            name: data.name.unwrap_or(self.name),
            students: data.students.unwrap_or(self.students),
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn students(&self) -> &[StudentId] {
        &self.students
    }
}
