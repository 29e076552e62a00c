//! Student Domain Model
//!
//! Represents a student that can be enrolled in courses. Students are
//! created independently and are only referenced, never owned, by courses.

use chrono::NaiveDate;

/// Newtype wrapper for Student ID providing type safety
///
/// Student ids are assigned by the database on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(i64);

impl StudentId {
    /// Create a StudentId from a raw database id
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

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Data required to create a new Student
#[derive(Debug, Clone)]
pub struct CreateStudentData {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
}

/// Student domain entity
#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    name: String,
    birth_date: Option<NaiveDate>,
}

impl Student {
    /// Restore a Student from persisted data
    #[must_use]
    pub fn restore(id: StudentId, name: String, birth_date: Option<NaiveDate>) -> Self {
        Self {
            id,
            name,
            birth_date,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_restore() {
        let birth_date = NaiveDate::from_ymd_opt(2000, 9, 1);
        let student = Student::restore(StudentId::from_i64(1), "Ivan".to_string(), birth_date);

        assert_eq!(student.id().as_i64(), 1);
        assert_eq!(student.name(), "Ivan");
        assert_eq!(student.birth_date(), birth_date);
    }

    #[test]
    fn test_student_without_birth_date() {
        let student = Student::restore(StudentId::from_i64(2), "Anna".to_string(), None);
        assert!(student.birth_date().is_none());
    }
}
