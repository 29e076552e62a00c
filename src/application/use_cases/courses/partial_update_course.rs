//! Partial Update Course Use Case (PATCH)
//!
//! Updates only the provided fields of a course.

use std::sync::Arc;

use crate::domain::gateways::{CourseRepository, StudentRepository};
use crate::domain::models::course::{Course, CourseId, UpdateCourseData};
use crate::domain::models::student::StudentId;
use crate::shared::errors::UseCaseError;

/// Use case for partial course update (PATCH)
pub struct PartialUpdateCourseUseCase {
    course_repository: Arc<dyn CourseRepository>,
    student_repository: Arc<dyn StudentRepository>,
}

impl PartialUpdateCourseUseCase {
    /// Create a new PartialUpdateCourseUseCase
    #[must_use]
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        student_repository: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            course_repository,
            student_repository,
        }
    }

    /// Execute the use case
    ///
    /// Fields left as `None` keep their current value; an empty body is a
    /// no-op that still returns the current course.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist.
    /// Returns `UseCaseError::Validation` if any referenced student does not exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: CourseId, data: UpdateCourseData) -> Result<Course, UseCaseError> {
        tracing::info!(course_id = %id, "Partially updating course");

        // Find existing course
        let existing = self.course_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(course_id = %id, "Course not found for partial update");
            UseCaseError::NotFound {
                resource: "Course".to_string(),
                id: id.to_string(),
            }
        })?;

        // Every referenced student must exist at write time
        if let Some(students) = &data.students {
            let existing_ids = self.student_repository.find_existing_ids(students).await?;
            let missing: Vec<StudentId> = students
                .iter()
                .filter(|id| !existing_ids.contains(id))
                .copied()
                .collect();
            if !missing.is_empty() {
                tracing::warn!(course_id = %id, ?missing, "Course patch references unknown students");
                return Err(UseCaseError::Validation(
                    missing
                        .iter()
                        .map(|id| format!("students: student with id {id} does not exist"))
                        .collect(),
                ));
            }
        }

        // Apply updates
        let updated = existing.with_updates(data);

        // Save and return
        let result = self.course_repository.update(&updated).await?.ok_or_else(|| {
            UseCaseError::NotFound {
                resource: "Course".to_string(),
                id: id.to_string(),
            }
        })?;

        tracing::info!(course_id = %id, "Course partially updated successfully");
        Ok(result)
    }
}
