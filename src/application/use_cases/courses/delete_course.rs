//! Delete Course Use Case
//!
//! Deletes a course and its enrollment rows. Student records referenced by
//! the course are never deleted.

use std::sync::Arc;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::course::CourseId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a course
pub struct DeleteCourseUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl DeleteCourseUseCase {
    /// Create a new DeleteCourseUseCase
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: CourseId) -> Result<(), UseCaseError> {
        tracing::info!(course_id = %id, "Deleting course");

        let deleted = self.course_repository.delete(id).await?;

        if !deleted {
            tracing::warn!(course_id = %id, "Course not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Course".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(course_id = %id, "Course deleted successfully");
        Ok(())
    }
}
