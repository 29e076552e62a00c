//! List Courses Use Case
//!
//! Retrieves courses matching the request filter, in creation order.

use std::sync::Arc;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::course::{Course, CourseFilter};
use crate::shared::errors::UseCaseError;

/// Use case for listing courses
pub struct ListCoursesUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl ListCoursesUseCase {
    /// Create a new ListCoursesUseCase
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, filter: CourseFilter) -> Result<Vec<Course>, UseCaseError> {
        tracing::debug!(?filter, "Listing courses");

        let courses = self.course_repository.find_all(&filter).await?;

        tracing::debug!(count = courses.len(), "Found courses");
        Ok(courses)
    }
}
