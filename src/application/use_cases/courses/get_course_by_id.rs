//! Get Course By ID Use Case
//!
//! Retrieves a single course by its ID.

use std::sync::Arc;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::course::{Course, CourseId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a course by ID
pub struct GetCourseByIdUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl GetCourseByIdUseCase {
    /// Create a new GetCourseByIdUseCase
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
    pub async fn execute(&self, id: CourseId) -> Result<Course, UseCaseError> {
        tracing::debug!(course_id = %id, "Getting course by ID");

        let course = self.course_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(course_id = %id, "Course not found");
            UseCaseError::NotFound {
                resource: "Course".to_string(),
                id: id.to_string(),
            }
        })?;

        tracing::debug!(course_id = %id, "Course found");
        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::course::{CourseFilter, CreateCourseData};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockCourseRepository {
        find_by_id_result: Mutex<Option<Result<Option<Course>, RepositoryError>>>,
    }

    impl MockCourseRepository {
        fn new() -> Self {
            Self {
                find_by_id_result: Mutex::new(None),
            }
        }

        fn with_find_by_id(self, result: Result<Option<Course>, RepositoryError>) -> Self {
            *self.find_by_id_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl CourseRepository for MockCourseRepository {
        async fn find_by_id(&self, _id: CourseId) -> Result<Option<Course>, RepositoryError> {
            self.find_by_id_result.lock().unwrap().take().unwrap_or(Ok(None))
        }

        async fn find_all(&self, _filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError> {
            Ok(vec![])
        }

        async fn create(&self, data: &CreateCourseData) -> Result<Course, RepositoryError> {
            Ok(Course::restore(
                CourseId::from_i64(1),
                data.name.clone(),
                data.students.clone(),
            ))
        }

        async fn update(&self, _course: &Course) -> Result<Option<Course>, RepositoryError> {
            Ok(None)
        }

        async fn delete(&self, _id: CourseId) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn should_return_course_when_found() {
        let course = Course::restore(CourseId::from_i64(3), "Chemistry".to_string(), vec![]);
        let repo = Arc::new(MockCourseRepository::new().with_find_by_id(Ok(Some(course))));

        let use_case = GetCourseByIdUseCase::new(repo);
        let result = use_case.execute(CourseId::from_i64(3)).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name(), "Chemistry");
    }

    #[tokio::test]
    async fn should_return_not_found_when_course_does_not_exist() {
        let repo = Arc::new(MockCourseRepository::new().with_find_by_id(Ok(None)));

        let use_case = GetCourseByIdUseCase::new(repo);
        let result = use_case.execute(CourseId::from_i64(999)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
