//! Create Course Use Case
//!
//! Creates a new course in the registry, optionally enrolling students.

use std::sync::Arc;

use crate::domain::gateways::{CourseRepository, StudentRepository};
use crate::domain::models::course::{Course, CreateCourseData};
use crate::domain::models::student::StudentId;
use crate::shared::errors::UseCaseError;

/// Use case for creating a new course
pub struct CreateCourseUseCase {
    course_repository: Arc<dyn CourseRepository>,
    student_repository: Arc<dyn StudentRepository>,
}

impl CreateCourseUseCase {
    /// Create a new CreateCourseUseCase
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
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if any referenced student does not exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateCourseData) -> Result<Course, UseCaseError> {
        tracing::info!(name = %data.name, students = data.students.len(), "Creating new course");

        // Every referenced student must exist at write time
        if !data.students.is_empty() {
            let existing = self
                .student_repository
                .find_existing_ids(&data.students)
                .await?;
            let missing: Vec<StudentId> = data
                .students
                .iter()
                .filter(|id| !existing.contains(id))
                .copied()
                .collect();
            if !missing.is_empty() {
                tracing::warn!(?missing, "Course references unknown students");
                return Err(UseCaseError::Validation(
                    missing
                        .iter()
                        .map(|id| format!("students: student with id {id} does not exist"))
                        .collect(),
                ));
            }
        }

        let created = self.course_repository.create(&data).await?;

        tracing::info!(course_id = %created.id(), "Course created successfully");

        Ok(created)
    }
}
