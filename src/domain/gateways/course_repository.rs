//! Course Repository Gateway
//!
//! Abstract trait defining the contract for course persistence operations.

use async_trait::async_trait;

use crate::domain::models::course::{Course, CourseFilter, CourseId, CreateCourseData};
use crate::shared::errors::RepositoryError;

/// Repository trait for Course persistence operations
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find a course by its ID, including its enrolled student ids
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepositoryError>;

    /// Find all courses matching the filter, ordered by id ascending
    /// (creation order)
    async fn find_all(&self, filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError>;

    /// Create a new course and its enrollment rows; the id is assigned by
    /// the store
    async fn create(&self, data: &CreateCourseData) -> Result<Course, RepositoryError>;

    /// Replace an existing course's name and enrollments; returns `None`
    /// when the id does not exist
    async fn update(&self, course: &Course) -> Result<Option<Course>, RepositoryError>;

    /// Delete a course and its enrollment rows; returns `false` when the id
    /// does not exist. Never deletes student records.
    async fn delete(&self, id: CourseId) -> Result<bool, RepositoryError>;
}
