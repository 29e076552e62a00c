//! Student Repository Gateway
//!
//! Abstract trait defining the contract for student persistence operations.
//! Students have no public HTTP surface; they are created independently and
//! referenced by courses.

use async_trait::async_trait;

use crate::domain::models::student::{CreateStudentData, Student, StudentId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Student persistence operations
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Create a new student; the id is assigned by the store
    async fn create(&self, data: &CreateStudentData) -> Result<Student, RepositoryError>;

    /// Return the subset of the given ids that exist, sorted ascending
    async fn find_existing_ids(&self, ids: &[StudentId]) -> Result<Vec<StudentId>, RepositoryError>;
}
