//! PostgreSQL Student Repository Implementation
//!
//! Implements the StudentRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::gateways::StudentRepository;
use crate::domain::models::student::{CreateStudentData, Student, StudentId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the students table
#[derive(Debug, sqlx::FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    birth_date: Option<NaiveDate>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::restore(StudentId::from_i64(row.id), row.name, row.birth_date)
    }
}

/// PostgreSQL implementation of StudentRepository
pub struct PostgresStudentRepository {
    pool: PgPool,
}

impl PostgresStudentRepository {
    /// Create a new PostgresStudentRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    async fn create(&self, data: &CreateStudentData) -> Result<Student, RepositoryError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO students (name, birth_date)
            VALUES ($1, $2)
            RETURNING id, name, birth_date
            "#,
        )
        .bind(&data.name)
        .bind(data.birth_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_existing_ids(&self, ids: &[StudentId]) -> Result<Vec<StudentId>, RepositoryError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let raw_ids: Vec<i64> = ids.iter().map(StudentId::as_i64).collect();
        let existing = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id
            FROM students
            WHERE id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(existing.into_iter().map(StudentId::from_i64).collect())
    }
}
