//! PostgreSQL Course Repository Implementation
//!
//! Implements the CourseRepository trait using SQLx for PostgreSQL.
//! Mutating operations run inside an explicit transaction, committed on
//! success and rolled back (by drop) on any error path.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::course::{Course, CourseFilter, CourseId, CreateCourseData};
use crate::domain::models::student::StudentId;
use crate::shared::errors::RepositoryError;

/// Database row representation for the courses table
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: i64,
    name: String,
}

/// Database row representation for the course_students association table
#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    course_id: i64,
    student_id: i64,
}

/// Escape LIKE wildcards in a user-supplied value (backslash is the
/// default escape character in PostgreSQL)
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Build a case-insensitive substring pattern for ILIKE
fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like(value))
}

/// Sorted, deduplicated student ids for storage and responses
fn normalized_student_ids(students: &[StudentId]) -> Vec<i64> {
    let mut ids: Vec<i64> = students.iter().map(StudentId::as_i64).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// PostgreSQL implementation of CourseRepository
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    /// Create a new PostgresCourseRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_student_ids(&self, course_id: i64) -> Result<Vec<StudentId>, RepositoryError> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT student_id
            FROM course_students
            WHERE course_id = $1
            ORDER BY student_id ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().map(StudentId::from_i64).collect())
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let students = self.load_student_ids(row.id).await?;
        Ok(Some(Course::restore(
            CourseId::from_i64(row.id),
            row.name,
            students,
        )))
    }

    async fn find_all(&self, filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name
            FROM courses
            WHERE ($1::BIGINT IS NULL OR id = $1)
              AND ($2::TEXT IS NULL OR name ILIKE $2)
              AND ($3::TEXT IS NULL OR name ILIKE $3)
            ORDER BY id ASC
            "#,
        )
        .bind(filter.id.map(|id| id.as_i64()))
        .bind(filter.name_contains.as_deref().map(contains_pattern))
        .bind(filter.search.as_deref().map(contains_pattern))
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        // One batched lookup for all enrollments instead of a query per course
        let course_ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let enrollments = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT course_id, student_id
            FROM course_students
            WHERE course_id = ANY($1)
            ORDER BY student_id ASC
            "#,
        )
        .bind(&course_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_course: HashMap<i64, Vec<StudentId>> = HashMap::new();
        for enrollment in enrollments {
            by_course
                .entry(enrollment.course_id)
                .or_default()
                .push(StudentId::from_i64(enrollment.student_id));
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let students = by_course.remove(&row.id).unwrap_or_default();
                Course::restore(CourseId::from_i64(row.id), row.name, students)
            })
            .collect())
    }

    async fn create(&self, data: &CreateCourseData) -> Result<Course, RepositoryError> {
        let student_ids = normalized_student_ids(&data.students);

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&data.name)
        .fetch_one(&mut *tx)
        .await?;

        if !student_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO course_students (course_id, student_id)
                SELECT $1, student_id
                FROM UNNEST($2::BIGINT[]) AS t(student_id)
                "#,
            )
            .bind(row.id)
            .bind(&student_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Course::restore(
            CourseId::from_i64(row.id),
            row.name,
            student_ids.into_iter().map(StudentId::from_i64).collect(),
        ))
    }

    async fn update(&self, course: &Course) -> Result<Option<Course>, RepositoryError> {
        let student_ids = normalized_student_ids(course.students());

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            UPDATE courses
            SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(course.id().as_i64())
        .bind(course.name())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM course_students WHERE course_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;

        if !student_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO course_students (course_id, student_id)
                SELECT $1, student_id
                FROM UNNEST($2::BIGINT[]) AS t(student_id)
                "#,
            )
            .bind(row.id)
            .bind(&student_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Some(Course::restore(
            CourseId::from_i64(row.id),
            row.name,
            student_ids.into_iter().map(StudentId::from_i64).collect(),
        )))
    }

    async fn delete(&self, id: CourseId) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Enrollment rows go first; student records are untouched
        sqlx::query("DELETE FROM course_students WHERE course_id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
