//! Course DTOs
//!
//! Data transfer objects for course API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::course::{Course, CourseFilter, CreateCourseData, UpdateCourseData};
use crate::domain::models::student::StudentId;

/// Unwraps a required field, panics if validation wasn't performed
/// This should only be called after validate() has succeeded
fn required_field<T>(value: Option<T>) -> T {
    value.expect("field should have been validated")
}

fn to_student_ids(ids: Vec<i64>) -> Vec<StudentId> {
    ids.into_iter().map(StudentId::from_i64).collect()
}

/// DTO for creating a new course
///
/// `name` is modeled as an Option so that a missing field surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourseDto {
    #[validate(required(message = "name is required"))]
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[serde(default)]
    pub students: Vec<i64>,
}

impl From<CreateCourseDto> for CreateCourseData {
    fn from(dto: CreateCourseDto) -> Self {
        Self {
            name: required_field(dto.name),
            students: to_student_ids(dto.students),
        }
    }
}

/// DTO for full course update (PUT)
///
/// An omitted `students` field replaces the enrollment with the empty set:
/// a full update replaces both fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCourseDto {
    #[validate(required(message = "name is required"))]
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[serde(default)]
    pub students: Vec<i64>,
}

impl From<UpdateCourseDto> for UpdateCourseData {
    fn from(dto: UpdateCourseDto) -> Self {
        Self {
            name: Some(required_field(dto.name)),
            students: Some(to_student_ids(dto.students)),
        }
    }
}

/// DTO for partial course update (PATCH)
///
/// All fields are optional. Only provided fields will be updated.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct PatchCourseDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    pub students: Option<Vec<i64>>,
}

impl From<PatchCourseDto> for UpdateCourseData {
    fn from(dto: PatchCourseDto) -> Self {
        Self {
            name: dto.name,
            students: dto.students.map(to_student_ids),
        }
    }
}

/// Query parameters accepted by the list endpoint
///
/// Parameters are deserialized leniently: unknown parameters are ignored,
/// and values that do not parse (or are empty) are treated as absent rather
/// than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCoursesQueryDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub search: Option<String>,
}

impl From<ListCoursesQueryDto> for CourseFilter {
    fn from(dto: ListCoursesQueryDto) -> Self {
        Self {
            id: dto.id.as_deref().and_then(|raw| raw.parse().ok()),
            name_contains: dto.name.filter(|s| !s.is_empty()),
            search: dto.search.filter(|s| !s.is_empty()),
        }
    }
}

/// Course response DTO
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponseDto {
    pub id: i64,
    pub name: String,
    pub students: Vec<i64>,
}

impl From<Course> for CourseResponseDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id().as_i64(),
            name: course.name().to_string(),
            students: course.students().iter().map(StudentId::as_i64).collect(),
        }
    }
}

impl From<&Course> for CourseResponseDto {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().as_i64(),
            name: course.name().to_string(),
            students: course.students().iter().map(StudentId::as_i64).collect(),
        }
    }
}
