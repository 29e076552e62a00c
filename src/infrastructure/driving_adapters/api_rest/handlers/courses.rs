//! Course Handlers
//!
//! HTTP handlers for course CRUD operations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::course::CourseId;
use crate::infrastructure::driving_adapters::api_rest::dto::course::{
    CourseResponseDto, CreateCourseDto, ListCoursesQueryDto, PatchCourseDto, UpdateCourseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for course endpoints
///
/// Collection routes answer with and without a trailing slash; item routes
/// use the trailing-slash form (`/{id}/`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course))
        .route("/", get(list_courses))
        .route("/{id}/", get(get_course_by_id))
        .route("/{id}/", put(update_course))
        .route("/{id}/", patch(partial_update_course))
        .route("/{id}/", delete(delete_course))
}

/// POST /api/courses/ - Create a new course
///
/// # Responses
///
/// * 201 Created - Course created successfully
/// * 400 Bad Request - Missing name or unknown student id
#[axum::debug_handler]
async fn create_course(
    State(state): State<AppState>,
    Json(dto): Json<CreateCourseDto>,
) -> Result<(StatusCode, Json<CourseResponseDto>), ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let course = state.create_course_use_case.execute(dto.into()).await?;

    // Return response
    Ok((StatusCode::CREATED, Json(CourseResponseDto::from(course))))
}

/// GET /api/courses/ - List courses
///
/// Accepts optional `name` and `search` parameters (case-insensitive
/// substring match on the course name) and `id` (exact match). Results are
/// in creation order.
///
/// # Responses
///
/// * 200 OK - JSON array of courses
#[axum::debug_handler]
async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<ListCoursesQueryDto>,
) -> Result<Json<Vec<CourseResponseDto>>, ApiError> {
    // Execute use case
    let courses = state.list_courses_use_case.execute(query.into()).await?;

    // Return response
    let response: Vec<CourseResponseDto> = courses.into_iter().map(CourseResponseDto::from).collect();
    Ok(Json(response))
}

/// GET /api/courses/:id/ - Get a course by ID
///
/// # Responses
///
/// * 200 OK - Course found
/// * 404 Not Found - Course does not exist
#[axum::debug_handler]
async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseResponseDto>, ApiError> {
    // Parse id
    let course_id: CourseId = id.parse()?;

    // Execute use case
    let course = state.get_course_by_id_use_case.execute(course_id).await?;

    // Return response
    Ok(Json(CourseResponseDto::from(course)))
}

/// PUT /api/courses/:id/ - Full update of a course
///
/// Replaces both the name and the enrolled students.
///
/// # Responses
///
/// * 200 OK - Course updated successfully
/// * 400 Bad Request - Validation error
/// * 404 Not Found - Course does not exist
#[axum::debug_handler]
async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateCourseDto>,
) -> Result<Json<CourseResponseDto>, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Parse id
    let course_id: CourseId = id.parse()?;

    // Execute use case
    let course = state
        .update_course_use_case
        .execute(course_id, dto.into())
        .await?;

    // Return response
    Ok(Json(CourseResponseDto::from(course)))
}

/// PATCH /api/courses/:id/ - Partial update of a course
///
/// # Responses
///
/// * 200 OK - Course updated successfully
/// * 400 Bad Request - Validation error
/// * 404 Not Found - Course does not exist
#[axum::debug_handler]
async fn partial_update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<PatchCourseDto>,
) -> Result<Json<CourseResponseDto>, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Parse id
    let course_id: CourseId = id.parse()?;

    // Execute use case
    let course = state
        .partial_update_course_use_case
        .execute(course_id, dto.into())
        .await?;

    // Return response
    Ok(Json(CourseResponseDto::from(course)))
}

/// DELETE /api/courses/:id/ - Delete a course
///
/// Removes the course and its enrollment rows; referenced students are
/// left untouched.
///
/// # Responses
///
/// * 204 No Content - Course deleted successfully
/// * 404 Not Found - Course does not exist
#[axum::debug_handler]
async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    // Parse id
    let course_id: CourseId = id.parse()?;

    // Execute use case
    state.delete_course_use_case.execute(course_id).await?;

    // Return response
    Ok(StatusCode::NO_CONTENT)
}
