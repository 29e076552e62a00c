//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and application state for the REST API.

pub mod dto;
pub mod handlers;

use std::sync::Arc;

use crate::application::use_cases::courses::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCourseByIdUseCase, ListCoursesUseCase,
    PartialUpdateCourseUseCase, UpdateCourseUseCase,
};
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub create_course_use_case: Arc<CreateCourseUseCase>,
    pub get_course_by_id_use_case: Arc<GetCourseByIdUseCase>,
    pub list_courses_use_case: Arc<ListCoursesUseCase>,
    pub update_course_use_case: Arc<UpdateCourseUseCase>,
    pub partial_update_course_use_case: Arc<PartialUpdateCourseUseCase>,
    pub delete_course_use_case: Arc<DeleteCourseUseCase>,
}
