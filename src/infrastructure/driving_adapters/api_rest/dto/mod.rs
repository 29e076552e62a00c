//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod course;

pub use course::{
    CourseResponseDto, CreateCourseDto, ListCoursesQueryDto, PatchCourseDto, UpdateCourseDto,
};
