//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod courses;

pub use courses::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCourseByIdUseCase, ListCoursesUseCase,
    PartialUpdateCourseUseCase, UpdateCourseUseCase,
};
