//! Course Use Cases
//!
//! Business logic for managing courses and their enrollments.

mod create_course;
mod delete_course;
mod get_course_by_id;
mod list_courses;
mod partial_update_course;
mod update_course;

pub use create_course::CreateCourseUseCase;
pub use delete_course::DeleteCourseUseCase;
pub use get_course_by_id::GetCourseByIdUseCase;
pub use list_courses::ListCoursesUseCase;
pub use partial_update_course::PartialUpdateCourseUseCase;
pub use update_course::UpdateCourseUseCase;
