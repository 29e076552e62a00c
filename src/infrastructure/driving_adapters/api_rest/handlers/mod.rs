//! API Handlers

pub mod courses;
