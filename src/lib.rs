//! Course Registry API
//!
//! A Rust-based microservice for managing courses and their students
//! following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
