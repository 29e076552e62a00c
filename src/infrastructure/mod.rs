//! Infrastructure Layer
//!
//! Concrete adapters for the outside world: configuration, database,
//! repositories, and the HTTP API.

pub mod driven_adapters;
pub mod driving_adapters;
