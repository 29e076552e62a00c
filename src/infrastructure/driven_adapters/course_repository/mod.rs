//! Course Repository Adapters

mod postgres;

pub use postgres::PostgresCourseRepository;
