//! Student Repository Adapters

mod postgres;

pub use postgres::PostgresStudentRepository;
