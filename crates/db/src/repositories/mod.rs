//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod photographer_repo;

pub use photographer_repo::PhotographerRepo;
