//! Repository layer for registered people
//!
//! Records live in process memory for the lifetime of the server.

pub mod person_repo;

pub use person_repo::PersonRepository;
