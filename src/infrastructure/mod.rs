//! Server-side storage
pub mod repositories;
