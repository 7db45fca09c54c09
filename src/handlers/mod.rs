use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::infrastructure::repositories::PersonRepository;

pub mod booking;
pub mod error;
pub mod health;

pub use booking::register_booking_handler;
pub use error::ApiError;
pub use health::health_handler;

/// API routes served next to the shell
pub fn api_router(people: PersonRepository) -> Router {
    Router::new()
        .route("/api", get(health_handler))
        .route("/booking/register", post(register_booking_handler))
        // Repository as Extension (NOT with_state)
        .layer(Extension(people))
}
