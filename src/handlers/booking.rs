use axum::{http::StatusCode, Extension, Json};

use crate::domain::models::{BookingCreateDto, BookingCreated};
use crate::infrastructure::repositories::PersonRepository;
use crate::shared::logging::{log_booking_registered, log_booking_rejected};

use super::error::ApiError;

/// POST /booking/register
/// Register the person behind a booking and return their id
pub async fn register_booking_handler(
    Extension(people): Extension<PersonRepository>,
    Json(booking): Json<BookingCreateDto>,
) -> Result<(StatusCode, Json<BookingCreated>), ApiError> {
    let person = people.register(booking).await.map_err(|e| {
        log_booking_rejected(&e.to_string());
        ApiError::from(e)
    })?;

    log_booking_registered(person.id, &person.email);

    Ok((StatusCode::CREATED, Json(BookingCreated { id: person.id })))
}
