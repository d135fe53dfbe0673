//! Booking (rental) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::Booking, AppState};

use super::{DataEnvelope, DeletedEnvelope, JsonBody};

/// List all bookings
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    responses(
        (status = 200, description = "All bookings, wrapped in `data`", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
) -> AppResult<Json<DataEnvelope<Vec<Booking>>>> {
    let bookings = state.services.bookings.list().await?;
    Ok(DataEnvelope::new(bookings))
}

/// Get booking by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking, wrapped in `data`", body = Booking),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataEnvelope<Booking>>> {
    let booking = state.services.bookings.get_by_id(&id).await?;
    Ok(DataEnvelope::new(booking))
}

/// Create a booking for an existing user and book
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = Booking,
    responses(
        (status = 201, description = "Booking created, wrapped in `data`", body = Booking),
        (status = 400, description = "Malformed booking", body = crate::error::ErrorResponse),
        (status = 404, description = "Referenced user or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    JsonBody(booking): JsonBody<Booking>,
) -> AppResult<(StatusCode, Json<DataEnvelope<Booking>>)> {
    let created = state.services.bookings.create(booking).await?;
    Ok((StatusCode::CREATED, DataEnvelope::new(created)))
}

/// Replace an existing booking
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking ID")),
    request_body = Booking,
    responses(
        (status = 200, description = "Booking updated, wrapped in `data`", body = Booking),
        (status = 400, description = "Malformed booking", body = crate::error::ErrorResponse),
        (status = 404, description = "Booking, user or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(booking): JsonBody<Booking>,
) -> AppResult<Json<DataEnvelope<Booking>>> {
    let updated = state.services.bookings.update(&id, booking).await?;
    Ok(DataEnvelope::new(updated))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Removed booking, under `meta._deleted`", body = Booking),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedEnvelope<Booking>>> {
    let deleted = state.services.bookings.delete(&id).await?;
    Ok(DeletedEnvelope::new(deleted))
}
