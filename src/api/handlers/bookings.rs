use crate::domain::{BookingId, PageInfo};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use crate::application;
use crate::api::{
    error::ApiError,
    types::{BookClassRequest, BookingResponse, PageQuery},
};

/// POST /bookings - book a member into a class
///
/// Rules enforced:
/// - the member exists (422 MEMBER_NOT_FOUND otherwise)
/// - the class exists (422 CLASS_NOT_FOUND otherwise)
/// - class_date lies within the class range (422 INVALID_CLASS_DATE otherwise)
pub async fn book_class(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookClassRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let Json(req) = payload?;

    let booking = application::book_class(&state.service_deps, req.into_command()).await?;

    Ok((StatusCode::CREATED, Json(booking.into())))
}

/// GET /bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<BookingResponse>, ApiError> {
    let Path(booking_id) = path?;

    let booking = application::get_booking(
        &state.service_deps,
        BookingId::from_uuid(booking_id),
    )
    .await?;

    Ok(Json(booking.into()))
}

/// DELETE /bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(booking_id) = path?;

    application::delete_booking(&state.service_deps, BookingId::from_uuid(booking_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /bookings?page=&limit=
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let Query(query) = query?;

    let bookings = application::list_bookings(&state.service_deps, PageInfo::from(query)).await?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
