//! # Admin Handlers
//!
//! Booking listing and removal. Every handler takes [`AdminAccess`], so the
//! request is rejected before it runs unless it carries the admin password.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use slotbook_core::{
    calendar,
    models::booking::{Booking, RemoveResult},
};

use crate::{
    middleware::{auth::AdminAccess, error_handling::AppError},
    ApiState,
};

/// `GET /api/admin/dates/:date/bookings`
#[axum::debug_handler]
pub async fn list_bookings(
    _admin: AdminAccess,
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let date = calendar::parse_date(&date)?;
    let bookings = state.engine.bookings(date).await?;
    Ok(Json(bookings))
}

/// `DELETE /api/admin/dates/:date/bookings/:time`
///
/// Removing a booking that does not exist succeeds with `removed: false`.
#[axum::debug_handler]
pub async fn remove_booking(
    _admin: AdminAccess,
    State(state): State<Arc<ApiState>>,
    Path((date, time)): Path<(String, String)>,
) -> Result<Json<RemoveResult>, AppError> {
    let date = calendar::parse_date(&date)?;
    let result = state.engine.remove_booking(date, &time).await?;
    Ok(Json(result))
}
