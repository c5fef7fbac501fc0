use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use slotbook_core::{
    calendar,
    models::booking::{CommitBookingsRequest, CommitBookingsResponse},
};

use crate::{middleware::error_handling::AppError, ApiState};

/// `POST /api/dates/:date/bookings`
///
/// Books the still-available labels of the request. Labels that were taken in
/// the meantime come back in `dropped`; a store failure is reported as an
/// error and nothing is confirmed.
#[axum::debug_handler]
pub async fn commit_bookings(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
    Json(payload): Json<CommitBookingsRequest>,
) -> Result<Json<CommitBookingsResponse>, AppError> {
    let date = calendar::parse_date(&date)?;
    let result = state
        .engine
        .commit(date, &payload.labels, &payload.actor)
        .await?;
    Ok(Json(result.into()))
}
