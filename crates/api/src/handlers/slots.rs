//! # Slot Handlers
//!
//! Read-only endpoints: the schedule configuration, week navigation and the
//! slot grid for a date.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use slotbook_core::{
    calendar,
    models::{
        schedule::{ScheduleConfigResponse, WeekResponse},
        time_slot::TimeSlot,
    },
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the slot grid
///
/// `selected` is a comma-separated list of labels the user has picked but not
/// committed yet, e.g. `selected=09:00,12:00`.
#[derive(Debug, Default, Deserialize)]
pub struct SlotsQuery {
    pub selected: Option<String>,
}

impl SlotsQuery {
    pub fn selected_labels(&self) -> Vec<String> {
        self.selected
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// `GET /api/config`
pub async fn get_config(State(state): State<Arc<ApiState>>) -> Json<ScheduleConfigResponse> {
    Json(ScheduleConfigResponse::new(
        state.engine.schedule_config(),
        state.announcement.clone(),
    ))
}

/// `GET /api/weeks/:date`
pub async fn get_week(Path(date): Path<String>) -> Result<Json<WeekResponse>, AppError> {
    let date = calendar::parse_date(&date)?;
    Ok(Json(WeekResponse::containing(date)))
}

/// `GET /api/dates/:date/slots`
///
/// Returns the grid for `date` with the optional selection projected onto it.
/// Selected labels that are disabled stay disabled.
#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    let date = calendar::parse_date(&date)?;
    let slots = state.engine.slots(date, &query.selected_labels()).await?;
    Ok(Json(slots))
}
