use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/dates/:date/bookings",
        post(handlers::bookings::commit_bookings),
    )
}
