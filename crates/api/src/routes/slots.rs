use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/config", get(handlers::slots::get_config))
        .route("/api/weeks/:date", get(handlers::slots::get_week))
        .route("/api/dates/:date/slots", get(handlers::slots::get_slots))
}
