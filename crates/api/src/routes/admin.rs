use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/admin/dates/:date/bookings",
            get(handlers::admin::list_bookings),
        )
        .route(
            "/api/admin/dates/:date/bookings/:time",
            delete(handlers::admin::remove_booking),
        )
}
