use chrono::{DateTime, Utc};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use slotbook_core::{calendar, models::booking::Booking};
use sqlx::FromRow;

/// Row of the `bookings` table. `date` is stored as `YYYY-MM-DD` text and
/// `id` is the booking key derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: String,
    pub date: String,
    pub time: String,
    pub actor_id: String,
    pub actor_name: String,
    pub booked_at: DateTime<Utc>,
}

impl TryFrom<DbBooking> for Booking {
    type Error = eyre::Report;

    fn try_from(row: DbBooking) -> Result<Self> {
        let date = calendar::parse_date(&row.date)
            .wrap_err_with(|| format!("Invalid date in booking {}", row.id))?;
        Ok(Booking {
            date,
            time: row.time,
            actor_id: row.actor_id,
            actor_name: row.actor_name,
            booked_at: row.booked_at,
        })
    }
}
