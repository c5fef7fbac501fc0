use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::time_slot::TimeSlot;
use crate::calendar;

/// The person committing a booking. Identity is vouched for by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub display_name: String,
}

impl Actor {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A persisted reservation of one slot. At most one exists per `(date, time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub date: NaiveDate,
    pub time: String,
    pub actor_id: String,
    pub actor_name: String,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        date: NaiveDate,
        time: impl Into<String>,
        actor: &Actor,
        booked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            date,
            time: time.into(),
            actor_id: actor.id.clone(),
            actor_name: actor.display_name.clone(),
            booked_at,
        }
    }

    pub fn key(&self) -> String {
        booking_key(self.date, &self.time)
    }
}

/// Record key for a booking: `2024-05-02_10-00` for `10:00` on 2 May 2024.
///
/// Existing stored data uses this scheme, and it makes `(date, time)` unique
/// wherever it is the primary key.
pub fn booking_key(date: NaiveDate, label: &str) -> String {
    format!("{}_{}", calendar::format_date(date), label.replace(':', "-"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitBookingsRequest {
    pub labels: Vec<String>,
    pub actor: Actor,
}

/// Outcome of [`crate::engine::BookingEngine::commit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResult {
    pub date: NaiveDate,
    /// Number of labels the caller asked for, after de-duplication.
    pub requested: usize,
    /// Labels written by this commit, ascending.
    pub committed: Vec<String>,
    /// Labels that were no longer available when the commit ran, ascending.
    pub dropped: Vec<String>,
    /// Grid for `date` re-read after the commit.
    pub slots: Vec<TimeSlot>,
}

impl CommitResult {
    pub fn committed_count(&self) -> usize {
        self.committed.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitBookingsResponse {
    pub date: NaiveDate,
    pub requested: usize,
    pub committed: Vec<String>,
    pub dropped: Vec<String>,
    pub slots: Vec<TimeSlot>,
    pub message: String,
}

impl From<CommitResult> for CommitBookingsResponse {
    fn from(result: CommitResult) -> Self {
        let message = match result.committed.len() {
            0 => "No slot was booked".to_string(),
            1 => "Booking confirmed for 1 slot".to_string(),
            n => format!("Booking confirmed for {} slots", n),
        };
        Self {
            date: result.date,
            requested: result.requested,
            committed: result.committed,
            dropped: result.dropped,
            slots: result.slots,
            message,
        }
    }
}

/// Outcome of [`crate::engine::BookingEngine::remove_booking`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveResult {
    pub date: NaiveDate,
    pub time: String,
    pub removed: bool,
    pub slots: Vec<TimeSlot>,
}
