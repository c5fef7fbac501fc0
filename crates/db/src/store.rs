use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use slotbook_core::{
    calendar,
    models::booking::{Actor, Booking},
    store::BookingStore,
};
use tracing::debug;

use crate::{repositories::booking, DbPool};

/// PostgreSQL-backed [`BookingStore`].
///
/// A commit runs in a single transaction. If any insert fails, or the future
/// is dropped before it finishes, the transaction rolls back and none of the
/// batch is visible.
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn read_booked_labels(&self, date: NaiveDate) -> Result<BTreeSet<String>> {
        let times = booking::get_booked_times_by_date(&self.pool, date).await?;
        Ok(times.into_iter().collect())
    }

    async fn commit_bookings(
        &self,
        date: NaiveDate,
        labels: &BTreeSet<String>,
        actor: &Actor,
    ) -> Result<BTreeSet<String>> {
        let booked_at = Utc::now();
        let mut tx = self.pool.begin().await?;
        let mut committed = BTreeSet::new();

        for label in labels {
            let inserted = booking::insert_booking_if_absent(
                &mut tx,
                date,
                label,
                &actor.id,
                &actor.display_name,
                booked_at,
            )
            .await?;
            if inserted {
                committed.insert(label.clone());
            }
        }

        tx.commit().await?;

        debug!(
            "Committed {}/{} bookings on {}",
            committed.len(),
            labels.len(),
            calendar::format_date(date)
        );
        Ok(committed)
    }

    async fn remove_booking(&self, date: NaiveDate, label: &str) -> Result<bool> {
        booking::delete_booking(&self.pool, date, label).await
    }

    async fn list_bookings(&self, date: NaiveDate) -> Result<Vec<Booking>> {
        booking::get_bookings_by_date(&self.pool, date)
            .await?
            .into_iter()
            .map(Booking::try_from)
            .collect()
    }
}
