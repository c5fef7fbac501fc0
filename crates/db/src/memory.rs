use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use slotbook_core::{
    calendar,
    models::booking::{booking_key, Actor, Booking},
    store::BookingStore,
};
use tokio::sync::RwLock;
use tracing::debug;

/// In-process [`BookingStore`], used when no database is configured and in
/// tests.
///
/// Records are keyed like the database rows. A commit applies its whole batch
/// while holding the write lock, with no await point in between, so readers
/// see either none or all of it.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    bookings: RwLock<BTreeMap<String, Booking>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored bookings across all dates.
    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }
}

/// Bookings of one date, in time order.
///
/// Keys start with the date and sort by time within it, so the date's records
/// form one contiguous range of the map.
fn bookings_on(
    bookings: &BTreeMap<String, Booking>,
    date: NaiveDate,
) -> impl Iterator<Item = &Booking> {
    let prefix = format!("{}_", calendar::format_date(date));
    bookings
        .range(prefix.clone()..)
        .take_while(move |(key, _)| key.starts_with(&prefix))
        .map(|(_, booking)| booking)
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn read_booked_labels(&self, date: NaiveDate) -> Result<BTreeSet<String>> {
        let bookings = self.bookings.read().await;
        Ok(bookings_on(&bookings, date)
            .map(|booking| booking.time.clone())
            .collect())
    }

    async fn commit_bookings(
        &self,
        date: NaiveDate,
        labels: &BTreeSet<String>,
        actor: &Actor,
    ) -> Result<BTreeSet<String>> {
        let booked_at = Utc::now();
        let mut bookings = self.bookings.write().await;
        let mut committed = BTreeSet::new();

        for label in labels {
            let key = booking_key(date, label);
            if bookings.contains_key(&key) {
                continue;
            }
            bookings.insert(key, Booking::new(date, label.clone(), actor, booked_at));
            committed.insert(label.clone());
        }

        debug!(
            "Committed {}/{} bookings on {} in memory",
            committed.len(),
            labels.len(),
            calendar::format_date(date)
        );
        Ok(committed)
    }

    async fn remove_booking(&self, date: NaiveDate, label: &str) -> Result<bool> {
        let mut bookings = self.bookings.write().await;
        Ok(bookings.remove(&booking_key(date, label)).is_some())
    }

    async fn list_bookings(&self, date: NaiveDate) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings_on(&bookings, date).cloned().collect())
    }
}
