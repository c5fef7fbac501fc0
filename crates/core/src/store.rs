//! Persistence boundary for bookings.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::booking::{Actor, Booking};

/// Storage for booked slots, keyed by `(date, time label)`.
///
/// Every backend must honour the same contract:
///
/// - `commit_bookings` is all-or-nothing for its batch, and a label that is
///   already booked is skipped silently rather than rejected
/// - `remove_booking` on an absent booking succeeds and reports `false`
/// - a read issued after a commit or removal has completed observes it
///
/// Two callers racing on the same label are not serialized beyond that: the
/// label ends up booked once and only one of them sees it in its result.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Labels booked on `date`; empty when there are none.
    async fn read_booked_labels(&self, date: NaiveDate) -> eyre::Result<BTreeSet<String>>;

    /// Books every label in `labels` for `actor` atomically.
    ///
    /// Returns the labels this call actually wrote.
    async fn commit_bookings(
        &self,
        date: NaiveDate,
        labels: &BTreeSet<String>,
        actor: &Actor,
    ) -> eyre::Result<BTreeSet<String>>;

    /// Deletes the booking for `(date, label)` if there is one.
    async fn remove_booking(&self, date: NaiveDate, label: &str) -> eyre::Result<bool>;

    /// Full booking records for `date`, ordered by time.
    async fn list_bookings(&self, date: NaiveDate) -> eyre::Result<Vec<Booking>>;
}
