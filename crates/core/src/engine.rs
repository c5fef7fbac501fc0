//! # Booking Engine
//!
//! Ties the slot generator to a [`BookingStore`]. The engine holds no state of
//! its own beyond the opening hours and a handle to the store, so one instance
//! can be shared by every request for the lifetime of the process.
//!
//! ## Commit
//!
//! 1. Reject an empty selection or a malformed label
//! 2. Re-read the date and regenerate its grid
//! 3. Drop every requested label that is no longer `Available`
//! 4. Write the remainder in one atomic batch
//! 5. Re-read the date so the returned grid reflects the write
//!
//! Dropped labels are reported, not raised: a selection made on a grid that
//! has since changed still books whatever is left of it.

use std::{collections::BTreeSet, sync::Arc};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::{
    calendar,
    config::ScheduleConfig,
    errors::{ScheduleError, ScheduleResult},
    models::{
        booking::{Actor, Booking, CommitResult, RemoveResult},
        time_slot::TimeSlot,
    },
    projection, slots,
    store::BookingStore,
};

#[derive(Clone)]
pub struct BookingEngine {
    config: ScheduleConfig,
    store: Arc<dyn BookingStore>,
}

impl std::fmt::Debug for BookingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BookingEngine {
    pub fn new(config: ScheduleConfig, store: Arc<dyn BookingStore>) -> Self {
        Self { config, store }
    }

    pub fn schedule_config(&self) -> ScheduleConfig {
        self.config
    }

    /// Labels currently booked on `date`.
    pub async fn booked_labels(&self, date: NaiveDate) -> ScheduleResult<BTreeSet<String>> {
        Ok(self.store.read_booked_labels(date).await?)
    }

    /// Freshly generated grid for `date`, with `selected` projected onto it.
    pub async fn slots(
        &self,
        date: NaiveDate,
        selected: &[String],
    ) -> ScheduleResult<Vec<TimeSlot>> {
        let booked = self.booked_labels(date).await?;
        let grid = slots::generate(date, self.config, &booked);
        Ok(projection::project(&grid, selected))
    }

    /// Books the still-available labels of `selected` on `date` for `actor`.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::Validation` - empty selection, malformed label or
    ///   missing actor id; the store is not touched
    /// * `ScheduleError::Store` - the store failed; nothing was written by this
    ///   call and it is safe to retry
    pub async fn commit(
        &self,
        date: NaiveDate,
        selected: &[String],
        actor: &Actor,
    ) -> ScheduleResult<CommitResult> {
        if selected.is_empty() {
            return Err(ScheduleError::Validation(
                "At least one time slot must be selected".to_string(),
            ));
        }
        if actor.id.trim().is_empty() {
            return Err(ScheduleError::Validation("Actor id must not be empty".to_string()));
        }
        for label in selected {
            calendar::validate_label(label)?;
        }

        let requested: BTreeSet<String> = selected.iter().cloned().collect();

        let booked = self.store.read_booked_labels(date).await?;
        let available = slots::available_labels(&slots::generate(date, self.config, &booked));
        let (to_commit, dropped): (BTreeSet<String>, BTreeSet<String>) = requested
            .iter()
            .cloned()
            .partition(|label| available.contains(label));

        if !dropped.is_empty() {
            warn!(
                "Dropping unavailable slots for {}: {:?}",
                calendar::format_date(date),
                dropped
            );
        }

        let committed = if to_commit.is_empty() {
            debug!("Nothing left to commit for {}", calendar::format_date(date));
            BTreeSet::new()
        } else {
            self.store.commit_bookings(date, &to_commit, actor).await?
        };

        info!(
            "Committed {} of {} slots on {} for actor {}",
            committed.len(),
            requested.len(),
            calendar::format_date(date),
            actor.id
        );

        let slots = self.slots(date, &[]).await?;

        Ok(CommitResult {
            date,
            requested: requested.len(),
            committed: committed.into_iter().collect(),
            dropped: dropped.into_iter().collect(),
            slots,
        })
    }

    /// Administrative removal of a single booking.
    ///
    /// Removing a booking that does not exist succeeds with `removed: false`.
    pub async fn remove_booking(
        &self,
        date: NaiveDate,
        label: &str,
    ) -> ScheduleResult<RemoveResult> {
        calendar::validate_label(label)?;

        let removed = self.store.remove_booking(date, label).await?;
        if removed {
            info!("Removed booking {} on {}", label, calendar::format_date(date));
        } else {
            debug!("No booking {} on {} to remove", label, calendar::format_date(date));
        }

        let slots = self.slots(date, &[]).await?;

        Ok(RemoveResult {
            date,
            time: label.to_string(),
            removed,
            slots,
        })
    }

    /// Booking records for `date`, for administrative listing.
    pub async fn bookings(&self, date: NaiveDate) -> ScheduleResult<Vec<Booking>> {
        Ok(self.store.list_bookings(date).await?)
    }
}
