//! # Slot Generation
//!
//! Derives the bookable grid for one day from the opening hours and the labels
//! already booked on that day.
//!
//! A session booked at hour *h* runs until *h+1* and is followed by a
//! mandatory half-hour break. Slots start on the hour, so the break makes the
//! whole slot at *h+1* unavailable. It is reported as [`DisabledReason::Break`]
//! rather than `Booked` so clients can tell the two apart.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};

use crate::{
    calendar,
    config::ScheduleConfig,
    models::time_slot::{DisabledReason, TimeSlot},
};

/// Builds the ordered slot grid for `date`.
///
/// One slot is emitted per hour in `config.hours()`, ascending. For each slot:
///
/// - its own label booked: `Disabled` / `Booked`
/// - the previous hour's label booked: `Disabled` / `Break`
/// - otherwise `Available`
///
/// Booked labels that match no slot (outside the window, or not on the hour)
/// have no effect. The function is pure; equal inputs give equal outputs.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use chrono::NaiveDate;
/// use slotbook_core::{config::ScheduleConfig, slots::generate};
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
/// let booked = BTreeSet::from(["10:00".to_string()]);
/// let slots = generate(date, ScheduleConfig::default(), &booked);
///
/// assert_eq!(slots.len(), 6);
/// assert!(slots[1].is_disabled());
/// assert!(slots[2].is_disabled());
/// ```
pub fn generate(
    date: NaiveDate,
    config: ScheduleConfig,
    booked_labels: &BTreeSet<String>,
) -> Vec<TimeSlot> {
    config
        .hours()
        .filter_map(|hour| {
            let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
            let label = calendar::format_label(time);
            let start_instant = date.and_time(time);

            let is_booked = booked_labels.contains(&label);
            let is_break = calendar::previous_label(&label)
                .is_some_and(|previous| booked_labels.contains(&previous));

            let slot = if is_booked {
                TimeSlot::disabled(label, start_instant, DisabledReason::Booked)
            } else if is_break {
                TimeSlot::disabled(label, start_instant, DisabledReason::Break)
            } else {
                TimeSlot::available(label, start_instant)
            };
            Some(slot)
        })
        .collect()
}

/// Labels of the slots in `slots` that can currently be booked.
pub fn available_labels(slots: &[TimeSlot]) -> BTreeSet<String> {
    slots
        .iter()
        .filter(|slot| slot.is_available())
        .map(|slot| slot.label.clone())
        .collect()
}
