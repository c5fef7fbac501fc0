use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    Available,
    Selected,
    Disabled,
}

/// Why a slot is disabled.
///
/// The generator only produces `Booked` and `Break`; `ClassPart` and
/// `TooClose` are accepted on the wire for clients that already know them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisabledReason {
    Booked,
    Break,
    ClassPart,
    TooClose,
}

/// One bookable hour on a given day. Built fresh for every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub label: String,
    pub start_instant: NaiveDateTime,
    pub status: SlotStatus,
    pub reason: Option<DisabledReason>,
}

impl TimeSlot {
    pub fn available(label: String, start_instant: NaiveDateTime) -> Self {
        Self {
            label,
            start_instant,
            status: SlotStatus::Available,
            reason: None,
        }
    }

    pub fn disabled(label: String, start_instant: NaiveDateTime, reason: DisabledReason) -> Self {
        Self {
            label,
            start_instant,
            status: SlotStatus::Disabled,
            reason: Some(reason),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }

    pub fn is_disabled(&self) -> bool {
        self.status == SlotStatus::Disabled
    }
}
