//! Opening hours of the bookable window.

use serde::{Deserialize, Serialize};

use crate::errors::{ScheduleError, ScheduleResult};

/// Daily window in which one-hour slots can be booked.
///
/// `start_hour` is the first bookable hour and `end_hour` the exclusive end,
/// so `9..15` yields slots from `09:00` through `14:00`. A value can only be
/// obtained through [`ScheduleConfig::new`] (or deserialization, which goes
/// through the same check), so holding one means the window is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScheduleConfig")]
pub struct ScheduleConfig {
    start_hour: u32,
    end_hour: u32,
}

#[derive(Deserialize)]
struct RawScheduleConfig {
    start_hour: u32,
    end_hour: u32,
}

impl TryFrom<RawScheduleConfig> for ScheduleConfig {
    type Error = ScheduleError;

    fn try_from(raw: RawScheduleConfig) -> ScheduleResult<Self> {
        Self::new(raw.start_hour, raw.end_hour)
    }
}

impl ScheduleConfig {
    pub const MAX_HOUR: u32 = 24;

    /// Validates and builds a window.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::Configuration` - either hour is above 24, or the
    ///   window is empty (`start_hour >= end_hour`)
    pub fn new(start_hour: u32, end_hour: u32) -> ScheduleResult<Self> {
        if start_hour > Self::MAX_HOUR || end_hour > Self::MAX_HOUR {
            return Err(ScheduleError::Configuration(format!(
                "hours must be within 0..=24, got {}..{}",
                start_hour, end_hour
            )));
        }
        if start_hour >= end_hour {
            return Err(ScheduleError::Configuration(format!(
                "start hour {} must be before end hour {}",
                start_hour, end_hour
            )));
        }

        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Hours that start a slot, in ascending order.
    pub fn hours(&self) -> std::ops::Range<u32> {
        self.start_hour..self.end_hour
    }

    /// Number of slots generated per day.
    pub fn slot_count(&self) -> usize {
        (self.end_hour - self.start_hour) as usize
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 15,
        }
    }
}
