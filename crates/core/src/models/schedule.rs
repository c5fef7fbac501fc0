use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::config::ScheduleConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfigResponse {
    pub start_hour: u32,
    pub end_hour: u32,
    pub announcement: Option<String>,
}

impl ScheduleConfigResponse {
    pub fn new(config: ScheduleConfig, announcement: Option<String>) -> Self {
        Self {
            start_hour: config.start_hour(),
            end_hour: config.end_hour(),
            announcement,
        }
    }
}

/// A Monday-started week, with the neighbouring week starts for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekResponse {
    pub start: NaiveDate,
    pub days: Vec<NaiveDate>,
    pub previous: NaiveDate,
    pub next: NaiveDate,
}

impl WeekResponse {
    pub fn containing(date: NaiveDate) -> Self {
        let start = calendar::week_start(date);
        Self {
            start,
            days: calendar::week_days(start).to_vec(),
            previous: start - chrono::Duration::days(7),
            next: start + chrono::Duration::days(7),
        }
    }
}

