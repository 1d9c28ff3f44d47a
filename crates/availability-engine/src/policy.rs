//! Scheduling policy: working hours plus the optional day and notice filters.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::slot::{DaySlots, WorkWindow};

/// Caller-supplied configuration for one availability computation.
///
/// Every field has a default, so a policy file only needs to name what it
/// changes:
///
/// ```rust
/// use availability_engine::SchedulingPolicy;
///
/// let policy: SchedulingPolicy = serde_json::from_str(r#"{"exclude_weekends": true}"#).unwrap();
/// assert!(policy.exclude_weekends);
/// assert_eq!(policy.work_window.start_hour, 9);
/// assert_eq!(policy.min_notice_hours, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingPolicy {
    /// Hours eligible for scheduling.
    pub work_window: WorkWindow,
    /// Drop Saturdays and Sundays from the day set.
    pub exclude_weekends: bool,
    /// Drop slots starting earlier than `now + min_notice_hours`.
    pub min_notice_hours: Option<u32>,
}

impl SchedulingPolicy {
    /// Weekends excluded and a 24-hour minimum notice.
    pub fn strict() -> Self {
        Self {
            work_window: WorkWindow::default(),
            exclude_weekends: true,
            min_notice_hours: Some(24),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.work_window.validate()
    }

    /// Whether `day` survives the weekend filter.
    pub fn includes_day(&self, day: NaiveDate) -> bool {
        !(self.exclude_weekends && matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
    }

    /// Earliest instant a slot may start at, if a notice period is configured.
    pub fn notice_cutoff(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        self.min_notice_hours
            .map(|hours| now + Duration::hours(i64::from(hours)))
    }

    /// Slots of `day` that are allowed to start given the notice cutoff.
    pub fn schedulable_slots(&self, day: NaiveDate, cutoff: Option<NaiveDateTime>) -> DaySlots {
        let work = self.work_window.slots();
        match cutoff {
            None => work,
            Some(cutoff) if day < cutoff.date() => DaySlots::empty(),
            Some(cutoff) if day == cutoff.date() => {
                work.intersection(DaySlots::starting_at_or_after(cutoff.time()))
            }
            Some(_) => work,
        }
    }
}
