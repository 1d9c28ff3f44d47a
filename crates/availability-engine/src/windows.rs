//! Candidate windows from shared free slots.
//!
//! Each day's shared slots are scanned for every start position whose next
//! `ceil(duration / 30)` slots are back-to-back. Overlapping candidates are
//! all kept; nothing is merged or deduplicated.

use chrono::{DateTime, Duration, Utc};

use crate::error::{AvailabilityError, Result};
use crate::intersect::SharedFreeSet;
use crate::slot::{SlotSpan, SLOT_MINUTES};

/// A proposed meeting: `end` is exactly `start + duration`, which need not
/// fall on the slot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CandidateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CandidateWindow {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Number of consecutive slots a meeting of `duration_minutes` occupies.
pub fn slots_needed(duration_minutes: u32) -> usize {
    duration_minutes.div_ceil(SLOT_MINUTES) as usize
}

/// Every `slot[k].end == slot[k + 1].start` holds across the run.
fn is_contiguous(run: &[SlotSpan]) -> bool {
    run.windows(2).all(|pair| pair[0].end == pair[1].start)
}

/// Extract all candidate windows of `duration_minutes` from `shared`.
///
/// A duration longer than any day can hold yields no windows.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDuration` when `duration_minutes <= 0`.
pub fn extract_windows(
    shared: &SharedFreeSet,
    duration_minutes: i64,
) -> Result<Vec<CandidateWindow>> {
    if duration_minutes <= 0 {
        return Err(AvailabilityError::InvalidDuration(duration_minutes));
    }
    let Ok(minutes) = u32::try_from(duration_minutes) else {
        return Ok(Vec::new());
    };
    let needed = slots_needed(minutes);
    let duration = Duration::minutes(i64::from(minutes));

    let mut windows = Vec::new();
    for (day, spans) in shared.iter() {
        if spans.len() < needed {
            continue;
        }
        for start_index in 0..=spans.len() - needed {
            if !is_contiguous(&spans[start_index..start_index + needed]) {
                continue;
            }
            let start = day.and_time(spans[start_index].start).and_utc();
            windows.push(CandidateWindow {
                start,
                end: start + duration,
            });
        }
    }

    Ok(windows)
}
