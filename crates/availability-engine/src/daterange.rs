//! Calendar-day selection for an availability computation.
//!
//! Days are either inferred from the busy data (today through the latest busy
//! day) or bounded by an explicit inclusive start/end date. Weekend and notice
//! filtering happen later, in [`crate::daily`].

use chrono::{Duration, NaiveDate};

use crate::error::{AvailabilityError, Result};
use crate::participant::BusyInterval;

/// How the evaluated days are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayRange {
    /// From `today` through the latest day any busy interval starts on.
    #[default]
    Inferred,
    /// Exactly `start..=end`.
    Explicit { start: NaiveDate, end: NaiveDate },
}

impl DayRange {
    /// An explicit range, rejecting `end < start`.
    pub fn explicit(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(AvailabilityError::InvalidRange { start, end });
        }
        Ok(Self::Explicit { start, end })
    }
}

/// Expand `range` into the ascending list of days to evaluate.
///
/// In inferred mode the result always contains `today`; every day between
/// `today` and the latest busy day is present even when nothing is booked on
/// it. Busy data before `today` never widens the range backwards.
pub fn expand_days<'a, I>(range: &DayRange, today: NaiveDate, busy: I) -> Result<Vec<NaiveDate>>
where
    I: IntoIterator<Item = &'a BusyInterval>,
{
    let (first, last) = match *range {
        DayRange::Inferred => {
            let latest = busy
                .into_iter()
                .map(|interval| interval.start.date_naive())
                .max()
                .map_or(today, |day| day.max(today));
            (today, latest)
        }
        DayRange::Explicit { start, end } => {
            if end < start {
                return Err(AvailabilityError::InvalidRange { start, end });
            }
            (start, end)
        }
    };

    let span = (last - first).num_days();
    Ok((0..=span).map(|offset| first + Duration::days(offset)).collect())
}
