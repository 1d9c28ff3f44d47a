//! Random free/busy data, standing in for a real calendar provider.
//!
//! Each participant gets a generated display name and 3-6 busy blocks on
//! random days of the horizon. A block starts on the hour between 9:00 and
//! 15:00, lasts one or two hours, is optionally shifted to the half hour
//! (start +30 min, end +60 min) and is clipped at 17:00.

use availability_engine::wire::{format_timestamp, BusyPeriod, ParticipantBusy};
use availability_engine::{AvailabilityRequest, ParticipantId};
use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;

const WORK_START_HOUR: u32 = 9;
const WORK_END_HOUR: u32 = 17;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Priya", "Jordan", "Mei", "Samuel", "Fatima", "Lukas", "Ana", "Kwame", "Elena",
];
const LAST_NAMES: &[&str] = &[
    "Garcia", "Okafor", "Nguyen", "Schmidt", "Patel", "Kowalski", "Silva", "Tanaka", "Brown",
    "Haddad",
];

/// A random "First Last" display name.
pub fn interviewer_name<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

/// Busy blocks for one participant over `days` days starting at `start_date`.
///
/// `days` must be at least 1.
pub fn generate_busy_blocks<R: Rng>(
    rng: &mut R,
    start_date: NaiveDate,
    days: u32,
) -> Vec<BusyPeriod> {
    let count = rng.gen_range(3..=6);
    (0..count)
        .map(|_| {
            let date = start_date + Duration::days(i64::from(rng.gen_range(0..days)));
            let start_hour = rng.gen_range(WORK_START_HOUR..=WORK_END_HOUR - 2);
            let length = Duration::hours(rng.gen_range(1..=2));
            let half_hour = rng.gen_bool(0.5);

            let mut start = date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(start_hour));
            if half_hour {
                start += Duration::minutes(30);
            }
            let mut end = start + length;
            if half_hour {
                end += Duration::minutes(30);
            }
            let end_of_day =
                date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(WORK_END_HOUR));
            end = end.min(end_of_day);

            BusyPeriod {
                start: format_timestamp(start.and_utc()),
                end: format_timestamp(end.and_utc()),
            }
        })
        .collect()
}

/// A complete request selecting every id, in order.
pub fn mock_request<R: Rng>(
    rng: &mut R,
    ids: &[ParticipantId],
    start_date: NaiveDate,
    days: u32,
    duration: i64,
) -> AvailabilityRequest {
    let participants = ids
        .iter()
        .map(|&participant_id| ParticipantBusy {
            participant_id,
            name: Some(interviewer_name(rng)),
            busy: generate_busy_blocks(rng, start_date, days),
        })
        .collect();

    AvailabilityRequest {
        participants,
        selection: ids.to_vec(),
        duration,
        range: None,
    }
}
