//! The fixed 30-minute slot grid and busy-interval quantization.
//!
//! A day is split into 48 half-hour slots. Slot `i` covers the wall-clock span
//! `[i * 30min, (i + 1) * 30min)`, so slot 0 is 00:00-00:30 and slot 47 is
//! 23:30-24:00. Per-day slot membership is stored in a 48-bit [`DaySlots`]
//! bitset.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{AvailabilityError, Result};
use crate::participant::BusyInterval;

/// Length of one slot in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Number of slots in a calendar day.
pub const SLOTS_PER_DAY: u8 = 48;

const SLOT_SECONDS: u32 = SLOT_MINUTES * 60;

/// Index of a 30-minute bucket within a day, always in `0..48`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// Returns `None` when `index` is outside the day.
    pub fn new(index: u8) -> Option<Self> {
        (index < SLOTS_PER_DAY).then_some(Self(index))
    }

    /// The slot whose span contains `time`.
    pub fn containing(time: NaiveTime) -> Self {
        Self((time.num_seconds_from_midnight() / SLOT_SECONDS) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Wall-clock start: `(i / 2):00` for even slots, `(i / 2):30` for odd ones.
    pub fn start_time(self) -> NaiveTime {
        let minutes = i64::from(self.0) * i64::from(SLOT_MINUTES);
        NaiveTime::MIN + Duration::minutes(minutes)
    }

    /// Wall-clock end. Slot 47 ends at midnight, which wraps to 00:00.
    pub fn end_time(self) -> NaiveTime {
        self.start_time() + Duration::minutes(i64::from(SLOT_MINUTES))
    }
}

/// A slot rendered as its `(start, end)` wall-clock pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotSpan {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub index: SlotIndex,
}

impl From<SlotIndex> for SlotSpan {
    fn from(index: SlotIndex) -> Self {
        Self {
            start: index.start_time(),
            end: index.end_time(),
            index,
        }
    }
}

/// The set of slots of a single day, one bit per slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DaySlots(u64);

impl DaySlots {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All slots in `[start, end)`, clamped to the day.
    pub fn range(start: u8, end: u8) -> Self {
        let end = end.min(SLOTS_PER_DAY);
        if start >= end {
            return Self::empty();
        }
        let upper = (1u64 << end) - 1;
        let lower = (1u64 << start) - 1;
        Self(upper & !lower)
    }

    /// Slots whose wall-clock start is at or after `time`.
    pub fn starting_at_or_after(time: NaiveTime) -> Self {
        let secs = time.num_seconds_from_midnight() + u32::from(time.nanosecond() > 0);
        Self::range(secs.div_ceil(SLOT_SECONDS) as u8, SLOTS_PER_DAY)
    }

    pub fn contains(self, slot: SlotIndex) -> bool {
        self.0 & (1 << slot.0) != 0
    }

    pub fn insert(&mut self, slot: SlotIndex) {
        self.0 |= 1 << slot.0;
    }

    pub fn remove(&mut self, slot: SlotIndex) {
        self.0 &= !(1 << slot.0);
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member slots in ascending order.
    pub fn iter(self) -> impl Iterator<Item = SlotIndex> {
        (0..SLOTS_PER_DAY)
            .map(SlotIndex)
            .filter(move |slot| self.contains(*slot))
    }

    /// Member slots as ascending `(start, end)` pairs.
    pub fn spans(self) -> Vec<SlotSpan> {
        self.iter().map(SlotSpan::from).collect()
    }
}

impl FromIterator<SlotIndex> for DaySlots {
    fn from_iter<I: IntoIterator<Item = SlotIndex>>(iter: I) -> Self {
        let mut slots = Self::empty();
        for slot in iter {
            slots.insert(slot);
        }
        slots
    }
}

/// Working hours as whole-hour bounds `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for WorkWindow {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}

impl WorkWindow {
    /// Requires `start_hour < end_hour <= 24`.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        let window = Self {
            start_hour,
            end_hour,
        };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(AvailabilityError::InvalidWorkWindow {
                start_hour: self.start_hour,
                end_hour: self.end_hour,
            });
        }
        Ok(())
    }

    /// Slots eligible for scheduling; 9-17 gives slots 18..34.
    pub fn slots(&self) -> DaySlots {
        let start = self.start_hour.min(24) * 2;
        let end = self.end_hour.min(24) * 2;
        DaySlots::range(start as u8, end as u8)
    }
}

/// Map one busy interval to the slots it occupies on its start day.
///
/// The start rounds down to the slot containing it. The exclusive end bound is
/// `hour * 2`, plus one when the end has any minutes past the hour, so an end
/// of 10:15 or 10:45 both stop at 10:30. Seconds are ignored. An end on a later
/// calendar day is clamped to midnight of the start day.
pub fn quantize(interval: &BusyInterval) -> (NaiveDate, DaySlots) {
    let day = interval.start.date_naive();
    if interval.end <= interval.start {
        return (day, DaySlots::empty());
    }

    let start_slot = SlotIndex::containing(interval.start.time()).get();
    let end_slot = if interval.end.date_naive() > day {
        SLOTS_PER_DAY
    } else {
        let end = interval.end.time();
        (end.hour() * 2 + u32::from(end.minute() > 0)) as u8
    };

    (day, DaySlots::range(start_slot, end_slot))
}
