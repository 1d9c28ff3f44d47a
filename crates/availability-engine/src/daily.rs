//! Per-participant daily free slots.
//!
//! A participant's busy intervals are quantized into a `date -> DaySlots`
//! busy map; each evaluated day's free set is then the work window minus the
//! busy slots, further narrowed by the policy's weekend and notice filters.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::participant::{BusyInterval, Participant};
use crate::policy::SchedulingPolicy;
use crate::slot::{quantize, DaySlots, SlotSpan};

/// Free slots of one participant, keyed by day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyFreeSet {
    days: BTreeMap<NaiveDate, DaySlots>,
}

impl DailyFreeSet {
    pub fn get(&self, day: NaiveDate) -> Option<DaySlots> {
        self.days.get(&day).copied()
    }

    /// Days in ascending order, including days with no free slot left.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, DaySlots)> + '_ {
        self.days.iter().map(|(day, slots)| (*day, *slots))
    }

    /// Free slots of `day` as ascending `(start, end)` pairs.
    pub fn spans(&self, day: NaiveDate) -> Vec<SlotSpan> {
        self.get(day).map(DaySlots::spans).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<(NaiveDate, DaySlots)> for DailyFreeSet {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DaySlots)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

/// Union of the quantized slots of every interval, grouped by start day.
pub fn busy_slots_by_day(busy: &[BusyInterval]) -> BTreeMap<NaiveDate, DaySlots> {
    let mut by_day: BTreeMap<NaiveDate, DaySlots> = BTreeMap::new();
    for interval in busy {
        let (day, slots) = quantize(interval);
        let entry = by_day.entry(day).or_default();
        *entry = entry.union(slots);
    }
    by_day
}

/// Builds [`DailyFreeSet`]s over a fixed day set.
///
/// One builder serves every participant of a request so they are all
/// evaluated over the same days and the same notice cutoff.
pub struct DailyAvailabilityBuilder<'a> {
    policy: &'a SchedulingPolicy,
    days: &'a [NaiveDate],
    cutoff: Option<NaiveDateTime>,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> DailyAvailabilityBuilder<'a> {
    pub fn new(policy: &'a SchedulingPolicy, days: &'a [NaiveDate], now: DateTime<Utc>) -> Self {
        Self {
            policy,
            days,
            cutoff: policy.notice_cutoff(now.naive_utc()),
            sink: &NoopSink,
        }
    }

    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn build(&self, participant: &Participant) -> DailyFreeSet {
        let busy = busy_slots_by_day(&participant.busy);

        let free: DailyFreeSet = self
            .days
            .iter()
            .copied()
            .filter(|day| self.policy.includes_day(*day))
            .map(|day| {
                let eligible = self.policy.schedulable_slots(day, self.cutoff);
                let booked = busy.get(&day).copied().unwrap_or_default();
                (day, eligible.difference(booked))
            })
            .collect();

        self.sink.participant_free(participant.id, &free);
        free
    }
}
