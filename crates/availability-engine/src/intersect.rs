//! Slots free for every participant.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::daily::DailyFreeSet;
use crate::slot::{DaySlots, SlotIndex, SlotSpan};

/// Slots free for all participants, by ascending day then ascending start.
///
/// Days without a single shared slot are absent rather than empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedFreeSet {
    days: BTreeMap<NaiveDate, Vec<SlotSpan>>,
}

impl SharedFreeSet {
    pub fn get(&self, day: NaiveDate) -> Option<&[SlotSpan]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    pub fn contains(&self, day: NaiveDate, slot: SlotIndex) -> bool {
        self.get(day)
            .is_some_and(|spans| spans.iter().any(|span| span.index == slot))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[SlotSpan])> + '_ {
        self.days.iter().map(|(day, spans)| (*day, spans.as_slice()))
    }

    /// Number of days with at least one shared slot.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn slot_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

impl FromIterator<(NaiveDate, DaySlots)> for SharedFreeSet {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DaySlots)>>(iter: I) -> Self {
        let days = iter
            .into_iter()
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(day, slots)| (day, slots.spans()))
            .collect();
        Self { days }
    }
}

/// Intersect per-participant free sets.
///
/// A slot is shared when it is free in every input set; a day missing from
/// any one set therefore has no shared slots. No input sets means nobody can
/// be free together, so the result is empty.
pub fn intersect<'a, I>(free_sets: I) -> SharedFreeSet
where
    I: IntoIterator<Item = &'a DailyFreeSet>,
{
    let mut free_sets = free_sets.into_iter();
    let Some(first) = free_sets.next() else {
        return SharedFreeSet::default();
    };

    let mut shared: BTreeMap<NaiveDate, DaySlots> = first.iter().collect();
    for set in free_sets {
        for (day, slots) in shared.iter_mut() {
            *slots = slots.intersection(set.get(*day).unwrap_or_default());
        }
    }

    shared.into_iter().collect()
}
