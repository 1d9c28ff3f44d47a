//! Participants and their busy intervals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a participant (interviewer) as issued by the caller's store.
pub type ParticipantId = u64;

/// A half-open busy period `[start, end)`.
///
/// Timestamps are naive UTC instants: no offset conversion is ever applied.
/// `start < end` is expected but not enforced; an inverted or empty interval
/// occupies no slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// One participant's busy data, already parsed and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: ParticipantId,
    pub busy: Vec<BusyInterval>,
}

impl Participant {
    pub fn new(id: ParticipantId, busy: Vec<BusyInterval>) -> Self {
        Self { id, busy }
    }
}
