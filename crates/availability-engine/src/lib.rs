//! # availability-engine
//!
//! Deterministic shared-availability computation for interview scheduling.
//!
//! Given each participant's busy intervals and a meeting duration, the engine
//! finds every window inside working hours during which all participants are
//! free at once. Time is quantized into 30-minute slots; any overlap with a
//! slot makes the whole slot busy.
//!
//! ```rust
//! use availability_engine::{parse_timestamp, AvailabilityEngine, BusyInterval, DayRange, Participant};
//!
//! let busy = BusyInterval::new(
//!     parse_timestamp("2026-03-16T09:00:00Z").unwrap(),
//!     parse_timestamp("2026-03-16T16:00:00Z").unwrap(),
//! );
//! let participants = vec![Participant::new(1, vec![busy])];
//! let now = parse_timestamp("2026-03-16T08:00:00Z").unwrap();
//!
//! let windows = AvailabilityEngine::default()
//!     .compute(&participants, 60, &DayRange::Inferred, now)
//!     .unwrap();
//! assert_eq!(windows.len(), 1);
//! assert_eq!(windows[0].start, parse_timestamp("2026-03-16T16:00:00Z").unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`slot`] — 30-minute slot grid, day bitsets, busy-interval quantization
//! - [`daterange`] — which calendar days are evaluated
//! - [`daily`] — per-participant free slots per day
//! - [`intersect`] — slots free for every participant
//! - [`windows`] — candidate windows of the requested duration
//! - [`engine`] — the validated end-to-end pipeline
//! - [`policy`] — work hours, weekend and minimum-notice configuration
//! - [`diagnostics`] — observational sinks (`tracing`-backed dumps)
//! - [`wire`] — JSON request/response types and timestamp parsing
//! - [`error`] — Error types

pub mod daily;
pub mod daterange;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod intersect;
pub mod participant;
pub mod policy;
pub mod slot;
pub mod windows;
pub mod wire;

pub use daily::{DailyAvailabilityBuilder, DailyFreeSet};
pub use daterange::{expand_days, DayRange};
pub use diagnostics::{DiagnosticSink, NoopSink, TracingSink};
pub use engine::{find_candidate_windows, AvailabilityEngine};
pub use error::AvailabilityError;
pub use intersect::{intersect, SharedFreeSet};
pub use participant::{BusyInterval, Participant, ParticipantId};
pub use policy::SchedulingPolicy;
pub use slot::{quantize, DaySlots, SlotIndex, SlotSpan, WorkWindow};
pub use windows::{extract_windows, CandidateWindow};
pub use wire::{parse_timestamp, AvailabilityRequest, WindowDto};
