//! Observational hooks for the availability pipeline.
//!
//! The engine reports intermediate results to a [`DiagnosticSink`] passed in
//! by the caller. Sinks only observe: nothing they do can change a result.
//! [`TracingSink`] renders human-readable dumps and emits them as `tracing`
//! debug events under the `availability` target.

use std::fmt::Write as _;

use chrono::NaiveDate;
use tracing::debug;

use crate::daily::DailyFreeSet;
use crate::intersect::SharedFreeSet;
use crate::participant::ParticipantId;
use crate::slot::SlotSpan;
use crate::windows::CandidateWindow;

/// Receives intermediate results of a computation. All hooks default to no-ops.
///
/// Sinks may be shared by concurrent computations, hence `Send + Sync`.
pub trait DiagnosticSink: Send + Sync {
    fn participant_free(&self, _participant: ParticipantId, _free: &DailyFreeSet) {}

    fn shared_free(&self, _shared: &SharedFreeSet) {}

    fn candidates(&self, _duration_minutes: i64, _windows: &[CandidateWindow]) {}
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {}

/// Forwards readable dumps to the `tracing` dispatcher at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn participant_free(&self, participant: ParticipantId, free: &DailyFreeSet) {
        let days = free.days().map(|day| (day, free.spans(day)));
        debug!(
            target: "availability",
            participant,
            "Available slots (ID: {}):\n{}",
            participant,
            render_days(days)
        );
    }

    fn shared_free(&self, shared: &SharedFreeSet) {
        let days = shared.iter().map(|(day, spans)| (day, spans.to_vec()));
        debug!(
            target: "availability",
            days = shared.len(),
            slots = shared.slot_count(),
            "Available slots (Shared):\n{}",
            render_days(days)
        );
    }

    fn candidates(&self, duration_minutes: i64, windows: &[CandidateWindow]) {
        debug!(
            target: "availability",
            duration_minutes,
            count = windows.len(),
            "{}",
            render_candidates(duration_minutes, windows)
        );
    }
}

/// Render free slots grouped by day:
///
/// ```text
/// 2026-03-16 (Monday)
/// -------------------
///   9:00 AM - 9:30 AM
/// ```
pub fn render_days<I>(days: I) -> String
where
    I: IntoIterator<Item = (NaiveDate, Vec<SlotSpan>)>,
{
    let mut out = String::new();
    for (day, spans) in days {
        let header = format!("{} ({})", day.format("%Y-%m-%d"), day.format("%A"));
        let _ = writeln!(out, "\n{header}");
        let _ = writeln!(out, "{}", "-".repeat(header.len()));
        for span in spans {
            let _ = writeln!(
                out,
                "  {} - {}",
                span.start.format("%-I:%M %p"),
                span.end.format("%-I:%M %p")
            );
        }
    }
    out
}

/// Render candidate windows one per line, `YYYY-MM-DD HH:MM AM to ...`.
pub fn render_candidates(duration_minutes: i64, windows: &[CandidateWindow]) -> String {
    let mut out = format!("\nAvailable {duration_minutes}-minute interview slots:");
    for window in windows {
        let _ = write!(
            out,
            "\n{} to {}",
            window.start.format("%Y-%m-%d %I:%M %p"),
            window.end.format("%Y-%m-%d %I:%M %p")
        );
    }
    out
}
