//! The end-to-end availability pipeline.
//!
//! busy intervals → per-participant daily free sets → shared free set →
//! candidate windows, over the days chosen by [`DayRange`]. Inputs are
//! validated before any work is done; the current instant is always supplied
//! by the caller so identical inputs give identical output.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::daily::{DailyAvailabilityBuilder, DailyFreeSet};
use crate::daterange::{expand_days, DayRange};
use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::error::{AvailabilityError, Result};
use crate::intersect::{intersect, SharedFreeSet};
use crate::participant::Participant;
use crate::policy::SchedulingPolicy;
use crate::windows::{extract_windows, CandidateWindow};

/// Runs availability computations under one policy.
///
/// Holds no per-request state; a single engine may serve concurrent callers.
pub struct AvailabilityEngine<'a> {
    policy: SchedulingPolicy,
    sink: &'a dyn DiagnosticSink,
}

impl Default for AvailabilityEngine<'_> {
    fn default() -> Self {
        Self::new(SchedulingPolicy::default())
    }
}

impl<'a> AvailabilityEngine<'a> {
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self {
            policy,
            sink: &NoopSink,
        }
    }

    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn policy(&self) -> &SchedulingPolicy {
        &self.policy
    }

    /// Slots free for every participant over the days selected by `range`.
    ///
    /// # Errors
    /// Returns `AvailabilityError::InvalidWorkWindow` for a bad policy and
    /// `AvailabilityError::InvalidRange` for an explicit range ending before it starts.
    pub fn shared_availability(
        &self,
        participants: &[Participant],
        range: &DayRange,
        now: DateTime<Utc>,
    ) -> Result<SharedFreeSet> {
        self.policy.validate()?;

        let busy = participants.iter().flat_map(|p| p.busy.iter());
        let days = expand_days(range, now.date_naive(), busy)?;
        debug!(
            participants = participants.len(),
            days = days.len(),
            "Computing shared availability"
        );

        let builder = DailyAvailabilityBuilder::new(&self.policy, &days, now).with_sink(self.sink);
        let free_sets: Vec<DailyFreeSet> = participants.iter().map(|p| builder.build(p)).collect();

        let shared = intersect(&free_sets);
        self.sink.shared_free(&shared);
        Ok(shared)
    }

    /// Candidate windows of `duration_minutes` during which every participant is free.
    ///
    /// An empty result is a valid outcome, not an error.
    ///
    /// # Errors
    /// Returns `AvailabilityError::InvalidDuration` when `duration_minutes <= 0`,
    /// plus the errors of [`Self::shared_availability`]. Validation happens
    /// before any computation.
    pub fn compute(
        &self,
        participants: &[Participant],
        duration_minutes: i64,
        range: &DayRange,
        now: DateTime<Utc>,
    ) -> Result<Vec<CandidateWindow>> {
        if duration_minutes <= 0 {
            return Err(AvailabilityError::InvalidDuration(duration_minutes));
        }

        let shared = self.shared_availability(participants, range, now)?;
        let windows = extract_windows(&shared, duration_minutes)?;
        self.sink.candidates(duration_minutes, &windows);
        debug!(
            duration_minutes,
            candidates = windows.len(),
            "Extracted candidate windows"
        );
        Ok(windows)
    }
}

/// Candidate windows under `policy` with no diagnostics attached.
///
/// Convenience wrapper over [`AvailabilityEngine::compute`].
pub fn find_candidate_windows(
    participants: &[Participant],
    duration_minutes: i64,
    range: &DayRange,
    policy: &SchedulingPolicy,
    now: DateTime<Utc>,
) -> Result<Vec<CandidateWindow>> {
    AvailabilityEngine::new(*policy).compute(participants, duration_minutes, range, now)
}
