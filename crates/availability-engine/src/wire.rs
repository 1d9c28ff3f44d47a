//! JSON boundary: request/response DTOs and timestamp parsing.
//!
//! Busy data arrives as ISO 8601 strings carrying a trailing `Z`. They are
//! read as naive wall-clock instants; an explicit offset is accepted but not
//! applied. All parsing and participant lookup happens in
//! [`AvailabilityRequest::validate`], before the engine runs.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::daterange::DayRange;
use crate::engine::AvailabilityEngine;
use crate::error::{AvailabilityError, Result};
use crate::participant::{BusyInterval, Participant, ParticipantId};
use crate::windows::CandidateWindow;

/// Output timestamp format: `2026-03-16T10:00:00Z`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyPeriod {
    pub start: String,
    pub end: String,
}

/// Busy data for one participant as supplied by the free/busy provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantBusy {
    #[serde(alias = "interviewerId")]
    pub participant_id: ParticipantId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub busy: Vec<BusyPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeBounds {
    pub start_date: String,
    pub end_date: String,
}

/// A complete availability request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub participants: Vec<ParticipantBusy>,
    /// Participants to schedule, in order. Each needs an entry in `participants`.
    pub selection: Vec<ParticipantId>,
    /// Meeting length in minutes.
    #[serde(alias = "durationMinutes")]
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeBounds>,
}

/// A request whose every field has been parsed and checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    /// Selected participants only, in selection order, duplicates removed.
    pub participants: Vec<Participant>,
    pub duration_minutes: i64,
    pub range: DayRange,
}

/// A candidate window as returned to the API layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDto {
    pub start: String,
    pub end: String,
}

impl From<&CandidateWindow> for WindowDto {
    fn from(window: &CandidateWindow) -> Self {
        Self {
            start: format_timestamp(window.start),
            end: format_timestamp(window.end),
        }
    }
}

/// Parse an ISO 8601 timestamp as a naive UTC instant.
///
/// Accepts `2026-03-16T09:00:00Z`, the same without `Z`, fractional seconds,
/// minute precision (`2026-03-16T09:00`) and bare dates (midnight). A numeric
/// offset such as `+02:00` is parsed but discarded: the wall clock is kept.
///
/// # Errors
/// Returns `AvailabilityError::MalformedTimestamp` for anything else.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local().and_utc());
    }

    let naive = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    if let Ok(dt) = naive.parse::<NaiveDateTime>() {
        return Ok(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M") {
        return Ok(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(AvailabilityError::MalformedTimestamp(value.to_string()))
}

/// Calendar date of an ISO 8601 date or datetime string.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    parse_timestamp(value).map(|dt| dt.date_naive())
}

pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

impl ParticipantBusy {
    fn parse(&self) -> Result<Participant> {
        let busy = self
            .busy
            .iter()
            .map(|period| {
                Ok(BusyInterval::new(
                    parse_timestamp(&period.start)?,
                    parse_timestamp(&period.end)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Participant::new(self.participant_id, busy))
    }
}

impl RangeBounds {
    fn parse(&self) -> Result<DayRange> {
        DayRange::explicit(parse_date(&self.start_date)?, parse_date(&self.end_date)?)
    }
}

impl AvailabilityRequest {
    /// Parse and check the whole request.
    ///
    /// Every supplied timestamp is parsed, including those of participants
    /// that are not selected. When a participant appears more than once in
    /// `participants`, the first entry wins.
    ///
    /// # Errors
    /// `InvalidDuration`, `InvalidRange`, `MalformedTimestamp` or
    /// `MissingParticipantData`; the first problem found is returned.
    pub fn validate(&self) -> Result<ValidatedRequest> {
        if self.duration <= 0 {
            return Err(AvailabilityError::InvalidDuration(self.duration));
        }

        let range = match &self.range {
            Some(bounds) => bounds.parse()?,
            None => DayRange::Inferred,
        };

        let parsed = self
            .participants
            .iter()
            .map(ParticipantBusy::parse)
            .collect::<Result<Vec<_>>>()?;

        let mut seen = HashSet::new();
        let participants = self
            .selection
            .iter()
            .filter(|id| seen.insert(**id))
            .map(|id| {
                parsed
                    .iter()
                    .find(|p| p.id == *id)
                    .cloned()
                    .ok_or(AvailabilityError::MissingParticipantData(*id))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ValidatedRequest {
            participants,
            duration_minutes: self.duration,
            range,
        })
    }
}

impl AvailabilityEngine<'_> {
    /// Validate `request` and compute its candidate windows as wire DTOs.
    pub fn evaluate(
        &self,
        request: &AvailabilityRequest,
        now: DateTime<Utc>,
    ) -> Result<Vec<WindowDto>> {
        let request = request.validate()?;
        let windows = self.compute(
            &request.participants,
            request.duration_minutes,
            &request.range,
            now,
        )?;
        Ok(windows.iter().map(WindowDto::from).collect())
    }
}
