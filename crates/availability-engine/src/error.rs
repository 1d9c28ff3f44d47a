//! Error types for availability-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::participant::ParticipantId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Invalid range: end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    #[error("Missing busy data for participant {0}")]
    MissingParticipantData(ParticipantId),

    #[error("Invalid work window: {start_hour}:00-{end_hour}:00")]
    InvalidWorkWindow { start_hour: u32, end_hour: u32 },
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
