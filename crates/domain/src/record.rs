use chrono::Duration;
use derive_more::{Display, Into};

use crate::duration::{self, DurationError};

/// Number of steps of one record.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Steps(u32);

impl Steps {
    pub fn new(value: u32) -> Result<Self, StepsError> {
        if value == 0 {
            return Err(StepsError::NotPositive);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn count(self) -> u32 {
        self.0
    }
}

impl TryFrom<&str> for Steps {
    type Error = StepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Steps::new(parsed_value),
            Err(_) => Err(StepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StepsError {
    #[error("Steps must be greater than zero")]
    NotPositive,
    #[error("Steps must be a positive integer")]
    ParseError,
}

/// One parsed activity record.
///
/// The label of a training record is kept verbatim; resolving it to an
/// [`Activity`](crate::Activity) happens when the report is built, so an
/// unrecognized label does not fail parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub steps: Steps,
    pub label: Option<String>,
    pub duration: Duration,
}

impl ActivityRecord {
    /// Parses the two-field day form `"<steps>,<duration>"`.
    pub fn parse_day(raw: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = raw.trim().split(',').collect();

        if fields.len() != 2 {
            return Err(RecordError::Format {
                expected: 2,
                found: fields.len(),
            });
        }

        Ok(Self {
            steps: Steps::try_from(fields[0])?,
            label: None,
            duration: duration::parse_duration(fields[1])?,
        })
    }

    /// Parses the three-field training form `"<steps>,<label>,<duration>"`.
    pub fn parse_training(raw: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = raw.trim().split(',').collect();

        if fields.len() != 3 {
            return Err(RecordError::Format {
                expected: 3,
                found: fields.len(),
            });
        }

        Ok(Self {
            steps: Steps::try_from(fields[0])?,
            label: Some(fields[1].to_string()),
            duration: duration::parse_duration(fields[2])?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("Invalid record format: expected {expected} fields, found {found}")]
    Format { expected: usize, found: usize },
    #[error(transparent)]
    Steps(#[from] StepsError),
    #[error(transparent)]
    Duration(#[from] DurationError),
}
