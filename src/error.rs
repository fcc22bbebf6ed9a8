use thiserror::Error;

use crate::models::DateKey;

/// Rejections raised before any request leaves the process.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Days must be between 1 and {limit}, got {days}")]
    DaysOutOfRange { days: i64, limit: u32 },

    #[error("Unsupported currency code '{0}'")]
    UnsupportedCurrency(String),
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to fetch exchange rates for {date}: {reason}")]
    Fetch { date: String, reason: String },

    #[error("Failed to parse exchange rates for {date}: {reason}")]
    Parse { date: String, reason: String },
}

impl CollectError {
    pub fn fetch(date: Option<&DateKey>, reason: impl ToString) -> Self {
        Self::Fetch {
            date: describe_date(date),
            reason: reason.to_string(),
        }
    }

    pub fn parse(date: Option<&DateKey>, reason: impl ToString) -> Self {
        Self::Parse {
            date: describe_date(date),
            reason: reason.to_string(),
        }
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("Invalid date '{0}', expected DD.MM.YYYY")]
pub struct DateKeyError(pub String);

fn describe_date(date: Option<&DateKey>) -> String {
    date.map(|d| d.to_string())
        .unwrap_or_else(|| String::from("latest date"))
}
