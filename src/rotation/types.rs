use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("unknown supervisor index {index} (expected 0..{count})")]
    UnknownSupervisor { index: usize, count: usize },
    #[error("invalid rotation config: {0}")]
    InvalidConfig(String),
    #[error("invalid date range: {from} .. {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },
    #[error("invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("date out of supported calendar range")]
    DateOutOfRange,
}
