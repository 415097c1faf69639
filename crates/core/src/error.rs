use chrono::NaiveDate;

/// Errors raised when visit fields fail validation.
///
/// All of these are recoverable: the presentation layer reports the message
/// and re-prompts the operator. Nothing here is fatal.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("the {0} field cannot be empty")]
    EmptyField(&'static str),
    #[error("the date '{0}' must use the YYYY-MM-DD format")]
    MalformedDate(String),
    #[error(transparent)]
    UnknownStatus(#[from] cvl_types::StatusError),
    #[error("the entry date {date} is before today ({today})")]
    DateBeforeToday { date: NaiveDate, today: NaiveDate },
}

/// Errors raised by the visit store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store holds zero visits, so there is nothing to summarise
    #[error("no visits registered to summarise")]
    Empty,
}

/// Errors raised by the reporting/charting path.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Zero visits were supplied, so there is nothing to chart
    #[error("no visits to chart")]
    EmptyInput,
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
