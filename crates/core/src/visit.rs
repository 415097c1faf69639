//! The visit record and its construction-time validation.
//!
//! A [`Visit`] is immutable once constructed: the domain has no update or
//! delete operation, only registration and reading. All structural validation
//! (non-empty fields, date format, status membership) happens in
//! [`Visit::new`], so any `Visit` in circulation is known to be well-formed.

use crate::error::{ValidationError, ValidationResult};
use chrono::NaiveDate;
use cvl_types::{NonEmptyText, PatientStatus};

/// The date format accepted at entry and written to the CSV file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field names in their canonical serialisation order.
pub const FIELD_NAMES: [&str; 6] = ["name", "service", "responsible", "date", "outcome", "status"];

/// One care visit, validated at construction.
///
/// The serde field order matches [`FIELD_NAMES`] and is what the CSV header
/// layout relies on; do not reorder the struct fields.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Visit {
    name: NonEmptyText,
    service: NonEmptyText,
    responsible: NonEmptyText,
    date: NaiveDate,
    outcome: NonEmptyText,
    status: PatientStatus,
}

impl Visit {
    /// Builds a visit from raw field text.
    ///
    /// All six fields are required. The date must parse as `YYYY-MM-DD` and
    /// the status must name one of the five values of
    /// [`PatientStatus::ALL`].
    ///
    /// Note that no "date is not in the past" rule is applied here: rows
    /// loaded from an existing CSV file legitimately predate today. That rule
    /// belongs to entry time only; see [`validate_entry_date`].
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if any field is empty or whitespace-only,
    /// the date text is malformed, or the status is not a known value.
    pub fn new(
        name: &str,
        service: &str,
        responsible: &str,
        date: &str,
        outcome: &str,
        status: &str,
    ) -> ValidationResult<Self> {
        let name = required_text("name", name)?;
        let service = required_text("service", service)?;
        let responsible = required_text("responsible", responsible)?;
        let date = parse_date(date)?;
        let outcome = required_text("outcome", outcome)?;

        let status = status.trim();
        if status.is_empty() {
            return Err(ValidationError::EmptyField("status"));
        }
        let status: PatientStatus = status.parse()?;

        Ok(Self {
            name,
            service,
            responsible,
            date,
            outcome,
            status,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn service(&self) -> &str {
        self.service.as_str()
    }

    pub fn responsible(&self) -> &str {
        self.responsible.as_str()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn outcome(&self) -> &str {
        self.outcome.as_str()
    }

    pub fn status(&self) -> PatientStatus {
        self.status
    }

    /// Returns the visit as field-name/value pairs in canonical order.
    ///
    /// Feeding these values back into [`Visit::new`] reconstructs an equal
    /// visit, which is what the persistence layer relies on.
    pub fn to_fields(&self) -> [(&'static str, String); 6] {
        [
            ("name", self.name.as_str().to_owned()),
            ("service", self.service.as_str().to_owned()),
            ("responsible", self.responsible.as_str().to_owned()),
            ("date", self.date.format(DATE_FORMAT).to_string()),
            ("outcome", self.outcome.as_str().to_owned()),
            ("status", self.status.as_str().to_owned()),
        ]
    }
}

impl std::fmt::Display for Visit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({}) → {} [status: {}]",
            self.date.format(DATE_FORMAT),
            self.name,
            self.service,
            self.outcome,
            self.status
        )
    }
}

/// Checks the entry-time business rule: a newly registered visit must not be
/// dated before today.
///
/// This is deliberately separate from [`Visit::new`]. Construction enforces
/// structure only, because historical rows read back from the CSV file are
/// older than today by nature; the "not in the past" rule applies to operator
/// entry alone.
///
/// # Errors
///
/// Returns `ValidationError::DateBeforeToday` when `date` precedes `today`.
pub fn validate_entry_date(date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if date < today {
        return Err(ValidationError::DateBeforeToday { date, today });
    }
    Ok(())
}

fn required_text(field: &'static str, value: &str) -> ValidationResult<NonEmptyText> {
    NonEmptyText::new(value).map_err(|_| ValidationError::EmptyField(field))
}

fn parse_date(value: &str) -> ValidationResult<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField("date"));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::MalformedDate(trimmed.to_owned()))
}
