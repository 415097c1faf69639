//! Shared value types for the CVL (Clinic Visit Log) workspace.
//!
//! These are the leaf types every other crate builds on: validated text that
//! cannot be empty, and the closed patient-status enumeration. Validation
//! happens once, at construction, so downstream code never re-checks.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
}

/// Errors that can occur when parsing a patient status.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// The input did not name one of the five patient statuses
    #[error("unknown patient status '{0}' (expected Poor, Fair, Acceptable, Good or Excellent)")]
    Unknown(String),
}

/// A string type that guarantees non-empty content.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. Input is trimmed of leading and trailing whitespace during
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of surrounding whitespace. If the trimmed result
    /// is empty, `TextError::Empty` is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// The patient's condition at the end of a visit.
///
/// This is a closed enumeration: persisted rows and operator input must name
/// one of these five values, and parsing anything else fails. Ordering of the
/// variants runs from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatientStatus {
    Poor,
    Fair,
    Acceptable,
    Good,
    Excellent,
}

impl PatientStatus {
    /// All statuses, worst to best. Useful for rendering selection menus.
    pub const ALL: [PatientStatus; 5] = [
        PatientStatus::Poor,
        PatientStatus::Fair,
        PatientStatus::Acceptable,
        PatientStatus::Good,
        PatientStatus::Excellent,
    ];

    /// Returns the canonical display name for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Poor => "Poor",
            PatientStatus::Fair => "Fair",
            PatientStatus::Acceptable => "Acceptable",
            PatientStatus::Good => "Good",
            PatientStatus::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PatientStatus {
    type Err = StatusError;

    /// Parses a status name, ignoring surrounding whitespace and ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        for status in PatientStatus::ALL {
            if trimmed.eq_ignore_ascii_case(status.as_str()) {
                return Ok(status);
            }
        }
        Err(StatusError::Unknown(trimmed.to_owned()))
    }
}

impl serde::Serialize for PatientStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for PatientStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
