//! Birth date value object.

use chrono::{Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Field, ValidationError};

/// Minimum age, in whole years, for holding an account.
pub const MINIMUM_AGE_YEARS: u32 = 18;

/// Calendar date of birth of an adult account holder.
///
/// Serialized as `YYYY-MM-DD`; deserializing re-checks both rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Validates a birth date against today's UTC date.
    pub fn new(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new_as_of(date, Utc::now().date_naive())
    }

    /// Validates a birth date against an explicit reference day.
    ///
    /// Rules in order: not after `today`, at least 18 years before `today`.
    pub fn new_as_of(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        if date > today {
            return Err(ValidationError::FutureDate);
        }

        let is_adult = today
            .checked_sub_months(Months::new(MINIMUM_AGE_YEARS * 12))
            .map_or(false, |cutoff| date <= cutoff);
        if !is_adult {
            return Err(ValidationError::UnderAge {
                minimum_age: MINIMUM_AGE_YEARS,
            });
        }

        Ok(Self(date))
    }

    /// Parses an ISO-8601 calendar date (`YYYY-MM-DD`) and validates it.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::empty(Field::BirthDate));
        }
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| ValidationError::invalid_format(Field::BirthDate, "expected YYYY-MM-DD"))?;
        Self::new(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl TryFrom<NaiveDate> for BirthDate {
    type Error = ValidationError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(value: BirthDate) -> Self {
        value.0
    }
}
