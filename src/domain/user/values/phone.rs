//! Phone number value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DialCode, Enumerated};
use crate::domain::foundation::{Field, ValidationError};

pub const PHONE_NUMBER_MIN_DIGITS: usize = 8;
pub const PHONE_NUMBER_MAX_DIGITS: usize = 12;

/// Phone number written as `+<dial>-<number>`, e.g. `+591-77141516`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    dial: DialCode,
    number: String,
}

impl Phone {
    /// Parses optional phone input.
    ///
    /// Empty input means "no phone" and yields `Ok(None)`.
    pub fn parse(value: &str) -> Result<Option<Self>, ValidationError> {
        if value.is_empty() {
            return Ok(None);
        }
        Self::new(value).map(Some)
    }

    /// Parses a phone number that must be present.
    ///
    /// Rules in order: present, `+<dial>-<number>` shape, known dial code,
    /// number too long, number too short, digits only.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::empty(Field::Phone));
        }

        let (dial, number) = value
            .split_once('-')
            .filter(|(dial, _)| dial.starts_with('+'))
            .ok_or_else(|| ValidationError::invalid_format(Field::Phone, "expected +<dial>-<number>"))?;

        let dial = DialCode::from_code(dial)
            .ok_or_else(|| ValidationError::not_a_member(Field::DialCode, dial))?;

        let length = number.chars().count();
        if length > PHONE_NUMBER_MAX_DIGITS {
            return Err(ValidationError::too_long(
                Field::Phone,
                PHONE_NUMBER_MAX_DIGITS,
                length,
            ));
        }
        if length < PHONE_NUMBER_MIN_DIGITS {
            return Err(ValidationError::too_short(
                Field::Phone,
                PHONE_NUMBER_MIN_DIGITS,
                length,
            ));
        }
        if !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                Field::Phone,
                "subscriber number must be numeric",
            ));
        }

        Ok(Self {
            dial,
            number: number.to_string(),
        })
    }

    pub fn dial(&self) -> DialCode {
        self.dial
    }

    /// Subscriber number without the dial code.
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.dial.code(), self.number)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.to_string()
    }
}
