//! Email address value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Field, ValidationError};

pub const EMAIL_LOCAL_PART_MAX_LENGTH: usize = 64;
pub const EMAIL_DOMAIN_MAX_LENGTH: usize = 255;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9._%+\-]*[a-zA-Z0-9])?@([a-zA-Z0-9]+(-[a-zA-Z0-9]+)*\.)+[a-zA-Z]{2,}$",
    )
    .expect("email pattern is valid")
});

/// Login address, unique across accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validates and wraps an email address.
    ///
    /// Rules in order: empty, shape, local part length, domain length.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::empty(Field::Email));
        }
        if !EMAIL_PATTERN.is_match(&value) {
            return Err(ValidationError::invalid_format(
                Field::Email,
                "expected local@domain.tld",
            ));
        }

        // The pattern guarantees exactly one '@'.
        let (local, domain) = value.split_once('@').unwrap_or((value.as_str(), ""));
        if local.len() > EMAIL_LOCAL_PART_MAX_LENGTH {
            return Err(ValidationError::too_long(
                Field::EmailLocalPart,
                EMAIL_LOCAL_PART_MAX_LENGTH,
                local.len(),
            ));
        }
        if domain.len() > EMAIL_DOMAIN_MAX_LENGTH {
            return Err(ValidationError::too_long(
                Field::EmailDomain,
                EMAIL_DOMAIN_MAX_LENGTH,
                domain.len(),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before '@'.
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(l, _)| l).unwrap_or(&self.0)
    }

    /// The part after '@'.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}
