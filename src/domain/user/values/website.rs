//! Personal website value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Field, ValidationError};

static WEBSITE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(https?://)?([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]+(/[A-Za-z0-9_\-._~:/?#\[\]@!$&'()*+,;=]*)?$",
    )
    .expect("website pattern is valid")
});

/// URL-shaped link shown on a profile. Scheme is optional.
///
/// Host and path are ASCII only; internationalized links must arrive
/// punycoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Website(String);

impl Website {
    /// Parses optional website input; empty input yields `Ok(None)`.
    pub fn parse(value: &str) -> Result<Option<Self>, ValidationError> {
        if value.is_empty() {
            return Ok(None);
        }
        Self::new(value).map(Some)
    }

    /// Validates a website that must be present.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::empty(Field::Website));
        }
        if !WEBSITE_PATTERN.is_match(&value) {
            return Err(ValidationError::invalid_format(
                Field::Website,
                "expected a URL such as https://example.com/path",
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Website {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Website {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Website> for String {
    fn from(value: Website) -> Self {
        value.0
    }
}
