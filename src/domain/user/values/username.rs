//! Username value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Field, ValidationError};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 30;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.]+$").expect("username pattern is valid"));

/// Public handle, unique across accounts.
///
/// 3 to 30 characters drawn from ASCII letters, digits, `_` and `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validates and wraps a username.
    ///
    /// Rules in order: empty, too long, too short, invalid characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let length = value.chars().count();

        if value.is_empty() {
            return Err(ValidationError::empty(Field::Username));
        }
        if length > USERNAME_MAX_LENGTH {
            return Err(ValidationError::too_long(
                Field::Username,
                USERNAME_MAX_LENGTH,
                length,
            ));
        }
        if length < USERNAME_MIN_LENGTH {
            return Err(ValidationError::too_short(
                Field::Username,
                USERNAME_MIN_LENGTH,
                length,
            ));
        }
        if !USERNAME_PATTERN.is_match(&value) {
            return Err(ValidationError::invalid_format(
                Field::Username,
                "only letters, digits, '_' and '.' are allowed",
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Username {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_typical_usernames() {
        for name in ["johndoe", "john.doe", "john_doe_99", "abc", "A.B"] {
            assert_eq!(Username::new(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn empty_is_reported_before_too_short() {
        assert_eq!(
            Username::new("").unwrap_err(),
            ValidationError::empty(Field::Username)
        );
    }

    #[test]
    fn too_short_below_three() {
        assert_eq!(
            Username::new("ab").unwrap_err(),
            ValidationError::too_short(Field::Username, 3, 2)
        );
    }

    #[test]
    fn too_long_above_thirty() {
        let name = "a".repeat(31);
        assert_eq!(
            Username::new(name).unwrap_err(),
            ValidationError::too_long(Field::Username, 30, 31)
        );
    }

    #[test]
    fn length_is_checked_before_characters() {
        let err = Username::new("!!").unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { .. }));
    }

    #[test]
    fn rejects_disallowed_characters() {
        for name in ["john doe", "john-doe", "jöhn", "john@doe"] {
            assert!(matches!(
                Username::new(name),
                Err(ValidationError::InvalidFormat {
                    field: Field::Username,
                    ..
                })
            ));
        }
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<Username>("\"ok_name\"").is_ok());
        assert!(serde_json::from_str::<Username>("\"x\"").is_err());
    }

    proptest! {
        #[test]
        fn valid_usernames_round_trip(name in "[a-zA-Z0-9_.]{3,30}") {
            let username = Username::new(name.clone()).unwrap();
            prop_assert_eq!(username.to_string(), name);
        }

        #[test]
        fn over_long_usernames_are_rejected(name in "[a-z]{31,60}") {
            let is_too_long = matches!(
                Username::new(name),
                Err(ValidationError::TooLong { .. })
            );
            prop_assert!(is_too_long);
        }
    }
}
