//! Password value objects.
//!
//! A candidate typed by a person and the stored bcrypt hash are separate
//! types with separate constructors; one can never be passed where the
//! other is expected.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Field, ValidationError};

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 64;

const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_-+=<>?";

static BCRYPT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$2[ayb]\$[0-9]{2}\$[./A-Za-z0-9]{53}$").expect("bcrypt pattern is valid")
});

/// A plaintext password that meets the strength policy.
///
/// Never serialized and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl PlainPassword {
    /// Validates a plaintext candidate.
    ///
    /// Rules in order: empty, too long, too short, strength. A strong
    /// password has a lowercase letter, an uppercase letter, a digit and
    /// one of `!@#$%^&*()_-+=<>?`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let length = value.chars().count();

        if value.is_empty() {
            return Err(ValidationError::empty(Field::Password));
        }
        if length > PASSWORD_MAX_LENGTH {
            return Err(ValidationError::too_long(
                Field::Password,
                PASSWORD_MAX_LENGTH,
                length,
            ));
        }
        if length < PASSWORD_MIN_LENGTH {
            return Err(ValidationError::too_short(
                Field::Password,
                PASSWORD_MIN_LENGTH,
                length,
            ));
        }

        let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        let has_special = value.chars().any(|c| SPECIAL_CHARACTERS.contains(c));
        if !(has_lower && has_upper && has_digit && has_special) {
            return Err(ValidationError::invalid_format(
                Field::Password,
                "must contain a lowercase letter, an uppercase letter, a digit and a special character",
            ));
        }

        Ok(Self(value))
    }

    /// Returns the plaintext for hashing or verification.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword(***)")
    }
}

/// A bcrypt hash as stored on the account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Validates a stored hash.
    ///
    /// Rules in order: empty, bcrypt shape (`$2a$`, `$2b$` or `$2y$`,
    /// two-digit cost, 53 characters of salt and digest).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::empty(Field::HashedPassword));
        }
        if !BCRYPT_PATTERN.is_match(&value) {
            return Err(ValidationError::invalid_format(
                Field::HashedPassword,
                "not a bcrypt hash",
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(***)")
    }
}

impl TryFrom<String> for HashedPassword {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HashedPassword> for String {
    fn from(value: HashedPassword) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE_HASH: &str = "$2b$12$KIXQJQ8fE3pOsX0wS8vZUeC7u6dJ1r2m3n4o5p6q7r8s9t0u1v2w.";

    #[test]
    fn sample_hash_has_bcrypt_length() {
        assert_eq!(SAMPLE_HASH.len(), 60);
    }

    #[test]
    fn accepts_strong_password() {
        let password = PlainPassword::new("5tr0nG!.").unwrap();
        assert_eq!(password.expose(), "5tr0nG!.");
    }

    #[test]
    fn empty_is_reported_first() {
        assert_eq!(
            PlainPassword::new("").unwrap_err(),
            ValidationError::empty(Field::Password)
        );
    }

    #[test]
    fn too_long_before_strength() {
        let long = "a".repeat(65);
        assert_eq!(
            PlainPassword::new(long).unwrap_err(),
            ValidationError::too_long(Field::Password, 64, 65)
        );
    }

    #[test]
    fn too_short_before_strength() {
        assert_eq!(
            PlainPassword::new("aB1!").unwrap_err(),
            ValidationError::too_short(Field::Password, 8, 4)
        );
    }

    #[test]
    fn each_character_class_is_required() {
        for weak in ["5tr0ng!.", "5TR0NG!.", "Strong!.", "5tr0nGxx"] {
            assert!(
                matches!(
                    PlainPassword::new(weak),
                    Err(ValidationError::InvalidFormat {
                        field: Field::Password,
                        ..
                    })
                ),
                "{} should be too weak",
                weak
            );
        }
    }

    #[test]
    fn plaintext_is_not_printed() {
        let password = PlainPassword::new("5tr0nG!.").unwrap();
        assert!(!format!("{:?}", password).contains("5tr0nG"));
    }

    #[test]
    fn accepts_bcrypt_hash() {
        let hash = HashedPassword::new(SAMPLE_HASH).unwrap();
        assert_eq!(hash.as_str(), SAMPLE_HASH);
    }

    #[test]
    fn empty_hash_is_reported_as_hashed_field() {
        assert_eq!(
            HashedPassword::new("").unwrap_err(),
            ValidationError::empty(Field::HashedPassword)
        );
    }

    #[test]
    fn rejects_non_bcrypt_strings() {
        let truncated = &SAMPLE_HASH[..59];
        let wrong_prefix = SAMPLE_HASH.replacen("$2b$", "$2x$", 1);
        for candidate in ["5tr0nG!.", truncated, wrong_prefix.as_str()] {
            assert!(matches!(
                HashedPassword::new(candidate),
                Err(ValidationError::InvalidFormat {
                    field: Field::HashedPassword,
                    ..
                })
            ));
        }
    }

    #[test]
    fn plaintext_is_never_a_valid_hash() {
        assert!(HashedPassword::new("5tr0nG!.").is_err());
    }

    proptest! {
        #[test]
        fn strong_passwords_are_accepted(body in "[a-z]{3,20}[A-Z]{2,20}[0-9]{2,10}[!@#$%^&*]{1,5}") {
            prop_assert!(PlainPassword::new(body).is_ok());
        }
    }
}
