//! Error types for the domain layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// The input a validation rule was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    UserId,
    FirstName,
    LastName,
    Username,
    Email,
    EmailLocalPart,
    EmailDomain,
    Password,
    HashedPassword,
    Gender,
    BirthDate,
    Country,
    Language,
    DialCode,
    Phone,
    Information,
    ProfilePicture,
    Website,
    Visibility,
}

impl Field {
    /// Returns the snake_case name used in error payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::UserId => "user_id",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Username => "username",
            Field::Email => "email",
            Field::EmailLocalPart => "email_local_part",
            Field::EmailDomain => "email_domain",
            Field::Password => "password",
            Field::HashedPassword => "hashed_password",
            Field::Gender => "gender",
            Field::BirthDate => "birth_date",
            Field::Country => "country",
            Field::Language => "language",
            Field::DialCode => "dial_code",
            Field::Phone => "phone",
            Field::Information => "information",
            Field::ProfilePicture => "profile_picture",
            Field::Website => "website",
            Field::Visibility => "visibility",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that occur during value object construction.
///
/// Each variant is one violated rule. Constructors check their rules in a
/// fixed order and report the first one that fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    Empty { field: Field },

    #[error("Field '{field}' is too long: maximum is {max}, got {actual}")]
    TooLong {
        field: Field,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' is too short: minimum is {min}, got {actual}")]
    TooShort {
        field: Field,
        min: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: Field, reason: String },

    #[error("'{value}' is not a valid {field}")]
    NotAMember { field: Field, value: String },

    #[error("Birth date cannot be in the future")]
    FutureDate,

    #[error("User must be at least {minimum_age} years old")]
    UnderAge { minimum_age: u32 },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty(field: Field) -> Self {
        ValidationError::Empty { field }
    }

    /// Creates a maximum-length validation error.
    pub fn too_long(field: Field, max: usize, actual: usize) -> Self {
        ValidationError::TooLong { field, max, actual }
    }

    /// Creates a minimum-length validation error.
    pub fn too_short(field: Field, min: usize, actual: usize) -> Self {
        ValidationError::TooShort { field, min, actual }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: Field, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an error for a value outside a closed enumeration.
    pub fn not_a_member(field: Field, value: impl Into<String>) -> Self {
        ValidationError::NotAMember {
            field,
            value: value.into(),
        }
    }

    /// Returns the field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Empty { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAMember { field, .. } => *field,
            ValidationError::FutureDate | ValidationError::UnderAge { .. } => Field::BirthDate,
        }
    }

    /// Returns the machine-readable code for this condition.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::Empty { .. } => ErrorCode::EmptyField,
            ValidationError::TooLong { .. } => ErrorCode::TooLong,
            ValidationError::TooShort { .. } => ErrorCode::TooShort,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::NotAMember { .. } => ErrorCode::NotAMember,
            ValidationError::FutureDate => ErrorCode::FutureDate,
            ValidationError::UnderAge { .. } => ErrorCode::UnderAge,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    TooLong,
    TooShort,
    InvalidFormat,
    NotAMember,
    FutureDate,
    UnderAge,

    // Lifecycle errors
    AlreadyDeleted,
    AlreadyRestored,

    // Identity errors
    IdentifierNil,
    UserNotFound,
    UserAlreadyExists,
    InvalidCredentials,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::TooLong => "TOO_LONG",
            ErrorCode::TooShort => "TOO_SHORT",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::NotAMember => "NOT_A_MEMBER",
            ErrorCode::FutureDate => "FUTURE_DATE",
            ErrorCode::UnderAge => "UNDER_AGE",
            ErrorCode::AlreadyDeleted => "ALREADY_DELETED",
            ErrorCode::AlreadyRestored => "ALREADY_RESTORED",
            ErrorCode::IdentifierNil => "IDENTIFIER_NIL",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::UserAlreadyExists => "USER_ALREADY_EXISTS",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Error returned across port boundaries (repositories, publishers, hashers).
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(err.code(), err.to_string()).with_detail("field", err.field().as_str())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_displays_field_name() {
        let err = ValidationError::empty(Field::Username);
        assert_eq!(format!("{}", err), "Field 'username' cannot be empty");
    }

    #[test]
    fn too_long_displays_bounds() {
        let err = ValidationError::too_long(Field::FirstName, 100, 101);
        assert_eq!(
            format!("{}", err),
            "Field 'first_name' is too long: maximum is 100, got 101"
        );
    }

    #[test]
    fn not_a_member_displays_value() {
        let err = ValidationError::not_a_member(Field::Country, "Atlantis");
        assert_eq!(format!("{}", err), "'Atlantis' is not a valid country");
    }

    #[test]
    fn birth_date_rules_report_birth_date_field() {
        assert_eq!(ValidationError::FutureDate.field(), Field::BirthDate);
        assert_eq!(
            ValidationError::UnderAge { minimum_age: 18 }.field(),
            Field::BirthDate
        );
    }

    #[test]
    fn each_rule_has_distinct_code() {
        let codes = [
            ValidationError::empty(Field::Email).code(),
            ValidationError::too_long(Field::Email, 1, 2).code(),
            ValidationError::too_short(Field::Email, 2, 1).code(),
            ValidationError::invalid_format(Field::Email, "x").code(),
            ValidationError::not_a_member(Field::Gender, "x").code(),
            ValidationError::FutureDate.code(),
            ValidationError::UnderAge { minimum_age: 18 }.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::UserNotFound, "User not found");
        assert_eq!(format!("{}", err), "[USER_NOT_FOUND] User not found");
    }

    #[test]
    fn domain_error_from_validation_keeps_code_and_field() {
        let err: DomainError = ValidationError::too_short(Field::Username, 3, 2).into();
        assert_eq!(err.code, ErrorCode::TooShort);
        assert_eq!(err.details.get("field"), Some(&"username".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::AlreadyDeleted), "ALREADY_DELETED");
        assert_eq!(format!("{}", ErrorCode::IdentifierNil), "IDENTIFIER_NIL");
    }
}
