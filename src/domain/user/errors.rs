//! User-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Field, ValidationError};

/// Failures of user operations.
///
/// Callers branch on the variant (or on [`UserError::code`]), never on
/// the message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// A value object or name rule rejected its input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Delete was called on a user that is already deleted.
    #[error("User is already deleted")]
    AlreadyDeleted,

    /// Restore was called on a user that is already active.
    #[error("User is already active")]
    AlreadyRestored,

    /// The supplied user id is nil.
    #[error("User id cannot be nil")]
    IdentifierNil,

    /// No user matches the lookup key.
    #[error("User not found: {0}")]
    NotFound(String),

    /// Another account already holds this username or email.
    #[error("A user with this {field} already exists")]
    AlreadyExists { field: Field },

    /// Email unknown, account deleted, or password mismatch.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Storage, hashing or publishing failed.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl UserError {
    pub fn not_found(key: impl ToString) -> Self {
        UserError::NotFound(key.to_string())
    }

    pub fn already_exists(field: Field) -> Self {
        UserError::AlreadyExists { field }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    /// Returns the machine-readable code for this condition.
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::Validation(err) => err.code(),
            UserError::AlreadyDeleted => ErrorCode::AlreadyDeleted,
            UserError::AlreadyRestored => ErrorCode::AlreadyRestored,
            UserError::IdentifierNil => ErrorCode::IdentifierNil,
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::AlreadyExists { .. } => ErrorCode::UserAlreadyExists,
            UserError::InvalidCredentials => ErrorCode::InvalidCredentials,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::UserNotFound => UserError::NotFound(err.message),
            ErrorCode::UserAlreadyExists => {
                match err.details.get("field").map(String::as_str) {
                    Some("username") => UserError::already_exists(Field::Username),
                    Some("email") => UserError::already_exists(Field::Email),
                    // Identifier clashes are storage faults
                    _ => UserError::Infrastructure(err.to_string()),
                }
            }
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}

impl From<UserError> for DomainError {
    fn from(err: UserError) -> Self {
        let (code, message) = (err.code(), err.to_string());
        match err {
            UserError::Validation(validation) => validation.into(),
            UserError::AlreadyExists { field } => {
                DomainError::new(code, message).with_detail("field", field.as_str())
            }
            _ => DomainError::new(code, message),
        }
    }
}
