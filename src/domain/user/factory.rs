//! Creation of new `User` aggregates.

use tracing::debug;

use super::names::validate_full_name;
use super::values::{
    BirthDate, Country, Email, Gender, HashedPassword, Language, Phone, Username,
};
use super::{User, UserError};
use crate::domain::foundation::{Timestamp, UserId};

/// Creates Active users after checking the name-shape rules.
///
/// Value objects arrive already validated by their own constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFactory;

impl UserFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates a user stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `Validation` for the first violated rule, checked in order: first
    ///   name empty, last name empty, first name too long, last name too
    ///   long, first name shape, last name shape
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: Username,
        email: Email,
        password: HashedPassword,
        gender: Gender,
        birth_date: BirthDate,
        country: Country,
        language: Language,
        phone: Option<Phone>,
    ) -> Result<User, UserError> {
        self.create_at(
            first_name,
            last_name,
            username,
            email,
            password,
            gender,
            birth_date,
            country,
            language,
            phone,
            Timestamp::now(),
        )
    }

    /// Creates a user with `created_at = updated_at = last_login_at = now`.
    #[allow(clippy::too_many_arguments)]
    pub fn create_at(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: Username,
        email: Email,
        password: HashedPassword,
        gender: Gender,
        birth_date: BirthDate,
        country: Country,
        language: Language,
        phone: Option<Phone>,
        now: Timestamp,
    ) -> Result<User, UserError> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if let Err(err) = validate_full_name(&first_name, &last_name) {
            debug!(field = %err.field(), error = %err, "Rejected user creation");
            return Err(err.into());
        }

        let user = User::new_at(
            UserId::new(),
            first_name,
            last_name,
            username,
            email,
            password,
            gender,
            birth_date,
            country,
            language,
            phone,
            now,
        );
        debug!(user_id = %user.id(), username = %user.username(), "User created");
        Ok(user)
    }
}
