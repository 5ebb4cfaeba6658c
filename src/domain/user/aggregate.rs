//! User aggregate entity.
//!
//! The account root for identity, profile and soft-delete lifecycle.
//!
//! # Invariants
//!
//! - `id` is never nil
//! - `deleted_at` is `None` exactly when the user is Active
//! - optional text fields are either absent or non-empty and within limits
//! - `updated_at` never moves backwards

use serde::{Deserialize, Serialize};

use super::names::{validate_information, validate_name};
use super::values::{
    BirthDate, Country, Email, Gender, HashedPassword, Language, Phone, Username, Website,
};
use super::UserError;
use crate::domain::foundation::{
    AggregateRoot, Field, LifecycleStatus, StateMachine, Timestamp, UserId, ValidationError,
};

/// User aggregate - an account holder on the bookmarking service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    root: AggregateRoot<UserId>,
    first_name: String,
    last_name: String,
    username: Username,
    email: Email,
    password: HashedPassword,
    gender: Gender,
    birth_date: BirthDate,
    country: Country,
    language: Language,
    phone: Option<Phone>,
    information: Option<String>,
    profile_picture: Option<String>,
    website: Option<Website>,
    visible: bool,
    last_login_at: Timestamp,
    deleted_at: Option<Timestamp>,
}

/// Flat, storage-friendly view of every field of a [`User`].
///
/// Produced by [`User::to_record`] and consumed by [`User::reconstitute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: Username,
    pub email: Email,
    pub password: HashedPassword,
    pub gender: Gender,
    pub birth_date: BirthDate,
    pub country: Country,
    pub language: Language,
    pub phone: Option<Phone>,
    pub information: Option<String>,
    pub profile_picture: Option<String>,
    pub website: Option<Website>,
    pub visible: bool,
    pub last_login_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl User {
    /// Builds a fresh Active user. Name rules are the factory's job.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_at(
        id: UserId,
        first_name: String,
        last_name: String,
        username: Username,
        email: Email,
        password: HashedPassword,
        gender: Gender,
        birth_date: BirthDate,
        country: Country,
        language: Language,
        phone: Option<Phone>,
        now: Timestamp,
    ) -> Self {
        Self {
            root: AggregateRoot::new_at(id, now),
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
            information: None,
            profile_picture: None,
            website: None,
            visible: false,
            last_login_at: now,
            deleted_at: None,
        }
    }

    /// Rebuilds a user from storage without re-running field rules.
    ///
    /// # Errors
    ///
    /// - `IdentifierNil` if the stored id is nil
    pub fn reconstitute(record: UserRecord) -> Result<Self, UserError> {
        if record.id.is_nil() {
            return Err(UserError::IdentifierNil);
        }

        Ok(Self {
            root: AggregateRoot::reconstitute(record.id, record.created_at, record.updated_at),
            first_name: record.first_name,
            last_name: record.last_name,
            username: record.username,
            email: record.email,
            password: record.password,
            gender: record.gender,
            birth_date: record.birth_date,
            country: record.country,
            language: record.language,
            phone: record.phone,
            information: record.information,
            profile_picture: record.profile_picture,
            website: record.website,
            visible: record.visible,
            last_login_at: record.last_login_at,
            deleted_at: record.deleted_at,
        })
    }

    /// Copies every field into a [`UserRecord`].
    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            id: *self.id(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            gender: self.gender,
            birth_date: self.birth_date,
            country: self.country,
            language: self.language,
            phone: self.phone.clone(),
            information: self.information.clone(),
            profile_picture: self.profile_picture.clone(),
            website: self.website.clone(),
            visible: self.visible,
            last_login_at: self.last_login_at,
            created_at: self.root.created_at(),
            updated_at: self.root.updated_at(),
            deleted_at: self.deleted_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &UserId {
        self.root.id()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &HashedPassword {
        &self.password
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn information(&self) -> Option<&str> {
        self.information.as_deref()
    }

    /// Stored file name of the profile picture, if any.
    pub fn profile_picture(&self) -> Option<&str> {
        self.profile_picture.as_deref()
    }

    pub fn website(&self) -> Option<&Website> {
        self.website.as_ref()
    }

    /// Whether the profile is publicly listed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn last_login_at(&self) -> Timestamp {
        self.last_login_at
    }

    pub fn created_at(&self) -> Timestamp {
        self.root.created_at()
    }

    pub fn updated_at(&self) -> Timestamp {
        self.root.updated_at()
    }

    pub fn deleted_at(&self) -> Option<Timestamp> {
        self.deleted_at
    }

    /// Lifecycle state derived from `deleted_at`.
    pub fn status(&self) -> LifecycleStatus {
        LifecycleStatus::from_deleted_at(self.deleted_at.as_ref())
    }

    pub fn is_active(&self) -> bool {
        self.status().is_active()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// - `Validation` if the name is empty, longer than 100 characters,
    ///   or not letters separated by single spaces
    pub fn change_first_name(&mut self, first_name: impl Into<String>) -> Result<(), UserError> {
        let first_name = first_name.into();
        validate_name(Field::FirstName, &first_name)?;
        self.first_name = first_name;
        Ok(())
    }

    /// # Errors
    ///
    /// - `Validation` under the same rules as the first name
    pub fn change_last_name(&mut self, last_name: impl Into<String>) -> Result<(), UserError> {
        let last_name = last_name.into();
        validate_name(Field::LastName, &last_name)?;
        self.last_name = last_name;
        Ok(())
    }

    pub fn change_username(&mut self, username: Username) {
        self.username = username;
    }

    pub fn change_email(&mut self, email: Email) {
        self.email = email;
    }

    pub fn change_password(&mut self, password: HashedPassword) {
        self.password = password;
    }

    pub fn change_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub fn change_birth_date(&mut self, birth_date: BirthDate) {
        self.birth_date = birth_date;
    }

    pub fn change_country(&mut self, country: Country) {
        self.country = country;
    }

    pub fn change_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn change_phone(&mut self, phone: Option<Phone>) {
        self.phone = phone;
    }

    /// # Errors
    ///
    /// - `Validation` if the text is empty or longer than 500 characters
    pub fn change_information(&mut self, information: Option<String>) -> Result<(), UserError> {
        if let Some(text) = &information {
            if text.is_empty() {
                return Err(ValidationError::empty(Field::Information).into());
            }
            validate_information(text)?;
        }
        self.information = information;
        Ok(())
    }

    /// # Errors
    ///
    /// - `Validation` if the reference is empty
    pub fn change_profile_picture(&mut self, picture: Option<String>) -> Result<(), UserError> {
        if matches!(&picture, Some(p) if p.is_empty()) {
            return Err(ValidationError::empty(Field::ProfilePicture).into());
        }
        self.profile_picture = picture;
        Ok(())
    }

    pub fn change_website(&mut self, website: Option<Website>) {
        self.website = website;
    }

    pub fn change_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Records a successful login at the current time.
    pub fn record_login(&mut self) {
        self.record_login_at(Timestamp::now());
    }

    pub fn record_login_at(&mut self, now: Timestamp) {
        self.last_login_at = now;
    }

    /// Refreshes `updated_at`; never moves it backwards.
    pub fn touch(&mut self) {
        self.root.touch();
    }

    pub fn touch_at(&mut self, now: Timestamp) {
        self.root.touch_at(now);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Soft-deletes the user.
    ///
    /// # Errors
    ///
    /// - `AlreadyDeleted` if the user is already deleted; nothing changes
    pub fn delete(&mut self) -> Result<(), UserError> {
        self.delete_at(Timestamp::now())
    }

    pub fn delete_at(&mut self, now: Timestamp) -> Result<(), UserError> {
        self.status()
            .transition_to(LifecycleStatus::Deleted)
            .map_err(|_| UserError::AlreadyDeleted)?;
        self.deleted_at = Some(now);
        Ok(())
    }

    /// Brings a soft-deleted user back.
    ///
    /// # Errors
    ///
    /// - `AlreadyRestored` if the user is already active; nothing changes
    pub fn restore(&mut self) -> Result<(), UserError> {
        self.status()
            .transition_to(LifecycleStatus::Active)
            .map_err(|_| UserError::AlreadyRestored)?;
        self.deleted_at = None;
        Ok(())
    }
}
