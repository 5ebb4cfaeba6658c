//! Sparse update of an existing `User`.
//!
//! Present fields are applied in a fixed order and the first failure
//! aborts the whole update. Work happens on a copy of the aggregate that
//! replaces the caller's value only when every field succeeded, so a
//! failed update leaves nothing half-applied.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::values::{
    BirthDate, Country, Email, Enumerated, Gender, Language, Phone, PlainPassword, Username,
    Website,
};
use super::{User, UserError};
use crate::domain::foundation::{Field, Patch, Timestamp};
use crate::ports::PasswordHasher;

/// Requested changes to a user, as received from the caller.
///
/// `None` leaves a field alone. For phone, information, profile picture
/// and website, `Some("")` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub phone: Option<String>,
    pub information: Option<String>,
    pub profile_picture: Option<String>,
    pub website: Option<String>,
    pub visible: Option<bool>,
}

impl UserChanges {
    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Applies [`UserChanges`] to users.
pub struct UserReconciler<'a> {
    hasher: &'a dyn PasswordHasher,
}

impl<'a> UserReconciler<'a> {
    pub fn new(hasher: &'a dyn PasswordHasher) -> Self {
        Self { hasher }
    }

    /// Applies `changes` to `user`, stamping `updated_at` with now.
    ///
    /// Returns the fields whose value actually changed.
    pub fn reconcile(&self, user: &mut User, changes: UserChanges) -> Result<Vec<Field>, UserError> {
        self.reconcile_at(user, changes, Timestamp::now())
    }

    /// Applies `changes` to `user` as of `now`.
    ///
    /// Order: first name, last name, username, email, password, gender,
    /// birth date, country, language, phone, information, profile picture,
    /// website, visibility.
    ///
    /// # Errors
    ///
    /// - `Validation` for the first field that fails its rule; `user` is
    ///   left exactly as it was
    /// - `Infrastructure` if hashing the new password fails
    pub fn reconcile_at(
        &self,
        user: &mut User,
        changes: UserChanges,
        now: Timestamp,
    ) -> Result<Vec<Field>, UserError> {
        let mut working = user.clone();
        let changed = match self.apply(&mut working, changes, now) {
            Ok(changed) => changed,
            Err(err) => {
                debug!(user_id = %user.id(), error = %err, "Update rejected");
                return Err(err);
            }
        };

        working.touch_at(now);
        *user = working;
        debug!(user_id = %user.id(), changed = ?changed, "Update applied");
        Ok(changed)
    }

    fn apply(
        &self,
        user: &mut User,
        changes: UserChanges,
        now: Timestamp,
    ) -> Result<Vec<Field>, UserError> {
        let mut changed = Vec::new();
        let mut note = |field: Field, differs: bool| {
            if differs {
                changed.push(field);
            }
        };

        if let Some(first_name) = changes.first_name {
            let differs = user.first_name() != first_name;
            user.change_first_name(first_name)?;
            note(Field::FirstName, differs);
        }

        if let Some(last_name) = changes.last_name {
            let differs = user.last_name() != last_name;
            user.change_last_name(last_name)?;
            note(Field::LastName, differs);
        }

        // Username and email skip validation entirely when unchanged.
        if let Some(username) = changes.username {
            if user.username().as_str() != username {
                user.change_username(Username::new(username)?);
                note(Field::Username, true);
            }
        }

        if let Some(email) = changes.email {
            if user.email().as_str() != email {
                user.change_email(Email::new(email)?);
                note(Field::Email, true);
            }
        }

        if let Some(password) = changes.password {
            let plain = PlainPassword::new(password)?;
            let hashed = self.hasher.hash(&plain).map_err(UserError::from)?;
            user.change_password(hashed);
            note(Field::Password, true);
        }

        if let Some(gender) = changes.gender {
            let gender = Gender::parse(&gender)?;
            let differs = user.gender() != gender;
            user.change_gender(gender);
            note(Field::Gender, differs);
        }

        if let Some(birth_date) = changes.birth_date {
            let birth_date = BirthDate::new_as_of(birth_date, now.date())?;
            let differs = user.birth_date() != birth_date;
            user.change_birth_date(birth_date);
            note(Field::BirthDate, differs);
        }

        if let Some(country) = changes.country {
            let country = Country::parse(&country)?;
            let differs = user.country() != country;
            user.change_country(country);
            note(Field::Country, differs);
        }

        if let Some(language) = changes.language {
            let language = Language::parse(&language)?;
            let differs = user.language() != language;
            user.change_language(language);
            note(Field::Language, differs);
        }

        match Patch::from_raw(changes.phone) {
            Patch::Absent => {}
            Patch::Clear => {
                note(Field::Phone, user.phone().is_some());
                user.change_phone(None);
            }
            Patch::Set(raw) => {
                let phone = Phone::new(&raw)?;
                note(Field::Phone, user.phone() != Some(&phone));
                user.change_phone(Some(phone));
            }
        }

        match Patch::from_raw(changes.information) {
            Patch::Absent => {}
            Patch::Clear => {
                note(Field::Information, user.information().is_some());
                user.change_information(None)?;
            }
            Patch::Set(text) => {
                let differs = user.information() != Some(text.as_str());
                user.change_information(Some(text))?;
                note(Field::Information, differs);
            }
        }

        match Patch::from_raw(changes.profile_picture) {
            Patch::Absent => {}
            Patch::Clear => {
                note(Field::ProfilePicture, user.profile_picture().is_some());
                user.change_profile_picture(None)?;
            }
            Patch::Set(picture) => {
                let differs = user.profile_picture() != Some(picture.as_str());
                user.change_profile_picture(Some(picture))?;
                note(Field::ProfilePicture, differs);
            }
        }

        match Patch::from_raw(changes.website) {
            Patch::Absent => {}
            Patch::Clear => {
                note(Field::Website, user.website().is_some());
                user.change_website(None);
            }
            Patch::Set(raw) => {
                let website = Website::new(raw)?;
                note(Field::Website, user.website() != Some(&website));
                user.change_website(Some(website));
            }
        }

        if let Some(visible) = changes.visible {
            let differs = user.is_visible() != visible;
            user.change_visibility(visible);
            note(Field::Visibility, differs);
        }

        Ok(changed)
    }
}
