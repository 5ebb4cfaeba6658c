//! Self-validating value objects composed into the `User` aggregate.
//!
//! Every constructor checks its rules in a fixed order and returns the
//! first violated one.

mod birth_date;
mod country;
mod dial_code;
mod email;
mod gender;
mod language;
mod password;
mod phone;
mod username;
mod website;

pub use birth_date::{BirthDate, MINIMUM_AGE_YEARS};
pub use country::Country;
pub use dial_code::DialCode;
pub use email::Email;
pub use gender::Gender;
pub use language::Language;
pub use password::{HashedPassword, PlainPassword};
pub use phone::Phone;
pub use username::Username;
pub use website::Website;

use crate::domain::foundation::{Field, ValidationError};

/// A closed set of values with a short code and a display name.
///
/// Lookup tables are static; parsing accepts exactly the code or the
/// display name with their documented casing.
pub trait Enumerated: Sized + Copy + PartialEq + 'static {
    /// Field reported when parsing fails.
    const FIELD: Field;

    /// Every member, in the order clients should present them.
    fn list_all() -> &'static [Self];

    /// Short code (e.g. "BO", "+591", "M").
    fn code(&self) -> &'static str;

    /// Human-readable name (e.g. "Bolivia").
    fn display_name(&self) -> &'static str;

    /// Parses either the code or the display name.
    fn parse(input: &str) -> Result<Self, ValidationError> {
        Self::list_all()
            .iter()
            .copied()
            .find(|member| member.code() == input || member.display_name() == input)
            .ok_or_else(|| ValidationError::not_a_member(Self::FIELD, input))
    }

    /// Looks up a member by its code only.
    fn from_code(code: &str) -> Option<Self> {
        Self::list_all()
            .iter()
            .copied()
            .find(|member| member.code() == code)
    }
}
