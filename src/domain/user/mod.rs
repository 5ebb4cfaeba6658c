//! User module - the account identity aggregate.
//!
//! - `values` - self-validating value objects (username, email, ...)
//! - `User` - aggregate root with soft-delete lifecycle
//! - `UserFactory` - creation with name-shape rules
//! - `UserReconciler` - sparse, all-or-nothing updates

pub(crate) mod aggregate;
mod errors;
mod events;
mod factory;
mod names;
mod reconciler;
pub mod values;

pub use aggregate::{User, UserRecord};
pub use errors::UserError;
pub use events::{UserDeleted, UserRegistered, UserRestored, UserUpdated};
pub use factory::UserFactory;
pub use names::{validate_full_name, validate_name, INFORMATION_MAX_LENGTH, NAME_MAX_LENGTH};
pub use reconciler::{UserChanges, UserReconciler};
pub use values::{
    BirthDate, Country, DialCode, Email, Enumerated, Gender, HashedPassword, Language, Phone,
    PlainPassword, Username, Website, MINIMUM_AGE_YEARS,
};
