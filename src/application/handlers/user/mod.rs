//! User application handlers.
//!
//! Command and query handlers for account registration, profile updates,
//! soft deletion, login and user lookups.

mod delete_user;
mod get_profile_options;
mod get_user;
mod list_users;
mod login_user;
mod register_user;
mod restore_user;
mod update_user;
mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use delete_user::{DeleteUserCommand, DeleteUserHandler, DeleteUserResult};
pub use get_profile_options::{GetProfileOptionsHandler, OptionView, ProfileOptions};
pub use get_user::{GetUserHandler, GetUserQuery};
pub use list_users::{ListUsersHandler, ListUsersQuery};
pub use login_user::{LoginUserCommand, LoginUserHandler, LoginUserResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
pub use restore_user::{RestoreUserCommand, RestoreUserHandler, RestoreUserResult};
pub use update_user::{UpdateUserCommand, UpdateUserHandler, UpdateUserResult};
pub use view::UserView;

use tracing::{error, warn};

use crate::domain::user::UserError;

/// Logs a failed user operation at a level matching its cause.
fn log_failure(operation: &'static str, err: &UserError) {
    match err {
        UserError::Validation(validation) => warn!(
            operation,
            field = %validation.field(),
            code = %validation.code(),
            "Rejected invalid input"
        ),
        UserError::Infrastructure(message) => error!(operation, error = %message, "Port failure"),
        other => warn!(operation, code = %other.code(), error = %other, "Operation refused"),
    }
}
