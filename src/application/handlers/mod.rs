//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod user;

pub use user::{
    DeleteUserCommand, DeleteUserHandler, DeleteUserResult, GetProfileOptionsHandler,
    GetUserHandler, GetUserQuery, ListUsersHandler, ListUsersQuery, LoginUserCommand,
    LoginUserHandler, LoginUserResult, OptionView, ProfileOptions, RegisterUserCommand,
    RegisterUserHandler, RegisterUserResult, RestoreUserCommand, RestoreUserHandler,
    RestoreUserResult, UpdateUserCommand, UpdateUserHandler, UpdateUserResult, UserView,
};
