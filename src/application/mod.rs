//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Commands
    DeleteUserCommand, DeleteUserHandler, DeleteUserResult,
    LoginUserCommand, LoginUserHandler, LoginUserResult,
    RegisterUserCommand, RegisterUserHandler, RegisterUserResult,
    RestoreUserCommand, RestoreUserHandler, RestoreUserResult,
    UpdateUserCommand, UpdateUserHandler, UpdateUserResult,
    // Queries
    GetProfileOptionsHandler, GetUserHandler, GetUserQuery, ListUsersHandler, ListUsersQuery,
    OptionView, ProfileOptions, UserView,
};
