//! User repository port.
//!
//! Defines the contract for persisting and retrieving User aggregates.
//! Soft-deleted users are still stored and still returned by single-user
//! lookups; callers inspect `User::status` when it matters. List queries
//! skip them unless `list` is asked to include them.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{Country, Email, Language, User, Username};

/// Repository port for User aggregate persistence.
///
/// Implementations must ensure:
/// - usernames are unique across all stored users
/// - emails are unique across all stored users
/// - a user handed to `save` or `update` is stored as a whole or not at all
/// - list results are ordered by username
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user.
    ///
    /// # Errors
    ///
    /// - `UserAlreadyExists` (with a `field` detail) if the id, username
    ///   or email is already taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Replace a stored user.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if no user has this id
    /// - `UserAlreadyExists` if the new username or email belongs to
    ///   another user
    /// - `DatabaseError` on persistence failure
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by exact username. Returns `None` if not found.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, DomainError>;

    /// Find a user by exact email. Returns `None` if not found.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    async fn exists_by_username(&self, username: &Username) -> Result<bool, DomainError>;

    async fn exists_by_email(&self, email: &Email) -> Result<bool, DomainError>;

    /// List every stored user. Deleted users are included only on request.
    async fn list(&self, include_deleted: bool) -> Result<Vec<User>, DomainError>;

    /// List active users from one country.
    async fn list_by_country(&self, country: Country) -> Result<Vec<User>, DomainError>;

    /// List active users with one preferred language.
    async fn list_by_language(&self, language: Language) -> Result<Vec<User>, DomainError>;

    /// List active users whose username contains `fragment`, ignoring case.
    async fn list_like_username(&self, fragment: &str) -> Result<Vec<User>, DomainError>;
}
