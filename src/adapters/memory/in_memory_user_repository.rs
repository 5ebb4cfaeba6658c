//! In-memory user repository.
//!
//! Keeps whole aggregates in a map and enforces username and email
//! uniqueness the way a relational store would with unique indexes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{Country, Email, Language, User, Username};
use crate::ports::UserRepository;

/// In-memory storage for users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored users (deleted ones included).
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Clear all stored users (useful for tests).
    pub async fn clear(&self) {
        self.users.write().await.clear();
    }

    fn conflict(field: &str) -> DomainError {
        DomainError::new(
            ErrorCode::UserAlreadyExists,
            format!("A user with this {} already exists", field),
        )
        .with_detail("field", field)
    }

    /// Rejects `user` if another stored user holds its username or email.
    fn check_unique(users: &HashMap<UserId, User>, user: &User) -> Result<(), DomainError> {
        let others = users.values().filter(|other| other.id() != user.id());
        for other in others {
            if other.username() == user.username() {
                return Err(Self::conflict("username"));
            }
            if other.email() == user.email() {
                return Err(Self::conflict("email"));
            }
        }
        Ok(())
    }

    /// Users matching `keep`, ordered by username.
    async fn collect(&self, keep: impl Fn(&User) -> bool) -> Vec<User> {
        let mut found: Vec<User> = self
            .users
            .read()
            .await
            .values()
            .filter(|&u| keep(u))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.username().as_str().cmp(b.username().as_str()));
        found
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.id()) {
            return Err(Self::conflict("user_id"));
        }
        Self::check_unique(&users, user)?;
        users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if !users.contains_key(user.id()) {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", user.id()),
            ));
        }
        Self::check_unique(&users, user)?;
        users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|u| u.username() == username))
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, DomainError> {
        Ok(self.users.read().await.values().any(|u| u.email() == email))
    }

    async fn list(&self, include_deleted: bool) -> Result<Vec<User>, DomainError> {
        Ok(self.collect(|u| include_deleted || u.is_active()).await)
    }

    async fn list_by_country(&self, country: Country) -> Result<Vec<User>, DomainError> {
        Ok(self
            .collect(|u| u.is_active() && u.country() == country)
            .await)
    }

    async fn list_by_language(&self, language: Language) -> Result<Vec<User>, DomainError> {
        Ok(self
            .collect(|u| u.is_active() && u.language() == language)
            .await)
    }

    async fn list_like_username(&self, fragment: &str) -> Result<Vec<User>, DomainError> {
        let needle = fragment.to_lowercase();
        Ok(self
            .collect(|u| u.is_active() && u.username().as_str().to_lowercase().contains(&needle))
            .await)
    }
}
