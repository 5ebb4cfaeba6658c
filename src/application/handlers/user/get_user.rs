//! GetUserHandler - Query handler for looking up one user.

use std::sync::Arc;

use super::{log_failure, UserView};
use crate::config::MediaConfig;
use crate::domain::foundation::UserId;
use crate::domain::user::{Email, User, UserError, Username};
use crate::ports::UserRepository;

/// Lookup key for a single user.
#[derive(Debug, Clone)]
pub enum GetUserQuery {
    ById(UserId),
    ByUsername(String),
    ByEmail(String),
}

/// Handler for retrieving users.
///
/// Soft-deleted users are returned too; their view reports the status.
pub struct GetUserHandler {
    repository: Arc<dyn UserRepository>,
    static_base_url: String,
}

impl GetUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>, media: &MediaConfig) -> Self {
        Self {
            repository,
            static_base_url: media.base_url().to_string(),
        }
    }

    pub async fn handle(&self, query: GetUserQuery) -> Result<UserView, UserError> {
        let result = self.find(query).await;
        if let Err(err) = &result {
            log_failure("get_user", err);
        }
        result.map(|user| UserView::from_user(&user, &self.static_base_url))
    }

    async fn find(&self, query: GetUserQuery) -> Result<User, UserError> {
        match query {
            GetUserQuery::ById(id) => {
                if id.is_nil() {
                    return Err(UserError::IdentifierNil);
                }
                self.repository
                    .find_by_id(&id)
                    .await?
                    .ok_or_else(|| UserError::not_found(id))
            }
            GetUserQuery::ByUsername(raw) => {
                let username = Username::new(raw)?;
                self.repository
                    .find_by_username(&username)
                    .await?
                    .ok_or_else(|| UserError::not_found(username))
            }
            GetUserQuery::ByEmail(raw) => {
                let email = Email::new(raw)?;
                self.repository
                    .find_by_email(&email)
                    .await?
                    .ok_or_else(|| UserError::not_found(email))
            }
        }
    }
}
