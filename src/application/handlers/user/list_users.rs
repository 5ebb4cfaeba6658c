//! ListUsersHandler - Query handler for user listings.

use std::sync::Arc;

use tracing::debug;

use super::{log_failure, UserView};
use crate::config::MediaConfig;
use crate::domain::foundation::{Field, ValidationError};
use crate::domain::user::{Country, Enumerated, Language, User, UserError};
use crate::ports::UserRepository;

/// Which users to list. Every listing is ordered by username.
#[derive(Debug, Clone)]
pub enum ListUsersQuery {
    /// Every user; soft-deleted ones only when `include_deleted` is set.
    All { include_deleted: bool },
    /// Active users of a country, given by code or display name.
    ByCountry(String),
    /// Active users with a language, given by code or display name.
    ByLanguage(String),
    /// Active users whose username contains the fragment, ignoring case.
    LikeUsername(String),
}

impl ListUsersQuery {
    /// Active users only.
    pub fn active() -> Self {
        Self::All {
            include_deleted: false,
        }
    }
}

/// Handler for listing users.
pub struct ListUsersHandler {
    repository: Arc<dyn UserRepository>,
    static_base_url: String,
}

impl ListUsersHandler {
    pub fn new(repository: Arc<dyn UserRepository>, media: &MediaConfig) -> Self {
        Self {
            repository,
            static_base_url: media.base_url().to_string(),
        }
    }

    pub async fn handle(&self, query: ListUsersQuery) -> Result<Vec<UserView>, UserError> {
        let result = self.list(query).await;
        if let Err(err) = &result {
            log_failure("list_users", err);
        }
        let users = result?;
        debug!(count = users.len(), "Users listed");
        Ok(users
            .iter()
            .map(|user| UserView::from_user(user, &self.static_base_url))
            .collect())
    }

    async fn list(&self, query: ListUsersQuery) -> Result<Vec<User>, UserError> {
        let users = match query {
            ListUsersQuery::All { include_deleted } => self.repository.list(include_deleted).await?,
            ListUsersQuery::ByCountry(raw) => {
                let country = Country::parse(&raw)?;
                self.repository.list_by_country(country).await?
            }
            ListUsersQuery::ByLanguage(raw) => {
                let language = Language::parse(&raw)?;
                self.repository.list_by_language(language).await?
            }
            ListUsersQuery::LikeUsername(fragment) => {
                if fragment.is_empty() {
                    return Err(ValidationError::empty(Field::Username).into());
                }
                self.repository.list_like_username(&fragment).await?
            }
        };
        Ok(users)
    }
}
