//! UpdateUserHandler - Command handler for sparse profile updates.

use std::sync::Arc;

use tracing::debug;

use super::log_failure;
use crate::domain::foundation::{
    CommandMetadata, EventId, Field, SerializableDomainEvent, Timestamp, UserId,
};
use crate::domain::user::{User, UserChanges, UserError, UserReconciler, UserUpdated};
use crate::ports::{EventPublisher, PasswordHasher, UserRepository};

/// Command to change some fields of an account.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub changes: UserChanges,
}

/// Result of a successful update.
#[derive(Debug, Clone)]
pub struct UpdateUserResult {
    pub user: User,
    /// Fields whose stored value differs from before, in apply order.
    pub changed_fields: Vec<Field>,
    /// Present only when at least one field changed.
    pub event: Option<UserUpdated>,
}

/// Handler for updating users.
pub struct UpdateUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateUserHandler {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            hasher,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateUserCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateUserResult, UserError> {
        let result = self.update(cmd, metadata).await;
        if let Err(err) = &result {
            log_failure("update_user", err);
        }
        result
    }

    async fn update(
        &self,
        cmd: UpdateUserCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateUserResult, UserError> {
        if cmd.user_id.is_nil() {
            return Err(UserError::IdentifierNil);
        }

        // 1. Load user; deleted accounts cannot be edited
        let mut user = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .filter(User::is_active)
            .ok_or_else(|| UserError::not_found(cmd.user_id))?;

        // 2. Reconcile; on failure the loaded user is untouched and dropped
        let now = Timestamp::now();
        let changed_fields =
            UserReconciler::new(self.hasher.as_ref()).reconcile_at(&mut user, cmd.changes, now)?;

        // 3. New username or email must not belong to someone else
        self.ensure_unique(&user, &changed_fields).await?;

        // 4. Persist
        self.repository.update(&user).await?;

        // 5. Publish event
        let event = if changed_fields.is_empty() {
            None
        } else {
            let event = UserUpdated {
                event_id: EventId::new(),
                user_id: *user.id(),
                changed_fields: changed_fields.clone(),
                updated_at: now,
            };
            let envelope = metadata.stamp(event.to_envelope()?);
            self.event_publisher.publish(envelope).await?;
            Some(event)
        };

        debug!(user_id = %user.id(), changed = ?changed_fields, "User updated");
        Ok(UpdateUserResult {
            user,
            changed_fields,
            event,
        })
    }

    async fn ensure_unique(&self, user: &User, changed: &[Field]) -> Result<(), UserError> {
        if changed.contains(&Field::Username) {
            if let Some(holder) = self.repository.find_by_username(user.username()).await? {
                if holder.id() != user.id() {
                    return Err(UserError::already_exists(Field::Username));
                }
            }
        }
        if changed.contains(&Field::Email) {
            if let Some(holder) = self.repository.find_by_email(user.email()).await? {
                if holder.id() != user.id() {
                    return Err(UserError::already_exists(Field::Email));
                }
            }
        }
        Ok(())
    }
}
