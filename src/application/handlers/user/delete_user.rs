//! DeleteUserHandler - Command handler for soft-deleting accounts.

use std::sync::Arc;

use tracing::debug;

use super::log_failure;
use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId};
use crate::domain::user::{User, UserDeleted, UserError};
use crate::ports::{EventPublisher, UserRepository};

/// Command to soft-delete an account.
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub user_id: UserId,
}

/// Result of successful deletion.
#[derive(Debug, Clone)]
pub struct DeleteUserResult {
    pub user: User,
    pub event: UserDeleted,
}

/// Handler for deleting users.
pub struct DeleteUserHandler {
    repository: Arc<dyn UserRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeleteUserHandler {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteUserCommand,
        metadata: CommandMetadata,
    ) -> Result<DeleteUserResult, UserError> {
        let result = self.delete(cmd, metadata).await;
        if let Err(err) = &result {
            log_failure("delete_user", err);
        }
        result
    }

    async fn delete(
        &self,
        cmd: DeleteUserCommand,
        metadata: CommandMetadata,
    ) -> Result<DeleteUserResult, UserError> {
        if cmd.user_id.is_nil() {
            return Err(UserError::IdentifierNil);
        }

        // 1. Load user
        let mut user = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(cmd.user_id))?;

        // 2. Transition
        let now = Timestamp::now();
        user.delete_at(now)?;

        // 3. Persist
        self.repository.update(&user).await?;

        // 4. Publish event
        let event = UserDeleted {
            event_id: EventId::new(),
            user_id: cmd.user_id,
            deleted_at: now,
        };
        let envelope = metadata.stamp(event.to_envelope()?);
        self.event_publisher.publish(envelope).await?;

        debug!(user_id = %cmd.user_id, "User deleted");
        Ok(DeleteUserResult { user, event })
    }
}
