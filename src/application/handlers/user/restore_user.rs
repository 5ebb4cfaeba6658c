//! RestoreUserHandler - Command handler for bringing back deleted accounts.

use std::sync::Arc;

use tracing::debug;

use super::log_failure;
use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId};
use crate::domain::user::{User, UserError, UserRestored};
use crate::ports::{EventPublisher, UserRepository};

/// Command to restore a soft-deleted account.
#[derive(Debug, Clone)]
pub struct RestoreUserCommand {
    pub user_id: UserId,
}

/// Result of successful restoration.
#[derive(Debug, Clone)]
pub struct RestoreUserResult {
    pub user: User,
    pub event: UserRestored,
}

/// Handler for restoring users.
pub struct RestoreUserHandler {
    repository: Arc<dyn UserRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RestoreUserHandler {
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
        cmd: RestoreUserCommand,
        metadata: CommandMetadata,
    ) -> Result<RestoreUserResult, UserError> {
        let result = self.restore(cmd, metadata).await;
        if let Err(err) = &result {
            log_failure("restore_user", err);
        }
        result
    }

    async fn restore(
        &self,
        cmd: RestoreUserCommand,
        metadata: CommandMetadata,
    ) -> Result<RestoreUserResult, UserError> {
        if cmd.user_id.is_nil() {
            return Err(UserError::IdentifierNil);
        }

        let mut user = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(cmd.user_id))?;

        user.restore()?;
        self.repository.update(&user).await?;

        let event = UserRestored {
            event_id: EventId::new(),
            user_id: cmd.user_id,
            restored_at: Timestamp::now(),
        };
        let envelope = metadata.stamp(event.to_envelope()?);
        self.event_publisher.publish(envelope).await?;

        debug!(user_id = %cmd.user_id, "User restored");
        Ok(RestoreUserResult { user, event })
    }
}
