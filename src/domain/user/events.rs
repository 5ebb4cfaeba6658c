//! User domain events.
//!
//! - `UserRegistered` - New account created
//! - `UserUpdated` - Profile fields changed
//! - `UserDeleted` - Account soft-deleted
//! - `UserRestored` - Soft-deleted account brought back

use serde::{Deserialize, Serialize};

use super::{Email, User, Username};
use crate::domain::foundation::{domain_event, EventId, Field, Timestamp, UserId};

// ════════════════════════════════════════════════════════════════════════════
// UserRegistered
// ════════════════════════════════════════════════════════════════════════════

/// Published when a new account has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRegistered {
    pub event_id: EventId,
    pub user_id: UserId,
    pub username: Username,
    pub email: Email,
    pub registered_at: Timestamp,
}

domain_event!(
    UserRegistered,
    event_type = "user.registered.v1",
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = registered_at,
    event_id = event_id
);

impl UserRegistered {
    pub fn from_user(user: &User) -> Self {
        Self {
            event_id: EventId::new(),
            user_id: *user.id(),
            username: user.username().clone(),
            email: user.email().clone(),
            registered_at: user.created_at(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// UserUpdated
// ════════════════════════════════════════════════════════════════════════════

/// Published when an update changed at least one field.
///
/// Carries field names only; values stay out of the event stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdated {
    pub event_id: EventId,
    pub user_id: UserId,
    pub changed_fields: Vec<Field>,
    pub updated_at: Timestamp,
}

domain_event!(
    UserUpdated,
    event_type = "user.updated.v1",
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = updated_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// UserDeleted
// ════════════════════════════════════════════════════════════════════════════

/// Published when an account has been soft-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDeleted {
    pub event_id: EventId,
    pub user_id: UserId,
    pub deleted_at: Timestamp,
}

domain_event!(
    UserDeleted,
    event_type = "user.deleted.v1",
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = deleted_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// UserRestored
// ════════════════════════════════════════════════════════════════════════════

/// Published when a soft-deleted account is active again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRestored {
    pub event_id: EventId,
    pub user_id: UserId,
    pub restored_at: Timestamp,
}

domain_event!(
    UserRestored,
    event_type = "user.restored.v1",
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = restored_at,
    event_id = event_id
);
