//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, lifecycle primitives, event plumbing
//! and error types that form the vocabulary of the identity domain.

mod aggregate_root;
mod command;
mod errors;
mod events;
mod ids;
mod lifecycle_status;
mod patch;
mod state_machine;
mod timestamp;

pub use aggregate_root::AggregateRoot;
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, Field, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::UserId;
pub use lifecycle_status::LifecycleStatus;
pub use patch::Patch;
pub use state_machine::{InvalidTransition, StateMachine};
pub use timestamp::Timestamp;
