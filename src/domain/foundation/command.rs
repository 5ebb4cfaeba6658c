//! Command infrastructure for application handlers.
//!
//! Handlers accept a single `CommandMetadata` instead of a loose list of
//! correlation, actor and trace parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EventEnvelope, UserId};

/// Metadata context for command handlers.
///
/// Carries tracing, correlation, and actor context through the command
/// processing pipeline and onto emitted events.
///
/// ```ignore
/// let envelope = metadata.stamp(event.to_envelope()?);
/// self.publisher.publish(envelope).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The authenticated user executing this command, if any.
    ///
    /// Registration and login run before anyone is authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<UserId>,

    /// Links related operations across a single request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Distributed tracing span/trace ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,

    /// Source of this command (e.g., "api", "admin", "import").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates metadata for an anonymous caller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates metadata for an authenticated caller.
    pub fn for_actor(actor_id: UserId) -> Self {
        Self {
            actor_id: Some(actor_id),
            ..Self::default()
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add trace ID for distributed tracing.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the correlation ID only if explicitly set.
    pub fn correlation_id_opt(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Copies correlation, actor and trace context onto an event envelope.
    pub fn stamp(&self, envelope: EventEnvelope) -> EventEnvelope {
        let mut envelope = envelope.with_correlation_id(self.correlation_id());
        if let Some(actor) = &self.actor_id {
            envelope = envelope.with_actor_id(actor.to_string());
        }
        if let Some(trace) = &self.trace_id {
            envelope = envelope.with_trace_id(trace.clone());
        }
        envelope
    }
}
