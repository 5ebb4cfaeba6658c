//! In-memory event bus.
//!
//! Records every published envelope in order. Used by tests and by
//! single-process deployments that only need an audit trail.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus with capture helpers for assertions.
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// handler.handle(cmd, metadata).await?;
/// assert!(bus.has_event("user.registered.v1").await);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventBus {
    published: Arc<RwLock<Vec<EventEnvelope>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all published events, oldest first.
    pub async fn published_events(&self) -> Vec<EventEnvelope> {
        self.published.read().await.clone()
    }

    /// Returns events of a specific type.
    pub async fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published
            .read()
            .await
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Returns events emitted by one aggregate.
    pub async fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published
            .read()
            .await
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .cloned()
            .collect()
    }

    pub async fn event_count(&self) -> usize {
        self.published.read().await.len()
    }

    pub async fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .await
            .iter()
            .any(|e| e.event_type == event_type)
    }

    /// Clears all published events (for test isolation).
    pub async fn clear(&self) {
        self.published.write().await.clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::trace!(event_type = %event.event_type, aggregate_id = %event.aggregate_id, "Event published");
        self.published.write().await.push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        self.published.write().await.extend(events);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, EventMetadata, Timestamp};
    use serde_json::json;

    fn envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope {
            event_id: EventId::new(),
            event_type: event_type.to_string(),
            schema_version: 1,
            aggregate_id: aggregate_id.to_string(),
            aggregate_type: "User".to_string(),
            occurred_at: Timestamp::now(),
            payload: json!({}),
            metadata: EventMetadata::default(),
        }
    }

    #[tokio::test]
    async fn publish_stores_event() {
        let bus = InMemoryEventBus::new();

        bus.publish(envelope("user.deleted.v1", "u-1")).await.unwrap();

        assert_eq!(bus.event_count().await, 1);
        assert!(bus.has_event("user.deleted.v1").await);
        assert!(!bus.has_event("user.restored.v1").await);
    }

    #[tokio::test]
    async fn filters_by_type_and_aggregate() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("user.updated.v1", "u-1")).await.unwrap();
        bus.publish(envelope("user.deleted.v1", "u-2")).await.unwrap();
        bus.publish(envelope("user.updated.v1", "u-2")).await.unwrap();

        assert_eq!(bus.events_of_type("user.updated.v1").await.len(), 2);
        assert_eq!(bus.events_for_aggregate("u-2").await.len(), 2);
    }

    #[tokio::test]
    async fn publish_all_keeps_order() {
        let bus = InMemoryEventBus::new();
        bus.publish_all(vec![
            envelope("user.deleted.v1", "u-1"),
            envelope("user.restored.v1", "u-1"),
        ])
        .await
        .unwrap();

        let types: Vec<String> = bus
            .published_events()
            .await
            .into_iter()
            .map(|e| e.event_type)
            .collect();
        assert_eq!(types, vec!["user.deleted.v1", "user.restored.v1"]);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let bus = InMemoryEventBus::new();
        let handle = bus.clone();

        handle.publish(envelope("user.registered.v1", "u-1")).await.unwrap();

        assert_eq!(bus.event_count().await, 1);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("user.registered.v1", "u-1")).await.unwrap();

        bus.clear().await;

        assert_eq!(bus.event_count().await, 0);
    }
}
