//! Identity and timestamps shared by every aggregate.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Identity plus creation/update timestamps, held by an aggregate as a field.
///
/// `updated_at` never moves backwards: `touch` keeps the later of the
/// current value and the supplied instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRoot<Id> {
    id: Id,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl<Id> AggregateRoot<Id> {
    /// Creates a root for a brand new aggregate.
    pub fn new_at(id: Id, now: Timestamp) -> Self {
        Self {
            id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a root from stored values.
    pub fn reconstitute(id: Id, created_at: Timestamp, updated_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Marks the aggregate as modified now.
    pub fn touch(&mut self) {
        self.touch_at(Timestamp::now());
    }

    /// Marks the aggregate as modified at `now`, never moving backwards.
    pub fn touch_at(&mut self, now: Timestamp) {
        self.updated_at = self.updated_at.max(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_root_has_equal_timestamps() {
        let now = Timestamp::now();
        let root = AggregateRoot::new_at(7u32, now);

        assert_eq!(*root.id(), 7);
        assert_eq!(root.created_at(), now);
        assert_eq!(root.updated_at(), now);
    }

    #[test]
    fn touch_advances_updated_at() {
        let start = Timestamp::now();
        let mut root = AggregateRoot::new_at(1u32, start);

        root.touch_at(start.plus_days(1));

        assert_eq!(root.updated_at(), start.plus_days(1));
        assert_eq!(root.created_at(), start);
    }

    #[test]
    fn touch_never_moves_backwards() {
        let start = Timestamp::now();
        let mut root = AggregateRoot::new_at(1u32, start);

        root.touch_at(start.minus_days(3));

        assert_eq!(root.updated_at(), start);
    }

    #[test]
    fn reconstitute_keeps_stored_values() {
        let created = Timestamp::now().minus_days(10);
        let updated = Timestamp::now().minus_days(2);
        let root = AggregateRoot::reconstitute("abc", created, updated);

        assert_eq!(root.created_at(), created);
        assert_eq!(root.updated_at(), updated);
    }
}
