//! LifecycleStatus enum for soft-deletable aggregates.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{StateMachine, Timestamp};

/// Soft-delete lifecycle of an aggregate.
///
/// The status is never stored on its own; it is derived from the
/// aggregate's deletion timestamp so the two cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    #[default]
    Active,
    Deleted,
}

impl LifecycleStatus {
    /// Derives the status from an optional deletion timestamp.
    pub fn from_deleted_at(deleted_at: Option<&Timestamp>) -> Self {
        match deleted_at {
            None => LifecycleStatus::Active,
            Some(_) => LifecycleStatus::Deleted,
        }
    }

    /// Returns true if the aggregate is live.
    pub fn is_active(&self) -> bool {
        matches!(self, LifecycleStatus::Active)
    }
}

impl StateMachine for LifecycleStatus {
    /// Valid transitions:
    /// - Active -> Deleted
    /// - Deleted -> Active
    fn can_transition_to(&self, target: &Self) -> bool {
        use LifecycleStatus::*;
        matches!((self, target), (Active, Deleted) | (Deleted, Active))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            LifecycleStatus::Active => vec![LifecycleStatus::Deleted],
            LifecycleStatus::Deleted => vec![LifecycleStatus::Active],
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecycleStatus::Active => "Active",
            LifecycleStatus::Deleted => "Deleted",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_active() {
        assert_eq!(LifecycleStatus::default(), LifecycleStatus::Active);
    }

    #[test]
    fn derived_from_deletion_timestamp() {
        assert_eq!(LifecycleStatus::from_deleted_at(None), LifecycleStatus::Active);
        assert_eq!(
            LifecycleStatus::from_deleted_at(Some(&Timestamp::now())),
            LifecycleStatus::Deleted
        );
    }

    #[test]
    fn active_and_deleted_alternate() {
        assert!(LifecycleStatus::Active.can_transition_to(&LifecycleStatus::Deleted));
        assert!(LifecycleStatus::Deleted.can_transition_to(&LifecycleStatus::Active));
    }

    #[test]
    fn self_transitions_are_rejected() {
        assert!(LifecycleStatus::Active
            .transition_to(LifecycleStatus::Active)
            .is_err());
        assert!(LifecycleStatus::Deleted
            .transition_to(LifecycleStatus::Deleted)
            .is_err());
    }

    #[test]
    fn no_state_is_terminal() {
        assert!(!LifecycleStatus::Active.is_terminal());
        assert!(!LifecycleStatus::Deleted.is_terminal());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&LifecycleStatus::Deleted).unwrap(),
            "\"deleted\""
        );
    }
}
