//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `user` - User identity aggregate, value objects and update rules

pub mod foundation;
pub mod user;
