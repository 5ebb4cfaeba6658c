//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `UserRepository` - persistence with username/email uniqueness
//! - `EventPublisher` - outbound domain events
//! - `PasswordHasher` - one-way password hashing

mod event_publisher;
mod password_hasher;
mod user_repository;

pub use event_publisher::EventPublisher;
pub use password_hasher::PasswordHasher;
pub use user_repository::UserRepository;
