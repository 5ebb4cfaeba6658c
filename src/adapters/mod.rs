//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - in-memory user repository
//! - `events` - in-memory event bus
//! - `crypto` - bcrypt password hashing

pub mod crypto;
pub mod events;
pub mod memory;

pub use crypto::BcryptPasswordHasher;
pub use events::InMemoryEventBus;
pub use memory::InMemoryUserRepository;
