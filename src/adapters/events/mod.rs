//! Event bus adapters.
//!
//! - `InMemoryEventBus` - in-process bus that records published events

mod in_memory;

pub use in_memory::InMemoryEventBus;
