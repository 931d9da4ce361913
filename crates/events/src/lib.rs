//! Events and their distribution.
//!
//! - [`Event`]: facts raised by the storefront state machines.
//! - [`EventBus`] / [`InMemoryEventBus`]: fan-out to interested collaborators.
//! - [`execute`]: run one command through an aggregate (decide, then apply).

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
